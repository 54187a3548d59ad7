use leptos::prelude::*;

use crate::form::FormState;

/// A labelled input bound to one field of a [`FormState`], with its error shown inline.
#[component]
pub fn FormField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = format!("field-{name}");
    let error_id = format!("{id}-error");

    let value = move || form.with(|f| f.value(name).to_string());
    let error = move || form.with(|f| f.error(name).map(str::to_string));
    let invalid = move || error().is_some();
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|f| f.set_field(name, event_target_value(&ev)));
    };

    let control = if multiline {
        view! {
            <textarea
                id=id.clone()
                name=name
                rows=5
                placeholder=placeholder
                aria-invalid=move || invalid().to_string()
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                name=name
                type=input_type
                placeholder=placeholder
                aria-invalid=move || invalid().to_string()
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class=move || if invalid() { "form-field form-field--invalid" } else { "form-field" }>
            <label for=id>{label}</label>
            {control}
            <p id=error_id class="form-field__error" role="alert">
                {error}
            </p>
        </div>
    }
}
