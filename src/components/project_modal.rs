use leptos::prelude::*;

use super::FormField;
use crate::form::FormState;
use crate::projects::{NewProject, PROJECT_FIELDS};

/// Dialog collecting a new project. Submitting a valid form hands the
/// payload to `on_submit`, clears the form and closes the dialog.
#[component]
pub fn ProjectModal(
    open: RwSignal<bool>,
    #[prop(into)] on_submit: Callback<NewProject>,
) -> impl IntoView {
    let form = RwSignal::new(FormState::new(PROJECT_FIELDS));

    let close = move || open.set(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(Ok(values)) = form.try_update(FormState::attempt_submit) {
            on_submit.run(NewProject::from(values));
            form.update(|f| f.finish(Ok(())));
            close();
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="project-modal-title"
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    <h3 id="project-modal-title" class="modal__title">"Add a project"</h3>
                    <form class="form" on:submit=submit novalidate=true>
                        <FormField form=form name="title" label="Title" placeholder="My project" />
                        <FormField
                            form=form
                            name="description"
                            label="Description"
                            placeholder="What does it do?"
                            multiline=true
                        />
                        <FormField
                            form=form
                            name="techStack"
                            label="Tech stack"
                            placeholder="Rust, Leptos, PostgreSQL"
                        />
                        <FormField
                            form=form
                            name="githubUrl"
                            label="GitHub URL (optional)"
                            input_type="url"
                            placeholder="https://github.com/you/project"
                        />
                        <FormField
                            form=form
                            name="liveUrl"
                            label="Live URL (optional)"
                            input_type="url"
                            placeholder="https://project.example.com"
                        />
                        <div class="modal__actions">
                            <button type="button" class="btn btn--ghost" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn--primary">"Add project"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
