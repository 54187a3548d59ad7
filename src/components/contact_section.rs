use leptos::prelude::*;

use super::{FormField, ToastContext};
use crate::contact::{ContactMessage, CONTACT_FIELDS, SEND_DELAY};
use crate::deferred::TimerScope;
use crate::error::FormError;
use crate::form::FormState;

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(FormState::new(CONTACT_FIELDS));
    let toasts = expect_context::<ToastContext>();
    let timers = TimerScope::owned();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(FormState::attempt_submit) {
            Some(Ok(values)) => {
                let message = ContactMessage::from(values);
                tracing::info!(length = message.message.len(), "sending contact message");
                timers.schedule(SEND_DELAY, move || {
                    form.update(|f| f.finish(Ok(())));
                    toasts.show(
                        "Message sent!",
                        "Thanks for reaching out. I'll get back to you soon.",
                    );
                });
            }
            Some(Err(FormError::InFlight)) => {
                tracing::debug!("contact message already sending");
            }
            Some(Err(FormError::Invalid(_))) | None => {}
        }
    };

    let submitting = move || form.with(FormState::is_submitting);
    let failure = move || form.with(|f| f.failure().map(str::to_string));

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Get in touch"</h2>
            <p class="section__lead">
                "Have a project in mind or just want to say hello? Drop me a message."
            </p>
            <form class="form contact__form" on:submit=submit novalidate=true>
                <FormField form=form name="name" label="Name" placeholder="Your name" />
                <FormField
                    form=form
                    name="email"
                    label="Email"
                    input_type="email"
                    placeholder="you@example.com"
                />
                <FormField
                    form=form
                    name="message"
                    label="Message"
                    placeholder="Tell me about your project"
                    multiline=true
                />
                {move || failure().map(|message| view! { <p class="form__failure" role="alert">{message}</p> })}
                <button type="submit" class="btn btn--primary" disabled=submitting>
                    {move || if submitting() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </section>
    }
}
