use std::time::Duration;

use leptos::prelude::*;

use crate::deferred::{Scheduled, TimerScope};

/// How long a toast stays up before it dismisses itself.
pub const TOAST_LIFETIME: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

/// Handle to the page's notification area.
#[derive(Clone, Copy)]
pub struct ToastContext {
    current: RwSignal<Option<Toast>>,
    dismissal: StoredValue<Option<Scheduled>>,
    timers: StoredValue<TimerScope>,
}

impl ToastContext {
    pub fn provide() -> Self {
        let context = Self {
            current: RwSignal::new(None),
            dismissal: StoredValue::new(None),
            timers: StoredValue::new(TimerScope::owned()),
        };
        provide_context(context);
        context
    }

    /// Replaces whatever toast is showing and restarts the dismissal timer.
    pub fn show(&self, title: impl Into<String>, description: impl Into<String>) {
        let toast = Toast {
            title: title.into(),
            description: description.into(),
        };
        tracing::debug!(title = %toast.title, "showing toast");
        self.current.set(Some(toast));

        let current = self.current;
        let timer = self.timers.try_with_value(|timers| {
            timers.schedule(TOAST_LIFETIME, move || current.set(None))
        });
        self.replace_timer(timer);
    }

    pub fn dismiss(&self) {
        self.replace_timer(None);
        self.current.set(None);
    }

    fn replace_timer(&self, next: Option<Scheduled>) {
        self.dismissal.try_update_value(|slot| {
            if let Some(previous) = std::mem::replace(slot, next) {
                previous.cancel();
            }
        });
    }
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = expect_context::<ToastContext>();

    view! {
        <div class="toast-viewport" aria-live="polite">
            {move || {
                toasts
                    .current
                    .get()
                    .map(|toast| {
                        view! {
                            <div class="toast" role="status">
                                <div class="toast__body">
                                    <p class="toast__title">{toast.title}</p>
                                    <p class="toast__description">{toast.description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss notification"
                                    on:click=move |_| toasts.dismiss()
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
