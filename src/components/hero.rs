use leptos::prelude::*;

use crate::scroll::{scroll_to_section, use_scroll_offset, HeroStyle};

/// Full-height banner that fades and shrinks as the page scrolls away from it.
#[component]
pub fn Hero() -> impl IntoView {
    let offset = use_scroll_offset();
    let style = Memo::new(move |_| HeroStyle::at(offset.get()));

    view! {
        <section id="home" class="hero">
            <div class="hero__background" style=move || style.get().background_css()></div>
            <div class="hero__content">
                <img
                    class="hero__portrait"
                    src="/images/portrait.svg"
                    alt="Portrait of Jordan Doe"
                    style=move || style.get().image_css()
                />
                <div class="hero__text" style=move || style.get().text_css()>
                    <p class="hero__eyebrow">"Hi, I'm"</p>
                    <h1 class="hero__name">"Jordan Doe"</h1>
                    <p class="hero__tagline">
                        "Full-stack developer building fast, accessible web applications."
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--primary" on:click=move |_| scroll_to_section("projects")>
                            "View my work"
                        </button>
                        <button class="btn btn--ghost" on:click=move |_| scroll_to_section("contact")>
                            "Get in touch"
                        </button>
                    </div>
                </div>
            </div>
            <div
                class="hero__scroll-indicator"
                aria-hidden="true"
                style=move || style.get().indicator_css()
            >
                <span>"scroll"</span>
                <span class="hero__scroll-arrow">"↓"</span>
            </div>
        </section>
    }
}
