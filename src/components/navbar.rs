use leptos::prelude::*;

use crate::scroll::{is_scrolled, scroll_to_section, use_scroll_offset};

const SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let offset = use_scroll_offset();
    let scrolled = Memo::new(move |_| is_scrolled(offset.get()));

    let jump = |id: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            scroll_to_section(id);
        }
    };

    view! {
        <nav class=move || if scrolled.get() { "navbar navbar--scrolled" } else { "navbar" }>
            <a href="#home" class="navbar__brand" on:click=jump("home")>"JD"</a>
            <ul class="navbar__links">
                {SECTIONS
                    .iter()
                    .map(|&(id, label)| {
                        view! {
                            <li>
                                <a href=format!("#{id}") on:click=jump(id)>{label}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
