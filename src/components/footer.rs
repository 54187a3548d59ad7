use leptos::prelude::*;

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com/jdoe", "/icons/github.svg"),
    ("LinkedIn", "https://www.linkedin.com/in/jdoe", "/icons/linkedin.svg"),
    ("Email", "mailto:hello@jordandoe.dev", "/icons/mail.svg"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <ul class="footer__social">
                {SOCIAL_LINKS
                    .iter()
                    .map(|&(name, href, icon)| {
                        view! {
                            <li>
                                <a href=href target="_blank" rel="noopener noreferrer" title=name>
                                    <img src=icon alt=name />
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <p class="footer__copyright">"© Jordan Doe. Built with Rust and Leptos."</p>
        </footer>
    }
}
