use leptos::prelude::*;

struct SkillGroup {
    name: &'static str,
    skills: &'static [&'static str],
}

const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Languages",
        skills: &["Rust", "TypeScript", "Go", "SQL"],
    },
    SkillGroup {
        name: "Frontend",
        skills: &["Leptos", "React", "Tailwind CSS", "WebAssembly"],
    },
    SkillGroup {
        name: "Backend",
        skills: &["axum", "PostgreSQL", "Redis", "gRPC"],
    },
    SkillGroup {
        name: "Tooling",
        skills: &["Nix", "Docker", "GitHub Actions", "OpenTelemetry"],
    },
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <h2 class="section__title">"About me"</h2>
            <div class="about__grid">
                <div class="about__bio">
                    <p>
                        "I'm a software engineer with a soft spot for tools that feel instant. "
                        "Most of my week is spent on web services and the interfaces in front of them, "
                        "usually in Rust and TypeScript."
                    </p>
                    <p>
                        "Outside of work I maintain a handful of small open source crates, "
                        "go climbing, and roast more coffee than is reasonable."
                    </p>
                </div>
                <div class="about__skills">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="skill-group">
                                    <h3 class="skill-group__name">{group.name}</h3>
                                    <ul class="skill-group__list">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| view! { <li class="skill">{*skill}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
