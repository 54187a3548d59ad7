use leptos::prelude::*;

use crate::projects::{link_label, Project};

fn source_icon(url: &str) -> (&'static str, &'static str) {
    if url.contains("gitlab.com") || url.contains("gitlab.") {
        ("/icons/gitlab.svg", "GitLab")
    } else {
        ("/icons/github.svg", "GitHub")
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        tech_stack,
        github_url,
        live_url,
        ..
    } = project;

    view! {
        <li class="project-card">
            <div class="project-header">
                <h3>{title}</h3>
            </div>
            <p class="project-description">{description}</p>
            <ul class="project-tech">
                {tech_stack
                    .into_iter()
                    .map(|tech| view! { <li class="project-badge">{tech}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="project-links">
                {github_url.map(|url| {
                    let (icon, forge) = source_icon(&url);
                    view! {
                        <a href=url.clone() target="_blank" rel="noopener noreferrer" title=forge>
                            <img src=icon alt="" />
                            <span>"Source"</span>
                        </a>
                    }
                })}
                {live_url.map(|url| {
                    let label = link_label(&url);
                    view! {
                        <a href=url target="_blank" rel="noopener noreferrer">
                            <img src="/icons/external.svg" alt="" />
                            <span>{label}</span>
                        </a>
                    }
                })}
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_icon() {
        assert_eq!(source_icon("https://gitlab.com/jdoe/x").1, "GitLab");
        assert_eq!(source_icon("https://gitlab.example.org/jdoe/x").1, "GitLab");
        assert_eq!(source_icon("https://github.com/jdoe/x").1, "GitHub");
        assert_eq!(source_icon("my repo").1, "GitHub");
    }
}
