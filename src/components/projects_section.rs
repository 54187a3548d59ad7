use leptos::prelude::*;

use super::{ProjectCard, ProjectModal};
use crate::projects::{NewProject, ProjectList};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let projects = RwSignal::new(ProjectList::seeded());
    let modal_open = RwSignal::new(false);

    let add_project = Callback::new(move |payload: NewProject| {
        projects.update(|list| {
            list.add(payload);
        });
    });

    view! {
        <section id="projects" class="section projects">
            <div class="section__header">
                <h2 class="section__title">"Projects"</h2>
                <button class="btn btn--primary" on:click=move |_| modal_open.set(true)>
                    "Add project"
                </button>
            </div>
            <ul class="project-list">
                <For
                    each=move || projects.with(|list| list.iter().cloned().collect::<Vec<_>>())
                    key=|project| project.id.clone()
                    children=move |project| view! { <ProjectCard project=project /> }
                />
            </ul>
            <ProjectModal open=modal_open on_submit=add_project />
        </section>
    }
}
