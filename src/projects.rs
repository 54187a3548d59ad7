use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::{split_tokens, FieldSpec, FormValues};

pub const PROJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", "Title is required"),
    FieldSpec::required("description", "Description is required"),
    FieldSpec::tokens("techStack", "Add at least one technology"),
    FieldSpec::optional("githubUrl"),
    FieldSpec::optional("liveUrl"),
];

/// A portfolio entry shown in the project gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

/// Everything needed to create a [`Project`] except its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl NewProject {
    /// Builds a payload, trimming tech tokens and treating blank links as absent.
    pub fn new<I, S>(
        title: impl Into<String>,
        description: impl Into<String>,
        tech_stack: I,
        github_url: Option<String>,
        live_url: Option<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            title: title.into(),
            description: description.into(),
            tech_stack: tech_stack
                .into_iter()
                .map(|t| t.as_ref().trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            github_url: normalize_link(github_url),
            live_url: normalize_link(live_url),
        }
    }
}

impl From<FormValues> for NewProject {
    fn from(values: FormValues) -> Self {
        Self::new(
            values.text("title"),
            values.text("description"),
            split_tokens(values.get("techStack").unwrap_or_default()),
            values.get("githubUrl").map(str::to_string),
            values.get("liveUrl").map(str::to_string),
        )
    }
}

fn normalize_link(link: Option<String>) -> Option<String> {
    link.map(|l| l.trim().to_string()).filter(|l| !l.is_empty())
}

/// Short label for a project link: the host when it parses as a URL.
pub fn link_label(link: &str) -> String {
    url::Url::parse(link)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
        .unwrap_or_else(|| link.to_string())
}

/// The gallery's projects, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectList {
    projects: Vec<Project>,
}

impl ProjectList {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The list the page starts with.
    pub fn seeded() -> Self {
        let sample = |title: &str, description: &str, stack: &[&str], github: &str, live: Option<&str>| Project {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            tech_stack: stack.iter().map(ToString::to_string).collect(),
            github_url: Some(github.to_string()),
            live_url: live.map(str::to_string),
        };

        Self::new(vec![
            sample(
                "Trailhead",
                "Offline-first hiking planner with elevation profiles and GPX export",
                &["Rust", "Leptos", "IndexedDB"],
                "https://github.com/jdoe/trailhead",
                Some("https://trailhead.example.dev"),
            ),
            sample(
                "ledgerline",
                "Plain-text accounting CLI that reconciles bank CSV exports",
                &["Rust", "clap", "serde"],
                "https://github.com/jdoe/ledgerline",
                None,
            ),
            sample(
                "Pantry",
                "Shared grocery list with live sync between household members",
                &["TypeScript", "React", "WebSockets"],
                "https://github.com/jdoe/pantry",
                Some("https://pantry.example.dev"),
            ),
        ])
    }

    /// Creates a project from `payload` and puts it at the front of the list.
    pub fn add(&mut self, payload: NewProject) -> &Project {
        let project = Project {
            id: Uuid::new_v4().to_string(),
            title: payload.title,
            description: payload.description,
            tech_stack: payload.tech_stack,
            github_url: payload.github_url,
            live_url: payload.live_url,
        };
        tracing::info!(id = %project.id, title = %project.title, "project added");
        self.projects.insert(0, project);
        &self.projects[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormState;

    fn submit(fields: &[(&str, &str)]) -> NewProject {
        let mut form = FormState::new(PROJECT_FIELDS);
        for (name, value) in fields {
            form.set_field(name, *value);
        }
        NewProject::from(form.attempt_submit().unwrap())
    }

    #[test]
    fn test_add_prepends_and_trims_tokens() {
        let mut list = ProjectList::seeded();
        let before = list.len();

        list.add(NewProject::new("T", "D", ["Go", " React "], None, None));

        assert_eq!(list.len(), before + 1);
        let first = list.iter().next().unwrap();
        assert_eq!(first.title, "T");
        assert_eq!(first.tech_stack, vec!["Go", "React"]);
    }

    #[test]
    fn test_add_generates_distinct_ids() {
        let mut list = ProjectList::default();
        let a = list.add(NewProject::new("A", "D", ["Rust"], None, None)).id.clone();
        let b = list.add(NewProject::new("B", "D", ["Rust"], None, None)).id.clone();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_form_drops_empty_tech_tokens() {
        let project = submit(&[
            ("title", "T"),
            ("description", "D"),
            ("techStack", "Go, , React"),
        ]);
        assert_eq!(project.tech_stack, vec!["Go", "React"]);
    }

    #[test]
    fn test_form_blank_links_are_absent() {
        let project = submit(&[
            ("title", "T"),
            ("description", "D"),
            ("techStack", "Rust"),
            ("githubUrl", ""),
            ("liveUrl", "   "),
        ]);
        assert_eq!(project.github_url, None);
        assert_eq!(project.live_url, None);
    }

    #[test]
    fn test_form_links_are_not_validated() {
        let project = submit(&[
            ("title", "T"),
            ("description", "D"),
            ("techStack", "Rust"),
            ("githubUrl", "my repo"),
        ]);
        assert_eq!(project.github_url.as_deref(), Some("my repo"));
    }

    #[test]
    fn test_empty_project_form_errors() {
        let mut form = FormState::new(PROJECT_FIELDS);
        let errors = form.validate();
        let names: Vec<_> = errors.keys().copied().collect();
        assert_eq!(names, vec!["description", "techStack", "title"]);
        assert!(form.attempt_submit().is_err());
    }

    #[test]
    fn test_project_serializes_camel_case_without_absent_links() {
        let project = Project {
            id: "p1".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
            tech_stack: vec!["Rust".to_string()],
            github_url: Some("https://github.com/jdoe/t".to_string()),
            live_url: None,
        };
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "p1",
                "title": "T",
                "description": "D",
                "techStack": ["Rust"],
                "githubUrl": "https://github.com/jdoe/t",
            })
        );
    }

    #[test]
    fn test_link_label() {
        assert_eq!(link_label("https://www.github.com/jdoe/t"), "github.com");
        assert_eq!(link_label("https://pantry.example.dev"), "pantry.example.dev");
        assert_eq!(link_label("my repo"), "my repo");
    }
}
