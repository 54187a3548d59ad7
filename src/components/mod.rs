mod about;
mod contact_section;
mod footer;
mod form_field;
mod hero;
mod navbar;
mod project_card;
mod project_modal;
mod projects_section;
mod toast;

pub use about::About;
pub use contact_section::ContactSection;
pub use footer::Footer;
pub use form_field::FormField;
pub use hero::Hero;
pub use navbar::Navbar;
pub use project_card::ProjectCard;
pub use project_modal::ProjectModal;
pub use projects_section::ProjectsSection;
pub use toast::{Toast, ToastContext, ToastViewport, TOAST_LIFETIME};
