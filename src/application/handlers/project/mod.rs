//! Project command and query handlers.

mod add_member;
mod create_project;
mod delete_project;
mod get_project;
mod list_projects;

pub use add_member::{AddMemberCommand, AddMemberHandler};
pub use create_project::{CreateProjectCommand, CreateProjectHandler};
pub use delete_project::{DeleteProjectCommand, DeleteProjectHandler};
pub use get_project::{GetProjectHandler, GetProjectQuery};
pub use list_projects::{ListProjectsHandler, ListProjectsQuery};
