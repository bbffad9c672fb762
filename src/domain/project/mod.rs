//! Project domain module.
//!
//! Projects group members around a topic. The creator owns the project and
//! is the only one who may delete it or admit new members.

mod aggregate;
mod filter;

pub use aggregate::{NewProject, Project, ProjectType, MAX_TITLE_LENGTH};
pub use filter::{recency_order, ProjectFilter};
