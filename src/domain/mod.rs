//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, categories, errors)
//! - `user` - User profiles and interests
//! - `project` - Project aggregate, membership and listing filters
//! - `collaboration` - Join requests and the accept/reject lifecycle
//! - `chat` - Append-only per-project message log
//! - `recommendation` - Pure interest-based project ranking

pub mod chat;
pub mod collaboration;
pub mod foundation;
pub mod project;
pub mod recommendation;
pub mod user;
