//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over the
//! repository ports.

pub mod chat;
pub mod collaboration;
pub(crate) mod lookup;
pub mod project;
pub mod recommendation;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;
