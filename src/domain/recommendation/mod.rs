//! Recommendation - pure ranking of projects against a user's interests.
//!
//! Stateless; callers load the user and the candidate projects and pass
//! them in.

mod matcher;

pub use matcher::{InterestMatcher, Recommendation, CATEGORY_WEIGHT, TAG_WEIGHT};
