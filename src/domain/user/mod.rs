//! User module - the user directory.
//!
//! Users register with an email and username, declare the topics they are
//! interested in, and later edit their profile. Users are never deleted.

mod profile;

pub use profile::{NewUser, User, UserPatch, UserRole, MAX_USERNAME_LENGTH};
