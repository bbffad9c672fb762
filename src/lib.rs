//! Collab Hub - Project collaboration service
//!
//! Users publish projects, ask to join other people's projects, chat inside
//! the projects they belong to, and get project suggestions that match
//! their interests.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
