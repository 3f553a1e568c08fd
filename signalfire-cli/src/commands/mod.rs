//! CLI commands.

pub mod auth;
pub mod director;
pub mod group;
pub mod info;
pub mod run;
