//! CLI commands for graphwalk

pub mod components;
pub mod dispatch;
pub mod islands;
pub mod path;
