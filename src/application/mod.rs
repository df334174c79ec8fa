//! Application services layer.

pub mod error;
pub mod messages;
pub mod repos;
