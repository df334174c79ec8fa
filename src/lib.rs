//! Bacheca: a message-board REST service with a read-through,
//! write-invalidate cache in front of Postgres.

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;
