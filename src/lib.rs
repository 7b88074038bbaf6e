//! File-backed classroom session store and in-memory login service.

pub mod api;
pub mod cli;
pub mod core;
pub mod infra;
