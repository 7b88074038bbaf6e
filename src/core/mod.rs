//! Core types & traits shared by the HTTP layer and the storage backends.

pub mod credentials;
pub mod error;
pub mod session;
pub mod store;
