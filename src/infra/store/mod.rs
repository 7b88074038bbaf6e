pub mod json_file;

pub use json_file::{JsonFileStore, DEFAULT_SESSIONS_FILE};
