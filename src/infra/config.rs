use std::path::PathBuf;

use crate::infra::store::DEFAULT_SESSIONS_FILE;

pub const SESSIONS_PORT: u16 = 8080;
pub const LOGIN_PORT: u16 = 5000;

pub struct Config {
    pub mode: String, // "sessions" or "login"
    pub port: u16,
    pub sessions_file: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE").unwrap_or_else(|_| "sessions".into());
        let default_port = if mode == "login" {
            LOGIN_PORT
        } else {
            SESSIONS_PORT
        };
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(default_port);
        let sessions_file = std::env::var("SESSIONS_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SESSIONS_FILE.into())
            .into();
        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| ".".into())
            .into();

        Self {
            mode,
            port,
            sessions_file,
            static_dir,
        }
    }
}
