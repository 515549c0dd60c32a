pub mod compact;
pub mod detect;
pub mod invoke;
pub mod redact;

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Read a whole input document. `-` means stdin.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Load config from an explicit path, or from the current project.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Config::load_project(&cwd)
        }
    }
}
