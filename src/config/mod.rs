pub mod settings;

pub use settings::*;

use std::path::{Path, PathBuf};

/// Name of the per-project configuration directory.
pub const PROJECT_DIR: &str = ".doc-redaction";

/// `<project_root>/.doc-redaction/config.yml`
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_DIR).join("config.yml")
}
