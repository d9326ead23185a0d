//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "fixhead";
const APPLICATION: &str = "fixhead-demo";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Marker overrides, e.g. `~/.config/fixhead-demo/markers.toml` on Linux.
pub fn markers_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("markers.toml"))
}

/// Default log location, e.g. `~/.cache/fixhead-demo/latest.log` on Linux.
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("latest.log"))
}
