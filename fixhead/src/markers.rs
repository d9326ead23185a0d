//! Class names the fixed-header transform reads and writes.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors loading a marker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read marker config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid marker config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Marker classes shared between the transform and the stylesheet.
///
/// Missing keys in a config file fall back to the defaults.
///
/// ```toml
/// needs_fixed = "sticky"
/// frame_extra = []
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Tables that want a pinned header. Removed from the mirror.
    pub needs_fixed: String,
    /// The live header section of a table. Removed from the mirror's clone.
    pub live_header: String,
    /// Added to the cloned header section.
    pub copy_header: String,
    /// Added to the cloned header section alongside `copy_header`.
    pub fixed_header: String,
    /// Added to the mirror table.
    pub table_copy: String,
    /// Outer frame created by the wrapper; the mirror docks here.
    pub frame: String,
    /// Extra classes put on the frame next to `frame`.
    pub frame_extra: Vec<String>,
    /// Inner scrollable region holding the table.
    pub content: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            needs_fixed: "table-fixed-header".to_string(),
            live_header: "header".to_string(),
            copy_header: "header-copy".to_string(),
            fixed_header: "header-fixed".to_string(),
            table_copy: "table-copy".to_string(),
            frame: "fixed-table".to_string(),
            frame_extra: vec!["row".to_string()],
            content: "table-content".to_string(),
        }
    }
}

impl Markers {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Class attribute for a new frame.
    pub fn frame_classes(&self) -> String {
        self.frame_extra
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.frame.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plugin_classes() {
        let markers = Markers::default();
        assert_eq!(markers.frame_classes(), "row fixed-table");
        assert_eq!(markers.needs_fixed, "table-fixed-header");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let markers = Markers::from_toml("needs_fixed = \"sticky\"\nframe_extra = []\n").unwrap();
        assert_eq!(markers.needs_fixed, "sticky");
        assert_eq!(markers.frame_classes(), "fixed-table");
        assert_eq!(markers.live_header, "header");
    }

    #[test]
    fn bad_config_is_a_parse_error() {
        let err = Markers::from_toml("frame = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
