//! Page configuration.
//!
//! The browser build parses the `astra.toml` bundled next to the crate manifest.
//! The prerender binary may point at another file with `--config`.

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Bundled configuration, compiled into the WASM binary.
const EMBEDDED_CONFIG: &str = include_str!("../astra.toml");

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub studio: StudioConfig,
    pub scene: SceneConfig,
    pub motion: MotionConfig,
}

/// Studio identity shown in the nav bar and footer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Wordmark in the nav bar
    pub name: String,
    /// Small caps line under the wordmark
    pub tagline: String,
    /// Wordmark in the footer
    pub footer_name: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            name: "ASTRA".into(),
            tagline: "Marketing Studio".into(),
            footer_name: "Astra Studio".into(),
        }
    }
}

/// Hero background scene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Set to false to ship the static backdrop only.
    pub enabled: bool,
    /// Hosted scene definition handed to the viewer.
    pub url: String,
    /// Module script that registers the `<spline-viewer>` element.
    pub viewer_script: String,
    /// A scene still loading after this long is treated as failed. A load
    /// that completes later is discarded and the backdrop stays for the page's
    /// lifetime.
    pub load_timeout_ms: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "https://prod.spline.design/EF7JOSsHLk16Tlw9/scene.splinecode".into(),
            viewer_script: "https://unpkg.com/@splinetool/viewer@1.9.48/build/spline-viewer.js"
                .into(),
            load_timeout_ms: 8000,
        }
    }
}

impl SceneConfig {
    /// True when there is something to embed at all.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.url.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// When false, every entrance group renders in its revealed state.
    pub enabled: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl PageConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The configuration bundled with the build.
    /// Returns default config if the bundled file is invalid.
    pub fn embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "bundled astra.toml is invalid, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_config_parses() {
        let config = PageConfig::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.studio.name, "ASTRA");
        assert!(config.scene.is_active());
        assert!(config.motion.enabled);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = PageConfig::from_toml_str("").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = PageConfig::from_toml_str(
            r#"
            [scene]
            load_timeout_ms = 2500
            "#,
        )
        .unwrap();
        assert_eq!(config.scene.load_timeout_ms, 2500);
        assert_eq!(config.scene.url, SceneConfig::default().url);
        assert_eq!(config.studio, StudioConfig::default());
    }

    #[test]
    fn blank_scene_url_deactivates_the_embed() {
        let config = PageConfig::from_toml_str(
            r#"
            [scene]
            url = "   "
            "#,
        )
        .unwrap();
        assert!(!config.scene.is_active());
    }

    #[test]
    fn invalid_document_is_an_error() {
        assert!(PageConfig::from_toml_str("[scene\nurl = 1").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = PageConfig::load_from_path(Path::new("/nonexistent/astra.toml")).unwrap_err();
        assert!(matches!(err, crate::error::LandingError::Io(_)));
    }
}
