use less_colors::ColorSpace;
use serde::{Deserialize, Deserializer};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "LESSCOLORS_CONFIG";

/// Defaults for a reduce job, loaded from a YAML file.
///
/// Every key is optional. Command-line flags take precedence.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Comparison space for palette matching
    #[serde(deserialize_with = "deserialize_space")]
    pub space: ColorSpace,

    /// Output file format ("png", "jpeg", "bmp", ...)
    pub output_type: String,

    /// Whether alpha takes part in Euclidean distances
    pub include_alpha: bool,

    /// Match rows on multiple threads
    pub parallel: bool,

    /// Drop repeated palette entries before matching
    pub dedup_palette: bool,

    /// Palette as hex strings, used when no palette image is given
    pub colors: Vec<String>,
}

fn deserialize_space<'de, D>(deserializer: D) -> Result<ColorSpace, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            space: ColorSpace::Lab,
            output_type: "png".to_string(),
            include_alpha: false,
            parallel: true,
            dedup_palette: true,
            colors: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Parse a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Pick the config file: the explicit path if given, else the one named
    /// by [`CONFIG_ENV`].
    pub fn resolve_path(explicit: Option<&Path>, env: Option<OsString>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
    }

    /// Load configuration, falling back to defaults on any problem.
    pub fn load(explicit: Option<&Path>) -> Self {
        let Some(path) = Self::resolve_path(explicit, std::env::var_os(CONFIG_ENV)) else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        space = %config.space,
                        colors = config.colors.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.space, ColorSpace::Lab);
        assert_eq!(config.output_type, "png");
        assert!(!config.include_alpha);
        assert!(config.parallel);
        assert!(config.dedup_palette);
        assert!(config.colors.is_empty());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r##"
space: oklab
output_type: bmp
include_alpha: true
parallel: false
dedup_palette: false
colors:
  - "#000000"
  - "#FFFFFF"
"##;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.space, ColorSpace::Oklab);
        assert_eq!(config.output_type, "bmp");
        assert!(config.include_alpha);
        assert!(!config.parallel);
        assert!(!config.dedup_palette);
        assert_eq!(config.colors, vec!["#000000", "#FFFFFF"]);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config = AppConfig::from_yaml("space: XYZ\n").unwrap();

        assert_eq!(config.space, ColorSpace::Xyz);
        assert_eq!(config.output_type, "png");
        assert!(config.parallel);
    }

    #[test]
    fn test_deserialize_unknown_space() {
        let err = AppConfig::from_yaml("space: hsv\n").unwrap_err();
        assert!(err.to_string().contains("unknown color space"));
    }

    #[test]
    fn test_resolve_path_prefers_explicit() {
        let path = AppConfig::resolve_path(
            Some(Path::new("cli.yaml")),
            Some(OsString::from("env.yaml")),
        );
        assert_eq!(path, Some(PathBuf::from("cli.yaml")));
    }

    #[test]
    fn test_resolve_path_env_fallback() {
        let path = AppConfig::resolve_path(None, Some(OsString::from("env.yaml")));
        assert_eq!(path, Some(PathBuf::from("env.yaml")));

        assert_eq!(AppConfig::resolve_path(None, Some(OsString::new())), None);
        assert_eq!(AppConfig::resolve_path(None, None), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "space: rgb").unwrap();
        writeln!(file, "colors: [\"#ff0000\"]").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.space, ColorSpace::Rgb);
        assert_eq!(config.colors, vec!["#ff0000"]);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/lesscolors.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_invalid_yaml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "parallel: [not, a, bool").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config, AppConfig::default());
    }
}
