use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "tailor.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,
}

/// The `[build]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Globs of the pages whose classes are compiled.
    pub pages: Vec<String>,
    /// Globs of the pages whose classes form the critical sheet.
    pub critical: Vec<String>,
    pub ignore: Vec<String>,
    pub out_dir: PathBuf,
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            pages: vec!["**/*.html".to_string()],
            critical: Vec::new(),
            ignore: Vec::new(),
            out_dir: PathBuf::from("dist"),
            minify: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads `path` when given. Otherwise loads `tailor.toml` from the working
/// directory if present, and falls back to defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                load(default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BuildConfig, Config, ConfigError, load, load_or_default};
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn loads_build_table() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tailor.toml");
        fs::write(
            &path,
            r#"
[build]
pages = ["site/**/*.html"]
critical = ["site/index.html"]
out_dir = "public/css"
minify = true
"#,
        )
        .expect("write config");

        let config = load(&path).expect("config should parse");
        assert_eq!(config.build.pages, ["site/**/*.html"]);
        assert_eq!(config.build.critical, ["site/index.html"]);
        assert!(config.build.ignore.is_empty());
        assert_eq!(config.build.out_dir, PathBuf::from("public/css"));
        assert!(config.build.minify);
    }

    #[test]
    fn defaults_missing_fields() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tailor.toml");
        fs::write(&path, "").expect("write config");
        assert_eq!(load(&path).expect("config should parse"), Config::default());

        fs::write(&path, "[build]\nminify = true\n").expect("write config");
        let config = load(&path).expect("config should parse");
        assert_eq!(
            config.build,
            BuildConfig {
                minify: true,
                ..BuildConfig::default()
            }
        );
    }

    #[test]
    fn reports_read_and_parse_errors() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            load_or_default(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[build\npages = 3").expect("write config");
        let err = load(&broken).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
