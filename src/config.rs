use serde::Deserialize;
use std::path::PathBuf;

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "assist_lsp=info";

/// LSP configuration structure, read from `initializationOptions`
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LspConfig {
    /// Root of the Dart SDK used to run pub
    pub sdk_path: Option<PathBuf>,
    pub assist: AssistConfig,
}

/// External analysis command used to compute assists
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AssistConfig {
    pub command: Option<String>,
    pub args: Vec<String>,
}

impl LspConfig {
    /// Parse initialization options, falling back to defaults when absent
    pub fn from_initialization_options(
        options: Option<serde_json::Value>,
    ) -> Result<Self, serde_json::Error> {
        match options {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => serde_json::from_value(value),
        }
    }
}

/// Returns the path to the data directory for assist-lsp.
/// Uses $XDG_DATA_HOME/assist-lsp if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/assist-lsp,
/// or ./assist-lsp if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("assist-lsp.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("assist-lsp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lsp_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<LspConfig>(json!({
            "sdkPath": "/opt/dart-sdk"
        }))
        .unwrap();

        assert_eq!(result.sdk_path, Some(PathBuf::from("/opt/dart-sdk")));
        assert_eq!(result.assist, AssistConfig::default());
    }

    #[test]
    fn lsp_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<LspConfig>(json!({
            "sdkPath": "/opt/dart-sdk",
            "assist": {
                "command": "dart-assists",
                "args": ["--json"]
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            LspConfig {
                sdk_path: Some(PathBuf::from("/opt/dart-sdk")),
                assist: AssistConfig {
                    command: Some("dart-assists".to_string()),
                    args: vec!["--json".to_string()],
                },
            }
        );
    }

    #[test]
    fn from_initialization_options_defaults_when_absent() {
        assert_eq!(
            LspConfig::from_initialization_options(None).unwrap(),
            LspConfig::default()
        );
        assert_eq!(
            LspConfig::from_initialization_options(Some(serde_json::Value::Null)).unwrap(),
            LspConfig::default()
        );
    }

    #[test]
    fn from_initialization_options_rejects_wrong_types() {
        let result = LspConfig::from_initialization_options(Some(json!({ "sdkPath": 42 })));
        assert!(result.is_err());
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/assist-lsp"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/assist-lsp"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./assist-lsp"));
    }
}
