#[cfg(feature = "cli")]
pub mod cli;
pub mod dotenv;
pub mod packager;
pub mod proxy;
pub mod settings;

#[cfg(feature = "cli")]
pub use cli::Cli;
pub use packager::PackagerConfig;
pub use proxy::ProxyConfig;
pub use settings::Settings;

use std::collections::HashMap;
use std::path::Path;

/// Environment view used by every `from_env` constructor: the process
/// environment first, then whatever a `.env` file supplied.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    file_vars: HashMap<String, String>,
    overrides: Option<HashMap<String, String>>,
}

impl EnvSource {
    /// Reads `.env` from the working directory if it exists.
    pub fn load() -> Self {
        Self::load_from(".env")
    }

    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let file_vars = match dotenv::read_env_file(path) {
            Ok(vars) => vars,
            Err(e) => {
                tracing::warn!("Ignoring unreadable .env file: {}", e);
                HashMap::new()
            }
        };

        Self {
            file_vars,
            overrides: None,
        }
    }

    /// Fixed variable set that ignores the process environment.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            file_vars: HashMap::new(),
            overrides: Some(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(overrides) = &self.overrides {
            return overrides.get(key).cloned();
        }

        std::env::var(key)
            .ok()
            .or_else(|| self.file_vars.get(key).cloned())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_ignores_process_environment() {
        let env = EnvSource::from_pairs([("STAGE", "prod")]);
        assert_eq!(env.get("STAGE").as_deref(), Some("prod"));
        assert_eq!(env.get("PATH"), None);
        assert_eq!(env.get_or("APP_ENV", "dev"), "dev");
    }

    #[test]
    fn test_process_environment_wins_over_env_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "HELLO_LAMBDA_FILE_ONLY=from-file\nHELLO_LAMBDA_SHADOWED=from-file\n",
        )
        .unwrap();
        std::env::set_var("HELLO_LAMBDA_SHADOWED", "from-process");

        let env = EnvSource::load_from(&path);

        assert_eq!(env.get("HELLO_LAMBDA_FILE_ONLY").as_deref(), Some("from-file"));
        assert_eq!(env.get("HELLO_LAMBDA_SHADOWED").as_deref(), Some("from-process"));
        assert_eq!(env.get("HELLO_LAMBDA_UNSET_KEY"), None);

        std::env::remove_var("HELLO_LAMBDA_SHADOWED");
    }

    #[test]
    fn test_missing_env_file_yields_no_file_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let env = EnvSource::load_from(dir.path().join(".env"));
        assert_eq!(env.get("HELLO_LAMBDA_FILE_ONLY_MISSING"), None);
    }
}
