use crate::config::settings::DEFAULT_LAMBDA_NAME;
use crate::config::EnvSource;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_label, validate_lambda_name, validate_project_root, Validate,
};
use std::path::{Path, PathBuf};

pub const DEFAULT_TOOLCHAIN_VERSION: &str = "stable";
pub const PROXY_LAMBDA_NAME: &str = "proxy_lambda";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagerConfig {
    pub root: PathBuf,
    pub build_dir: PathBuf,
    /// rustup toolchain matching the deployment runtime, e.g. `stable` or `1.82`.
    pub toolchain_version: String,
    /// Names the API archive, `build/<lambda_name>.zip`.
    pub lambda_name: String,
}

impl PackagerConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            build_dir: root.join("build"),
            root,
            toolchain_version: DEFAULT_TOOLCHAIN_VERSION.to_string(),
            lambda_name: DEFAULT_LAMBDA_NAME.to_string(),
        }
    }

    pub fn from_env(root: impl Into<PathBuf>) -> Self {
        Self::from_source(root, &EnvSource::load())
    }

    pub fn from_source(root: impl Into<PathBuf>, env: &EnvSource) -> Self {
        let mut config = Self::new(root);
        config.toolchain_version = env.get_or("LAMBDA_TOOLCHAIN", DEFAULT_TOOLCHAIN_VERSION);
        config.lambda_name = env.get_or("LAMBDA_NAME", DEFAULT_LAMBDA_NAME);
        config
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("Cargo.toml")
    }

    pub fn env_file(&self) -> PathBuf {
        self.root.join(".env")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Validate for PackagerConfig {
    fn validate(&self) -> Result<()> {
        validate_project_root("root", &self.root)?;
        validate_label("toolchain_version", &self.toolchain_version)?;
        validate_lambda_name("lambda_name", &self.lambda_name)?;

        tracing::debug!("✅ Packager configuration validation passed");
        Ok(())
    }
}
