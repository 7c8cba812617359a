use crate::config::EnvSource;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_aws_region, validate_label, validate_lambda_name, Validate,
};

pub const DEFAULT_LAMBDA_NAME: &str = "hello_api_lambda";

/// Settings of the primary API, built once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub app_env: String,
    pub stage: String,
    pub aws_region: String,
    pub lambda_name: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_source(&EnvSource::load())
    }

    pub fn from_source(env: &EnvSource) -> Self {
        Self {
            app_env: env.get_or("APP_ENV", "dev"),
            stage: env.get_or("STAGE", "dev"),
            aws_region: env.get_or("AWS_REGION", "us-east-1"),
            lambda_name: env.get_or("LAMBDA_NAME", DEFAULT_LAMBDA_NAME),
        }
    }

    pub fn title(&self) -> String {
        format!("Hello World API ({})", self.stage)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_source(&EnvSource::from_pairs(Vec::<(String, String)>::new()))
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_label("stage", &self.stage)?;
        validate_label("app_env", &self.app_env)?;
        validate_aws_region("aws_region", &self.aws_region)?;
        validate_lambda_name("lambda_name", &self.lambda_name)?;

        tracing::debug!("✅ API settings validation passed");
        Ok(())
    }
}
