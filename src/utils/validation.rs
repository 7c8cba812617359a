use crate::utils::error::{AppError, Result};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> AppError {
    AppError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Base URL the proxy appends `/` to: http(s), a host, no query or fragment.
pub fn validate_endpoint(field_name: &str, endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field_name, endpoint, format!("Invalid URL format: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            endpoint,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field_name, endpoint, "URL has no host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field_name,
            endpoint,
            "Base URL cannot carry a query or fragment",
        ));
    }

    Ok(())
}

/// Single-token labels such as a stage (`dev`, `prod`) or a toolchain (`1.82`).
pub fn validate_label(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(invalid(field_name, value, "Value cannot be empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid(field_name, value, "Value cannot contain whitespace"));
    }
    Ok(())
}

/// AWS Lambda function names: 1-64 of `[A-Za-z0-9_-]`. Also names the API archive.
pub fn validate_lambda_name(field_name: &str, name: &str) -> Result<()> {
    if name.is_empty() || name.len() > 64 {
        return Err(invalid(
            field_name,
            name,
            "Lambda function name must be 1 to 64 characters",
        ));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid(
            field_name,
            name,
            "Lambda function name can only contain letters, digits, hyphens and underscores",
        ));
    }
    Ok(())
}

pub fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    validate_label(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(invalid(
            field_name,
            region,
            "AWS region can only contain lowercase letters, numbers, and hyphens",
        ));
    }
    Ok(())
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(invalid(field_name, port, "Port 0 is not a listen port"));
    }
    Ok(())
}

/// The packager needs a directory holding the crate's `src/` tree.
pub fn validate_project_root(field_name: &str, root: &Path) -> Result<()> {
    if !root.is_dir() {
        return Err(invalid(
            field_name,
            root.display(),
            "Project root is not a directory",
        ));
    }
    if !root.join("src").is_dir() {
        return Err(invalid(
            field_name,
            root.display(),
            "Project root has no src/ directory",
        ));
    }
    Ok(())
}
