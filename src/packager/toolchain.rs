use crate::utils::error::{AppError, Result};
use std::ffi::OsString;
use std::process::{Command, Output};

/// A cargo invocation prefix, e.g. `cargo +1.82`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    program: OsString,
    args: Vec<String>,
}

impl Toolchain {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// rustup-selected toolchain matching the deployment runtime.
    pub fn preferred(version: &str) -> Self {
        Self::new("cargo").with_args([format!("+{}", version)])
    }

    /// The toolchain of the invoking process: `$CARGO` when run via cargo.
    pub fn current() -> Self {
        Self::new(std::env::var_os("CARGO").unwrap_or_else(|| OsString::from("cargo")))
    }

    /// Preferred toolchain if it answers `--version`, otherwise [`Toolchain::current`].
    pub fn resolve(version: &str) -> Self {
        Self::resolve_from(Self::preferred(version))
    }

    pub fn resolve_from(preferred: Self) -> Self {
        if preferred.is_usable() {
            tracing::info!("🔧 Using toolchain {}", preferred);
            return preferred;
        }

        let current = Self::current();
        tracing::warn!(
            "Toolchain {} unavailable, falling back to {}",
            preferred,
            current
        );
        current
    }

    pub fn is_usable(&self) -> bool {
        self.command()
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl std::fmt::Display for Toolchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs `command` with captured output. A non-zero exit is an error.
pub fn run(command: &mut Command) -> Result<Output> {
    let rendered = render_command(command);
    tracing::info!("$ {}", rendered);

    let output = command.output().map_err(|e| AppError::CommandFailed {
        command: rendered.clone(),
        status: "spawn error".to_string(),
        stderr: e.to_string(),
    })?;

    if !output.status.success() {
        return Err(AppError::CommandFailed {
            command: rendered,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output)
}

fn render_command(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
