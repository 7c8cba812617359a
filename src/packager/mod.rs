//! Offline builder for the per-service Lambda archives.
//!
//! Each service is bundled on its own: a fresh staging directory receives
//! the vendored third-party crates, the crate manifest and its whole `src/`
//! tree (`lib.rs` declares every module, so the adapters need all of it),
//! the service's Lambda adapter at the bundle root and an optional `.env`.
//! The staging directory is then zipped under `build/`. Any failing step
//! aborts the whole run.

pub mod archive;
pub mod toolchain;

use crate::config::packager::PROXY_LAMBDA_NAME;
use crate::config::PackagerConfig;
use crate::utils::error::{AppError, Result};
use std::fs;
use std::path::{Path, PathBuf};
pub use toolchain::Toolchain;

pub const SOURCE_DIR: &str = "src";
pub const MANIFEST_FILES: [&str; 2] = ["Cargo.toml", "Cargo.lock"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Api,
    Proxy,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Proxy => "proxy",
        }
    }
}

/// What goes into one archive. `adapter` is relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBundle {
    pub service: Service,
    pub adapter: PathBuf,
    pub staging_dir: PathBuf,
    pub archive: PathBuf,
}

impl ServiceBundle {
    pub fn for_service(service: Service, config: &PackagerConfig) -> Self {
        let (adapter, archive_name) = match service {
            Service::Api => ("src/bin/api_lambda.rs", config.lambda_name.as_str()),
            Service::Proxy => ("src/bin/proxy_lambda.rs", PROXY_LAMBDA_NAME),
        };

        Self {
            service,
            adapter: PathBuf::from(adapter),
            staging_dir: config.build_dir.join(service.name()).join("package"),
            archive: config.build_dir.join(format!("{}.zip", archive_name)),
        }
    }
}

pub struct Packager {
    config: PackagerConfig,
    preferred: Toolchain,
    pinned: Option<Toolchain>,
}

impl Packager {
    pub fn new(config: PackagerConfig) -> Self {
        Self {
            preferred: Toolchain::preferred(&config.toolchain_version),
            config,
            pinned: None,
        }
    }

    /// Skips toolchain resolution and uses `toolchain` for every service.
    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.pinned = Some(toolchain);
        self
    }

    /// Replaces the `cargo +<version>` candidate checked before falling back.
    pub fn with_preferred_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.preferred = toolchain;
        self
    }

    /// Builds the archives one after the other and returns their paths.
    /// The toolchain is resolved once for the whole run.
    pub fn run(&self, services: &[Service]) -> Result<Vec<PathBuf>> {
        let toolchain = self.resolve_toolchain();

        let mut archives = Vec::with_capacity(services.len());
        for &service in services {
            archives.push(self.package_with(service, &toolchain)?);
        }
        Ok(archives)
    }

    pub fn package(&self, service: Service) -> Result<PathBuf> {
        self.package_with(service, &self.resolve_toolchain())
    }

    fn resolve_toolchain(&self) -> Toolchain {
        match &self.pinned {
            Some(toolchain) => toolchain.clone(),
            None => Toolchain::resolve_from(self.preferred.clone()),
        }
    }

    fn package_with(&self, service: Service, toolchain: &Toolchain) -> Result<PathBuf> {
        let bundle = ServiceBundle::for_service(service, &self.config);
        tracing::info!("📦 Packaging {} service", service.name());

        self.clean(&bundle)?;
        self.install_deps(toolchain, &bundle.staging_dir)?;
        self.copy_source(&bundle)?;

        let entries = archive::zip_dir(&bundle.staging_dir, &bundle.archive)?;
        tracing::info!("✅ Built: {} ({} files)", bundle.archive.display(), entries);
        Ok(bundle.archive)
    }

    fn clean(&self, bundle: &ServiceBundle) -> Result<()> {
        if bundle.staging_dir.exists() {
            fs::remove_dir_all(&bundle.staging_dir)?;
        }
        if bundle.archive.exists() {
            fs::remove_file(&bundle.archive)?;
        }
        fs::create_dir_all(&bundle.staging_dir)?;
        Ok(())
    }

    fn install_deps(&self, toolchain: &Toolchain, staging_dir: &Path) -> Result<()> {
        let manifest = self.config.manifest_path();
        if !manifest.exists() {
            tracing::warn!(
                "{} not found; skipping dependency install",
                manifest.display()
            );
            return Ok(());
        }

        let mut command = toolchain.command();
        command
            .arg("vendor")
            .arg("--manifest-path")
            .arg(&manifest)
            .arg(staging_dir.join("vendor"));
        toolchain::run(&mut command)?;
        Ok(())
    }

    fn copy_source(&self, bundle: &ServiceBundle) -> Result<()> {
        let root = self.config.root();

        let src = root.join(SOURCE_DIR);
        if !src.is_dir() {
            return Err(AppError::PackagingError {
                message: format!("source directory {} does not exist", src.display()),
            });
        }
        archive::copy_tree(&src, &bundle.staging_dir.join(SOURCE_DIR))?;

        for name in MANIFEST_FILES {
            let path = root.join(name);
            if path.exists() {
                fs::copy(&path, bundle.staging_dir.join(name))?;
            }
        }

        let adapter = root.join(&bundle.adapter);
        let file_name = bundle
            .adapter
            .file_name()
            .ok_or_else(|| AppError::PackagingError {
                message: format!("adapter path {} has no file name", bundle.adapter.display()),
            })?;
        fs::copy(&adapter, bundle.staging_dir.join(file_name)).map_err(|e| {
            AppError::PackagingError {
                message: format!("failed to copy adapter {}: {}", adapter.display(), e),
            }
        })?;

        let env_file = self.config.env_file();
        if env_file.exists() {
            fs::copy(&env_file, bundle.staging_dir.join(".env"))?;
        }

        Ok(())
    }
}
