pub mod adapters;
pub mod api;
pub mod config;
pub mod domain;
pub mod packager;
pub mod proxy;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::Cli;
pub use config::{PackagerConfig, ProxyConfig, Settings};

pub use domain::services::HelloService;
pub use packager::{Packager, Service};
pub use utils::error::{AppError, Result};
