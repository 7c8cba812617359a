use crate::packager::Service;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "hello-lambda")]
#[command(about = "Hello world API, its HTML proxy front-end, and the Lambda packager")]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the JSON hello world API locally
    ServeApi {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Run the HTML proxy front-end locally
    ServeProxy {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Falls back to 5000 when neither the flag nor $PORT is set
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },
    /// Build the Lambda zip archives under build/
    Package {
        #[arg(long, value_enum, default_value_t = ServiceSelection::All)]
        service: ServiceSelection,

        /// Project root holding Cargo.toml, src/ and .env
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceSelection {
    Api,
    Proxy,
    All,
}

impl ServiceSelection {
    pub fn services(self) -> Vec<Service> {
        match self {
            Self::Api => vec![Service::Api],
            Self::Proxy => vec![Service::Proxy],
            Self::All => vec![Service::Api, Service::Proxy],
        }
    }
}
