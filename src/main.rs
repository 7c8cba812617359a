use clap::Parser;
use hello_lambda::config::cli::Command;
use hello_lambda::proxy::ProxyState;
use hello_lambda::utils::{logger, validation::Validate};
use hello_lambda::{api, proxy, server, Cli, Packager, PackagerConfig, ProxyConfig, Settings};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting hello-lambda CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let result = match cli.command {
        Command::ServeApi { host, port } => serve_api(&host, port).await,
        Command::ServeProxy { host, port } => serve_proxy(&host, port).await,
        Command::Package { service, root } => {
            // The packager shells out synchronously; keep it off the async workers.
            tokio::task::spawn_blocking(move || package(root, service.services())).await?
        }
    };

    if let Err(e) = result {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn serve_api(host: &str, port: u16) -> anyhow::Result<()> {
    let settings = Settings::from_env();
    settings.validate()?;

    tracing::info!("{} (env: {})", settings.title(), settings.app_env);
    let router = api::router(Arc::new(settings));
    server::serve(router, socket_addr(host, port)?).await?;
    Ok(())
}

async fn serve_proxy(host: &str, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = ProxyConfig::from_env()?;
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    tracing::info!("Proxy front-end calling {}", config.upstream_endpoint);
    let addr = socket_addr(host, config.port)?;
    let router = proxy::router(ProxyState::new(config)?);
    server::serve(router, addr).await?;
    Ok(())
}

fn package(root: std::path::PathBuf, services: Vec<hello_lambda::Service>) -> anyhow::Result<()> {
    let config = PackagerConfig::from_env(root);
    config.validate()?;

    let archives = Packager::new(config).run(&services)?;
    for archive in archives {
        println!("Built: {}", archive.display());
    }
    Ok(())
}

fn socket_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let addr = format!("{}:{}", host, port).parse()?;
    Ok(addr)
}
