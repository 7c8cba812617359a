use hello_lambda::adapters::lambda;
use hello_lambda::utils::{logger, validation::Validate};
use hello_lambda::ProxyConfig;
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();
    lambda::ignore_stage_in_path();

    let config = ProxyConfig::from_env()?;
    config.validate()?;

    lambda::run_proxy(config).await
}
