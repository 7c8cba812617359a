use hello_lambda::adapters::lambda;
use hello_lambda::utils::{logger, validation::Validate};
use hello_lambda::Settings;
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();
    lambda::ignore_stage_in_path();

    let settings = Settings::from_env();
    settings.validate()?;

    lambda::run_api(settings).await
}
