use agency_intake::configuration::get_configuration;
use agency_intake::startup::Application;
use agency_intake::telemetry::{get_subscriber, init_subscriber};

/// # tracing-subscriber
/// `tracing-subscriber` introduces the `Layer` trait: instead of one subscriber that does
/// everything, we stack small layers on top of a `Registry` - an env filter, a JSON storage
/// layer and the bunyan formatter - and each focuses on one job.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("agency_intake".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Intake service is listening");
    application.run_until_stopped().await?;

    Ok(())
}
