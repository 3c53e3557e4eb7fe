use anyhow::Context;

use orderdesk_app::{DependencyContainer, demo};
use orderdesk_infra::AppConfig;

fn main() -> anyhow::Result<()> {
    orderdesk_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!(channel = %config.notification_channel, "configuring dependencies");

    let service = DependencyContainer::new(config).order_service();

    demo::run(&service, &mut std::io::stdout()).context("failed to write demo report")?;

    Ok(())
}
