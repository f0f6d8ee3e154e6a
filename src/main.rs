mod config;
mod service;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = config::Config::new();

    tracing::info!(
        server_addr = %config.server_addr,
        healthcheck_addr = %config.healthcheck_addr,
        "starting service"
    );

    service::run(config).await
}
