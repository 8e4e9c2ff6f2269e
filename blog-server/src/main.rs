use blog_server::infrastructure::config::AppConfig;
use blog_server::infrastructure::logging::init_logging;
use blog_server::lifecycle;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;
    let handle = lifecycle::start(config).await?;

    tokio::signal::ctrl_c().await?;
    handle.stop().await?;

    Ok(())
}
