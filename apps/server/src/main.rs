use anyhow::Context;
use verso::domain::config::ApiConfig;
use verso::kernel::config::load_config;
use verso_logger::{LevelFilter, Logger};
use verso_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let mut logger = Logger::builder(env!("CARGO_PKG_NAME"))
        .level(cfg.log.level.parse().unwrap_or(LevelFilter::INFO))
        .json(cfg.log.json);
    if let Some(dir) = &cfg.log.directory {
        logger = logger.path(dir);
    }
    let _log = logger.init()?;

    Server::builder().config(cfg).build()?.run().await
}
