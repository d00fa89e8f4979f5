use clap::Parser;
use shipment_bridge::adapters::http;
use shipment_bridge::utils::{logger, validation::Validate};
use shipment_bridge::{ServerConfig, ShipmentBridge, SubmissionClient};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // .env 只補上尚未設定的環境變數
    dotenvy::dotenv().ok();

    let config = ServerConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting shipment-bridge");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = SubmissionClient::new(&config)?;
    tracing::info!(
        "📡 Submitting to {} (max {} attempts)",
        client.endpoint(),
        config.max_attempts
    );

    let bridge = ShipmentBridge::new(client);
    http::serve(bridge, &config.host, config.port, &config.route).await?;

    tracing::info!("Server stopped");
    Ok(())
}
