use staticserve::{config::ServerConfig, logger, server};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let config = Arc::new(ServerConfig::fixed());

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            logger::log_fatal(&format!("Failed to build runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(async_main(config))
}

async fn async_main(config: Arc<ServerConfig>) -> ExitCode {
    // Bind failure is the one fatal error: log and exit non-zero
    let listener = match server::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_fatal(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    logger::log_server_start(&config.addr, &config.root_dir);
    server::run(listener, config).await;

    ExitCode::SUCCESS
}
