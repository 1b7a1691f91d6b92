use log::{error, info};
use phone_number_lookup::{
    api::{self, HttpServer, ServerError},
    Config,
};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = Config::from_env()?;
    let server = HttpServer::start(&config).await?;

    // wait for SIGINT/SIGTERM to gracefully stop the http server
    api::shutdown_signal().await;
    server.stop().await;
    info!("bye");
    Ok(())
}
