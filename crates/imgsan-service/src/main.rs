use imgsan_core::Config;
use imgsan_service::dispatcher::EventDispatcher;
use imgsan_service::state::AppState;
use imgsan_service::{routes, server, telemetry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    telemetry::init_telemetry();

    // Missing OUTPUT_BUCKET (or an invalid backend setup) is fatal here,
    // before any event is accepted
    let config = Config::from_env()?;
    config.validate()?;

    let storage = imgsan_storage::create_storage(&config).await?;
    let dispatcher = EventDispatcher::new(storage, config.output_bucket.clone());

    let state = Arc::new(AppState { dispatcher });
    let router = routes::build_router(state);

    server::start_server(&config, router).await
}
