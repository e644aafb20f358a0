use anyhow::Result;
use hotel_api::application::{ports::time::Clock, services::ApplicationServices};
use hotel_api::config::AppConfig;
use hotel_api::domain::{
    booking::BookingRepository, guest::GuestRepository, room::RoomRepository,
};
use hotel_api::infrastructure::{
    database,
    repositories::{SqliteBookingRepository, SqliteGuestRepository, SqliteRoomRepository},
    time::SystemClock,
};
use hotel_api::presentation::http::{pipeline::Pipeline, routes::build_routes, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let room_repo: Arc<dyn RoomRepository> = Arc::new(SqliteRoomRepository::new(Arc::clone(&pool)));
    let guest_repo: Arc<dyn GuestRepository> =
        Arc::new(SqliteGuestRepository::new(Arc::clone(&pool)));
    let booking_repo: Arc<dyn BookingRepository> =
        Arc::new(SqliteBookingRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        room_repo,
        guest_repo,
        booking_repo,
        clock,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = Pipeline::for_config(&config)?.into_router(build_routes(state));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        "server running in {} mode on {address}",
        config.environment()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
