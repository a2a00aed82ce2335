use pollroom::{
    build_router,
    room::{generators::RandomRoomIdGenerator, repository::InMemoryRoomRepository, RoomService},
    token::generators::UuidTokenGenerator,
    AppState, ServerConfig,
};
use std::error::Error;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pollroom=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting poll room server");

    let config = ServerConfig::from_env()?;

    let room_repository = Arc::new(InMemoryRoomRepository::new());
    let app_state = AppState::new(
        room_repository,
        Arc::new(RandomRoomIdGenerator::new()),
        Arc::new(UuidTokenGenerator::new()),
    );

    if let Some(seed) = &config.seed_room {
        RoomService::new(
            Arc::clone(&app_state.room_repository),
            Arc::clone(&app_state.room_id_generator),
        )
        .create_room_with_id(seed.room_id.clone(), seed.owner.clone())
        .await?;
        info!(room_id = %seed.room_id, "Seeded room");
    }

    let app = build_router(app_state, &config.static_dir);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        static_dir = %config.static_dir.display(),
        "Server listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
