mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::addresses::{routes as addresses_routes, AddressService};
use crate::features::admin::{routes as admin_routes, AdminService};
use crate::features::fires::{routes as fires_routes, FireService, PgFireRepository};
use crate::features::geocodes::GeocodingService;
use crate::features::people::{routes as people_routes, PeopleService, PgPersonRepository};
use crate::features::reference::{routes as reference_routes, ReferenceService};
use crate::features::stations::{routes as stations_routes, StationService};
use crate::modules::geocoding::NominatimClient;
use axum::Router;
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Log system info
    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Initialize geocoding provider
    let geocoder = Arc::new(
        NominatimClient::new(&config.geocoder)
            .map_err(|e| anyhow::anyhow!("Failed to initialize geocoder: {}", e))?,
    );
    let geocoding_service = Arc::new(GeocodingService::new(geocoder));
    tracing::info!(
        "Geocoding service initialized (provider: {}, timeout: {:?})",
        config.geocoder.base_url,
        config.geocoder.timeout
    );

    // Initialize Fire Service
    let fire_repository = Arc::new(PgFireRepository::new(pool.clone()));
    let fire_service = Arc::new(FireService::new(fire_repository, geocoding_service));
    tracing::info!("Fire service initialized");

    // Initialize record services
    let person_repository = Arc::new(PgPersonRepository::new(pool.clone()));
    let people_service = Arc::new(PeopleService::new(person_repository));
    let reference_service = Arc::new(ReferenceService::new(pool.clone()));
    let address_service = Arc::new(AddressService::new(pool.clone()));
    let station_service = Arc::new(StationService::new(pool.clone()));
    tracing::info!("Record services initialized");

    // Initialize Admin Service
    let admin_service = Arc::new(AdminService::new(pool.clone()));
    tracing::info!("Admin service initialized");

    // Build API documentation with dynamic info from config
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier::from(&config.docs).modify(&mut openapi);

    let docs = Router::new()
        .merge(SwaggerUi::new("/admin/doc").url("/admin/doc/openapi.json", openapi));

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public pages
    let public_routes = Router::new()
        .merge(fires_routes::routes(Arc::clone(&fire_service)))
        .merge(people_routes::routes(Arc::clone(&people_service)));

    // Record management
    let admin = Router::new()
        .merge(admin_routes::routes(admin_service))
        .merge(fires_routes::admin_routes(fire_service))
        .merge(people_routes::admin_routes(people_service))
        .merge(reference_routes::admin_routes(reference_service))
        .merge(addresses_routes::admin_routes(address_service))
        .merge(stations_routes::admin_routes(station_service));

    let app = Router::new()
        .merge(docs)
        .merge(public_routes)
        .merge(admin)
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "API documentation available at {}",
        format!("http://{}/admin/doc/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
