use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use film_catalog::api::rest::routes;
use film_catalog::domain::{NoOpEventPublisher, Service};
use film_catalog::infra::storage::{migrations::Migrator, repositories::SeaOrmFilmRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cine_list_server=debug,film_catalog=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://cine_list.db?mode=rwc".into());

    let db = Arc::new(
        Database::connect(&database_url)
            .await
            .context("failed to connect to database")?,
    );
    tracing::info!("database connection established");

    Migrator::up(db.as_ref(), None)
        .await
        .context("failed to run database migrations")?;
    tracing::info!("database migrations applied");

    // Wire repositories -> service -> routes
    let repo = Arc::new(SeaOrmFilmRepository::new(db));
    let event_publisher = Arc::new(NoOpEventPublisher);
    let service = Arc::new(Service::new(repo, event_publisher));

    let app = Router::new()
        .merge(routes::router(service))
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8081".into())
        .parse()
        .context("PORT must be a number")?;

    let addr = SocketAddr::new(host.parse().context("invalid HOST")?, port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind listener")?;
    axum::serve(listener, app)
        .await
        .context("server terminated")?;

    Ok(())
}
