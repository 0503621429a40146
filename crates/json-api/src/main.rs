//! Shopcarts JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shopcarts_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod extensions;
mod healthcheck;
mod index;
mod media_type;
mod shopcarts;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Shopcarts JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::from_database_url(&config.database_url).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .get(index::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("shopcarts")
                .hoop(media_type::handler)
                .get(shopcarts::handlers::index::handler)
                .post(shopcarts::handlers::create::handler)
                .push(
                    Router::with_path("{shopcart}")
                        .get(shopcarts::handlers::get::handler)
                        .put(shopcarts::handlers::update::handler)
                        .delete(shopcarts::handlers::delete::handler)
                        .push(Router::with_path("clear").put(shopcarts::handlers::clear::handler))
                        .push(
                            Router::with_path("items")
                                .get(shopcarts::items::handlers::index::handler)
                                .post(shopcarts::items::handlers::create::handler)
                                .delete(shopcarts::items::handlers::delete_bulk::handler)
                                .push(
                                    Router::with_path("{product}")
                                        .get(shopcarts::items::handlers::get::handler)
                                        .put(shopcarts::items::handlers::update::handler)
                                        .delete(shopcarts::items::handlers::delete::handler),
                                ),
                        ),
                ),
        );

    let doc = OpenApi::new("Shopcarts API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
