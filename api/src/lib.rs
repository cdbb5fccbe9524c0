pub mod config;
pub mod error;
pub mod panic_handler;
pub mod routes;
pub mod tracing_config;

use axum::{routing::IntoMakeService, Router};
use hyper::server::conn::AddrIncoming;
use std::net::{IpAddr, SocketAddr};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::{event, Level};

pub use crate::error::{Error, Result};

pub struct Server {
    pub host: String,
    pub port: u16,
    pub server: axum::Server<AddrIncoming, IntoMakeService<Router>>,
}

pub fn create_app(production: bool) -> Router {
    routes::configure_routes(Router::new()).layer(
        // Global middlewares
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(move |err| {
                panic_handler::handle_panic(production, err)
            }))
            .set_x_request_id(MakeRequestUuid)
            .propagate_x_request_id()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO))
                    .on_request(DefaultOnRequest::new().level(Level::INFO)),
            )
            .into_inner(),
    )
}

/// Bind the listener and build the server future. The returned port is the one
/// actually bound, so a config port of 0 picks a free port.
pub fn run_server(config: config::Config) -> Result<Server> {
    let app = create_app(config.production());

    let bind_ip: IpAddr = config.host.parse()?;
    let addr = SocketAddr::from((bind_ip, config.port));
    let builder = axum::Server::try_bind(&addr)?;
    let server = builder.serve(app.into_make_service());
    let port = server.local_addr().port();
    event!(Level::INFO, "Listening on {}:{}", config.host, port);

    Ok(Server {
        host: config.host,
        port,
        server,
    })
}
