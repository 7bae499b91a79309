//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

use user_registry::doc::openapi_json;
use user_registry::domain::ports::UserRepository;
use user_registry::inbound::http::health::{live, ready, HealthState};
use user_registry::inbound::http::state::HttpState;
use user_registry::inbound::http::configure_api;
use user_registry::outbound::persistence::MemoryUserRepository;
use user_registry::Trace;

fn build_app(
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(health_state)
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
        .service(ready)
        .service(live)
        .service(openapi_json)
}

/// Build and start the HTTP server.
pub fn run(config: &ServerConfig) -> std::io::Result<Server> {
    let repository: Arc<dyn UserRepository> = if config.seed_demo_data {
        Arc::new(MemoryUserRepository::with_demo_data())
    } else {
        Arc::new(MemoryUserRepository::new())
    };
    let state = web::Data::new(HttpState::new(repository));
    let health_state = web::Data::new(HealthState::new());

    let server_state = state.clone();
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
