//! Decision Server
//!
//! Serves the heuristic agent over HTTP with actix-web.
//!
//! ## Routes
//!
//! - `GET /health` — liveness probe
//! - `POST /get_action` — one decision for one game state

mod handlers;

pub use handlers::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use hpb_agent::Agent;
use hpb_agent::Estimator;
use hpb_agent::Policy;
use hpb_core::*;

/// Where and how wide to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: String::from(DEFAULT_BIND_ADDR),
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Registers the routes and the JSON extractor settings. The app must
/// also carry a `web::Data<Agent>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handlers::malformed))
        .route("/health", web::get().to(handlers::health))
        .route("/get_action", web::post().to(handlers::get_action));
}

#[rustfmt::skip]
pub async fn run(config: Config) -> Result<(), std::io::Error> {
    let agent = web::Data::new(Agent::new(Estimator, Policy));
    log::info!("starting decision server on {} with {} workers", config.bind, config.workers);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(agent.clone())
            .configure(configure)
    })
    .workers(config.workers)
    .bind(config.bind.as_str())?
    .run()
    .await
}
