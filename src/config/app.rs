use actix_web::{error::JsonPayloadError, web, HttpRequest};
use log::info;
use thiserror::Error;

use crate::{
    api::{client_controller, health_controller, policy_controller},
    constants,
    error::ServiceError,
    utils::logger::LogFormat,
};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Process settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub pool_max_size: u32,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match non_empty("APP_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "APP_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let pool_max_size = match non_empty("DB_POOL_MAX_SIZE") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DB_POOL_MAX_SIZE",
                        value,
                    })
                }
            },
            None => DEFAULT_POOL_MAX_SIZE,
        };

        let log_format = match non_empty("LOG_FORMAT") {
            Some(value) => value.parse::<LogFormat>().map_err(|_| ConfigError::Invalid {
                key: "LOG_FORMAT",
                value,
            })?,
            None => LogFormat::default(),
        };

        Ok(AppConfig {
            host: non_empty("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: non_empty("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            pool_max_size,
            log_format,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::bad_request(constants::MESSAGE_MALFORMED_REQUEST)
        .with_context(|ctx| ctx.with_tag("request").with_detail(err.to_string()))
        .into()
}

pub fn config_services(cfg: &mut web::ServiceConfig) {
    info!("Configuring routes...");
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health_controller::health)
        .service(
            web::scope(constants::CLIENT_SCOPE)
                .service(
                    web::resource("")
                        .route(web::get().to(client_controller::find_all))
                        .route(web::post().to(client_controller::insert)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(client_controller::find_by_id))
                        .route(web::put().to(client_controller::update))
                        .route(web::delete().to(client_controller::delete)),
                ),
        )
        .service(
            web::scope(constants::POLICY_SCOPE)
                .service(
                    web::resource("")
                        .route(web::get().to(policy_controller::find_all))
                        .route(web::post().to(policy_controller::insert)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(policy_controller::find_by_id))
                        .route(web::put().to(policy_controller::update))
                        .route(web::delete().to(policy_controller::delete)),
                ),
        );
}
