use actix_cors::Cors;
use actix_web::{http, web, App, HttpServer};
use log::{error, info};
use tracing_actix_web::TracingLogger;

use insurance_admin::{
    config::{self, app::AppConfig},
    utils::logger,
};

fn to_io_error(message: String) -> std::io::Error {
    error!("{}", message);
    std::io::Error::new(std::io::ErrorKind::Other, message)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let app_config = AppConfig::from_env();
    logger::init_logging(
        app_config
            .as_ref()
            .map(|c| c.log_format)
            .unwrap_or_else(|_| logger::LogFormat::from_env_or_default()),
    );
    let app_config = app_config.map_err(|e| to_io_error(e.to_string()))?;

    let pool = config::db::init_db_pool_with_size(&app_config.database_url, app_config.pool_max_size)
        .map_err(|e| to_io_error(format!("Failed to create database pool: {}", e)))?;

    {
        let mut conn = pool
            .get()
            .map_err(|e| to_io_error(format!("Failed to get database connection: {}", e)))?;
        config::db::run_migration(&mut conn).map_err(to_io_error)?;
    }

    let (host, port) = app_config.bind_address();
    info!("Starting server at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
                    .allowed_header(http::header::CONTENT_TYPE)
                    .max_age(3600),
            )
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(config::app::config_services)
    })
    .bind((host, port))?
    .run()
    .await
}
