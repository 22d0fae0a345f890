use actix_web::web;

use crate::{
    config::db::Pool,
    error::ServiceError,
    services::functional_patterns::{run_query, QueryReader},
};

/// Pool handle shared by the controllers.
///
/// Readers are executed on actix's blocking thread pool so diesel never runs
/// on the async executor.
#[derive(Clone)]
pub struct DatabaseContext {
    pool: web::Data<Pool>,
}

impl DatabaseContext {
    pub fn new(pool: web::Data<Pool>) -> Self {
        Self { pool }
    }

    pub fn with_pool(pool: Pool) -> Self {
        Self {
            pool: web::Data::new(pool),
        }
    }

    pub fn pool(&self) -> &Pool {
        self.pool.get_ref()
    }

    pub async fn run_query<T>(&self, reader: QueryReader<T>) -> Result<T, ServiceError>
    where
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        web::block(move || run_query(reader, pool.get_ref()))
            .await
            .map_err(|e| {
                ServiceError::internal_server_error("Blocking task failed")
                    .with_context(|ctx| ctx.with_tag("database").with_detail(e.to_string()))
            })?
    }
}
