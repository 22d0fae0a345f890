//! Functional Patterns for the Service Layer
//!
//! Database work is described as a [`QueryReader`]: a deferred computation
//! over a connection. Services build readers after validation succeeds and
//! controllers decide where and when to run them.

use crate::{
    config::db::{Connection, Pool},
    error::{ServiceError, ServiceResult},
};

/// Composable query operations using the Reader monad pattern
///
/// This allows building complex database operations from smaller, composable pieces
/// without explicitly passing the connection around.
pub struct QueryReader<T> {
    run: Box<dyn Fn(&mut Connection) -> ServiceResult<T> + Send + Sync>,
}

impl<T> QueryReader<T> {
    /// Create a new QueryReader from a function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Connection) -> ServiceResult<T> + Send + Sync + 'static,
    {
        Self { run: Box::new(f) }
    }

    /// Execute the query with the provided connection
    pub fn run(&self, conn: &mut Connection) -> ServiceResult<T> {
        (self.run)(conn)
    }

    /// Map the result of this query to a new type
    pub fn map<U, F>(self, f: F) -> QueryReader<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        T: 'static,
    {
        QueryReader::new(move |conn| self.run(conn).map(&f))
    }
}

/// Execute a QueryReader with a database pool
pub fn run_query<T>(reader: QueryReader<T>, pool: &Pool) -> ServiceResult<T> {
    pool.get()
        .map_err(|e| {
            ServiceError::internal_server_error(format!("Failed to get database connection: {}", e))
        })
        .and_then(|mut conn| reader.run(&mut conn))
}
