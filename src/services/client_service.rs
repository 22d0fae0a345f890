//! Client Service - Functional Patterns for Client Operations
//!
//! Validates candidates against the client rule sets, then hands back a
//! QueryReader describing the persistence work. Nothing touches the database
//! until the reader is run, so a rejected candidate never reaches storage.

use chrono::NaiveDate;

use crate::{
    config::db::Pool,
    error::{ServiceError, ServiceResult},
    models::client::{
        operations as client_ops, validators as client_validators, ClientChangeset, ClientDTO,
        CreateClientDTO, NewClient, UpdateClientDTO,
    },
    services::functional_patterns::{self, QueryReader},
};

fn reject(errors: crate::functional::validation_engine::ValidationErrors) -> ServiceError {
    log::debug!("Client candidate rejected: {}", errors);
    ServiceError::validation(errors).with_tag("client")
}

/// Build a QueryReader for listing all clients
pub fn list_clients_reader() -> QueryReader<Vec<ClientDTO>> {
    QueryReader::new(client_ops::find_all_clients)
        .map(|clients| clients.into_iter().map(ClientDTO::from).collect())
}

/// Build a QueryReader for finding a client by ID
pub fn find_client_by_id_reader(client_id: i32) -> QueryReader<ClientDTO> {
    QueryReader::new(move |conn| client_ops::find_client_by_id(client_id, conn))
        .map(ClientDTO::from)
}

/// Validate a create candidate and build the insert reader.
pub fn create_client_reader(
    dto: CreateClientDTO,
    today: NaiveDate,
) -> Result<QueryReader<ClientDTO>, ServiceError> {
    client_validators::validate_create_client(&dto, today)
        .into_result()
        .map_err(reject)?;

    let new_client = NewClient::from_dto(dto)
        .ok_or_else(|| ServiceError::bad_request("date_of_birth is required").with_tag("client"))?;

    Ok(QueryReader::new(move |conn| {
        client_ops::create_client(new_client.clone(), conn)
    })
    .map(ClientDTO::from))
}

/// Validate an update candidate and build the update reader.
///
/// Validation runs before the existence check, so an invalid payload for a
/// missing id reports the validation failure.
pub fn update_client_reader(
    client_id: i32,
    dto: UpdateClientDTO,
    today: NaiveDate,
) -> Result<QueryReader<ClientDTO>, ServiceError> {
    client_validators::validate_update_client(&dto, today)
        .into_result()
        .map_err(reject)?;

    let changes = ClientChangeset::from_dto(dto)
        .ok_or_else(|| ServiceError::bad_request("date_of_birth is required").with_tag("client"))?;

    Ok(QueryReader::new(move |conn| {
        client_ops::update_client(client_id, changes.clone(), conn)
    })
    .map(ClientDTO::from))
}

/// Build a QueryReader for deleting a client
pub fn delete_client_reader(client_id: i32) -> QueryReader<usize> {
    QueryReader::new(move |conn| client_ops::delete_client(client_id, conn))
}

/// Execute a QueryReader with a database pool (re-exported for convenience)
pub fn run_query<T>(reader: QueryReader<T>, pool: &Pool) -> ServiceResult<T> {
    functional_patterns::run_query(reader, pool)
}
