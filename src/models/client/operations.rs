//! Persistence operations for clients
//!
//! Plain diesel statements against the `clients` table. Each function maps
//! driver errors into [`ServiceError`] so callers never see diesel types.

use diesel::prelude::*;

use crate::{
    config::db::Connection,
    error::ServiceError,
    models::{
        client::{Client, ClientChangeset, NewClient},
        map_read_error, map_write_error,
    },
    schema::clients::dsl::*,
};

const TAG: &str = "client";

fn not_found(client_id: i32) -> String {
    format!("Client with id {} not found", client_id)
}

/// Inserts a client; the store assigns `id` and `created_at`.
pub fn create_client(new_client: NewClient, conn: &mut Connection) -> Result<Client, ServiceError> {
    diesel::insert_into(clients)
        .values(new_client)
        .get_result::<Client>(conn)
        .map_err(|err| map_write_error(err, "create client", TAG))
}

/// Lists every client ordered by id.
pub fn find_all_clients(conn: &mut Connection) -> Result<Vec<Client>, ServiceError> {
    clients
        .order(id.asc())
        .load::<Client>(conn)
        .map_err(|err| map_read_error(err, String::new, "list clients", TAG))
}

/// `Err(ServiceError::NotFound)` if no client with the given id exists.
pub fn find_client_by_id(client_id: i32, conn: &mut Connection) -> Result<Client, ServiceError> {
    clients
        .filter(id.eq(client_id))
        .get_result::<Client>(conn)
        .map_err(|err| map_read_error(err, || not_found(client_id), "find client", TAG))
}

/// Overwrites the mutable columns of an existing client.
pub fn update_client(
    client_id: i32,
    changes: ClientChangeset,
    conn: &mut Connection,
) -> Result<Client, ServiceError> {
    diesel::update(clients.filter(id.eq(client_id)))
        .set(changes)
        .get_result::<Client>(conn)
        .map_err(|err| match err {
            diesel::result::Error::NotFound => {
                ServiceError::not_found(not_found(client_id)).with_tag(TAG)
            }
            _ => map_write_error(err, "update client", TAG),
        })
}

/// Deletes a client. Policies referencing it are left untouched.
pub fn delete_client(client_id: i32, conn: &mut Connection) -> Result<usize, ServiceError> {
    let deleted = diesel::delete(clients.filter(id.eq(client_id)))
        .execute(conn)
        .map_err(|err| map_write_error(err, "delete client", TAG))?;

    if deleted == 0 {
        Err(ServiceError::not_found(not_found(client_id)).with_tag(TAG))
    } else {
        Ok(deleted)
    }
}
