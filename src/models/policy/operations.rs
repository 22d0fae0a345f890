//! Persistence operations for policies
//!
//! Mirrors the client operations against the `policies` table. Creating a
//! policy does not look up the referenced client.

use diesel::prelude::*;

use crate::{
    config::db::Connection,
    error::ServiceError,
    models::{
        map_read_error, map_write_error,
        policy::{NewPolicy, Policy, PolicyChangeset},
    },
    schema::policies::dsl::*,
};

const TAG: &str = "policy";

fn not_found(policy_id: i32) -> String {
    format!("Policy with id {} not found", policy_id)
}

/// Inserts a policy; the store assigns `id` and `created_at`.
pub fn create_policy(new_policy: NewPolicy, conn: &mut Connection) -> Result<Policy, ServiceError> {
    diesel::insert_into(policies)
        .values(new_policy)
        .get_result::<Policy>(conn)
        .map_err(|err| map_write_error(err, "create policy", TAG))
}

pub fn find_all_policies(conn: &mut Connection) -> Result<Vec<Policy>, ServiceError> {
    policies
        .order(id.asc())
        .load::<Policy>(conn)
        .map_err(|err| map_read_error(err, String::new, "list policies", TAG))
}

/// `Err(ServiceError::NotFound)` if no policy with the given id exists.
pub fn find_policy_by_id(policy_id: i32, conn: &mut Connection) -> Result<Policy, ServiceError> {
    policies
        .filter(id.eq(policy_id))
        .get_result::<Policy>(conn)
        .map_err(|err| map_read_error(err, || not_found(policy_id), "find policy", TAG))
}

pub fn update_policy(
    policy_id: i32,
    changes: PolicyChangeset,
    conn: &mut Connection,
) -> Result<Policy, ServiceError> {
    diesel::update(policies.filter(id.eq(policy_id)))
        .set(changes)
        .get_result::<Policy>(conn)
        .map_err(|err| match err {
            diesel::result::Error::NotFound => {
                ServiceError::not_found(not_found(policy_id)).with_tag(TAG)
            }
            _ => map_write_error(err, "update policy", TAG),
        })
}

pub fn delete_policy(policy_id: i32, conn: &mut Connection) -> Result<usize, ServiceError> {
    let deleted = diesel::delete(policies.filter(id.eq(policy_id)))
        .execute(conn)
        .map_err(|err| map_write_error(err, "delete policy", TAG))?;

    if deleted == 0 {
        Err(ServiceError::not_found(not_found(policy_id)).with_tag(TAG))
    } else {
        Ok(deleted)
    }
}
