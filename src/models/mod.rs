pub mod client;
pub mod date_input;
pub mod policy;
pub mod response;

use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::ServiceError;

/// Translates a failed insert/update into the service error taxonomy.
///
/// Constraint violations become client errors; anything else is logged and
/// reported as an internal error carrying the driver message as detail.
pub(crate) fn map_write_error(err: DieselError, action: &str, tag: &'static str) -> ServiceError {
    log::error!("Failed to {}: {}", action, err);
    if let DieselError::DatabaseError(kind, info) = &err {
        let constraint = info.constraint_name().map(str::to_owned);
        let detail = info.details().map(str::to_owned);
        let base_message = info.message().to_string();

        let mut service_error = match kind {
            DatabaseErrorKind::UniqueViolation => ServiceError::conflict(base_message),
            DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::NotNullViolation => ServiceError::bad_request(base_message),
            DatabaseErrorKind::SerializationFailure => ServiceError::internal_server_error(
                format!("Failed to {} due to concurrent access", action),
            ),
            _ => ServiceError::internal_server_error(format!("Failed to {}", action)),
        };

        if let Some(details) = detail {
            service_error = service_error.with_context(|ctx| ctx.with_detail(details));
        }

        if let Some(constraint_name) = constraint {
            service_error = service_error
                .with_context(|ctx| ctx.with_metadata("constraint", constraint_name));
        }

        return service_error.with_tag(tag);
    }

    ServiceError::internal_server_error(format!("Failed to {}", action))
        .with_context(|ctx| ctx.with_tag(tag).with_detail(err.to_string()))
}

/// Translates a failed read, mapping a missing row to `NotFound`.
pub(crate) fn map_read_error(
    err: DieselError,
    not_found_message: impl FnOnce() -> String,
    action: &str,
    tag: &'static str,
) -> ServiceError {
    match err {
        DieselError::NotFound => ServiceError::not_found(not_found_message()).with_tag(tag),
        _ => {
            log::error!("Failed to {}: {}", action, err);
            ServiceError::internal_server_error(format!("Failed to {}", action))
                .with_context(|ctx| ctx.with_tag(tag).with_detail(err.to_string()))
        }
    }
}
