//! Service error type
//!
//! Every fallible operation in the service and persistence layers returns
//! [`ServiceResult`]. Errors carry an [`ErrorContext`] (tags, detail, metadata)
//! that is logged but never sent to the caller; the HTTP mapping lives in the
//! [`ResponseError`] implementation.

use std::collections::BTreeMap;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::{json, Value as JsonValue};
use thiserror::Error;

use crate::{
    constants, functional::validation_engine::ValidationErrors, models::response::ResponseBody,
};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Diagnostic context attached to a [`ServiceError`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    pub tags: Vec<String>,
    pub detail: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

impl ErrorContext {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{error_message}")]
    BadRequest {
        error_message: String,
        context: ErrorContext,
    },

    #[error("{error_message}")]
    NotFound {
        error_message: String,
        context: ErrorContext,
    },

    #[error("{error_message}")]
    Conflict {
        error_message: String,
        context: ErrorContext,
    },

    #[error("{error_message}")]
    InternalServerError {
        error_message: String,
        context: ErrorContext,
    },

    #[error("validation failed: {errors}")]
    ValidationFailed {
        errors: ValidationErrors,
        context: ErrorContext,
    },
}

impl ServiceError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ServiceError::BadRequest {
            error_message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::NotFound {
            error_message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ServiceError::Conflict {
            error_message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ServiceError::InternalServerError {
            error_message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn validation(errors: ValidationErrors) -> Self {
        ServiceError::ValidationFailed {
            errors,
            context: ErrorContext::default(),
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            ServiceError::BadRequest { context, .. }
            | ServiceError::NotFound { context, .. }
            | ServiceError::Conflict { context, .. }
            | ServiceError::InternalServerError { context, .. }
            | ServiceError::ValidationFailed { context, .. } => context,
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            ServiceError::BadRequest { context, .. }
            | ServiceError::NotFound { context, .. }
            | ServiceError::Conflict { context, .. }
            | ServiceError::InternalServerError { context, .. }
            | ServiceError::ValidationFailed { context, .. } => context,
        }
    }

    /// Rewrites the attached context with `f`.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ErrorContext) -> ErrorContext,
    {
        let ctx = std::mem::take(self.context_mut());
        *self.context_mut() = f(ctx);
        self
    }

    pub fn with_tag(self, tag: impl Into<String>) -> Self {
        self.with_context(|ctx| ctx.with_tag(tag))
    }

    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        self.with_context(|ctx| ctx.with_detail(detail))
    }

    /// Field failures when this is a validation error.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ServiceError::ValidationFailed { errors, .. } => Some(errors),
            _ => None,
        }
    }

    fn client_message(&self) -> String {
        match self {
            ServiceError::InternalServerError { .. } => {
                constants::MESSAGE_INTERNAL_SERVER_ERROR.to_string()
            }
            ServiceError::ValidationFailed { .. } => {
                constants::MESSAGE_VALIDATION_FAILED.to_string()
            }
            ServiceError::BadRequest { error_message, .. }
            | ServiceError::NotFound { error_message, .. }
            | ServiceError::Conflict { error_message, .. } => error_message.clone(),
        }
    }

    fn client_data(&self) -> JsonValue {
        match self {
            ServiceError::ValidationFailed { errors, .. } => json!(errors),
            _ => json!(constants::EMPTY),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest { .. } | ServiceError::ValidationFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Conflict { .. } => StatusCode::CONFLICT,
            ServiceError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let ctx = self.context();
        if self.status_code().is_server_error() {
            log::error!(
                "{} (tags: {:?}, detail: {:?}, metadata: {:?})",
                self,
                ctx.tags,
                ctx.detail,
                ctx.metadata
            );
        } else {
            log::debug!("{} (tags: {:?})", self, ctx.tags);
        }

        HttpResponse::build(self.status_code())
            .json(ResponseBody::new(&self.client_message(), self.client_data()))
    }
}
