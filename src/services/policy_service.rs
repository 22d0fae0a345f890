//! Policy Service - Functional Patterns for Policy Operations

use chrono::NaiveDate;

use crate::{
    error::ServiceError,
    functional::validation_engine::ValidationErrors,
    models::policy::{
        operations as policy_ops, validators as policy_validators, CreatePolicyDTO, NewPolicy,
        PolicyChangeset, PolicyDTO, UpdatePolicyDTO,
    },
    services::functional_patterns::QueryReader,
};

fn reject(errors: ValidationErrors) -> ServiceError {
    log::debug!("Policy candidate rejected: {}", errors);
    ServiceError::validation(errors).with_tag("policy")
}

fn incomplete() -> ServiceError {
    ServiceError::bad_request("premium_amount, start_date and end_date are required")
        .with_tag("policy")
}

pub fn list_policies_reader() -> QueryReader<Vec<PolicyDTO>> {
    QueryReader::new(policy_ops::find_all_policies)
        .map(|rows| rows.into_iter().map(PolicyDTO::from).collect())
}

pub fn find_policy_by_id_reader(policy_id: i32) -> QueryReader<PolicyDTO> {
    QueryReader::new(move |conn| policy_ops::find_policy_by_id(policy_id, conn))
        .map(PolicyDTO::from)
}

/// Validate a create candidate and build the insert reader.
///
/// The referenced client is not looked up; `client_id` only has to be positive.
pub fn create_policy_reader(
    dto: CreatePolicyDTO,
    today: NaiveDate,
) -> Result<QueryReader<PolicyDTO>, ServiceError> {
    policy_validators::validate_create_policy(&dto, today)
        .into_result()
        .map_err(reject)?;

    let new_policy = NewPolicy::from_dto(dto).ok_or_else(incomplete)?;

    Ok(
        QueryReader::new(move |conn| policy_ops::create_policy(new_policy.clone(), conn))
            .map(PolicyDTO::from),
    )
}

/// Validate an update candidate and build the update reader.
pub fn update_policy_reader(
    policy_id: i32,
    dto: UpdatePolicyDTO,
    today: NaiveDate,
) -> Result<QueryReader<PolicyDTO>, ServiceError> {
    policy_validators::validate_update_policy(&dto, today)
        .into_result()
        .map_err(reject)?;

    let changes = PolicyChangeset::from_dto(dto).ok_or_else(incomplete)?;

    Ok(QueryReader::new(move |conn| {
        policy_ops::update_policy(policy_id, changes.clone(), conn)
    })
    .map(PolicyDTO::from))
}

pub fn delete_policy_reader(policy_id: i32) -> QueryReader<usize> {
    QueryReader::new(move |conn| policy_ops::delete_policy(policy_id, conn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    fn valid_create() -> CreatePolicyDTO {
        CreatePolicyDTO {
            client_id: 1,
            policy_number: "POL-2025-001".into(),
            policy_type: "health".into(),
            premium_amount: Some(dec!(150.00)),
            start_date: NaiveDate::from_ymd_opt(2025, 2, 1),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 1),
        }
    }

    #[test]
    fn test_valid_create_builds_reader() {
        assert!(create_policy_reader(valid_create(), today()).is_ok());
    }

    #[test]
    fn test_create_accumulates_every_failure() {
        let dto = CreatePolicyDTO {
            client_id: 0,
            policy_type: "Dental".into(),
            premium_amount: Some(dec!(-5)),
            ..valid_create()
        };

        let err = create_policy_reader(dto, today()).err().unwrap();
        let errors = err.validation_errors().unwrap();
        assert!(errors.has_message("client_id", "client_id must be a positive integer"));
        assert!(errors.field("policy_type").len() == 1);
        assert!(errors.has_message("premium_amount", "premium_amount must be greater than zero"));
        assert_eq!(err.context().tags, vec!["policy".to_string()]);
    }

    #[test]
    fn test_active_update_cannot_have_ended() {
        let dto = UpdatePolicyDTO {
            policy_number: "POL-2024-001".into(),
            policy_type: "Car".into(),
            premium_amount: Some(dec!(80)),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            is_active: true,
        };

        let err = update_policy_reader(9, dto.clone(), today()).err().unwrap();
        assert!(err
            .validation_errors()
            .unwrap()
            .has_message("is_active", "an active policy cannot have already ended"));

        let inactive = UpdatePolicyDTO {
            is_active: false,
            ..dto
        };
        assert!(update_policy_reader(9, inactive, today()).is_ok());
    }
}
