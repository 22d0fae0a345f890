use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    functional::{
        calendar,
        validation_engine::ValidationErrors,
        validation_rules::{self, POLICY_NUMBER_REGEX},
    },
    models::policy::{CreatePolicyDTO, PolicyType, UpdatePolicyDTO},
};

pub const POLICY_NUMBER_MAX_LENGTH: usize = 50;
pub const POLICY_TYPE_MAX_LENGTH: usize = 50;
pub const PREMIUM_SCALE: u32 = 2;
pub const MAX_TERM_YEARS: u32 = 10;
pub const START_LOOKBACK_DAYS: u64 = 30;
pub const ACTIVATION_WINDOW_DAYS: u64 = 90;

/// 999,999,999,999.99
pub fn max_premium() -> Decimal {
    Decimal::new(99_999_999_999_999, PREMIUM_SCALE)
}

struct PolicyFields<'a> {
    policy_number: &'a str,
    policy_type: &'a str,
    premium_amount: Option<Decimal>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl<'a> From<&'a CreatePolicyDTO> for PolicyFields<'a> {
    fn from(dto: &'a CreatePolicyDTO) -> Self {
        PolicyFields {
            policy_number: &dto.policy_number,
            policy_type: &dto.policy_type,
            premium_amount: dto.premium_amount,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}

impl<'a> From<&'a UpdatePolicyDTO> for PolicyFields<'a> {
    fn from(dto: &'a UpdatePolicyDTO) -> Self {
        PolicyFields {
            policy_number: &dto.policy_number,
            policy_type: &dto.policy_type,
            premium_amount: dto.premium_amount,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}

fn validate_policy_number(errors: &mut ValidationErrors, value: &str) {
    errors.record(validation_rules::required("policy_number", value));
    errors.record(validation_rules::pattern(
        "policy_number",
        value,
        &POLICY_NUMBER_REGEX,
        "policy_number must be 5 to 50 uppercase letters, digits or hyphens",
    ));
    errors.record(validation_rules::max_length(
        "policy_number",
        value,
        POLICY_NUMBER_MAX_LENGTH,
    ));
}

fn validate_policy_type(errors: &mut ValidationErrors, value: &str) {
    errors.record(validation_rules::required("policy_type", value));
    errors.record(validation_rules::one_of_ignore_case(
        "policy_type",
        value,
        &PolicyType::names(),
    ));
    errors.record(validation_rules::max_length(
        "policy_type",
        value,
        POLICY_TYPE_MAX_LENGTH,
    ));
}

fn validate_premium(errors: &mut ValidationErrors, value: Option<Decimal>) {
    let Some(amount) = value else {
        errors.add("premium_amount", "premium_amount is required");
        return;
    };
    errors.record(validation_rules::positive("premium_amount", amount));
    errors.record(validation_rules::max_amount(
        "premium_amount",
        amount,
        max_premium(),
    ));
    errors.record(validation_rules::max_scale(
        "premium_amount",
        amount,
        PREMIUM_SCALE,
    ));
}

/// Term rules on the end date plus the two independent cross-field checks.
fn validate_term(errors: &mut ValidationErrors, start: NaiveDate, end: NaiveDate) {
    errors.check(end > start, "end_date", "end_date must be after start_date");
    errors.check(
        end > calendar::days_after(start, 1),
        "end_date",
        "end_date must be at least 1 full day after start_date",
    );
    errors.check(
        end <= calendar::years_after(start, MAX_TERM_YEARS),
        "end_date",
        format!("policy term cannot exceed {} years", MAX_TERM_YEARS),
    );

    errors.check(start < end, "start_date", "start_date must be before end_date");
    errors.check(
        start != end,
        "start_date",
        "start_date and end_date cannot be the same",
    );
}

fn validate_common(fields: &PolicyFields<'_>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    validate_policy_number(&mut errors, fields.policy_number);
    validate_policy_type(&mut errors, fields.policy_type);
    validate_premium(&mut errors, fields.premium_amount);

    let start = calendar::supplied(fields.start_date);
    let end = calendar::supplied(fields.end_date);
    if start.is_none() {
        errors.add("start_date", "start_date is required");
    }
    if end.is_none() {
        errors.add("end_date", "end_date is required");
    }
    if let (Some(start), Some(end)) = (start, end) {
        validate_term(&mut errors, start, end);
    }

    errors
}

/// Rules for `POST /api/policy`.
///
/// `client_id` is only checked for shape; the referenced client may not exist.
pub fn validate_create_policy(dto: &CreatePolicyDTO, today: NaiveDate) -> ValidationErrors {
    let fields = PolicyFields::from(dto);
    let mut errors = ValidationErrors::new();

    errors.check(
        dto.client_id > 0,
        "client_id",
        "client_id must be a positive integer",
    );
    errors.merge(validate_common(&fields));

    if let Some(start) = calendar::supplied(fields.start_date) {
        errors.check(
            start >= calendar::days_before(today, START_LOOKBACK_DAYS),
            "start_date",
            format!(
                "start_date cannot be more than {} days in the past",
                START_LOOKBACK_DAYS
            ),
        );
    }

    errors
}

/// Rules for `PUT /api/policy/{id}`, including the activation window.
pub fn validate_update_policy(dto: &UpdatePolicyDTO, today: NaiveDate) -> ValidationErrors {
    let fields = PolicyFields::from(dto);
    let mut errors = validate_common(&fields);

    if dto.is_active {
        if let Some(start) = calendar::supplied(fields.start_date) {
            errors.check(
                start <= calendar::days_after(today, ACTIVATION_WINDOW_DAYS),
                "is_active",
                format!(
                    "an active policy cannot start more than {} days in the future",
                    ACTIVATION_WINDOW_DAYS
                ),
            );
        }
        if let Some(end) = calendar::supplied(fields.end_date) {
            errors.check(
                end >= today,
                "is_active",
                "an active policy cannot have already ended",
            );
        }
    }

    errors
}
