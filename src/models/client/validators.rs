use chrono::NaiveDate;

use crate::{
    functional::{
        calendar,
        validation_engine::ValidationErrors,
        validation_rules::{self, PHONE_REGEX},
    },
    models::client::{CreateClientDTO, UpdateClientDTO},
};

pub const NAME_MAX_LENGTH: usize = 100;
pub const EMAIL_MAX_LENGTH: usize = 200;
pub const PHONE_MAX_LENGTH: usize = 50;
pub const MAX_AGE_YEARS: u32 = 150;
pub const MIN_AGE_YEARS: i32 = 18;

/// Field view shared by the create and update payloads.
struct ClientFields<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    date_of_birth: Option<NaiveDate>,
}

impl<'a> From<&'a CreateClientDTO> for ClientFields<'a> {
    fn from(dto: &'a CreateClientDTO) -> Self {
        ClientFields {
            first_name: &dto.first_name,
            last_name: &dto.last_name,
            email: &dto.email,
            phone: dto.phone.as_deref(),
            date_of_birth: dto.date_of_birth,
        }
    }
}

impl<'a> From<&'a UpdateClientDTO> for ClientFields<'a> {
    fn from(dto: &'a UpdateClientDTO) -> Self {
        ClientFields {
            first_name: &dto.first_name,
            last_name: &dto.last_name,
            email: &dto.email,
            phone: dto.phone.as_deref(),
            date_of_birth: dto.date_of_birth,
        }
    }
}

fn validate_name(errors: &mut ValidationErrors, field: &str, value: &str) {
    errors.record(validation_rules::required(field, value));
    errors.record(validation_rules::max_length(field, value, NAME_MAX_LENGTH));
}

fn validate_common(fields: &ClientFields<'_>, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    validate_name(&mut errors, "first_name", fields.first_name);
    validate_name(&mut errors, "last_name", fields.last_name);

    errors.record(validation_rules::required("email", fields.email));
    errors.record(validation_rules::email("email", fields.email));
    errors.record(validation_rules::max_length("email", fields.email, EMAIL_MAX_LENGTH));

    if let Some(phone) = fields.phone {
        if !phone.trim().is_empty() {
            errors.record(validation_rules::pattern(
                "phone",
                phone,
                &PHONE_REGEX,
                "phone format is invalid",
            ));
        }
        errors.record(validation_rules::max_length("phone", phone, PHONE_MAX_LENGTH));
    }

    match calendar::supplied(fields.date_of_birth) {
        None => errors.add("date_of_birth", "date_of_birth is required"),
        Some(dob) => {
            errors.check(dob < today, "date_of_birth", "date_of_birth must be in the past");
            errors.check(
                dob >= calendar::years_before(today, MAX_AGE_YEARS),
                "date_of_birth",
                format!(
                    "date_of_birth cannot be more than {} years in the past",
                    MAX_AGE_YEARS
                ),
            );
        }
    }

    errors
}

/// Rules for `POST /api/client`.
pub fn validate_create_client(dto: &CreateClientDTO, today: NaiveDate) -> ValidationErrors {
    validate_common(&ClientFields::from(dto), today)
}

/// Rules for `PUT /api/client/{id}`: the create rules plus the age floor.
pub fn validate_update_client(dto: &UpdateClientDTO, today: NaiveDate) -> ValidationErrors {
    let fields = ClientFields::from(dto);
    let mut errors = validate_common(&fields, today);

    if let Some(dob) = calendar::supplied(fields.date_of_birth) {
        errors.check(
            calendar::age_on(dob, today) >= MIN_AGE_YEARS,
            "date_of_birth",
            format!("client must be at least {} years old", MIN_AGE_YEARS),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 15)
    }

    fn valid_create() -> CreateClientDTO {
        CreateClientDTO {
            first_name: "Maria".into(),
            last_name: "Oliveira".into(),
            email: "maria.oliveira@example.com".into(),
            phone: Some("+55 (11) 98765-4321".into()),
            date_of_birth: Some(date(1985, 3, 20)),
        }
    }

    fn valid_update() -> UpdateClientDTO {
        let dto = valid_create();
        UpdateClientDTO {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            date_of_birth: dto.date_of_birth,
        }
    }

    #[test]
    fn test_valid_create_client_passes() {
        assert!(validate_create_client(&valid_create(), today()).is_empty());
    }

    #[test]
    fn test_phone_is_optional() {
        let mut dto = valid_create();
        dto.phone = None;
        assert!(validate_create_client(&dto, today()).is_empty());

        dto.phone = Some("   ".into());
        assert!(validate_create_client(&dto, today()).is_empty());
    }

    #[test]
    fn test_invalid_phone_reports_format_and_length() {
        let mut dto = valid_create();
        dto.phone = Some("call me maybe".into());
        let errors = validate_create_client(&dto, today());
        assert_eq!(errors.field("phone"), ["phone format is invalid"]);

        dto.phone = Some(format!("+{}", "1".repeat(50)));
        let errors = validate_create_client(&dto, today());
        assert_eq!(
            errors.field("phone"),
            ["phone must be no more than 50 characters long"]
        );
    }

    #[test]
    fn test_blank_names_and_email_accumulate() {
        let mut dto = valid_create();
        dto.first_name = "  ".into();
        dto.last_name = String::new();
        dto.email = String::new();

        let errors = validate_create_client(&dto, today());
        assert_eq!(errors.field("first_name"), ["first_name is required"]);
        assert_eq!(errors.field("last_name"), ["last_name is required"]);
        assert_eq!(
            errors.field("email"),
            ["email is required", "email must be a valid email address"]
        );
    }

    #[test]
    fn test_length_limits() {
        let mut dto = valid_create();
        dto.first_name = "a".repeat(101);
        dto.email = format!("{}@example.com", "a".repeat(190));

        let errors = validate_create_client(&dto, today());
        assert!(errors.has_message(
            "first_name",
            "first_name must be no more than 100 characters long"
        ));
        assert!(errors.has_message("email", "email must be no more than 200 characters long"));
    }

    #[test]
    fn test_date_of_birth_today_or_future_fails() {
        for dob in [today(), date(2025, 6, 16), date(2030, 1, 1)] {
            let mut dto = valid_create();
            dto.date_of_birth = Some(dob);
            let errors = validate_create_client(&dto, today());
            assert!(errors.has_message("date_of_birth", "date_of_birth must be in the past"));
        }
    }

    #[test]
    fn test_date_of_birth_older_than_150_years_fails() {
        let mut dto = valid_create();
        dto.date_of_birth = Some(date(1875, 6, 15));
        assert!(validate_create_client(&dto, today()).is_empty());

        dto.date_of_birth = Some(date(1875, 6, 14));
        let errors = validate_create_client(&dto, today());
        assert!(errors.has_message(
            "date_of_birth",
            "date_of_birth cannot be more than 150 years in the past"
        ));
    }

    #[test]
    fn test_missing_or_sentinel_date_of_birth_is_required() {
        let mut dto = valid_create();
        dto.date_of_birth = None;
        assert_eq!(
            validate_create_client(&dto, today()).field("date_of_birth"),
            ["date_of_birth is required"]
        );

        dto.date_of_birth = Some(calendar::sentinel_date());
        assert_eq!(
            validate_create_client(&dto, today()).field("date_of_birth"),
            ["date_of_birth is required"]
        );
    }

    #[test]
    fn test_create_has_no_age_floor() {
        let mut dto = valid_create();
        dto.date_of_birth = Some(date(2020, 1, 1));
        assert!(validate_create_client(&dto, today()).is_empty());
    }

    #[test]
    fn test_update_age_floor_boundary() {
        let mut dto = valid_update();

        dto.date_of_birth = Some(date(2007, 6, 15));
        assert!(validate_update_client(&dto, today()).is_empty());

        dto.date_of_birth = Some(date(2007, 6, 16));
        let errors = validate_update_client(&dto, today());
        assert_eq!(
            errors.field("date_of_birth"),
            ["client must be at least 18 years old"]
        );
    }

    #[test]
    fn test_update_future_birth_reports_both_rules() {
        let mut dto = valid_update();
        dto.date_of_birth = Some(date(2026, 1, 1));
        let errors = validate_update_client(&dto, today());
        assert_eq!(
            errors.field("date_of_birth"),
            [
                "date_of_birth must be in the past",
                "client must be at least 18 years old"
            ]
        );
    }

    #[test]
    fn test_validation_is_repeatable() {
        let mut dto = valid_update();
        dto.email = "broken".into();
        dto.date_of_birth = Some(date(2010, 1, 1));
        assert_eq!(
            validate_update_client(&dto, today()),
            validate_update_client(&dto, today())
        );
    }
}
