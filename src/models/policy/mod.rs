//! Policy Module
//!
//! Persisted policy rows, the closed set of policy types, and the transfer
//! objects exchanged over HTTP.

use std::str::FromStr;

use crate::models::date_input;
use crate::schema::policies;
use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kinds of coverage a policy may carry. Parsing ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum PolicyType {
    Health,
    Car,
    Home,
    Life,
    Travel,
    Property,
    Liability,
}

impl PolicyType {
    pub const ALL: [PolicyType; 7] = [
        PolicyType::Health,
        PolicyType::Car,
        PolicyType::Home,
        PolicyType::Life,
        PolicyType::Travel,
        PolicyType::Property,
        PolicyType::Liability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Health => "Health",
            PolicyType::Car => "Car",
            PolicyType::Home => "Home",
            PolicyType::Life => "Life",
            PolicyType::Travel => "Travel",
            PolicyType::Property => "Property",
            PolicyType::Liability => "Liability",
        }
    }

    pub fn names() -> [&'static str; 7] {
        PolicyType::ALL.map(|t| t.as_str())
    }

    /// Canonical spelling of `value` if it names a known type.
    pub fn canonicalize(value: &str) -> Option<&'static str> {
        value.parse::<PolicyType>().ok().map(|t| t.as_str())
    }
}

impl FromStr for PolicyType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        PolicyType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("unknown policy type '{}'", value))
    }
}

#[derive(Queryable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = policies)]
pub struct Policy {
    pub id: i32,
    pub client_id: i32,
    pub policy_number: String,
    pub policy_type: String,
    pub premium_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = policies)]
pub struct NewPolicy {
    pub client_id: i32,
    pub policy_number: String,
    pub policy_type: String,
    pub premium_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

/// Full replacement of the mutable columns; `id`, `client_id` and
/// `created_at` never change.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = policies)]
pub struct PolicyChangeset {
    pub policy_number: String,
    pub policy_type: String,
    pub premium_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

/// Candidate payload for `POST /api/policy`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreatePolicyDTO {
    #[serde(default)]
    pub client_id: i32,
    #[serde(default)]
    pub policy_number: String,
    #[serde(default)]
    pub policy_type: String,
    #[serde(default)]
    pub premium_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "date_input::deserialize_optional")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date_input::deserialize_optional")]
    pub end_date: Option<NaiveDate>,
}

/// Candidate payload for `PUT /api/policy/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdatePolicyDTO {
    #[serde(default)]
    pub policy_number: String,
    #[serde(default)]
    pub policy_type: String,
    #[serde(default)]
    pub premium_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "date_input::deserialize_optional")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date_input::deserialize_optional")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PolicyDTO {
    pub id: i32,
    pub client_id: i32,
    pub policy_number: String,
    pub policy_type: String,
    pub premium_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Policy> for PolicyDTO {
    fn from(policy: Policy) -> Self {
        PolicyDTO {
            id: policy.id,
            client_id: policy.client_id,
            policy_number: policy.policy_number,
            policy_type: policy.policy_type,
            premium_amount: policy.premium_amount,
            start_date: policy.start_date,
            end_date: policy.end_date,
            is_active: policy.is_active,
            created_at: policy.created_at,
        }
    }
}

fn canonical_type(value: String) -> String {
    PolicyType::canonicalize(&value)
        .map(str::to_string)
        .unwrap_or(value)
}

impl NewPolicy {
    /// Maps a validated candidate onto an insertable row; new policies start active.
    pub fn from_dto(dto: CreatePolicyDTO) -> Option<Self> {
        Some(NewPolicy {
            client_id: dto.client_id,
            premium_amount: dto.premium_amount?,
            start_date: dto.start_date?,
            end_date: dto.end_date?,
            policy_number: dto.policy_number,
            policy_type: canonical_type(dto.policy_type),
            is_active: true,
        })
    }
}

impl PolicyChangeset {
    pub fn from_dto(dto: UpdatePolicyDTO) -> Option<Self> {
        Some(PolicyChangeset {
            premium_amount: dto.premium_amount?,
            start_date: dto.start_date?,
            end_date: dto.end_date?,
            policy_number: dto.policy_number,
            policy_type: canonical_type(dto.policy_type),
            is_active: dto.is_active,
        })
    }
}

pub mod operations;
pub mod validators;
