//! Client Module
//!
//! Persisted client rows, their insert/update shapes, and the transfer
//! objects exchanged over HTTP.

use crate::models::date_input;
use crate::schema::clients;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = clients)]
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = clients)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
}

/// Full replacement of the mutable columns; `id` and `created_at` never change.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = clients)]
#[diesel(treat_none_as_null = true)]
pub struct ClientChangeset {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
}

/// Candidate payload for `POST /api/client`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreateClientDTO {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "date_input::deserialize_optional")]
    pub date_of_birth: Option<NaiveDate>,
}

/// Candidate payload for `PUT /api/client/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateClientDTO {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "date_input::deserialize_optional")]
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientDTO {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<Client> for ClientDTO {
    fn from(client: Client) -> Self {
        ClientDTO {
            id: client.id,
            first_name: client.first_name,
            last_name: client.last_name,
            email: client.email,
            phone: client.phone,
            date_of_birth: client.date_of_birth,
            created_at: client.created_at,
        }
    }
}

impl NewClient {
    /// Maps a validated candidate onto an insertable row.
    ///
    /// Returns `None` when the date of birth is missing, which validation
    /// rejects before this point.
    pub fn from_dto(dto: CreateClientDTO) -> Option<Self> {
        Some(NewClient {
            date_of_birth: dto.date_of_birth?,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
        })
    }
}

impl ClientChangeset {
    pub fn from_dto(dto: UpdateClientDTO) -> Option<Self> {
        Some(ClientChangeset {
            date_of_birth: dto.date_of_birth?,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
        })
    }
}

pub mod operations;
pub mod validators;
