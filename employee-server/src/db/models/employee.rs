//! Employee Model
//!
//! 线上 JSON 与内存记录之间的编解码。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::serde_helpers;
use crate::db::object_id::ObjectId;

/// Employee ID type
pub type EmployeeId = ObjectId;

/// Request body decode error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BodyError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Persisted employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub username: String,
    pub password: i64,
    pub skills: Vec<String>,
}

/// Employee as submitted by a client (create / update payload)
///
/// `id` is honoured on create only; updates address the record by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmployeeInput {
    #[serde(default, deserialize_with = "serde_helpers::option_object_id")]
    pub id: Option<EmployeeId>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub username: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub password: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub skills: Vec<String>,
}

/// The mutable part of an employee: document body on insert, `SET` list on update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub username: String,
    pub password: i64,
    pub skills: Vec<String>,
}

impl EmployeeInput {
    /// Decode a request body
    ///
    /// Only a JSON object is accepted; missing fields take their zero value.
    pub fn decode(bytes: &[u8]) -> Result<Self, BodyError> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| BodyError::InvalidBody(e.to_string()))?;
        if !value.is_object() {
            return Err(BodyError::InvalidBody("expected a JSON object".to_string()));
        }
        serde_json::from_value(value).map_err(|e| BodyError::InvalidBody(e.to_string()))
    }

    /// Split into the optional identifier and the fields to persist
    pub fn into_parts(self) -> (Option<EmployeeId>, EmployeeFields) {
        (
            self.id,
            EmployeeFields {
                username: self.username,
                password: self.password,
                skills: self.skills,
            },
        )
    }
}

impl Employee {
    pub fn from_fields(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            username: fields.username,
            password: fields.password,
            skills: fields.skills,
        }
    }
}

/// `201 Created` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreated {
    pub id: EmployeeId,
}
