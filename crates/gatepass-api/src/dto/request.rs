//! Request DTOs with validation.
//!
//! Field names follow the document casing clients already send
//! (`phoneNumber`, `icNumber`, `recordID`).

use serde::{Deserialize, Serialize};
use validator::Validate;

use gatepass_service::{IssuePassRequest, RegisterAccountRequest, RegisterAdminRequest};

/// Login request body, shared by both login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin registration body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAdminBody {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone_number: String,
}

impl From<RegisterAdminBody> for RegisterAdminRequest {
    fn from(body: RegisterAdminBody) -> Self {
        Self {
            username: body.username,
            password: body.password,
            name: body.name,
            email: body.email,
            phone_number: body.phone_number,
        }
    }
}

/// Security or visitor registration body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterAccountBody {
    /// Username (security accounts).
    pub username: Option<String>,
    /// Password (security accounts).
    pub password: Option<String>,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Phone number.
    pub phone_number: String,
    /// Vehicle number (visitors).
    pub vehicle_number: Option<String>,
    /// Identity card number (visitors).
    pub ic_number: Option<String>,
}

impl From<RegisterAccountBody> for RegisterAccountRequest {
    fn from(body: RegisterAccountBody) -> Self {
        Self {
            username: body.username,
            password: body.password,
            name: body.name,
            email: body.email,
            phone_number: body.phone_number,
            vehicle_number: body.vehicle_number,
            ic_number: body.ic_number,
        }
    }
}

/// Visitor pass body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct IssuePassBody {
    /// Visitor name; defaults to the caller's name.
    pub name: Option<String>,
    /// Identity card number.
    pub ic_number: String,
    /// Physical pass identifier.
    pub pass_identifier: String,
    /// Host phone number.
    pub host_number: String,
    /// Host username.
    pub host_username: String,
    /// Record identifier.
    #[serde(rename = "recordID")]
    pub record_id: String,
    /// Purpose of the visit.
    pub purpose: String,
}

impl From<IssuePassBody> for IssuePassRequest {
    fn from(body: IssuePassBody) -> Self {
        Self {
            name: body.name,
            ic_number: body.ic_number,
            pass_identifier: body.pass_identifier,
            host_number: body.host_number,
            host_username: body.host_username,
            record_id: body.record_id,
            purpose: body.purpose,
        }
    }
}
