//! Request/response DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON schema exactly (via serde renames
//! where it differs from Rust convention) so payloads round-trip without
//! translation tables.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Error envelope returned by every failing endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiError {
    #[serde(rename = "ErrorCode")]
    pub code: i64,
    #[serde(rename = "ErrorMessageJP")]
    pub message_jp: String,
    #[serde(rename = "ErrorMessageEN")]
    pub message_en: String,
}

impl ApiError {
    /// Single display string for the UI: English message first, Japanese as
    /// fallback, then a generic message when the envelope carries neither.
    pub fn user_message(&self) -> String {
        if !self.message_en.is_empty() {
            self.message_en.clone()
        } else if !self.message_jp.is_empty() {
            self.message_jp.clone()
        } else {
            "The request failed".to_owned()
        }
    }
}

/// Minimal profile cached alongside the session token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserCreateRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserCreateResponse {
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SigninResponse {
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserGetResponse {
    pub name: String,
    #[serde(rename = "iconUrl", default)]
    pub icon_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserUpdateRequest {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserUpdateResponse {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IconUploadResponse {
    #[serde(rename = "iconUrl")]
    pub icon_url: String,
}

/// Payload for creating or updating a review.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BookCreateRequest {
    pub title: String,
    pub url: String,
    pub detail: String,
    pub review: String,
}

/// A review as returned by the list/detail endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookData {
    pub id: String,
    pub title: String,
    pub url: String,
    pub detail: String,
    pub review: String,
    pub reviewer: String,
    #[serde(rename = "isMine", default)]
    pub is_mine: bool,
}
