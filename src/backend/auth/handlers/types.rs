/**
 * Authentication Handler Types
 *
 * Request and response bodies of the login route.
 */

use serde::{Deserialize, Serialize};

/// Login request
///
/// Both fields are optional at the JSON level so that a missing field is
/// answered with the same 401 as a wrong password.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    /// User's email address
    pub email: Option<String>,
    /// User's password (verified against the stored hash)
    pub password: Option<String>,
}

/// Token response returned by a successful login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// JWT bearer token
    pub access_token: String,
}
