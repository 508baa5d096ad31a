use serde::{Deserialize, Serialize};

use super::repo::User;

/// Request body for registration and login.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response returned after registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: User,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_shape() {
        let json = serde_json::to_value(LoginResponse {
            message: "Login successful",
            token: "abc".into(),
        })
        .expect("serialize");
        assert_eq!(json["message"], "Login successful");
        assert_eq!(json["token"], "abc");
    }

    #[test]
    fn register_response_includes_hash() {
        let json = serde_json::to_value(RegisterResponse {
            message: "User registered successfully",
            user: User {
                id: 1,
                username: "alice".into(),
                password: "$argon2id$stub".into(),
            },
        })
        .expect("serialize");
        assert_eq!(json["user"]["username"], "alice");
        assert_eq!(json["user"]["password"], "$argon2id$stub");
    }
}
