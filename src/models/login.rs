//! Login credentials

use serde::{Deserialize, Serialize};

/// A login account. The password is only ever held in obfuscated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    /// Unique identifier, conventionally an email address
    pub user_id: String,

    /// Password ciphertext, see [`crate::crypto::XorCipher`]
    #[serde(skip_serializing)]
    #[serde(default)]
    pub password_enc: String,

    /// Free-text role, e.g. "professor"
    pub role: String,
}

impl LoginUser {
    pub fn new(
        user_id: impl Into<String>,
        password_enc: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            password_enc: password_enc.into(),
            role: role.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_omits_ciphertext() {
        let user = LoginUser::new("kapil@mycsu.edu", "FA0=", "professor");
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("kapil@mycsu.edu"));
        assert!(!json.contains("FA0="));
        assert!(!json.contains("password"));
    }
}
