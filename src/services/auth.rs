//! Login service
//!
//! Registers users with an obfuscated password and checks credentials
//! against it. A ciphertext that fails to decode is a failed login, never
//! an error.

use serde_json::json;
use tracing::{debug, info};

use crate::audit::EntityType;
use crate::error::{GradeError, GradeResult};
use crate::models::LoginUser;
use crate::storage::Storage;

/// Service for login accounts
pub struct AuthService<'a> {
    storage: &'a mut Storage,
}

impl<'a> AuthService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Register a new user; the id must be non-empty and unused
    pub fn register_user(&mut self, user_id: &str, password: &str, role: &str) -> GradeResult<()> {
        if user_id.trim().is_empty() {
            return Err(GradeError::Validation("user_id must not be empty".into()));
        }

        if self.storage.logins.contains(user_id) {
            return Err(GradeError::Duplicate {
                entity_type: "User",
                identifier: user_id.to_string(),
            });
        }

        let user = LoginUser::new(user_id, self.storage.cipher().encrypt(password), role);
        self.storage.logins.push(user.clone());
        self.storage.logins.save()?;

        self.storage
            .log_create(EntityType::LoginUser, user_id, None, &user);

        info!(user_id, role, "Registered user");
        Ok(())
    }

    /// True iff the user exists and their stored password decrypts to `password`
    pub fn login(&self, user_id: &str, password: &str) -> bool {
        let Some(user) = self.storage.logins.find(user_id) else {
            debug!(user_id, "Login failed: unknown user");
            return false;
        };

        match self.storage.cipher().decrypt(&user.password_enc) {
            Ok(stored) => {
                let ok = stored == password;
                if !ok {
                    debug!(user_id, "Login failed: wrong password");
                }
                ok
            }
            Err(e) => {
                debug!(user_id, error = %e, "Login failed: stored password unreadable");
                false
            }
        }
    }

    /// Replace a user's password; false if the user doesn't exist
    pub fn change_password(&mut self, user_id: &str, new_password: &str) -> GradeResult<bool> {
        let password_enc = self.storage.cipher().encrypt(new_password);

        let Some(user) = self.storage.logins.find_mut(user_id) else {
            return Ok(false);
        };
        user.password_enc = password_enc;

        self.storage.logins.save()?;

        // Ciphertext stays out of the audit log; record only that it changed
        self.storage.log_update(
            EntityType::LoginUser,
            user_id,
            None,
            &json!({ "password_changed": false }),
            &json!({ "password_changed": true }),
        );

        info!(user_id, "Changed password");
        Ok(true)
    }

    pub fn get(&self, user_id: &str) -> Option<&LoginUser> {
        self.storage.logins.find(user_id)
    }

    pub fn list(&self) -> &[LoginUser] {
        self.storage.logins.rows()
    }
}
