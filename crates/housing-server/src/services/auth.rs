//! Authentication service

use crate::error::{HousingError, Result};
use crate::repository::{Repository, Users};
use crate::storage::Database;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use housing_types::LoginUser;
use rand::rngs::OsRng;

/// Salted argon2 hash in PHC string format
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| HousingError::Password(e.to_string()))
}

/// False for a wrong password and for an unparsable stored hash
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash is invalid: {}", e);
            false
        }
    }
}

pub struct AuthService {
    users: Repository<Users>,
}

impl AuthService {
    pub fn new(db: &Database) -> Self {
        Self {
            users: Repository::new(db),
        }
    }

    /// Unknown users and wrong passwords both fail with [`HousingError::Auth`]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginUser> {
        let user = self.users.find_by_username(username).await?;

        if let Some(row) = user {
            if verify_password(password, &row.password_hash) {
                return Ok(LoginUser {
                    id: row.id,
                    username: row.username,
                    name: row.name,
                    role: row.role,
                });
            }
        }

        Err(HousingError::Auth)
    }
}
