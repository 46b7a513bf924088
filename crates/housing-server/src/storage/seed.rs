//! First-run account seeding

use crate::error::Result;
use crate::repository::{Repository, Users};
use crate::storage::Database;
use housing_types::{ListFilter, NewUser};

/// (username, password, display name, role)
pub const DEFAULT_USERS: [(&str, &str, &str, &str); 3] = [
    ("admin", "admin123", "مدير النظام", "admin"),
    (
        "violations_officer",
        "violations123",
        "مسؤول المخالفات",
        "violations_officer",
    ),
    (
        "visitors_officer",
        "visitors123",
        "مسؤول الزوار",
        "visitors_officer",
    ),
];

/// Insert the default accounts when the users table is empty.
/// Returns the number of accounts created.
pub async fn seed_default_users(db: &Database) -> Result<usize> {
    let users = Repository::<Users>::new(db);

    if users.count(&ListFilter::default()).await? > 0 {
        tracing::debug!("Users already present, skipping seed");
        return Ok(0);
    }

    for (username, password, name, role) in DEFAULT_USERS {
        users
            .create(NewUser {
                username: username.to_string(),
                password: password.to_string(),
                name: name.to_string(),
                role: role.to_string(),
            })
            .await?;
    }
    tracing::info!("Seeded {} default users", DEFAULT_USERS.len());

    Ok(DEFAULT_USERS.len())
}
