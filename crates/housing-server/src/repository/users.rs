use super::{require_text, Changes, Entity, Messages, Repository, SqlValue};
use crate::error::Result;
use crate::services::auth;
use chrono::{DateTime, Utc};
use housing_types::{NewUser, User, UserPatch};

pub struct Users;

/// Stored user row. Only [`User`] is ever serialized.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            username: r.username,
            name: r.name,
            role: r.role,
            created_at: r.created_at,
        }
    }
}

impl Entity for Users {
    const TABLE: &'static str = "users";
    const ROUTE: &'static str = "users";
    const LABEL: &'static str = "user";
    const COLUMNS: &'static [&'static str] =
        &["username", "password_hash", "name", "role", "created_at"];
    const MESSAGES: Messages = Messages {
        created: "تم إضافة المستخدم بنجاح",
        updated: "تم تحديث المستخدم بنجاح",
        deleted: "تم حذف المستخدم بنجاح",
    };

    type Record = UserRow;
    type View = User;
    type Create = NewUser;
    type Update = UserPatch;

    fn id(record: &UserRow) -> i64 {
        record.id
    }

    fn build(input: NewUser, now: DateTime<Utc>) -> Result<Vec<SqlValue>> {
        require_text("username", &input.username)?;
        require_text("password", &input.password)?;
        require_text("name", &input.name)?;
        require_text("role", &input.role)?;
        let password_hash = auth::hash_password(&input.password)?;

        Ok(vec![
            input.username.into(),
            password_hash.into(),
            input.name.into(),
            input.role.into(),
            now.into(),
        ])
    }

    /// An empty password leaves the stored hash alone
    fn changes(patch: UserPatch, _now: DateTime<Utc>) -> Result<Changes> {
        let password_hash = patch
            .password
            .filter(|p| !p.is_empty())
            .map(|p| auth::hash_password(&p))
            .transpose()?;

        Ok(Changes::new()
            .set_text("name", patch.name)?
            .set_text("role", patch.role)?
            .set("password_hash", password_hash))
    }
}

impl Repository<Users> {
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, name, role, created_at
            FROM users WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HousingError;
    use crate::storage::Database;
    use housing_types::ListFilter;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "secret-pass".to_string(),
            name: "Gate Officer".to_string(),
            role: "visitors_officer".to_string(),
        }
    }

    #[tokio::test]
    async fn password_is_stored_hashed() {
        let db = Database::in_memory().await.unwrap();
        let repo = Repository::<Users>::new(&db);

        let row = repo.create(new_user("gate")).await.unwrap();
        assert_ne!(row.password_hash, "secret-pass");
        assert!(auth::verify_password("secret-pass", &row.password_hash));
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let db = Database::in_memory().await.unwrap();
        let repo = Repository::<Users>::new(&db);
        repo.create(new_user("gate")).await.unwrap();

        let err = repo.create(new_user("gate")).await.unwrap_err();
        assert!(matches!(err, HousingError::Validation(_)));
        assert_eq!(repo.count(&ListFilter::default()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn empty_password_in_patch_keeps_existing_hash() {
        let db = Database::in_memory().await.unwrap();
        let repo = Repository::<Users>::new(&db);
        let row = repo.create(new_user("gate")).await.unwrap();

        let updated = repo
            .update(
                row.id,
                UserPatch {
                    role: Some("admin".to_string()),
                    password: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.role, "admin");
        assert_eq!(updated.name, row.name);
        assert_eq!(updated.password_hash, row.password_hash);

        let updated = repo
            .update(
                row.id,
                UserPatch {
                    password: Some("rotated".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(auth::verify_password("rotated", &updated.password_hash));
        assert_eq!(updated.role, "admin");
    }

    #[test]
    fn role_change_never_writes_the_password_column() {
        let changes = Users::changes(
            UserPatch {
                role: Some("admin".to_string()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(changes.columns(), ["role"]);

        let changes = Users::changes(
            UserPatch {
                password: Some("rotated".to_string()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(changes.columns(), ["password_hash"]);
    }

    #[tokio::test]
    async fn find_by_username_matches_exactly() {
        let db = Database::in_memory().await.unwrap();
        let repo = Repository::<Users>::new(&db);
        repo.create(new_user("gate")).await.unwrap();

        assert!(repo.find_by_username("gate").await.unwrap().is_some());
        assert!(repo.find_by_username("Gate").await.unwrap().is_none());
    }
}
