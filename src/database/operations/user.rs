// 用户账号存储操作

use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::user::UserAccount;
use crate::error::StoreError;
use crate::utils::{hash_password, verify_password};

#[derive(Clone)]
pub struct UserOperation {
    pool: SqlitePool,
    hash_cost: u32,
}

impl UserOperation {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// 注册用户，用户名重复时返回 DuplicateUsername
    pub async fn register_user(&self, username: &str, password: &str) -> Result<i64, StoreError> {
        let password_hash = hash_password(password, self.hash_cost)?;

        let result = sqlx::query_as::<_, (i64,)>(
            r#"
            INSERT INTO users (username, password_hash, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok((user_id,)) => {
                tracing::info!("Registered user {} ({})", username, user_id);
                Ok(user_id)
            }
            Err(e) => {
                let err = StoreError::from(e);
                if !matches!(err, StoreError::DuplicateUsername) {
                    tracing::error!("Failed to register user {}: {:?}", username, err);
                }
                Err(err)
            }
        }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, StoreError> {
        let user = sqlx::query_as::<_, UserAccount>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// 校验用户名和密码，成功时返回账号
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserAccount>, StoreError> {
        let Some(user) = self.find_by_username(username).await? else {
            return Ok(None);
        };

        if verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_pool, create_schema};

    async fn users() -> UserOperation {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        create_schema(&pool).await.unwrap();
        UserOperation::new(pool).with_hash_cost(4)
    }

    #[tokio::test]
    async fn duplicate_username_is_distinguished() {
        let store = users().await;
        store.register_user("alice", "p1").await.unwrap();

        let err = store.register_user("alice", "p2").await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUsername));
    }

    #[tokio::test]
    async fn authenticate_checks_password() {
        let store = users().await;
        let id = store.register_user("alice", "p1").await.unwrap();

        let user = store.authenticate("alice", "p1").await.unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_ne!(user.password_hash, "p1");

        assert!(store.authenticate("alice", "wrong").await.unwrap().is_none());
        assert!(store.authenticate("bob", "p1").await.unwrap().is_none());
    }
}
