use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppResult;

use super::user_entity::UserEntity;
use super::user_repository_trait::UserRepository;

const USER_COLUMNS: &str = "id, first_name, last_name, email, password, cpf, phone";

#[derive(Clone)]
pub struct UserPgRepository {
    pool: PgPool,
}

impl UserPgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one_by(&self, column: &str, value: &str) -> AppResult<Option<UserEntity>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1");
        let user = sqlx::query_as::<_, UserEntity>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}

#[async_trait]
impl UserRepository for UserPgRepository {
    async fn list(&self) -> AppResult<Vec<UserEntity>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users");
        let users = sqlx::query_as::<_, UserEntity>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserEntity>> {
        self.find_one_by("id", id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserEntity>> {
        self.find_one_by("email", email).await
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<UserEntity>> {
        self.find_one_by("cpf", cpf).await
    }

    async fn insert(&self, user: &UserEntity) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, email, password, cpf, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.cpf)
        .bind(&user.phone)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, user: &UserEntity) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4, password = $5, cpf = $6, phone = $7
            WHERE id = $1
            "#,
        )
        .bind(&user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.cpf)
        .bind(&user.phone)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
