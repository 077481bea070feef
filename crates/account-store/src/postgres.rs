use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{
    PgPool, Row,
    postgres::{PgPoolOptions, PgRow},
};

use crate::{Account, AccountId, AccountStoreError, NewAccount, Result, store::AccountStore};

/// PostgreSQL-backed account store implementation.
#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    /// Creates a new PostgreSQL account store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a pool to `database_url` and wraps it in a store.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::info!(max_connections, "connected to PostgreSQL");
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_account(row: PgRow) -> Result<Account> {
        Ok(Account {
            id: AccountId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            address: row.try_get("address")?,
            phone_number: row.try_get("phone_number")?,
            date_joined: row.try_get::<NaiveDate, _>("date_joined")?,
        })
    }
}

#[async_trait]
impl AccountStore for PostgresAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account> {
        let row = sqlx::query(
            r#"
            INSERT INTO accounts (name, email, address, phone_number, date_joined)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.date_joined)
        .fetch_one(&self.pool)
        .await?;

        Self::row_to_account(row)
    }

    async fn find(&self, id: AccountId) -> Result<Option<Account>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_account).transpose()
    }

    async fn all(&self) -> Result<Vec<Account>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM accounts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_account).collect()
    }

    async fn update(&self, account: Account) -> Result<Account> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            UPDATE accounts
            SET name = $2, email = $3, address = $4, phone_number = $5, date_joined = $6
            WHERE id = $1
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(account.id.as_i64())
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.date_joined)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Self::row_to_account(row),
            None => Err(AccountStoreError::NotFound(account.id)),
        }
    }

    async fn delete(&self, id: AccountId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
