//! `SQLite` implementation of [`AccountRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use accounts_app::ports::AccountRepository;
use accounts_domain::account::{Account, AccountData};
use accounts_domain::error::AccountError;
use accounts_domain::id::AccountId;
use accounts_domain::time::Date;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Account`].
struct Wrapper(Account);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Account> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let date_joined: String = row.try_get("date_joined")?;
        let date_joined =
            Date::from_str(&date_joined).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Account {
            id: AccountId::new(id),
            data: AccountData {
                name: row.try_get("name")?,
                email: row.try_get("email")?,
                address: row.try_get("address")?,
                phone_number: row.try_get("phone_number")?,
                date_joined,
            },
        }))
    }
}

const INSERT: &str = "INSERT INTO accounts (name, email, address, phone_number, date_joined) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM accounts WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM accounts ORDER BY id";
const UPDATE: &str = "UPDATE accounts SET name = ?, email = ?, address = ?, phone_number = ?, date_joined = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM accounts WHERE id = ?";

/// `SQLite`-backed account repository.
pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for SqliteAccountRepository {
    fn create(
        &self,
        data: AccountData,
    ) -> impl Future<Output = Result<Account, AccountError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&data.name)
                .bind(&data.email)
                .bind(&data.address)
                .bind(&data.phone_number)
                .bind(data.date_joined.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Account::new(
                AccountId::new(result.last_insert_rowid()),
                data,
            ))
        }
    }

    fn get_by_id(
        &self,
        id: AccountId,
    ) -> impl Future<Output = Result<Option<Account>, AccountError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Account>, AccountError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        account: Account,
    ) -> impl Future<Output = Result<Account, AccountError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&account.data.name)
                .bind(&account.data.email)
                .bind(&account.data.address)
                .bind(&account.data.phone_number)
                .bind(account.data.date_joined.to_string())
                .bind(account.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(StorageError::Database(sqlx::Error::RowNotFound).into());
            }

            Ok(account)
        }
    }

    fn delete(&self, id: AccountId) -> impl Future<Output = Result<(), AccountError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
