use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use teller_core::accounts::{Account, AccountId, AccountRepositoryTrait};
use teller_core::customers::CustomerId;
use teller_core::errors::{DatabaseError, Error, Result};

use super::model::{AccountDB, NewAccountDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::accounts;

/// Repository for managing account data in the database
pub struct AccountRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    fn get_for_customer(
        &self,
        account_id: AccountId,
        customer_id: CustomerId,
    ) -> Result<Option<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let row = accounts::table
            .filter(accounts::id.eq(account_id))
            .filter(accounts::customer_id.eq(customer_id))
            .select(AccountDB::as_select())
            .first::<AccountDB>(&mut conn)
            .optional()
            .into_core()?;

        row.map(Account::try_from).transpose()
    }

    async fn create(&self, account: Account) -> Result<Account> {
        let new_account = NewAccountDB::from(&account);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Account> {
                let row = diesel::insert_into(accounts::table)
                    .values(&new_account)
                    .returning(AccountDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                debug!("Inserted account {} for customer {}", row.id, row.customer_id);
                Account::try_from(row)
            })
            .await
    }

    async fn update(&self, account: Account) -> Result<Account> {
        let account_id = account.id().ok_or_else(|| {
            Error::Repository("Cannot update an account that was never stored".to_string())
        })?;
        let expected_version = account.version();
        let new_status = account.status().as_str().to_string();
        let new_balance = account.balance().to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Account> {
                let updated = diesel::update(
                    accounts::table
                        .filter(accounts::id.eq(account_id))
                        .filter(accounts::version.eq(expected_version)),
                )
                .set((
                    accounts::status.eq(new_status),
                    accounts::balance.eq(new_balance),
                    accounts::version.eq(expected_version + 1),
                    accounts::updated_at.eq(chrono::Utc::now().naive_utc()),
                ))
                .returning(AccountDB::as_returning())
                .get_result(conn)
                .optional()
                .into_core()?;

                match updated {
                    Some(row) => Account::try_from(row),
                    None => {
                        let exists = accounts::table
                            .filter(accounts::id.eq(account_id))
                            .count()
                            .get_result::<i64>(conn)
                            .into_core()?
                            > 0;
                        if exists {
                            Err(Error::Database(DatabaseError::ConcurrentModification(
                                format!(
                                    "Account {} changed since version {} was read",
                                    account_id, expected_version
                                ),
                            )))
                        } else {
                            Err(Error::Database(DatabaseError::NotFound(format!(
                                "Account {}",
                                account_id
                            ))))
                        }
                    }
                }
            })
            .await
    }
}
