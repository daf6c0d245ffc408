//! Database model for accounts.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use teller_core::accounts::{Account, AccountStatus, AccountType};
use teller_core::errors::Error;

use crate::errors::StorageError;

/// Database model for accounts
///
/// The balance is stored as decimal text so no precision is lost in SQLite.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: i32,
    pub customer_id: i32,
    pub account_type: String,
    pub status: String,
    pub balance: String,
    pub version: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insert model for a newly opened account
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
pub struct NewAccountDB {
    pub customer_id: i32,
    pub account_type: String,
    pub status: String,
    pub balance: String,
    pub version: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<AccountDB> for Account {
    type Error = Error;

    fn try_from(db: AccountDB) -> Result<Self, Self::Error> {
        let balance = Decimal::from_str(&db.balance).map_err(|e| {
            Error::from(StorageError::CorruptRecord(format!(
                "account {} has an unreadable balance '{}': {}",
                db.id, db.balance, e
            )))
        })?;

        Ok(Account::from_storage(
            db.id,
            db.customer_id,
            AccountType::from_str(&db.account_type)?,
            AccountStatus::from_str(&db.status)?,
            balance,
            db.version,
        ))
    }
}

impl From<&Account> for NewAccountDB {
    fn from(domain: &Account) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            customer_id: domain.customer_id(),
            account_type: domain.account_type().as_str().to_string(),
            status: domain.status().as_str().to_string(),
            balance: domain.balance().to_string(),
            version: domain.version(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Decodes a batch of stored rows, failing on the first unreadable one.
pub(crate) fn decode_all(rows: Vec<AccountDB>) -> Result<Vec<Account>, Error> {
    rows.into_iter().map(Account::try_from).collect()
}
