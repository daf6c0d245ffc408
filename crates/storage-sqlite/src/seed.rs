//! Demo data for a fresh database.

use diesel::prelude::*;
use diesel::SqliteConnection;
use log::info;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use teller_core::accounts::{AccountStatus, AccountType};
use teller_core::errors::Result;

use crate::accounts::NewAccountDB;
use crate::customers::{CustomerDB, NewCustomerDB};
use crate::db::WriteHandle;
use crate::errors::IntoCore;
use crate::schema::{accounts, customers};

const DEMO_CUSTOMER_NAMES: [&str; 5] = ["Jack", "Jill", "Fred", "Tom", "Harry"];

/// Opening balance of every seeded savings account.
const DEMO_OPENING_BALANCE: Decimal = dec!(100.00);

/// Inserts five demo customers, each holding an open savings account with 100.00.
///
/// Does nothing when any customer already exists. Returns the number of
/// customers inserted.
pub async fn seed_demo_data(writer: &WriteHandle) -> Result<usize> {
    let inserted = writer
        .exec(|conn: &mut SqliteConnection| -> Result<usize> {
            let existing: i64 = customers::table.count().get_result(conn).into_core()?;
            if existing > 0 {
                return Ok(0);
            }

            let now = chrono::Utc::now().naive_utc();
            for name in DEMO_CUSTOMER_NAMES {
                let customer = diesel::insert_into(customers::table)
                    .values(&NewCustomerDB {
                        name: name.to_string(),
                        created_at: now,
                    })
                    .returning(CustomerDB::as_returning())
                    .get_result(conn)
                    .into_core()?;

                diesel::insert_into(accounts::table)
                    .values(&NewAccountDB {
                        customer_id: customer.id,
                        account_type: AccountType::Savings.as_str().to_string(),
                        status: AccountStatus::Open.as_str().to_string(),
                        balance: DEMO_OPENING_BALANCE.to_string(),
                        version: 0,
                        created_at: now,
                        updated_at: now,
                    })
                    .execute(conn)
                    .into_core()?;
            }
            Ok(DEMO_CUSTOMER_NAMES.len())
        })
        .await?;

    if inserted > 0 {
        info!("Seeded {} demo customers", inserted);
    }
    Ok(inserted)
}
