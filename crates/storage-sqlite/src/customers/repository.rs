use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::collections::HashMap;
use std::sync::Arc;

use teller_core::accounts::Account;
use teller_core::customers::{Customer, CustomerId, CustomerRepositoryTrait, NewCustomer};
use teller_core::errors::Result;

use super::model::{CustomerDB, NewCustomerDB};
use crate::accounts::{decode_all, AccountDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{accounts, customers};

/// Repository for customers and the accounts they own
pub struct CustomerRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CustomerRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    fn get_by_id(&self, customer_id: CustomerId) -> Result<Option<Customer>> {
        let mut conn = get_connection(&self.pool)?;

        let Some(row) = customers::table
            .find(customer_id)
            .select(CustomerDB::as_select())
            .first::<CustomerDB>(&mut conn)
            .optional()
            .into_core()?
        else {
            return Ok(None);
        };

        let owned = accounts::table
            .filter(accounts::customer_id.eq(customer_id))
            .order(accounts::id.asc())
            .select(AccountDB::as_select())
            .load::<AccountDB>(&mut conn)
            .into_core()?;

        Ok(Some(Customer::new(row.id, row.name, decode_all(owned)?)))
    }

    fn list(&self) -> Result<Vec<Customer>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = customers::table
            .order(customers::id.asc())
            .select(CustomerDB::as_select())
            .load::<CustomerDB>(&mut conn)
            .into_core()?;
        let all_accounts = accounts::table
            .order(accounts::id.asc())
            .select(AccountDB::as_select())
            .load::<AccountDB>(&mut conn)
            .into_core()?;

        let mut by_customer: HashMap<CustomerId, Vec<Account>> = HashMap::new();
        for account in decode_all(all_accounts)? {
            by_customer
                .entry(account.customer_id())
                .or_default()
                .push(account);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let owned = by_customer.remove(&row.id).unwrap_or_default();
                Customer::new(row.id, row.name, owned)
            })
            .collect())
    }

    async fn create(&self, new_customer: NewCustomer) -> Result<Customer> {
        let new_row = NewCustomerDB::from(new_customer);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Customer> {
                let row = diesel::insert_into(customers::table)
                    .values(&new_row)
                    .returning(CustomerDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Customer::new(row.id, row.name, Vec::new()))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::AccountRepository;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use rust_decimal_macros::dec;
    use teller_core::accounts::{AccountRepositoryTrait, AccountType};
    use tempfile::tempdir;

    fn create_test_repositories() -> (CustomerRepository, AccountRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone()).expect("Failed to spawn writer");

        (
            CustomerRepository::new(Arc::clone(&pool), writer.clone()),
            AccountRepository::new(pool, writer),
            temp_dir,
        )
    }

    #[tokio::test]
    async fn test_create_and_get_customer() {
        let (customers, _accounts, _temp_dir) = create_test_repositories();

        let created = customers
            .create(NewCustomer {
                name: "Ada".to_string(),
            })
            .await
            .unwrap();
        let loaded = customers.get_by_id(created.id()).unwrap().unwrap();

        assert_eq!(loaded.name(), "Ada");
        assert!(loaded.accounts().is_empty());
        assert!(customers.get_by_id(created.id() + 1).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_accounts_are_loaded_with_their_owner() {
        let (customers, accounts, _temp_dir) = create_test_repositories();

        let mut ada = customers
            .create(NewCustomer {
                name: "Ada".to_string(),
            })
            .await
            .unwrap();
        let grace = customers
            .create(NewCustomer {
                name: "Grace".to_string(),
            })
            .await
            .unwrap();

        let savings = ada
            .open_account(AccountType::Savings, dec!(100))
            .unwrap()
            .clone();
        accounts.create(savings).await.unwrap();
        let checking = ada
            .open_account(AccountType::Checking, dec!(250.75))
            .unwrap()
            .clone();
        accounts.create(checking).await.unwrap();

        let loaded = customers.get_by_id(ada.id()).unwrap().unwrap();
        assert_eq!(loaded.accounts().len(), 2);
        assert!(loaded.has_savings_account());
        assert_eq!(loaded.accounts()[1].balance(), dec!(250.75));

        let listed = customers.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].accounts().len(), 2);
        assert_eq!(listed[1].id(), grace.id());
        assert!(listed[1].accounts().is_empty());
    }
}
