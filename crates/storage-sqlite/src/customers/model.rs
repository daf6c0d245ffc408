//! Database model for customers.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use teller_core::customers::NewCustomer;

/// Database model for customers
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CustomerDB {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Insert model for customers
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomerDB {
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<NewCustomer> for NewCustomerDB {
    fn from(domain: NewCustomer) -> Self {
        Self {
            name: domain.name,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
