//! Tests for the customer entity's account-opening policy.

#[cfg(test)]
mod tests {
    use crate::accounts::{Account, AccountError, AccountStatus, AccountType};
    use crate::constants::fields;
    use crate::customers::{Customer, NewCustomer};
    use rust_decimal_macros::dec;

    fn ada() -> Customer {
        Customer::new(1, "Ada".to_string(), Vec::new())
    }

    #[test]
    fn test_has_savings_account_empty() {
        assert!(!ada().has_savings_account());
    }

    #[test]
    fn test_has_savings_account_ignores_checking() {
        let checking = Account::from_storage(
            3,
            1,
            AccountType::Checking,
            AccountStatus::Open,
            dec!(10),
            0,
        );
        let customer = Customer::new(1, "Ada".to_string(), vec![checking]);
        assert!(!customer.has_savings_account());
    }

    #[test]
    fn test_checking_requires_savings() {
        let mut customer = ada();
        let result = customer.open_account(AccountType::Checking, dec!(100.00));
        assert_eq!(result.unwrap_err(), AccountError::SavingsAccountRequired);
        assert!(customer.accounts().is_empty());
    }

    #[test]
    fn test_open_savings_then_checking() {
        let mut customer = ada();

        let savings = customer
            .open_account(AccountType::Savings, dec!(100.00))
            .unwrap();
        assert_eq!(savings.balance(), dec!(100.00));
        assert_eq!(savings.status(), AccountStatus::Open);
        assert_eq!(savings.customer_id(), 1);
        assert_eq!(savings.id(), None);
        assert!(customer.has_savings_account());

        let checking = customer
            .open_account(AccountType::Checking, dec!(100.00))
            .unwrap();
        assert_eq!(checking.account_type(), AccountType::Checking);
        assert_eq!(customer.accounts().len(), 2);
    }

    #[test]
    fn test_open_account_does_not_enforce_minimum_deposit() {
        let mut customer = ada();
        let account = customer
            .open_account(AccountType::Savings, dec!(0.01))
            .unwrap();
        assert_eq!(account.balance(), dec!(0.01));
    }

    #[test]
    fn test_new_customer_validation() {
        let valid = NewCustomer {
            name: "Ada".to_string(),
        };
        assert!(valid.validate().is_ok());

        let blank = NewCustomer {
            name: "   ".to_string(),
        };
        let errors = blank.validate().unwrap_err();
        assert_eq!(errors.get(fields::NAME).unwrap().len(), 1);

        let too_long = NewCustomer {
            name: "x".repeat(101),
        };
        let errors = too_long.validate().unwrap_err();
        assert!(errors.get(fields::NAME).unwrap()[0].contains("100 character limit"));

        let at_limit = NewCustomer {
            name: "x".repeat(100),
        };
        assert!(at_limit.validate().is_ok());
    }
}
