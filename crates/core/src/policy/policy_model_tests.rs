#[cfg(test)]
mod tests {
    use crate::policy::TransactionPolicy;
    use crate::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_accepts_valid_values() {
        let policy = TransactionPolicy::new(dec!(1000000.23), dec!(5000), dec!(25), 2).unwrap();
        assert_eq!(policy.max_deposit_amount(), dec!(1000000.23));
        assert_eq!(policy.max_withdrawal_amount(), dec!(5000));
        assert_eq!(policy.min_initial_deposit_amount(), dec!(25));
        assert_eq!(policy.currency_unit_scale(), 2);
    }

    #[test]
    fn test_new_rejects_non_positive_amounts() {
        let cases = [
            (dec!(0), dec!(1), dec!(1)),
            (dec!(1), dec!(-1), dec!(1)),
            (dec!(1), dec!(1), dec!(0)),
        ];
        for (deposit, withdrawal, initial) in cases {
            let result = TransactionPolicy::new(deposit, withdrawal, initial, 2);
            assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
        }
    }

    #[test]
    fn test_new_rejects_out_of_range_scale() {
        assert!(matches!(
            TransactionPolicy::new(dec!(1), dec!(1), dec!(1), -1),
            Err(Error::InvalidConfigValue(_))
        ));
        assert!(matches!(
            TransactionPolicy::new(dec!(1), dec!(1), dec!(1), 29),
            Err(Error::InvalidConfigValue(_))
        ));
        assert!(TransactionPolicy::new(dec!(1), dec!(1), dec!(1), 0).is_ok());
    }

    #[test]
    fn test_default_matches_service_defaults() {
        let policy = TransactionPolicy::default();
        assert_eq!(policy.max_deposit_amount(), dec!(1000000000.00));
        assert_eq!(policy.max_withdrawal_amount(), dec!(1000000000.00));
        assert_eq!(policy.min_initial_deposit_amount(), dec!(100));
        assert_eq!(policy.currency_unit_scale(), 2);
    }

    #[test]
    fn test_rules_use_independent_maxima() {
        let policy = TransactionPolicy::new(dec!(1000000.23), dec!(500), dec!(1), 2).unwrap();
        assert_eq!(policy.deposit_rule().precision(), 9);
        assert_eq!(policy.withdrawal_rule().precision(), 5);
        assert_eq!(policy.withdrawal_rule().max_amount(), dec!(500));
    }

    #[test]
    fn test_deserialize_validates_values() {
        let json = r#"{"maxDepositAmount":"1000","maxWithdrawalAmount":"1000","minInitialDepositAmount":"10","currencyUnitScale":2}"#;
        let policy: TransactionPolicy = serde_json::from_str(json).unwrap();
        assert_eq!(policy.max_deposit_amount(), dec!(1000));

        let invalid = r#"{"maxDepositAmount":"0","maxWithdrawalAmount":"1000","minInitialDepositAmount":"10","currencyUnitScale":2}"#;
        assert!(serde_json::from_str::<TransactionPolicy>(invalid).is_err());
    }
}
