use proptest::prelude::*;

use covault_types::{AccountId, CurrencyType, TokenAmount, TokenId};

proptest! {
    /// AccountId roundtrip: new -> as_str preserves the raw string.
    #[test]
    fn account_id_roundtrip(raw in "[a-z0-9_]{1,64}") {
        let id = AccountId::new(raw.clone());
        prop_assert_eq!(id.as_str(), raw.as_str());
    }

    /// AccountId::is_null is true only for the empty string.
    #[test]
    fn account_id_is_null_correct(raw in "[a-z0-9_]{0,16}") {
        let id = AccountId::new(raw.clone());
        prop_assert_eq!(id.is_null(), raw.is_empty());
    }

    /// AccountId bincode serialization roundtrip.
    #[test]
    fn account_id_bincode_roundtrip(raw in "[a-z0-9_]{0,64}") {
        let id = AccountId::new(raw);
        let encoded = bincode::serialize(&id).unwrap();
        let decoded: AccountId = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, id);
    }

    /// TokenAmount: raw roundtrip.
    #[test]
    fn token_amount_raw_roundtrip(raw in 0u128..u128::MAX / 2) {
        let amount = TokenAmount::new(raw);
        prop_assert_eq!(amount.raw(), raw);
    }

    /// TokenAmount: checked_add(a, b) == Some(a + b) when no overflow.
    #[test]
    fn token_amount_checked_add(a in 0u128..u128::MAX / 2, b in 0u128..u128::MAX / 2) {
        let sum = TokenAmount::new(a).checked_add(TokenAmount::new(b));
        prop_assert_eq!(sum, Some(TokenAmount::new(a + b)));
    }

    /// TokenAmount: checked_sub returns None exactly when b > a.
    #[test]
    fn token_amount_checked_sub_underflow(a in 0u128..1_000_000, b in 0u128..1_000_000) {
        let result = TokenAmount::new(a).checked_sub(TokenAmount::new(b));
        if b > a {
            prop_assert!(result.is_none());
        } else {
            prop_assert_eq!(result, Some(TokenAmount::new(a - b)));
        }
    }

    /// TokenAmount: saturating_sub never panics and returns ZERO on underflow.
    #[test]
    fn token_amount_saturating_sub(a in 0u128..1_000_000, b in 0u128..1_000_000) {
        let result = TokenAmount::new(a).saturating_sub(TokenAmount::new(b));
        if b > a {
            prop_assert_eq!(result, TokenAmount::ZERO);
        } else {
            prop_assert_eq!(result, TokenAmount::new(a - b));
        }
    }

    /// TokenAmount: is_zero matches raw == 0.
    #[test]
    fn token_amount_is_zero(raw in 0u128..1_000) {
        let amount = TokenAmount::new(raw);
        prop_assert_eq!(amount.is_zero(), raw == 0);
    }

    /// TokenId roundtrip.
    #[test]
    fn token_id_roundtrip(raw in 0u128..u128::MAX) {
        let id = TokenId::new(raw);
        prop_assert_eq!(id.raw(), raw);
    }

    /// CurrencyType: tag -> from_tag roundtrip over the closed set.
    #[test]
    fn currency_tag_roundtrip(tag in 0u8..3) {
        let currency = CurrencyType::from_tag(tag).unwrap();
        prop_assert_eq!(currency.tag(), tag);
    }

    /// CurrencyType: every tag outside 0..=2 is rejected.
    #[test]
    fn currency_unknown_tag_rejected(tag in 3u8..) {
        prop_assert!(CurrencyType::from_tag(tag).is_none());
    }
}
