use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use gw_session_id::{SessionId, SessionIdError, SIGNED_LENGTH};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "\\PC{1,64}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_ids_validate(key in key_strategy()) {
        let id = SessionId::generate(&key).unwrap();
        let validated = SessionId::validate(id.as_str(), &key).unwrap();
        prop_assert_eq!(validated, id);
    }

    #[test]
    fn any_single_bit_flip_is_detected(key in key_strategy(), bit in 0..SIGNED_LENGTH * 8) {
        let id = SessionId::generate(&key).unwrap();
        let mut decoded = URL_SAFE.decode(id.as_str()).unwrap();
        decoded[bit / 8] ^= 1 << (bit % 8);
        let tampered = URL_SAFE.encode(&decoded);

        prop_assert_eq!(
            SessionId::validate(&tampered, &key),
            Err(SessionIdError::InvalidSignature)
        );
    }

    #[test]
    fn other_keys_are_rejected(k1 in key_strategy(), k2 in key_strategy()) {
        prop_assume!(k1 != k2);
        let id = SessionId::generate(&k1).unwrap();
        prop_assert!(SessionId::validate(id.as_str(), &k2).is_err());
    }

    #[test]
    fn validation_is_deterministic(candidate in "[A-Za-z0-9_=-]{0,100}", key in key_strategy()) {
        let first = SessionId::validate(&candidate, &key);
        let second = SessionId::validate(&candidate, &key);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_input_never_validates(candidate in any::<String>(), key in key_strategy()) {
        let result = SessionId::validate(&candidate, &key);
        prop_assert!(result.is_err());
        prop_assert!(result.unwrap_err().is_unauthenticated());
    }

    #[test]
    fn successive_ids_differ(key in key_strategy()) {
        let a = SessionId::generate(&key).unwrap();
        let b = SessionId::generate(&key).unwrap();
        prop_assert_ne!(a, b);
    }
}
