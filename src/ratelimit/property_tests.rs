//! Property-Based Tests for the Rate Limiter
//!
//! Uses proptest to verify the admission invariants across arbitrary
//! request interleavings.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::ratelimit::{Admission, RateLimiter};

// == Test Configuration ==
const TEST_WINDOW_MS: u64 = 60_000;

// == Strategies ==
/// Generates client keys drawn from a small pool so interleavings collide.
fn client_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("203.0.113.1".to_string()),
        Just("203.0.113.2".to_string()),
        Just("203.0.113.3".to_string()),
        "[a-z]{1,8}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any interleaving of requests landing inside one window, no key
    // is granted more than the per-window budget.
    #[test]
    fn prop_grants_never_exceed_budget(
        keys in prop::collection::vec(client_key_strategy(), 1..200),
        max_requests in 1u32..10,
        offsets in prop::collection::vec(0u64..TEST_WINDOW_MS, 1..200)
    ) {
        let mut limiter = RateLimiter::new(max_requests, TEST_WINDOW_MS);
        let mut granted: HashMap<String, u32> = HashMap::new();
        let base = 1_000_000;

        for (key, offset) in keys.iter().zip(offsets.iter().chain(std::iter::repeat(&0))) {
            if let Admission::Granted = limiter.admit(key, base + offset) {
                *granted.entry(key.clone()).or_default() += 1;
            }
        }

        for (key, count) in granted {
            prop_assert!(
                count <= max_requests,
                "Key '{}' was granted {} requests against a budget of {}",
                key,
                count,
                max_requests
            );
        }
    }

    // For any denial under forward-moving time, the retry hint never
    // exceeds the window length in whole seconds.
    #[test]
    fn prop_retry_hint_fits_window(
        max_requests in 1u32..5,
        mut offsets in prop::collection::vec(0u64..TEST_WINDOW_MS, 1..50)
    ) {
        let mut limiter = RateLimiter::new(max_requests, TEST_WINDOW_MS);
        let base = 1_000_000;
        offsets.sort_unstable();

        for offset in offsets {
            if let Admission::Denied { retry_after_secs } = limiter.admit("k", base + offset) {
                prop_assert!(
                    retry_after_secs <= TEST_WINDOW_MS / 1000,
                    "Retry hint {} exceeds the window",
                    retry_after_secs
                );
            }
        }
    }

    // For any traffic on other keys, a key with a free budget is granted.
    #[test]
    fn prop_keys_do_not_interfere(
        noise in prop::collection::vec(client_key_strategy(), 1..100)
    ) {
        let mut limiter = RateLimiter::new(1, TEST_WINDOW_MS);
        let now = 1_000_000;

        for key in &noise {
            let _ = limiter.admit(key, now);
        }

        prop_assert_eq!(
            limiter.admit("isolated-client", now),
            Admission::Granted,
            "A fresh key must be granted regardless of other traffic"
        );
    }
}
