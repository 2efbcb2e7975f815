//! Strongly-typed ID wrappers for categories and transactions
//!
//! Both IDs are persisted as plain JSON strings. Category IDs are decimal
//! integers ("1".."7" for the seeded set); transaction IDs are derived from a
//! nanosecond timestamp.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Macro to generate string-backed ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Get the identifier text
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

define_id!(CategoryId);
define_id!(TransactionId);

impl CategoryId {
    /// Create an ID from its integer form
    pub fn from_number(n: u64) -> Self {
        Self(n.to_string())
    }

    /// The integer value of this ID, if it is one
    pub fn number(&self) -> Option<u64> {
        self.0.trim().parse().ok()
    }

    /// The ID following the highest numeric ID in `existing`
    ///
    /// Non-numeric or missing IDs are ignored, so an empty set yields "1".
    /// Returns `None` once the highest ID is `u64::MAX`.
    pub fn next_after<'a, I>(existing: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a CategoryId>,
    {
        let max = existing
            .into_iter()
            .filter_map(CategoryId::number)
            .max()
            .unwrap_or(0);
        max.checked_add(1).map(Self::from_number)
    }
}

static LAST_TRANSACTION_STAMP: AtomicI64 = AtomicI64::new(0);

impl TransactionId {
    /// Generate a fresh ID of the form `tx_<unix-nanos>`
    ///
    /// Successive calls within a process always yield strictly increasing
    /// stamps, even if the clock reads the same value twice.
    pub fn generate() -> Self {
        let now = Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_else(|| Utc::now().timestamp_micros() * 1_000);

        let mut last = LAST_TRANSACTION_STAMP.load(Ordering::Relaxed);
        loop {
            let next = if now > last { now } else { last + 1 };
            match LAST_TRANSACTION_STAMP.compare_exchange_weak(
                last,
                next,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self(format!("tx_{}", next)),
                Err(actual) => last = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_next_after_skips_non_numeric() {
        let ids = vec![
            CategoryId::from("1"),
            CategoryId::from("7"),
            CategoryId::from(""),
            CategoryId::from("abc"),
        ];
        assert_eq!(CategoryId::next_after(&ids), Some(CategoryId::from("8")));
        assert_eq!(
            CategoryId::next_after(&Vec::<CategoryId>::new()),
            Some(CategoryId::from("1"))
        );
    }

    #[test]
    fn test_next_after_exhausted() {
        let ids = vec![CategoryId::from_number(u64::MAX)];
        assert_eq!(CategoryId::next_after(&ids), None);
    }

    #[test]
    fn test_transaction_ids_unique_and_increasing() {
        let ids: Vec<_> = (0..1000).map(|_| TransactionId::generate()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());

        let stamps: Vec<i64> = ids
            .iter()
            .map(|id| id.as_str().trim_start_matches("tx_").parse().unwrap())
            .collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_transaction_ids_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..250)
                        .map(|_| TransactionId::generate())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(all.insert(id));
            }
        }
        assert_eq!(all.len(), 1000);
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::from("5");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"5\"");
        let back: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
