//! Work item identifier generation.
//!
//! Production runs use random numeric suffixes; tests and reproducible
//! exports can swap in the sequential generator behind the same trait.

use std::collections::HashMap;

/// Digits only, so ids read like issue-tracker keys ("EPIC-8342").
const ID_ALPHABET: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const SUFFIX_LENGTH: usize = 4;

pub trait IdGenerator {
    /// Returns a fresh id of the form `PREFIX-suffix`.
    fn next(&mut self, prefix: &str) -> String;
}

/// Random suffixes via nanoid. Ids are unique per run with overwhelming
/// probability; the generator keeps no state.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next(&mut self, prefix: &str) -> String {
        let suffix = nanoid::format(nanoid::rngs::default, &ID_ALPHABET, SUFFIX_LENGTH);
        format!("{}-{}", prefix, suffix)
    }
}

/// Monotonic per-prefix counters starting at 1001.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counters: HashMap<String, u32>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next(&mut self, prefix: &str) -> String {
        let counter = self.counters.entry(prefix.to_string()).or_insert(1000);
        *counter += 1;
        format!("{}-{}", prefix, counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ids_shape() {
        let mut ids = RandomIds;
        let id = ids.next("EPIC");
        assert!(id.starts_with("EPIC-"));
        let suffix = &id["EPIC-".len()..];
        assert_eq!(suffix.len(), SUFFIX_LENGTH);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_sequential_ids_are_deterministic() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next("EPIC"), "EPIC-1001");
        assert_eq!(ids.next("FEAT"), "FEAT-1001");
        assert_eq!(ids.next("FEAT"), "FEAT-1002");
        assert_eq!(ids.next("EPIC"), "EPIC-1002");
    }
}
