//! Canonical alias table for location normalization.

/// Short region codes folded onto their canonical location token.
///
/// Keys and values are already in compact form (lower case, no separators).
/// A value must never appear as a key, so folding is a single lookup and the
/// normalizer stays idempotent. This is enforced by tests.
pub const DEFAULT_LOCATION_ALIASES: &[(&str, &str)] = &[
    ("eus", "eastus"),
    ("eus2", "eastus2"),
    ("wus", "westus"),
    ("wus2", "westus2"),
    ("wus3", "westus3"),
    ("cus", "centralus"),
    ("ncus", "northcentralus"),
    ("scus", "southcentralus"),
    ("wcus", "westcentralus"),
    ("neu", "northeurope"),
    ("weu", "westeurope"),
    ("uks", "uksouth"),
    ("ukw", "ukwest"),
    ("sea", "southeastasia"),
    ("ea", "eastasia"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_entries_are_compact_lowercase() {
        for (alias, canonical) in DEFAULT_LOCATION_ALIASES {
            for token in [alias, canonical] {
                assert!(!token.is_empty());
                assert!(
                    token
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                    "alias table entry {:?} is not compact",
                    token
                );
            }
        }
    }

    #[test]
    fn test_alias_values_are_never_keys() {
        for (_, canonical) in DEFAULT_LOCATION_ALIASES {
            assert!(
                !DEFAULT_LOCATION_ALIASES
                    .iter()
                    .any(|(alias, _)| alias == canonical),
                "canonical token {:?} is also an alias",
                canonical
            );
        }
    }

    #[test]
    fn test_alias_keys_are_unique() {
        let mut keys: Vec<&str> = DEFAULT_LOCATION_ALIASES.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), DEFAULT_LOCATION_ALIASES.len());
    }
}
