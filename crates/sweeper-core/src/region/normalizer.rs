use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use tracing::warn;

use super::aliases::DEFAULT_LOCATION_ALIASES;

/// Default normalizer built from [`DEFAULT_LOCATION_ALIASES`].
static DEFAULT_NORMALIZER: LazyLock<RegionNormalizer> = LazyLock::new(RegionNormalizer::new);

/// Folds a location string into a canonical token for equality comparison.
///
/// Implementations must be idempotent: `normalize(normalize(x)) == normalize(x)`.
pub trait LocationNormalizer: Send + Sync {
    fn normalize(&self, location: &str) -> String;
}

/// Location normalizer with case, whitespace and alias folding.
///
/// Steps, in order:
/// 1. lower-case
/// 2. remove whitespace, `-` and `_`
/// 3. drop leading geography labels such as `"(us)"`
/// 4. replace a known alias with its canonical token
#[derive(Debug, Clone)]
pub struct RegionNormalizer {
    aliases: HashMap<String, String>,
}

impl RegionNormalizer {
    /// Normalizer using the default alias table.
    pub fn new() -> Self {
        Self::with_aliases(DEFAULT_LOCATION_ALIASES.iter().copied())
    }

    /// Normalizer without alias folding.
    pub fn without_aliases() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Normalizer using a custom alias table.
    ///
    /// Entries are compacted before insertion. Chains (`a -> b -> c`) are
    /// followed to their end so a single lookup always lands on a canonical
    /// token. Entries caught in a cycle are dropped with a warning.
    pub fn with_aliases<'a>(aliases: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let raw: HashMap<String, String> = aliases
            .into_iter()
            .map(|(alias, canonical)| (compact(alias), compact(canonical)))
            .filter(|(alias, canonical)| alias != canonical)
            .collect();

        let mut resolved = HashMap::with_capacity(raw.len());
        for alias in raw.keys() {
            match resolve_chain(&raw, alias) {
                Some(canonical) => {
                    resolved.insert(alias.clone(), canonical.to_string());
                }
                None => {
                    warn!(
                        event = "core.region.alias_cycle_dropped",
                        alias = %alias,
                    );
                }
            }
        }

        Self { aliases: resolved }
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

impl Default for RegionNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationNormalizer for RegionNormalizer {
    fn normalize(&self, location: &str) -> String {
        let token = compact(location);
        match self.aliases.get(&token) {
            Some(canonical) => canonical.clone(),
            None => token,
        }
    }
}

/// Normalize a location with the default alias table.
pub fn normalize_location(location: &str) -> String {
    DEFAULT_NORMALIZER.normalize(location)
}

/// Follow `alias` through `raw` until a token that is not itself an alias.
/// `None` if the chain loops.
fn resolve_chain<'m>(raw: &'m HashMap<String, String>, alias: &'m str) -> Option<&'m str> {
    let mut seen = HashSet::new();
    let mut current = alias;
    while let Some(next) = raw.get(current) {
        if !seen.insert(current) {
            return None;
        }
        current = next.as_str();
    }
    Some(current)
}

/// Steps 1-3 of [`RegionNormalizer`].
///
/// Separators are removed before labels are stripped, so the output never
/// starts with a closed label and a second pass leaves it unchanged.
fn compact(location: &str) -> String {
    let token: String = location
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect();
    strip_geography_labels(&token).to_string()
}

/// `"(us)eastus"` -> `"eastus"`. Unclosed labels are left alone.
fn strip_geography_labels(token: &str) -> &str {
    let mut rest = token;
    while let Some(inner) = rest.strip_prefix('(') {
        match inner.find(')') {
            Some(end) => rest = &inner[end + 1..],
            None => break,
        }
    }
    rest
}
