//! Region normalization.
//!
//! Location strings reported by the cloud API come in several spellings
//! (`"East US"`, `"eastus"`, `"(US) East US"`). Two locations are the same
//! place iff their normalized forms are equal.

pub mod aliases;
pub mod normalizer;

pub use aliases::DEFAULT_LOCATION_ALIASES;
pub use normalizer::{LocationNormalizer, RegionNormalizer, normalize_location};
