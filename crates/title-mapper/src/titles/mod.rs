//! Company title normalization.
//!
//! A [`NameNormalizer`] owns an ordered [`AliasMap`] and maps free-text company
//! titles onto canonical names by case-insensitive substring matching. Inputs
//! that match no alias are passed through unchanged.

pub mod aliases;
pub mod batch;
pub mod normalizer;
pub mod router;

pub use aliases::{AliasEntry, AliasLoadError, AliasMap};
pub use batch::{normalize_csv, normalize_csv_file, BatchError, BatchOptions, BatchSummary};
pub use normalizer::{MatchPolicy, NameNormalizer, ParsePolicyError};
pub use router::title_router;
