//! The resolution engine: pure, synchronous and stateless across calls.
//!
//! Given the same element list this module always produces the same
//! aggregate map; there is no shared mutable state and no I/O, so
//! disjoint loads may be resolved concurrently without coordination.

pub mod aggregate;
pub mod normalize;
pub mod numeric;
pub mod properties;
pub mod synonyms;
pub mod type_name;

pub use aggregate::{aggregate, group_key, merge_runs, sorted_groups};
pub use normalize::canonical_key;
pub use numeric::parse_magnitude;
pub use properties::{extract_tag, resolve_quantities, resolve_quantity};
pub use type_name::{resolve_type_name, UNKNOWN_TYPE};
