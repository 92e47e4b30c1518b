//! Validation of search and vector index definitions before they are
//! committed to a catalog.

pub mod definition;
pub mod index_validation_error;
pub mod invariants;
pub mod knobs;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod types;

pub use self::invariants::{
    AnalyzerContext,
    validate_analyzer_invariants,
    validate_cross_type_invariants,
    validate_generational_invariants,
    validate_generational_invariants_parts,
    validate_index_invariants,
};
