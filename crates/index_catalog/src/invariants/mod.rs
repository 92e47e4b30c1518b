//! Catalog-wide invariants over proposed index definitions.
//!
//! Every entry point is a pure function of its inputs and short-circuits on
//! the first violation. Identity, cross-type and generational violations are
//! `InvariantViolation`s: the batch as a whole is inadmissible. Analyzer
//! violations are `BadRequest`s that describe a single definition and may be
//! shown to the user as-is.

mod analyzer;
mod cross_type;
mod generational;
mod identity;

#[cfg(test)]
mod cross_type_tests;
#[cfg(test)]
mod generational_tests;

use errors::ErrorMetadataAnyhowExt;

pub use self::analyzer::AnalyzerContext;
use crate::definition::{
    IndexDefinition,
    IndexDefinitionGeneration,
    IndexGenerations,
    SearchIndexDefinition,
    VectorIndexDefinition,
    search_index::OverriddenAnalyzer,
};

fn log_rejection(check: &'static str, result: anyhow::Result<()>) -> anyhow::Result<()> {
    result.inspect_err(|e| {
        if e.is_invariant_violation() {
            tracing::warn!(check, short_msg = e.short_msg(), "Rejected index definitions: {e:#}");
        } else {
            tracing::debug!(check, short_msg = e.short_msg(), "Rejected index definition: {e:#}");
        }
    })
}

/// Checks that `desired` has unique ids and unique (database, collection,
/// name) triples, and that no id present in `existing` changes its namespace
/// or name.
pub fn validate_index_invariants(
    desired: &[IndexDefinition],
    existing: &[IndexDefinition],
) -> anyhow::Result<()> {
    let desired: Vec<_> = desired.iter().map(IndexDefinition::identity).collect();
    let existing: Vec<_> = existing.iter().map(IndexDefinition::identity).collect();
    log_rejection("identity", identity::validate_identities(&desired, &existing))
}

/// Validates search and vector definitions as one batch sharing an id
/// namespace. On top of the identity checks, an id present in `existing` may
/// not change between search and vector search.
pub fn validate_cross_type_invariants(
    search: &[SearchIndexDefinition],
    vector: &[VectorIndexDefinition],
    existing: &[IndexDefinition],
) -> anyhow::Result<()> {
    log_rejection(
        "cross_type",
        cross_type::validate_combined(search, vector, existing),
    )
}

/// [`validate_generational_invariants_parts`] over a partitioned catalog.
pub fn validate_generational_invariants(
    generations: &IndexGenerations,
    analyzers: &AnalyzerContext,
) -> anyhow::Result<()> {
    validate_generational_invariants_parts(
        &generations.staged,
        &generations.live,
        &generations.deleted,
        analyzers,
    )
}

/// Validates a catalog split into staged, live and deleted generations.
///
/// In order: live definitions are self-consistent; staged definitions are
/// consistent against live ones; every staged index has a live counterpart;
/// generation ids are unique across all three partitions; and every staged or
/// live search index passes the analyzer checks. Deleted generations only take
/// part in the generation id check.
pub fn validate_generational_invariants_parts(
    staged: &[IndexDefinitionGeneration],
    live: &[IndexDefinitionGeneration],
    deleted: &[IndexDefinitionGeneration],
    analyzers: &AnalyzerContext,
) -> anyhow::Result<()> {
    log_rejection(
        "generational",
        generational::validate_partitions(staged, live, deleted, analyzers),
    )
}

/// Validates the analyzers of one search index against the overridden
/// analyzers registered for the deployment. `max_synonym_mappings` of `None`
/// disables the synonym count limit.
pub fn validate_analyzer_invariants(
    index: &SearchIndexDefinition,
    overridden: &[OverriddenAnalyzer],
    max_synonym_mappings: Option<u32>,
) -> anyhow::Result<()> {
    log_rejection(
        "analyzer",
        analyzer::validate_search_index(index, overridden, max_synonym_mappings),
    )
}
