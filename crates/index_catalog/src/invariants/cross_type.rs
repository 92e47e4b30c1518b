use std::collections::{
    BTreeMap,
    BTreeSet,
};

use super::identity;
use crate::{
    definition::{
        IndexDefinition,
        IndexIdentity,
        IndexKind,
        SearchIndexDefinition,
        VectorIndexDefinition,
    },
    index_validation_error,
    types::IndexId,
};

/// Validates search and vector definitions that share one id namespace, as
/// one combined batch against `existing`.
pub(super) fn validate_combined(
    search: &[SearchIndexDefinition],
    vector: &[VectorIndexDefinition],
    existing: &[IndexDefinition],
) -> anyhow::Result<()> {
    let combined: Vec<(&IndexIdentity, IndexKind)> = search
        .iter()
        .map(|definition| (&definition.identity, IndexKind::Search))
        .chain(
            vector
                .iter()
                .map(|definition| (&definition.identity, IndexKind::VectorSearch)),
        )
        .collect();
    let desired: Vec<_> = combined.iter().map(|(identity, _)| *identity).collect();
    let existing_identities: Vec<_> = existing.iter().map(IndexDefinition::identity).collect();

    // Must run before the kind check, which looks up a single desired entry
    // per id and would otherwise hide a duplicate id behind whichever entry it
    // happened to compare.
    identity::validate_identities(&desired, &existing_identities)?;
    validate_immutable_kind(&combined, existing)
}

fn validate_immutable_kind(
    desired: &[(&IndexIdentity, IndexKind)],
    existing: &[IndexDefinition],
) -> anyhow::Result<()> {
    // `existing` may hold more than one entry per id. Every one of them counts.
    let mut existing_kinds: BTreeMap<IndexId, BTreeSet<IndexKind>> = BTreeMap::new();
    for definition in existing {
        existing_kinds
            .entry(definition.index_id())
            .or_default()
            .insert(definition.kind());
    }
    let mut changes: Vec<_> = desired
        .iter()
        .flat_map(|(identity, desired_kind)| {
            existing_kinds
                .get(&identity.index_id)
                .into_iter()
                .flatten()
                .filter(move |existing_kind| *existing_kind != desired_kind)
                .map(move |existing_kind| (identity.index_id, *existing_kind, *desired_kind))
        })
        .collect();
    changes.sort();
    anyhow::ensure!(
        changes.is_empty(),
        index_validation_error::index_changed_type(changes)
    );
    Ok(())
}
