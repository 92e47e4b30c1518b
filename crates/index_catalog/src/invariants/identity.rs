use std::collections::BTreeMap;

use crate::{
    definition::IndexIdentity,
    index_validation_error,
    types::IndexId,
};

type FieldDiffers = fn(&IndexIdentity, &IndexIdentity) -> bool;

/// Identity fields that may never change for an index id, in reporting order.
/// Only the first differing field is reported for each id.
const IMMUTABLE_IDENTITY_FIELDS: [(&str, FieldDiffers); 4] = [
    ("database", |desired, existing| {
        desired.database != existing.database
    }),
    ("collection_id", |desired, existing| {
        desired.collection_id != existing.collection_id
    }),
    ("name", |desired, existing| desired.name != existing.name),
    ("source_view_name", |desired, existing| {
        desired.source_view_name != existing.source_view_name
    }),
];

/// Runs every identity check over `desired`, comparing against `existing` for
/// immutability. `existing` may be empty.
pub(super) fn validate_identities(
    desired: &[&IndexIdentity],
    existing: &[&IndexIdentity],
) -> anyhow::Result<()> {
    validate_unique_ids(desired)?;
    validate_unique_namespace_names(desired)?;
    validate_immutable_namespace(desired, existing)
}

fn validate_unique_ids(desired: &[&IndexIdentity]) -> anyhow::Result<()> {
    let mut counts: BTreeMap<IndexId, usize> = BTreeMap::new();
    for identity in desired {
        *counts.entry(identity.index_id).or_default() += 1;
    }
    let duplicates: Vec<_> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id)
        .collect();
    anyhow::ensure!(
        duplicates.is_empty(),
        index_validation_error::duplicate_index_ids(duplicates)
    );
    Ok(())
}

fn validate_unique_namespace_names(desired: &[&IndexIdentity]) -> anyhow::Result<()> {
    let mut groups: BTreeMap<_, Vec<IndexId>> = BTreeMap::new();
    for identity in desired {
        groups
            .entry(identity.namespace_key())
            .or_default()
            .push(identity.index_id);
    }
    let mut representatives: Vec<_> = groups
        .into_values()
        .filter(|ids| ids.len() > 1)
        .map(|ids| ids[0])
        .collect();
    representatives.sort();
    anyhow::ensure!(
        representatives.is_empty(),
        index_validation_error::duplicate_index_names(representatives)
    );
    Ok(())
}

/// The highest priority field in which `desired` differs from any of the
/// existing entries sharing its id.
fn first_changed_field(
    desired: &IndexIdentity,
    existing: &[&IndexIdentity],
) -> Option<&'static str> {
    IMMUTABLE_IDENTITY_FIELDS
        .iter()
        .find(|(_, differs)| existing.iter().any(|existing| differs(desired, existing)))
        .map(|(field, _)| *field)
}

fn validate_immutable_namespace(
    desired: &[&IndexIdentity],
    existing: &[&IndexIdentity],
) -> anyhow::Result<()> {
    let mut existing_by_id: BTreeMap<IndexId, Vec<&IndexIdentity>> = BTreeMap::new();
    for identity in existing {
        existing_by_id
            .entry(identity.index_id)
            .or_default()
            .push(*identity);
    }
    let mut changes: Vec<_> = desired
        .iter()
        .filter_map(|desired| {
            let existing = existing_by_id.get(&desired.index_id)?;
            let field = first_changed_field(desired, existing)?;
            Some((desired.index_id, field))
        })
        .collect();
    changes.sort();
    anyhow::ensure!(
        changes.is_empty(),
        index_validation_error::immutable_fields_changed(changes)
    );
    Ok(())
}
