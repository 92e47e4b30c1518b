use std::collections::{
    BTreeMap,
    BTreeSet,
};

use super::{
    analyzer::{
        self,
        AnalyzerContext,
    },
    identity,
};
use crate::{
    definition::{
        GenerationId,
        IndexDefinition,
        IndexDefinitionGeneration,
        IndexIdentity,
    },
    index_validation_error,
    types::IndexId,
};

pub(super) fn validate_partitions(
    staged: &[IndexDefinitionGeneration],
    live: &[IndexDefinitionGeneration],
    deleted: &[IndexDefinitionGeneration],
    analyzers: &AnalyzerContext,
) -> anyhow::Result<()> {
    tracing::debug!(
        staged = staged.len(),
        live = live.len(),
        deleted = deleted.len(),
        "Validating index generations"
    );
    let live_identities = identities(live);
    identity::validate_identities(&live_identities, &[])?;
    identity::validate_identities(&identities(staged), &live_identities)?;
    validate_staged_have_live(staged, live)?;
    validate_unique_generation_ids(staged.iter().chain(live).chain(deleted))?;
    for generation in staged.iter().chain(live) {
        match generation.definition() {
            IndexDefinition::Search(index) => analyzer::validate_search_index(
                index,
                &analyzers.overridden,
                analyzers.max_synonym_mappings,
            )?,
            IndexDefinition::Vector(_) => {},
        }
    }
    Ok(())
}

fn identities(generations: &[IndexDefinitionGeneration]) -> Vec<&IndexIdentity> {
    generations
        .iter()
        .map(|generation| generation.definition().identity())
        .collect()
}

fn validate_staged_have_live(
    staged: &[IndexDefinitionGeneration],
    live: &[IndexDefinitionGeneration],
) -> anyhow::Result<()> {
    let live_ids: BTreeSet<IndexId> = live
        .iter()
        .map(IndexDefinitionGeneration::index_id)
        .collect();
    let missing: BTreeSet<IndexId> = staged
        .iter()
        .map(IndexDefinitionGeneration::index_id)
        .filter(|id| !live_ids.contains(id))
        .collect();
    anyhow::ensure!(
        missing.is_empty(),
        index_validation_error::staged_index_without_live_index(missing)
    );
    Ok(())
}

fn validate_unique_generation_ids<'a>(
    generations: impl Iterator<Item = &'a IndexDefinitionGeneration>,
) -> anyhow::Result<()> {
    let mut counts: BTreeMap<GenerationId, usize> = BTreeMap::new();
    for generation in generations {
        *counts.entry(generation.generation_id()).or_default() += 1;
    }
    let duplicates: Vec<_> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id)
        .collect();
    anyhow::ensure!(
        duplicates.is_empty(),
        index_validation_error::duplicate_generation_ids(duplicates)
    );
    Ok(())
}
