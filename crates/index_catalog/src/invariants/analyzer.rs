use std::collections::{
    BTreeMap,
    BTreeSet,
};

use crate::{
    definition::{
        SearchIndexDefinition,
        search_index::{
            OverriddenAnalyzer,
            StockAnalyzer,
            TokenStreamType,
        },
    },
    index_validation_error,
    knobs::MAX_SYNONYM_MAPPINGS_PER_INDEX,
};

/// Analyzer registry inputs shared by every search index in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerContext {
    pub overridden: Vec<OverriddenAnalyzer>,

    /// None -> unlimited.
    pub max_synonym_mappings: Option<u32>,
}

impl AnalyzerContext {
    pub fn new(overridden: Vec<OverriddenAnalyzer>, max_synonym_mappings: Option<u32>) -> Self {
        Self {
            overridden,
            max_synonym_mappings,
        }
    }

    /// Uses the `MAX_SYNONYM_MAPPINGS_PER_INDEX` knob for the synonym limit.
    pub fn from_knobs(overridden: Vec<OverriddenAnalyzer>) -> Self {
        Self::new(overridden, *MAX_SYNONYM_MAPPINGS_PER_INDEX)
    }
}

/// Outcome of resolving the non-stock analyzer names an index references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyzerResolution<'a> {
    /// Referenced names that are neither custom analyzers of the index nor
    /// valid overridden analyzers.
    pub unresolved: BTreeSet<&'a str>,

    /// Names of overridden analyzers that failed their own validation.
    pub named_invalid: BTreeSet<&'a str>,
}

impl<'a> AnalyzerResolution<'a> {
    pub fn resolve(index: &'a SearchIndexDefinition, overridden: &'a [OverriddenAnalyzer]) -> Self {
        let resolvable: BTreeSet<&str> = index
            .custom_analyzer_names()
            .chain(
                overridden
                    .iter()
                    .filter_map(OverriddenAnalyzer::as_valid)
                    .map(|definition| definition.name.as_str()),
            )
            .collect();
        let unresolved = index
            .referenced_analyzer_names()
            .into_iter()
            .filter(|name| !StockAnalyzer::is_stock(name) && !resolvable.contains(name))
            .collect();
        let named_invalid = overridden
            .iter()
            .filter(|analyzer| analyzer.as_valid().is_none())
            .map(OverriddenAnalyzer::name)
            .collect();
        Self {
            unresolved,
            named_invalid,
        }
    }

    /// Unresolved names that no invalid overridden analyzer accounts for. An
    /// invalid overridden analyzer is reported where it is defined, so
    /// references to it are not reported again here.
    pub fn truly_missing(&self) -> BTreeSet<&'a str> {
        self.unresolved
            .difference(&self.named_invalid)
            .copied()
            .collect()
    }
}

/// Token stream classification of every analyzer an index can resolve.
struct AnalyzerTable<'a> {
    token_stream_types: BTreeMap<&'a str, TokenStreamType>,
}

impl<'a> AnalyzerTable<'a> {
    fn new(index: &'a SearchIndexDefinition, overridden: &'a [OverriddenAnalyzer]) -> Self {
        let overridden = overridden
            .iter()
            .filter_map(OverriddenAnalyzer::as_valid)
            .map(|definition| (definition.name.as_str(), definition.token_stream_type));
        let custom = index
            .analyzers
            .iter()
            .map(|definition| (definition.name.as_str(), definition.token_stream_type));
        Self {
            token_stream_types: overridden.chain(custom).collect(),
        }
    }

    /// Stock analyzers always produce a single stream. Unknown names are
    /// reported by reference resolution, so they're treated as streams here.
    fn is_graph(&self, name: &str) -> bool {
        self.token_stream_types.get(name) == Some(&TokenStreamType::Graph)
    }
}

pub(super) fn validate_search_index(
    index: &SearchIndexDefinition,
    overridden: &[OverriddenAnalyzer],
    max_synonym_mappings: Option<u32>,
) -> anyhow::Result<()> {
    validate_unique_analyzer_names(index, overridden)?;
    validate_analyzer_references(index, overridden)?;
    let table = AnalyzerTable::new(index, overridden);
    validate_synonym_mappings(index, &table, max_synonym_mappings)?;
    validate_autocomplete_fields(index, &table)
}

fn validate_unique_analyzer_names(
    index: &SearchIndexDefinition,
    overridden: &[OverriddenAnalyzer],
) -> anyhow::Result<()> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for name in index
        .custom_analyzer_names()
        .chain(overridden.iter().map(OverriddenAnalyzer::name))
    {
        *counts.entry(name).or_default() += 1;
    }
    let duplicates: Vec<_> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect();
    anyhow::ensure!(
        duplicates.is_empty(),
        index_validation_error::analyzer_names_not_unique(&index.identity.name, duplicates)
    );
    Ok(())
}

fn validate_analyzer_references(
    index: &SearchIndexDefinition,
    overridden: &[OverriddenAnalyzer],
) -> anyhow::Result<()> {
    let resolution = AnalyzerResolution::resolve(index, overridden);
    if resolution.unresolved.is_empty() {
        return Ok(());
    }
    let missing = resolution.truly_missing();
    anyhow::ensure!(
        missing.is_empty(),
        index_validation_error::undefined_analyzers(&index.identity.name, missing)
    );
    Ok(())
}

fn validate_synonym_mappings(
    index: &SearchIndexDefinition,
    table: &AnalyzerTable,
    max_synonym_mappings: Option<u32>,
) -> anyhow::Result<()> {
    if index.synonyms.is_empty() {
        return Ok(());
    }
    if let Some(max) = max_synonym_mappings {
        // Over the limit, the graph check is skipped for this pass.
        anyhow::ensure!(
            index.synonyms.len() <= max as usize,
            index_validation_error::synonym_mappings_limit_exceeded(
                &index.identity.name,
                index.synonyms.len(),
                max
            )
        );
    }
    if let Some(mapping) = index
        .synonyms
        .iter()
        .find(|mapping| table.is_graph(&mapping.analyzer))
    {
        anyhow::bail!(index_validation_error::synonym_mapping_graph_analyzer(
            &index.identity.name,
            &mapping.name,
            &mapping.analyzer
        ));
    }
    Ok(())
}

fn validate_autocomplete_fields(
    index: &SearchIndexDefinition,
    table: &AnalyzerTable,
) -> anyhow::Result<()> {
    if let Some(field) = index
        .autocomplete_fields()
        .into_iter()
        .find(|field| table.is_graph(field.definition.analyzer_name()))
    {
        anyhow::bail!(index_validation_error::autocomplete_graph_analyzer(
            &index.identity.name,
            &field.path,
            field.definition.analyzer_name()
        ));
    }
    for type_set in &index.type_sets {
        if let Some(field) = type_set
            .autocomplete_fields()
            .into_iter()
            .find(|field| table.is_graph(field.definition.analyzer_name()))
        {
            let path = (!field.path.is_empty()).then_some(field.path.as_str());
            anyhow::bail!(index_validation_error::type_set_autocomplete_graph_analyzer(
                &index.identity.name,
                &type_set.name,
                path,
                field.definition.analyzer_name()
            ));
        }
    }
    Ok(())
}
