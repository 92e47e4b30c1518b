use std::fmt::Display;

use errors::ErrorMetadata;
use itertools::Itertools;

use crate::{
    definition::{
        GenerationId,
        IndexKind,
    },
    types::IndexId,
};

fn list<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    format!("[{}]", items.into_iter().join(", "))
}

pub fn invalid_index_name(name: &str, max_length: usize) -> ErrorMetadata {
    ErrorMetadata::bad_request(
        "InvalidIndexName",
        format!(
            "Invalid index name: \"{name}\". Index names must be non-empty and at most \
             {max_length} bytes long."
        ),
    )
}

pub fn invalid_database_name(name: &str, max_length: usize) -> ErrorMetadata {
    ErrorMetadata::bad_request(
        "InvalidDatabaseName",
        format!(
            "Invalid database name: \"{name}\". Database names must be non-empty and at most \
             {max_length} bytes long."
        ),
    )
}

pub fn invalid_vector_dimensions(value: u32, min: u32, max: u32) -> ErrorMetadata {
    ErrorMetadata::bad_request(
        "InvalidVectorDimensions",
        format!("Dimensions {value} must be between {min} and {max}."),
    )
}

// Catalog invariants. These describe the proposed batch, not a single
// definition, so they are not user-facing.

pub fn duplicate_index_ids(ids: impl IntoIterator<Item = IndexId>) -> ErrorMetadata {
    ErrorMetadata::invariant_violation(
        "DuplicateIndexIds",
        format!("Index definitions contain duplicate index ids: {}", list(ids)),
    )
}

pub fn duplicate_index_names(representatives: impl IntoIterator<Item = IndexId>) -> ErrorMetadata {
    ErrorMetadata::invariant_violation(
        "DuplicateIndexNames",
        format!(
            "Index definitions contain more than one index with the same database, collection \
             and name, including: {}",
            list(representatives)
        ),
    )
}

pub fn immutable_fields_changed(
    changes: impl IntoIterator<Item = (IndexId, &'static str)>,
) -> ErrorMetadata {
    let changes = changes
        .into_iter()
        .map(|(id, field)| format!("index {id} changed `{field}`"))
        .join("; ");
    ErrorMetadata::invariant_violation(
        "ImmutableIndexFieldChanged",
        format!("Index definitions cannot change immutable fields: {changes}"),
    )
}

pub fn index_changed_type(
    changes: impl IntoIterator<Item = (IndexId, IndexKind, IndexKind)>,
) -> ErrorMetadata {
    let changes = changes
        .into_iter()
        .map(|(id, existing, desired)| format!("{id} from {existing} to {desired}"))
        .join("; ");
    ErrorMetadata::invariant_violation(
        "IndexChangedType",
        format!("index changed type: {changes}"),
    )
}

pub fn staged_index_without_live_index(ids: impl IntoIterator<Item = IndexId>) -> ErrorMetadata {
    ErrorMetadata::invariant_violation(
        "StagedIndexWithoutLiveIndex",
        format!(
            "Staged index generations must revise an existing live index. No live generation \
             exists for: {}",
            list(ids)
        ),
    )
}

pub fn duplicate_generation_ids(ids: impl IntoIterator<Item = GenerationId>) -> ErrorMetadata {
    ErrorMetadata::invariant_violation(
        "DuplicateGenerationIds",
        format!("Index generations contain duplicate generation ids: {}", list(ids)),
    )
}

// Definition errors. These are safe to show to whoever submitted the index.

pub fn analyzer_names_not_unique<'a>(
    index: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> ErrorMetadata {
    ErrorMetadata::bad_request(
        "AnalyzerNamesNotUnique",
        format!(
            "Index \"{index}\" defines analyzers with names that are already in use: {}. \
             Analyzer names must be unique across the index's analyzers and overridden \
             analyzers.",
            list(names)
        ),
    )
}

pub fn undefined_analyzers<'a>(
    index: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> ErrorMetadata {
    ErrorMetadata::bad_request(
        "UndefinedAnalyzers",
        format!("Index \"{index}\" references undefined analyzers: {}", list(names)),
    )
}

pub fn synonym_mappings_limit_exceeded(index: &str, count: usize, max: u32) -> ErrorMetadata {
    ErrorMetadata::bad_request(
        "SynonymMappingsLimitExceeded",
        format!("Index \"{index}\": synonym mappings limit exceeded: {count} > {max}"),
    )
}

pub fn synonym_mapping_graph_analyzer(index: &str, mapping: &str, analyzer: &str) -> ErrorMetadata {
    ErrorMetadata::bad_request(
        "SynonymMappingGraphAnalyzer",
        format!(
            "Index \"{index}\": synonym mapping \"{mapping}\" uses analyzer \"{analyzer}\", which \
             produces a token graph. Synonym mappings require analyzers that produce a single \
             token stream."
        ),
    )
}

pub fn autocomplete_graph_analyzer(index: &str, path: &str, analyzer: &str) -> ErrorMetadata {
    ErrorMetadata::bad_request(
        "AutocompleteGraphAnalyzer",
        format!(
            "Index \"{index}\": autocomplete field \"{path}\" uses analyzer \"{analyzer}\", which \
             produces a token graph. Autocomplete fields require analyzers that produce a single \
             token stream."
        ),
    )
}

pub fn type_set_autocomplete_graph_analyzer(
    index: &str,
    type_set: &str,
    path: Option<&str>,
    analyzer: &str,
) -> ErrorMetadata {
    let location = match path {
        Some(path) => format!(" at \"{path}\""),
        None => String::new(),
    };
    ErrorMetadata::bad_request(
        "TypeSetAutocompleteGraphAnalyzer",
        format!(
            "Index \"{index}\": type set \"{type_set}\" defines an autocomplete field{location} \
             with analyzer \"{analyzer}\", which produces a token graph. Autocomplete fields \
             require analyzers that produce a single token stream."
        ),
    )
}
