use cmd_util::env::config_test;
use errors::ErrorMetadataAnyhowExt;
use pretty_assertions::assert_eq;

use super::{
    AnalyzerContext,
    validate_generational_invariants,
    validate_generational_invariants_parts,
};
use crate::{
    definition::{
        GenerationState,
        IndexGenerations,
        SearchIndexDefinition,
        search_index::TokenStreamType,
    },
    testing::{
        autocomplete,
        fields,
        generation,
        index_id,
        invalid_overridden,
        search_index,
        string_field,
        synonym_mapping,
        valid_overridden,
        vector_index,
    },
};

fn no_analyzers() -> AnalyzerContext {
    AnalyzerContext::new(vec![], None)
}

fn with_undefined_analyzer(id: u128, name: &str) -> anyhow::Result<SearchIndexDefinition> {
    let mut index = search_index(id, "db", 1, name)?;
    index.mappings = fields([("title", vec![string_field(Some("missing"))])]);
    Ok(index)
}

#[test]
fn test_empty_catalog_is_valid() -> anyhow::Result<()> {
    validate_generational_invariants(&IndexGenerations::default(), &no_analyzers())?;
    Ok(())
}

#[test]
fn test_valid_catalog() -> anyhow::Result<()> {
    let generations = IndexGenerations::partition([
        (GenerationState::Live, generation(search_index(1, "db", 1, "text")?, 1)),
        (GenerationState::Live, generation(vector_index(2, "db", 1, "plots")?, 1)),
        (GenerationState::Staged, generation(search_index(1, "db", 1, "text")?, 2)),
        (GenerationState::Deleted, generation(search_index(3, "db", 1, "old")?, 1)),
        // A deleted generation may share a name with a live one.
        (GenerationState::Deleted, generation(search_index(4, "db", 1, "text")?, 1)),
    ]);
    assert_eq!(generations.get(GenerationState::Deleted).len(), 2);
    validate_generational_invariants(&generations, &no_analyzers())?;
    Ok(())
}

#[test]
fn test_live_generations_must_be_self_consistent() -> anyhow::Result<()> {
    config_test();
    let live = [
        generation(search_index(1, "db", 1, "default")?, 1),
        generation(search_index(2, "db", 1, "default")?, 1),
    ];
    let err =
        validate_generational_invariants_parts(&[], &live, &[], &no_analyzers()).unwrap_err();
    assert_eq!(err.short_msg(), "DuplicateIndexNames");
    assert!(err.is_invariant_violation());
    Ok(())
}

#[test]
fn test_staged_generations_are_unique() -> anyhow::Result<()> {
    let live = [generation(search_index(1, "db", 1, "default")?, 1)];
    let staged = [
        generation(search_index(1, "db", 1, "default")?, 2),
        generation(search_index(1, "db", 1, "default")?, 3),
    ];
    let err =
        validate_generational_invariants_parts(&staged, &live, &[], &no_analyzers()).unwrap_err();
    assert_eq!(err.short_msg(), "DuplicateIndexIds");
    Ok(())
}

#[test]
fn test_staged_generation_cannot_rename_live_index() -> anyhow::Result<()> {
    let live = [generation(search_index(1, "db", 1, "default")?, 1)];
    let staged = [generation(search_index(1, "db", 1, "renamed")?, 2)];
    let err =
        validate_generational_invariants_parts(&staged, &live, &[], &no_analyzers()).unwrap_err();
    assert_eq!(err.short_msg(), "ImmutableIndexFieldChanged");
    Ok(())
}

#[test]
fn test_staged_generation_needs_live_counterpart() -> anyhow::Result<()> {
    let live = [generation(search_index(1, "db", 1, "a")?, 1)];
    let staged = [
        generation(search_index(3, "db", 1, "c")?, 1),
        generation(search_index(1, "db", 1, "a")?, 2),
        generation(search_index(2, "db", 1, "b")?, 1),
    ];
    let err =
        validate_generational_invariants_parts(&staged, &live, &[], &no_analyzers()).unwrap_err();
    assert_eq!(err.short_msg(), "StagedIndexWithoutLiveIndex");
    assert!(
        err.msg()
            .ends_with(&format!("[{}, {}]", index_id(2), index_id(3))),
        "{err}"
    );
    Ok(())
}

#[test]
fn test_missing_live_counterpart_is_reported_before_generation_ids() -> anyhow::Result<()> {
    let staged = [generation(search_index(1, "db", 1, "a")?, 1)];
    let deleted = [generation(search_index(1, "db", 1, "a")?, 1)];
    let err = validate_generational_invariants_parts(&staged, &[], &deleted, &no_analyzers())
        .unwrap_err();
    assert_eq!(err.short_msg(), "StagedIndexWithoutLiveIndex");
    Ok(())
}

#[test]
fn test_generation_ids_are_unique_across_partitions() -> anyhow::Result<()> {
    let live = [generation(search_index(1, "db", 1, "a")?, 1)];
    let deleted = [generation(search_index(1, "db", 1, "a")?, 1)];
    let err =
        validate_generational_invariants_parts(&[], &live, &deleted, &no_analyzers()).unwrap_err();
    assert_eq!(err.short_msg(), "DuplicateGenerationIds");
    assert!(err.msg().ends_with(&format!("[{}@v1]", index_id(1))), "{err}");

    let staged = [generation(search_index(1, "db", 1, "a")?, 1)];
    let err =
        validate_generational_invariants_parts(&staged, &live, &[], &no_analyzers()).unwrap_err();
    assert_eq!(err.short_msg(), "DuplicateGenerationIds");
    Ok(())
}

#[test]
fn test_analyzers_of_staged_and_live_generations() -> anyhow::Result<()> {
    config_test();
    let live = [generation(with_undefined_analyzer(1, "a")?, 1)];
    let err =
        validate_generational_invariants_parts(&[], &live, &[], &no_analyzers()).unwrap_err();
    assert_eq!(err.short_msg(), "UndefinedAnalyzers");
    assert!(err.is_bad_request());

    let live = [generation(search_index(1, "db", 1, "a")?, 1)];
    let staged = [generation(with_undefined_analyzer(1, "a")?, 2)];
    let err =
        validate_generational_invariants_parts(&staged, &live, &[], &no_analyzers()).unwrap_err();
    assert_eq!(err.short_msg(), "UndefinedAnalyzers");
    Ok(())
}

#[test]
fn test_deleted_generations_skip_analyzer_checks() -> anyhow::Result<()> {
    let deleted = [generation(with_undefined_analyzer(1, "a")?, 1)];
    validate_generational_invariants_parts(&[], &[], &deleted, &no_analyzers())?;
    Ok(())
}

#[test]
fn test_analyzer_context_is_applied() -> anyhow::Result<()> {
    let mut index = search_index(1, "db", 1, "a")?;
    index.mappings = fields([
        ("title", vec![string_field(Some("broken"))]),
        ("plot", vec![autocomplete(Some("shingles"))]),
    ]);
    index.synonyms = vec![
        synonym_mapping("one", "lucene.standard"),
        synonym_mapping("two", "lucene.standard"),
    ];
    let live = [generation(index, 1)];

    let analyzers = AnalyzerContext::new(
        vec![
            invalid_overridden("broken"),
            valid_overridden("shingles", TokenStreamType::Stream),
        ],
        None,
    );
    validate_generational_invariants_parts(&[], &live, &[], &analyzers)?;

    let limited = AnalyzerContext::new(analyzers.overridden.clone(), Some(1));
    let err = validate_generational_invariants_parts(&[], &live, &[], &limited).unwrap_err();
    assert_eq!(err.short_msg(), "SynonymMappingsLimitExceeded");

    let graph = AnalyzerContext::new(
        vec![
            invalid_overridden("broken"),
            valid_overridden("shingles", TokenStreamType::Graph),
        ],
        None,
    );
    let err = validate_generational_invariants_parts(&[], &live, &[], &graph).unwrap_err();
    assert_eq!(err.short_msg(), "AutocompleteGraphAnalyzer");
    Ok(())
}
