use errors::ErrorMetadataAnyhowExt;
use pretty_assertions::assert_eq;

use super::validate_cross_type_invariants;
use crate::{
    definition::IndexDefinition,
    testing::{
        index_id,
        search_index,
        vector_index,
    },
};

#[test]
fn test_mixed_batch_is_valid() -> anyhow::Result<()> {
    let existing: Vec<IndexDefinition> = vec![
        search_index(1, "db", 1, "text")?.into(),
        vector_index(2, "db", 1, "embedding")?.into(),
    ];
    validate_cross_type_invariants(
        &[search_index(1, "db", 1, "text")?],
        &[
            vector_index(2, "db", 1, "embedding")?,
            vector_index(3, "db", 1, "plots")?,
        ],
        &existing,
    )?;
    Ok(())
}

#[test]
fn test_kind_change_is_rejected() -> anyhow::Result<()> {
    let existing: Vec<IndexDefinition> = vec![search_index(1, "db", 1, "default")?.into()];
    let err =
        validate_cross_type_invariants(&[], &[vector_index(1, "db", 1, "default")?], &existing)
            .unwrap_err();
    assert_eq!(err.short_msg(), "IndexChangedType");
    assert!(err.is_invariant_violation());
    assert_eq!(
        err.msg(),
        format!(
            "index changed type: {} from SEARCH to VECTOR_SEARCH",
            index_id(1)
        )
    );
    Ok(())
}

#[test]
fn test_duplicate_id_across_kinds_is_not_masked() -> anyhow::Result<()> {
    // The id matches the existing search index on the search side, so a kind
    // check that picked that entry would pass.
    let existing: Vec<IndexDefinition> = vec![search_index(1, "db", 1, "a")?.into()];
    let err = validate_cross_type_invariants(
        &[search_index(1, "db", 1, "a")?],
        &[vector_index(1, "db", 1, "b")?],
        &existing,
    )
    .unwrap_err();
    assert_eq!(err.short_msg(), "DuplicateIndexIds");
    Ok(())
}

#[test]
fn test_duplicate_name_across_kinds() -> anyhow::Result<()> {
    let err = validate_cross_type_invariants(
        &[search_index(1, "db", 1, "default")?],
        &[vector_index(2, "db", 1, "default")?],
        &[],
    )
    .unwrap_err();
    assert_eq!(err.short_msg(), "DuplicateIndexNames");
    Ok(())
}

#[test]
fn test_rename_is_reported_before_kind_change() -> anyhow::Result<()> {
    let existing: Vec<IndexDefinition> = vec![vector_index(1, "db", 1, "old")?.into()];
    let err = validate_cross_type_invariants(&[search_index(1, "db", 1, "new")?], &[], &existing)
        .unwrap_err();
    assert_eq!(err.short_msg(), "ImmutableIndexFieldChanged");
    Ok(())
}

#[test]
fn test_kind_change_against_any_existing_entry() -> anyhow::Result<()> {
    let search: IndexDefinition = search_index(1, "db", 1, "default")?.into();
    let vector: IndexDefinition = vector_index(1, "db", 1, "default")?.into();
    for existing in [
        vec![search.clone(), vector.clone()],
        vec![vector.clone(), search.clone()],
    ] {
        let err =
            validate_cross_type_invariants(&[], &[vector_index(1, "db", 1, "default")?], &existing)
                .unwrap_err();
        assert_eq!(err.short_msg(), "IndexChangedType");
        assert_eq!(
            err.msg(),
            format!(
                "index changed type: {} from SEARCH to VECTOR_SEARCH",
                index_id(1)
            )
        );
    }
    Ok(())
}

#[test]
fn test_kind_changes_are_reported_in_id_order() -> anyhow::Result<()> {
    let existing: Vec<IndexDefinition> = vec![
        vector_index(2, "db", 1, "b")?.into(),
        vector_index(1, "db", 1, "a")?.into(),
    ];
    let err = validate_cross_type_invariants(
        &[search_index(2, "db", 1, "b")?, search_index(1, "db", 1, "a")?],
        &[],
        &existing,
    )
    .unwrap_err();
    assert_eq!(
        err.msg(),
        format!(
            "index changed type: {} from VECTOR_SEARCH to SEARCH; {} from VECTOR_SEARCH to SEARCH",
            index_id(1),
            index_id(2)
        )
    );
    Ok(())
}
