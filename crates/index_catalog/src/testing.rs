//! Builders and proptest strategies for catalog definitions.
//!
//! Numeric ids are turned into UUIDs with `Uuid::from_u128`, so `1` always
//! means the same index within a test.

use std::collections::BTreeMap;

use proptest::prelude::*;
use uuid::Uuid;

use crate::{
    definition::{
        IndexDefinition,
        IndexDefinitionGeneration,
        IndexIdentity,
        SearchIndexDefinition,
        VectorIndexDefinition,
        search_index::{
            AutocompleteFieldDefinition,
            CustomAnalyzerDefinition,
            DocumentFieldDefinition,
            EmbeddedDocumentsFieldDefinition,
            FieldDefinition,
            FieldTypeDefinition,
            OverriddenAnalyzer,
            OverriddenAnalyzerDefinition,
            StockAnalyzer,
            StringFieldDefinition,
            SynonymMappingDefinition,
            TokenStreamType,
        },
        vector_index::{
            VectorIndexField,
            VectorSimilarity,
        },
    },
    types::{
        CollectionId,
        IndexId,
        VersionToken,
    },
};

pub fn index_id(id: u128) -> IndexId {
    IndexId::from(Uuid::from_u128(id))
}

pub fn collection_id(id: u128) -> CollectionId {
    CollectionId::from(Uuid::from_u128(id))
}

pub fn identity(
    id: u128,
    database: &str,
    collection: u128,
    name: &str,
) -> anyhow::Result<IndexIdentity> {
    Ok(IndexIdentity {
        index_id: index_id(id),
        database: database.parse()?,
        collection_id: collection_id(collection),
        name: name.parse()?,
        source_view_name: None,
    })
}

pub fn search_index(
    id: u128,
    database: &str,
    collection: u128,
    name: &str,
) -> anyhow::Result<SearchIndexDefinition> {
    Ok(SearchIndexDefinition::new(identity(id, database, collection, name)?))
}

pub fn vector_index(
    id: u128,
    database: &str,
    collection: u128,
    name: &str,
) -> anyhow::Result<VectorIndexDefinition> {
    Ok(VectorIndexDefinition::new(
        identity(id, database, collection, name)?,
        vec![VectorIndexField::Vector {
            path: "plot_embedding".to_owned(),
            dimensions: 1536.try_into()?,
            similarity: VectorSimilarity::Cosine,
        }],
    ))
}

pub fn generation(
    definition: impl Into<IndexDefinition>,
    version: u64,
) -> IndexDefinitionGeneration {
    IndexDefinitionGeneration::new(VersionToken::from(version), definition.into())
}

pub fn custom_analyzer(name: &str, token_stream_type: TokenStreamType) -> CustomAnalyzerDefinition {
    CustomAnalyzerDefinition {
        name: name.to_owned(),
        token_stream_type,
    }
}

pub fn valid_overridden(name: &str, token_stream_type: TokenStreamType) -> OverriddenAnalyzer {
    OverriddenAnalyzer::Valid(OverriddenAnalyzerDefinition {
        name: name.to_owned(),
        base_analyzer: StockAnalyzer::Standard,
        token_stream_type,
    })
}

pub fn invalid_overridden(name: &str) -> OverriddenAnalyzer {
    OverriddenAnalyzer::Invalid {
        name: name.to_owned(),
        reason: "unknown token filter".to_owned(),
    }
}

pub fn synonym_mapping(name: &str, analyzer: &str) -> SynonymMappingDefinition {
    SynonymMappingDefinition {
        name: name.to_owned(),
        analyzer: analyzer.to_owned(),
        source_collection: format!("{name}_source"),
    }
}

fn field_map<'a>(
    entries: impl IntoIterator<Item = (&'a str, Vec<FieldTypeDefinition>)>,
) -> BTreeMap<String, FieldDefinition> {
    entries
        .into_iter()
        .map(|(name, types)| (name.to_owned(), FieldDefinition(types)))
        .collect()
}

/// Root mappings with static fields only.
pub fn fields<'a>(
    entries: impl IntoIterator<Item = (&'a str, Vec<FieldTypeDefinition>)>,
) -> DocumentFieldDefinition {
    DocumentFieldDefinition {
        dynamic: Default::default(),
        fields: field_map(entries),
    }
}

pub fn document<'a>(
    entries: impl IntoIterator<Item = (&'a str, Vec<FieldTypeDefinition>)>,
) -> FieldTypeDefinition {
    FieldTypeDefinition::Document(fields(entries))
}

pub fn embedded_documents<'a>(
    entries: impl IntoIterator<Item = (&'a str, Vec<FieldTypeDefinition>)>,
) -> FieldTypeDefinition {
    FieldTypeDefinition::EmbeddedDocuments(EmbeddedDocumentsFieldDefinition {
        dynamic: Default::default(),
        fields: field_map(entries),
    })
}

pub fn autocomplete(analyzer: Option<&str>) -> FieldTypeDefinition {
    FieldTypeDefinition::Autocomplete(AutocompleteFieldDefinition {
        analyzer: analyzer.map(str::to_owned),
        ..Default::default()
    })
}

pub fn string_field(analyzer: Option<&str>) -> FieldTypeDefinition {
    FieldTypeDefinition::String(StringFieldDefinition {
        analyzer: analyzer.map(str::to_owned),
        ..Default::default()
    })
}

pub fn string_field_with_multi<'a>(
    analyzer: Option<&str>,
    search_analyzer: Option<&str>,
    multi: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
) -> FieldTypeDefinition {
    FieldTypeDefinition::String(StringFieldDefinition {
        analyzer: analyzer.map(str::to_owned),
        search_analyzer: search_analyzer.map(str::to_owned),
        multi: multi
            .into_iter()
            .map(|(name, analyzer)| {
                (
                    name.to_owned(),
                    StringFieldDefinition {
                        analyzer: analyzer.map(str::to_owned),
                        ..Default::default()
                    },
                )
            })
            .collect(),
    })
}

/// Identity coordinates drawn from a deliberately small domain, so that
/// generated lists regularly collide on ids and on namespace+name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmallIdentity {
    pub id: u128,
    pub database: u8,
    pub collection: u128,
    pub name: u8,
}

impl SmallIdentity {
    pub fn search_index(&self) -> SearchIndexDefinition {
        SearchIndexDefinition::new(self.identity())
    }

    pub fn identity(&self) -> IndexIdentity {
        IndexIdentity {
            index_id: index_id(self.id),
            database: format!("db{}", self.database)
                .parse()
                .expect("Generated database name is valid"),
            collection_id: collection_id(self.collection),
            name: format!("index{}", self.name)
                .parse()
                .expect("Generated index name is valid"),
            source_view_name: None,
        }
    }
}

pub fn small_identity() -> impl Strategy<Value = SmallIdentity> {
    (0u128..4, 0u8..2, 0u128..2, 0u8..3).prop_map(|(id, database, collection, name)| {
        SmallIdentity {
            id,
            database,
            collection,
            name,
        }
    })
}
