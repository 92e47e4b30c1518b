mod analyzer_definition;
mod field_definition;

use std::collections::BTreeSet;

pub use self::{
    analyzer_definition::{
        CustomAnalyzerDefinition,
        OverriddenAnalyzer,
        OverriddenAnalyzerDefinition,
        StockAnalyzer,
        SynonymMappingDefinition,
        TokenStreamType,
    },
    field_definition::{
        AutocompleteFieldDefinition,
        AutocompleteFieldRef,
        AutocompleteTokenization,
        DocumentFieldDefinition,
        DynamicDefinition,
        EmbeddedDocumentsFieldDefinition,
        FieldDefinition,
        FieldTypeDefinition,
        StringFieldDefinition,
        TypeSetDefinition,
    },
};
use super::IndexIdentity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndexDefinition {
    pub identity: IndexIdentity,

    /// Analyzer used for string fields that don't name one.
    pub analyzer: Option<String>,

    /// Analyzer applied to query text for string fields that don't name one.
    pub search_analyzer: Option<String>,

    pub mappings: DocumentFieldDefinition,
    pub analyzers: Vec<CustomAnalyzerDefinition>,
    pub synonyms: Vec<SynonymMappingDefinition>,
    pub type_sets: Vec<TypeSetDefinition>,
}

impl SearchIndexDefinition {
    /// A definition with default mappings and no analyzers, synonyms or type
    /// sets.
    pub fn new(identity: IndexIdentity) -> Self {
        Self {
            identity,
            analyzer: None,
            search_analyzer: None,
            mappings: DocumentFieldDefinition::default(),
            analyzers: vec![],
            synonyms: vec![],
            type_sets: vec![],
        }
    }

    pub fn custom_analyzer_names(&self) -> impl Iterator<Item = &str> {
        self.analyzers.iter().map(|analyzer| analyzer.name.as_str())
    }

    /// Every analyzer name referenced anywhere in the index, stock analyzers
    /// included.
    pub fn referenced_analyzer_names(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        names.extend(self.analyzer.as_deref());
        names.extend(self.search_analyzer.as_deref());
        self.mappings.collect_analyzer_names(&mut names);
        for type_set in &self.type_sets {
            type_set.collect_analyzer_names(&mut names);
        }
        names.extend(self.synonyms.iter().map(|mapping| mapping.analyzer.as_str()));
        names
    }

    /// Autocomplete fields of the static field tree. Type sets are walked
    /// separately through `TypeSetDefinition::autocomplete_fields`.
    pub fn autocomplete_fields(&self) -> Vec<AutocompleteFieldRef<'_>> {
        self.mappings.autocomplete_fields()
    }
}
