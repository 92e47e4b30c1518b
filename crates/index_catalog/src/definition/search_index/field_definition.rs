use std::collections::{
    BTreeMap,
    BTreeSet,
};

use super::StockAnalyzer;

/// How fields that aren't listed in a document's static `fields` get indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DynamicDefinition {
    #[default]
    Disabled,
    Enabled,

    /// Index unlisted fields with the types of the named type set.
    TypeSet(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFieldDefinition {
    pub dynamic: DynamicDefinition,
    pub fields: BTreeMap<String, FieldDefinition>,
}

/// Each element of an array of documents is indexed as its own document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedDocumentsFieldDefinition {
    pub dynamic: DynamicDefinition,
    pub fields: BTreeMap<String, FieldDefinition>,
}

/// A single field may be indexed as several types at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDefinition(pub Vec<FieldTypeDefinition>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTypeDefinition {
    Autocomplete(AutocompleteFieldDefinition),
    Boolean,
    Date,
    Document(DocumentFieldDefinition),
    EmbeddedDocuments(EmbeddedDocumentsFieldDefinition),
    Number,
    ObjectId,
    String(StringFieldDefinition),
    Token,
    Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringFieldDefinition {
    pub analyzer: Option<String>,
    pub search_analyzer: Option<String>,

    /// Alternate analyses of the same string, queried by name.
    pub multi: BTreeMap<String, StringFieldDefinition>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AutocompleteTokenization {
    #[default]
    EdgeGram,
    RightEdgeGram,
    NGram,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteFieldDefinition {
    pub analyzer: Option<String>,
    pub min_grams: u32,
    pub max_grams: u32,
    pub tokenization: AutocompleteTokenization,
    pub fold_diacritics: bool,
}

impl AutocompleteFieldDefinition {
    /// The analyzer autocomplete tokens are produced with. Defaults to
    /// `lucene.standard`.
    pub fn analyzer_name(&self) -> &str {
        self.analyzer
            .as_deref()
            .unwrap_or(StockAnalyzer::Standard.name())
    }
}

impl Default for AutocompleteFieldDefinition {
    fn default() -> Self {
        Self {
            analyzer: None,
            min_grams: 2,
            max_grams: 15,
            tokenization: AutocompleteTokenization::default(),
            fold_diacritics: true,
        }
    }
}

/// A named, reusable bundle of field types. Referenced from
/// `DynamicDefinition::TypeSet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSetDefinition {
    pub name: String,
    pub types: Vec<FieldTypeDefinition>,
}

/// An autocomplete definition found while walking a field tree. `path` is
/// dotted and relative to where the walk started; it is empty for a type
/// directly at the root of a type set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteFieldRef<'a> {
    pub path: String,
    pub definition: &'a AutocompleteFieldDefinition,
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}.{name}")
    }
}

fn collect_fields_analyzer_names<'a>(
    fields: &'a BTreeMap<String, FieldDefinition>,
    names: &mut BTreeSet<&'a str>,
) {
    for field in fields.values() {
        for field_type in &field.0 {
            field_type.collect_analyzer_names(names);
        }
    }
}

fn collect_fields_autocomplete<'a>(
    path: &str,
    fields: &'a BTreeMap<String, FieldDefinition>,
    out: &mut Vec<AutocompleteFieldRef<'a>>,
) {
    for (name, field) in fields {
        let path = child_path(path, name);
        for field_type in &field.0 {
            field_type.collect_autocomplete(&path, out);
        }
    }
}

impl StringFieldDefinition {
    fn collect_analyzer_names<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        names.extend(self.analyzer.as_deref());
        names.extend(self.search_analyzer.as_deref());
        for multi in self.multi.values() {
            multi.collect_analyzer_names(names);
        }
    }
}

impl FieldTypeDefinition {
    /// Adds every analyzer name this type refers to, at any depth.
    pub fn collect_analyzer_names<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            FieldTypeDefinition::Autocomplete(autocomplete) => {
                names.extend(autocomplete.analyzer.as_deref());
            },
            FieldTypeDefinition::String(string) => string.collect_analyzer_names(names),
            FieldTypeDefinition::Document(document) => {
                collect_fields_analyzer_names(&document.fields, names)
            },
            FieldTypeDefinition::EmbeddedDocuments(embedded) => {
                collect_fields_analyzer_names(&embedded.fields, names)
            },
            FieldTypeDefinition::Boolean
            | FieldTypeDefinition::Date
            | FieldTypeDefinition::Number
            | FieldTypeDefinition::ObjectId
            | FieldTypeDefinition::Token
            | FieldTypeDefinition::Uuid => {},
        }
    }

    /// Adds every autocomplete definition reachable from this type, in
    /// field-name order, with paths relative to `path`.
    pub fn collect_autocomplete<'a>(&'a self, path: &str, out: &mut Vec<AutocompleteFieldRef<'a>>) {
        match self {
            FieldTypeDefinition::Autocomplete(definition) => out.push(AutocompleteFieldRef {
                path: path.to_owned(),
                definition,
            }),
            FieldTypeDefinition::Document(document) => {
                collect_fields_autocomplete(path, &document.fields, out)
            },
            FieldTypeDefinition::EmbeddedDocuments(embedded) => {
                collect_fields_autocomplete(path, &embedded.fields, out)
            },
            FieldTypeDefinition::Boolean
            | FieldTypeDefinition::Date
            | FieldTypeDefinition::Number
            | FieldTypeDefinition::ObjectId
            | FieldTypeDefinition::String(_)
            | FieldTypeDefinition::Token
            | FieldTypeDefinition::Uuid => {},
        }
    }
}

impl DocumentFieldDefinition {
    pub fn collect_analyzer_names<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        collect_fields_analyzer_names(&self.fields, names)
    }

    /// Autocomplete definitions in the static field tree, including every
    /// nested document and embedded document subtree.
    pub fn autocomplete_fields(&self) -> Vec<AutocompleteFieldRef<'_>> {
        let mut out = vec![];
        collect_fields_autocomplete("", &self.fields, &mut out);
        out
    }
}

impl TypeSetDefinition {
    pub fn collect_analyzer_names<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        for field_type in &self.types {
            field_type.collect_analyzer_names(names);
        }
    }

    pub fn autocomplete_fields(&self) -> Vec<AutocompleteFieldRef<'_>> {
        let mut out = vec![];
        for field_type in &self.types {
            field_type.collect_autocomplete("", &mut out);
        }
        out
    }
}
