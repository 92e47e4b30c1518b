use super::{
    search_index::SearchIndexDefinition,
    vector_index::VectorIndexDefinition,
};
use crate::types::{
    CollectionId,
    DatabaseName,
    IndexId,
    IndexName,
};

/// The kind of an index. An index keeps its kind for as long as its id
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(any(test, feature = "testing"), derive(proptest_derive::Arbitrary))]
pub enum IndexKind {
    #[strum(serialize = "SEARCH")]
    Search,
    #[strum(serialize = "VECTOR_SEARCH")]
    VectorSearch,
}

/// The identity-bearing part of an index definition. None of these fields may
/// change once an index id exists in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexIdentity {
    pub index_id: IndexId,
    pub database: DatabaseName,
    pub collection_id: CollectionId,
    pub name: IndexName,

    /// Set if the index is defined on a view rather than directly on the
    /// collection.
    pub source_view_name: Option<String>,
}

impl IndexIdentity {
    /// `(database, collection_id, name)`, unique across a catalog.
    pub fn namespace_key(&self) -> (&DatabaseName, &CollectionId, &IndexName) {
        (&self.database, &self.collection_id, &self.name)
    }
}

/// Definition of a single index, as submitted by a user and stored in the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexDefinition {
    /// Full text search index.
    Search(SearchIndexDefinition),

    Vector(VectorIndexDefinition),
}

impl IndexDefinition {
    pub fn identity(&self) -> &IndexIdentity {
        match self {
            IndexDefinition::Search(definition) => &definition.identity,
            IndexDefinition::Vector(definition) => &definition.identity,
        }
    }

    pub fn index_id(&self) -> IndexId {
        self.identity().index_id
    }

    pub fn kind(&self) -> IndexKind {
        match self {
            IndexDefinition::Search(_) => IndexKind::Search,
            IndexDefinition::Vector(_) => IndexKind::VectorSearch,
        }
    }

    pub fn as_search(&self) -> Option<&SearchIndexDefinition> {
        match self {
            IndexDefinition::Search(definition) => Some(definition),
            IndexDefinition::Vector(_) => None,
        }
    }
}

impl From<SearchIndexDefinition> for IndexDefinition {
    fn from(definition: SearchIndexDefinition) -> Self {
        IndexDefinition::Search(definition)
    }
}

impl From<VectorIndexDefinition> for IndexDefinition {
    fn from(definition: VectorIndexDefinition) -> Self {
        IndexDefinition::Vector(definition)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        definition::{
            IndexDefinition,
            IndexKind,
        },
        testing::{
            search_index,
            vector_index,
        },
    };

    #[test]
    fn test_kind_display() {
        assert_eq!(IndexKind::Search.to_string(), "SEARCH");
        assert_eq!(IndexKind::VectorSearch.to_string(), "VECTOR_SEARCH");
    }

    #[test]
    fn test_accessors_follow_variant() -> anyhow::Result<()> {
        let search: IndexDefinition = search_index(1, "db", 10, "default")?.into();
        let vector: IndexDefinition = vector_index(2, "db", 10, "vectors")?.into();

        assert_eq!(search.kind(), IndexKind::Search);
        assert_eq!(vector.kind(), IndexKind::VectorSearch);
        assert!(search.as_search().is_some());
        assert!(vector.as_search().is_none());
        assert_eq!(&*search.identity().name, "default");
        assert_ne!(search.index_id(), vector.index_id());
        Ok(())
    }
}
