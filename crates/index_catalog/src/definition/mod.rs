mod generation;
mod index_definition;
pub mod search_index;
pub mod vector_index;

pub use self::{
    generation::{
        GenerationId,
        GenerationState,
        IndexDefinitionGeneration,
        IndexGenerations,
    },
    index_definition::{
        IndexDefinition,
        IndexIdentity,
        IndexKind,
    },
    search_index::SearchIndexDefinition,
    vector_index::VectorIndexDefinition,
};
