mod dimensions;

pub use self::dimensions::{
    MAX_VECTOR_DIMENSIONS,
    MIN_VECTOR_DIMENSIONS,
    VectorDimensions,
};
use super::IndexIdentity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(any(test, feature = "testing"), derive(proptest_derive::Arbitrary))]
pub enum VectorSimilarity {
    #[strum(serialize = "euclidean")]
    Euclidean,
    #[strum(serialize = "cosine")]
    Cosine,
    #[strum(serialize = "dotProduct")]
    DotProduct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorIndexField {
    /// The field holding the embedding to search.
    Vector {
        path: String,
        dimensions: VectorDimensions,
        similarity: VectorSimilarity,
    },

    /// A field indexed for pre-filtering vector queries.
    Filter { path: String },
}

impl VectorIndexField {
    pub fn path(&self) -> &str {
        match self {
            VectorIndexField::Vector { path, .. } | VectorIndexField::Filter { path } => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorIndexDefinition {
    pub identity: IndexIdentity,
    pub fields: Vec<VectorIndexField>,
}

impl VectorIndexDefinition {
    pub fn new(identity: IndexIdentity, fields: Vec<VectorIndexField>) -> Self {
        Self { identity, fields }
    }

    pub fn vector_fields(&self) -> impl Iterator<Item = &VectorIndexField> {
        self.fields
            .iter()
            .filter(|field| matches!(field, VectorIndexField::Vector { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        VectorIndexField,
        VectorSimilarity,
    };
    use crate::testing::vector_index;

    #[test]
    fn test_vector_fields_skip_filters() -> anyhow::Result<()> {
        let mut index = vector_index(1, "db", 1, "embeddings")?;
        index.fields.push(VectorIndexField::Filter {
            path: "genre".to_owned(),
        });
        let paths: Vec<_> = index.vector_fields().map(|field| field.path()).collect();
        assert_eq!(paths, vec!["plot_embedding"]);
        assert_eq!(VectorSimilarity::DotProduct.to_string(), "dotProduct");
        Ok(())
    }
}
