use std::ops::Deref;

use crate::index_validation_error;

pub const MIN_VECTOR_DIMENSIONS: u32 = 1;
pub const MAX_VECTOR_DIMENSIONS: u32 = 8192;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "testing"), derive(proptest_derive::Arbitrary))]
pub struct VectorDimensions(
    #[cfg_attr(
        any(test, feature = "testing"),
        proptest(strategy = "MIN_VECTOR_DIMENSIONS..=MAX_VECTOR_DIMENSIONS")
    )]
    u32,
);

impl From<VectorDimensions> for u32 {
    fn from(value: VectorDimensions) -> Self {
        value.0
    }
}

impl Deref for VectorDimensions {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<u32> for VectorDimensions {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        anyhow::ensure!(
            (MIN_VECTOR_DIMENSIONS..=MAX_VECTOR_DIMENSIONS).contains(&value),
            index_validation_error::invalid_vector_dimensions(
                value,
                MIN_VECTOR_DIMENSIONS,
                MAX_VECTOR_DIMENSIONS
            )
        );
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use errors::ErrorMetadataAnyhowExt;
    use proptest::prelude::*;

    use super::{
        MAX_VECTOR_DIMENSIONS,
        VectorDimensions,
    };

    #[test]
    fn test_dimension_bounds() {
        assert!(VectorDimensions::try_from(1536).is_ok());
        for invalid in [0, MAX_VECTOR_DIMENSIONS + 1] {
            let err = VectorDimensions::try_from(invalid).unwrap_err();
            assert_eq!(err.short_msg(), "InvalidVectorDimensions");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig { failure_persistence: None, ..ProptestConfig::default() })]
        #[test]
        fn test_arbitrary_dimensions_are_valid(dimensions in any::<VectorDimensions>()) {
            prop_assert_eq!(VectorDimensions::try_from(*dimensions).ok(), Some(dimensions));
        }
    }
}
