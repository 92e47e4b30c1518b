use std::{
    fmt,
    str::FromStr,
};

use uuid::Uuid;

use crate::{
    index_validation_error,
    knobs::{
        MAX_DATABASE_NAME_LENGTH,
        MAX_INDEX_NAME_LENGTH,
    },
};

/// Opaque identifier of an index, stable for the lifetime of the index.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::From,
)]
pub struct IndexId(Uuid);

impl fmt::Debug for IndexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Stable identifier of a collection. Unlike the collection's name it survives
/// renames, so indexes are keyed by it.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::From,
)]
pub struct CollectionId(Uuid);

impl fmt::Debug for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Name of the database owning a collection.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Deref, derive_more::Display)]
pub struct DatabaseName(String);

impl FromStr for DatabaseName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        anyhow::ensure!(
            !s.is_empty() && s.len() <= *MAX_DATABASE_NAME_LENGTH,
            index_validation_error::invalid_database_name(s, *MAX_DATABASE_NAME_LENGTH)
        );
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Debug for DatabaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// User-chosen name of an index, unique within its collection.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Deref, derive_more::Display)]
pub struct IndexName(String);

impl FromStr for IndexName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        anyhow::ensure!(
            !s.is_empty() && s.len() <= *MAX_INDEX_NAME_LENGTH,
            index_validation_error::invalid_index_name(s, *MAX_INDEX_NAME_LENGTH)
        );
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Debug for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// Version of one snapshot of an index definition. Only equality matters to
/// the catalog; ordering is used to keep diagnostics deterministic.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::From,
)]
pub struct VersionToken(u64);

#[cfg(any(test, feature = "testing"))]
mod proptest {
    use proptest::prelude::*;
    use uuid::Uuid;

    use super::{
        CollectionId,
        DatabaseName,
        IndexId,
        IndexName,
        VersionToken,
    };

    impl Arbitrary for IndexId {
        type Parameters = ();

        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
            any::<u128>()
                .prop_map(|n| IndexId::from(Uuid::from_u128(n)))
                .boxed()
        }
    }

    impl Arbitrary for CollectionId {
        type Parameters = ();

        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
            any::<u128>()
                .prop_map(|n| CollectionId::from(Uuid::from_u128(n)))
                .boxed()
        }
    }

    impl Arbitrary for DatabaseName {
        type Parameters = ();

        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
            "[a-z][a-z0-9_]{0,15}"
                .prop_filter_map("Invalid DatabaseName", |s| s.parse().ok())
                .boxed()
        }
    }

    impl Arbitrary for IndexName {
        type Parameters = ();

        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
            "[a-zA-Z][a-zA-Z0-9_-]{0,15}"
                .prop_filter_map("Invalid IndexName", |s| s.parse().ok())
                .boxed()
        }
    }

    impl Arbitrary for VersionToken {
        type Parameters = ();

        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
            any::<u64>().prop_map(VersionToken::from).boxed()
        }
    }
}
