use std::fmt;

use super::IndexDefinition;
use crate::types::{
    IndexId,
    VersionToken,
};

/// Identifies one versioned snapshot of an index definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationId {
    pub index_id: IndexId,
    pub version: VersionToken,
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@v{}", self.index_id, self.version)
    }
}

/// An index definition at a particular version. The generation's index id is
/// always the definition's index id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDefinitionGeneration {
    generation_id: GenerationId,
    definition: IndexDefinition,
}

impl IndexDefinitionGeneration {
    pub fn new(version: VersionToken, definition: IndexDefinition) -> Self {
        Self {
            generation_id: GenerationId {
                index_id: definition.index_id(),
                version,
            },
            definition,
        }
    }

    pub fn generation_id(&self) -> GenerationId {
        self.generation_id
    }

    pub fn index_id(&self) -> IndexId {
        self.generation_id.index_id
    }

    pub fn definition(&self) -> &IndexDefinition {
        &self.definition
    }

    pub fn into_definition(self) -> IndexDefinition {
        self.definition
    }
}

/// Lifecycle partition of a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(any(test, feature = "testing"), derive(proptest_derive::Arbitrary))]
pub enum GenerationState {
    /// Proposed, not yet serving queries.
    #[strum(serialize = "staged")]
    Staged,

    /// Active and serving queries.
    #[strum(serialize = "live")]
    Live,

    /// Retired, kept for auditing and rollback until purged.
    #[strum(serialize = "deleted")]
    Deleted,
}

/// All known generations of a catalog, partitioned by lifecycle state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexGenerations {
    pub staged: Vec<IndexDefinitionGeneration>,
    pub live: Vec<IndexDefinitionGeneration>,
    pub deleted: Vec<IndexDefinitionGeneration>,
}

impl IndexGenerations {
    pub fn partition(
        generations: impl IntoIterator<Item = (GenerationState, IndexDefinitionGeneration)>,
    ) -> Self {
        let mut partitioned = Self::default();
        for (state, generation) in generations {
            partitioned.get_mut(state).push(generation);
        }
        partitioned
    }

    pub fn get(&self, state: GenerationState) -> &[IndexDefinitionGeneration] {
        match state {
            GenerationState::Staged => &self.staged,
            GenerationState::Live => &self.live,
            GenerationState::Deleted => &self.deleted,
        }
    }

    fn get_mut(&mut self, state: GenerationState) -> &mut Vec<IndexDefinitionGeneration> {
        match state {
            GenerationState::Staged => &mut self.staged,
            GenerationState::Live => &mut self.live,
            GenerationState::Deleted => &mut self.deleted,
        }
    }

    /// Every generation tagged with its state, in staged, live, deleted order.
    pub fn iter(&self) -> impl Iterator<Item = (GenerationState, &IndexDefinitionGeneration)> {
        [
            GenerationState::Staged,
            GenerationState::Live,
            GenerationState::Deleted,
        ]
        .into_iter()
        .flat_map(move |state| self.get(state).iter().map(move |g| (state, g)))
    }

    pub fn len(&self) -> usize {
        self.staged.len() + self.live.len() + self.deleted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
