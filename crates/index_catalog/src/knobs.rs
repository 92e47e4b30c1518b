//! Tunable limits for catalog validation.
//!
//! Every knob can be overridden with an environment variable of the same name.
//! Each knob documents what it bounds so an operator can adjust it safely.
#![deny(missing_docs)]

use std::sync::LazyLock;

use cmd_util::env::env_config;

/// Maximum number of synonym mappings a single search index may declare.
/// 0 -> unlimited.
pub static MAX_SYNONYM_MAPPINGS_PER_INDEX: LazyLock<Option<u32>> = LazyLock::new(|| {
    match env_config("MAX_SYNONYM_MAPPINGS_PER_INDEX", 0u32) {
        0 => None,
        n => Some(n),
    }
});

/// Upper bound on the length of an index name, in bytes.
pub static MAX_INDEX_NAME_LENGTH: LazyLock<usize> =
    LazyLock::new(|| env_config("MAX_INDEX_NAME_LENGTH", 64));

/// Upper bound on the length of a database name, in bytes.
pub static MAX_DATABASE_NAME_LENGTH: LazyLock<usize> =
    LazyLock::new(|| env_config("MAX_DATABASE_NAME_LENGTH", 64));
