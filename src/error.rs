//! Error handling for the binding layer.
//!
//! Every fallible operation in this crate returns [`Error`]. The taxonomy is
//! deliberately small: allocation failures reported by the native engine,
//! use-after-release programmer errors, engine-reported operation failures,
//! and the handful of translation problems that can occur at the boundary.

use thiserror::Error;

/// The native resource kinds managed by this crate.
///
/// Each kind corresponds to one `create`/`destroy` pair in the engine's
/// C API and one wrapper type on the Rust side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// An open database (`rocksdb_t`).
    Db,
    /// Database options (`rocksdb_options_t`).
    Options,
    /// Read options (`rocksdb_readoptions_t`).
    ReadOptions,
    /// Write options (`rocksdb_writeoptions_t`).
    WriteOptions,
    /// Environment options (`rocksdb_envoptions_t`).
    EnvOptions,
    /// An environment (`rocksdb_env_t`).
    Env,
    /// A block cache (`rocksdb_cache_t`).
    Cache,
    /// A key comparator (`rocksdb_comparator_t`).
    Comparator,
    /// A write batch (`rocksdb_writebatch_t`).
    WriteBatch,
}

impl ResourceKind {
    fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Db => "database",
            ResourceKind::Options => "options",
            ResourceKind::ReadOptions => "read options",
            ResourceKind::WriteOptions => "write options",
            ResourceKind::EnvOptions => "env options",
            ResourceKind::Env => "env",
            ResourceKind::Cache => "cache",
            ResourceKind::Comparator => "comparator",
            ResourceKind::WriteBatch => "write batch",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the binding layer.
#[derive(Debug, Error)]
pub enum Error {
    /// The native factory returned its failure sentinel (a null handle).
    ///
    /// Local to the failed creation; existing wrappers are unaffected.
    /// Retrying is left to the caller.
    #[error("native allocation failed for {0}")]
    Allocation(ResourceKind),

    /// A wrapper was used after its handle had been released.
    ///
    /// This is a programmer error and is reported loudly rather than
    /// silently ignored. Only release itself is exempt: releasing an
    /// already-released wrapper is a no-op by design.
    #[error("{0} handle used after release")]
    UseAfterRelease(ResourceKind),

    /// The engine reported an operation failure through its `errptr`
    /// out-parameter.
    #[error("engine error: {0}")]
    Engine(String),

    /// The engine shared library could not be loaded.
    #[error("failed to load engine library: {0}")]
    LibraryLoad(String),

    /// A required symbol is missing from the engine library.
    #[error("missing symbol `{name}` in engine library: {reason}")]
    MissingSymbol {
        /// The unresolved symbol name.
        name: String,
        /// The loader's explanation.
        reason: String,
    },

    /// A path could not be passed to the engine (interior NUL byte).
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// A configuration document could not be parsed or applied.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
