//! Safe Rust bindings for a RocksDB-compatible embedded key-value engine.
//!
//! The engine does all the real work behind its C API. This crate is the
//! boundary layer: it loads the engine's shared library, resolves its entry
//! points, and wraps every native resource (options, environments, caches,
//! comparators, write batches, databases) in a type that tracks handle
//! validity and guarantees exactly-once destruction.
//!
//! # Handle Lifecycle
//!
//! Every wrapper owns exactly one native handle. The handle is valid from
//! creation until the first `close()` or drop, whichever comes first;
//! release is idempotent, and racing releases (including the drop path) are
//! serialized atomically so the native destructor runs exactly once. Using
//! a wrapper after release fails with [`Error::UseAfterRelease`] rather
//! than touching freed engine state.
//!
//! Ownership at the boundary follows the engine's conventions per call:
//! most calls borrow their arguments, [`Options::set_comparator`] consumes
//! the comparator, and caches are shared through an engine-internal
//! reference count. Each convention is documented on the wrapper method and
//! on the raw entry point in [`sys`].
//!
//! # Thread Safety
//!
//! Wrappers may be shared across threads; release is safe to invoke
//! concurrently from any of them. Configuration methods take `&mut self`
//! because the engine's setter calls are not reentrant-safe.
//!
//! # Example
//!
//! ```no_run
//! use zippdb::{Db, Engine, Options, ReadOptions, WriteOptions};
//!
//! let engine = Engine::load_default()?;
//! let mut options = Options::new(&engine)?;
//! options.set_create_if_missing(true)?;
//!
//! let db = Db::open(&options, "/tmp/example-db")?;
//! db.put(&WriteOptions::new(&engine)?, b"key", b"value")?;
//! let value = db.get(&ReadOptions::new(&engine)?, b"key")?;
//! assert_eq!(value.as_deref(), Some(&b"value"[..]));
//! # Ok::<(), zippdb::Error>(())
//! ```

mod batch;
mod cache;
mod comparator;
mod config;
mod db;
mod engine;
mod env;
mod error;
mod handle;
mod options;
pub mod sys;

#[cfg(test)]
mod stub;

pub use batch::WriteBatch;
pub use cache::Cache;
pub use comparator::Comparator;
pub use config::DbConfig;
pub use db::Db;
pub use engine::{Engine, LIBRARY_ENV_VAR, default_library_name};
pub use env::{Env, EnvOptions};
pub use error::{Error, ResourceKind, Result};
pub use options::{Compression, Options, ReadOptions, WriteOptions};
