//! ## Crate layout
//! - `core`: order keys, the pairwise and bulk generators, validation,
//!   placement helpers, and actor tags.
//! - `primitives`: the 62-symbol alphabet and its digit codec.
//! - `error`: the public error type with a stable kind taxonomy.
//!
//! The `prelude` module carries what list-owning code needs to allocate keys.

pub use fracdex_core as core;
pub use fracdex_primitives as primitives;

pub mod error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, ErrorKind};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        INITIAL_KEY, OrderKey, check_sequence, compare, generate_many, initial, insert_after,
        insert_at, is_valid, key_after, key_before, key_between, move_to,
        tag::{ActorTag, TaggedAllocator},
    };
    pub use crate::error::{Error, ErrorKind};
}
