//! Core fractional-indexing allocator: order keys, the pairwise `between`
//! generator, boundary generators, bulk runs, validation, placement helpers,
//! and actor tags for callers that need unique keys.
//!
//! Every operation is a pure function over its input keys. Nothing here keeps
//! state between calls, so the allocator is safe to call from any number of
//! concurrent clients; two clients holding the same neighbors receive the same
//! key unless they tag it (see [`tag`]).
#![warn(unreachable_pub)]

pub mod between;
pub mod boundary;
pub mod bulk;
pub mod error;
pub mod key;
pub mod placement;
pub mod tag;
pub mod validate;

mod midpoint;


///
/// CONSTANTS
///

/// Key assigned to the first element of an empty list.
pub const INITIAL_KEY: &str = "a0";

pub use between::{initial, key_between};
pub use boundary::{key_after, key_before};
pub use bulk::generate_many;
pub use error::{ErrorClass, KeyError, SequenceError};
pub use key::{OrderKey, compare};
pub use placement::{insert_after, insert_at, move_to};
pub use tag::{ActorTag, TaggedAllocator};
pub use validate::{check, check_sequence, has_room, is_valid};

///
/// Prelude
///
/// Domain vocabulary only: the key type, the generators, and the validator.
///

pub mod prelude {
    pub use crate::{
        OrderKey, generate_many, is_valid, key_after, key_before, key_between,
        tag::{ActorTag, TaggedAllocator},
    };
}
