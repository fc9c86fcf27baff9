//! Unification and merge engines.

mod join;
mod merge;
mod unify;

pub use join::{JoinHow, JoinKeys, MergeSpec, PLANET_KEY};
pub use merge::merge_tables;
pub use unify::unify;
