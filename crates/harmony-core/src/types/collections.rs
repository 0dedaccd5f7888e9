//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for a node's fills (usually one or two).
pub type SmallVec2<T> = SmallVec<[T; 2]>;
