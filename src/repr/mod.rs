//! Model data structures.

mod weights;

pub use weights::WeightStore;
