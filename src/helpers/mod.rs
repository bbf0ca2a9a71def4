pub mod constructors;
pub(crate) mod collect;
pub(crate) mod elements;
pub(crate) mod terminal;

// Only re-export files with top-level functions
pub use constructors::*;
