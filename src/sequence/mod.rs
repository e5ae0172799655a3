//! A module containing [`Sequence`] and associated types.
//!
//! The operations on [`Sequence`] are spread across several files by concern, but they are all
//! inherent methods, so there is nothing extra to import. The other types here are the
//! continuation [`Signal`] returned by traversal callbacks, the [`Grid`] alias for two-dimensional
//! sequences and the error types for the two illegal-argument cases.

#[cfg(feature = "concurrent")]
mod concurrent;
mod error;
mod grid;
mod group;
mod index;
#[cfg(feature = "permute")]
mod permute;
mod query;
mod sequence;
mod set;
mod signal;
mod transform;
mod window;

#[cfg(test)]
mod tests;

#[cfg(feature = "concurrent")]
pub use concurrent::Cancellation;
pub use error::*;
pub use grid::Grid;
pub use sequence::*;
pub use signal::Signal;
