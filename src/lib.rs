//! This crate is a single, generic vocabulary of sequence operations: the kind of thing that ends
//! up copy-pasted once per element type when a language can't express it generically.
//!
//! # Purpose
//! Everything revolves around [`Sequence<T>`](sequence::Sequence), an owned, ordered and resizable
//! collection, and a flat set of operations over it: queries (`all`, `any`, `count`, ...),
//! transforms (`map`, `filter`, `fold`, ...), index manipulation with well-defined clamping,
//! quadratic set-like operations driven by a caller-supplied equality, grouping, windowing,
//! permutation and a bounded-concurrency traversal.
//!
//! Because the implementation is generic, a sequence of sequences
//! ([`Grid<T>`](sequence::Grid)) gets every operation for free. This is the natural output of
//! `group`, `partition`, `split_at`, `unzip` and `permute`.
//!
//! # Method
//! [`Sequence`] implements [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which saves
//! writing the more repetitive slice functionality again. Operations are split into two kinds:
//! - Pure operations borrow the sequence and return a new, independently owned one. Elements are
//!   cloned (a shallow copy as far as `T` is concerned).
//! - Mutating operations take `&mut self` and replace the contents in place.
//!
//! Nothing here hashes or orders elements implicitly. Equality, ordering and grouping keys are all
//! supplied per call.
//!
//! # Error Handling
//! Out-of-range indices are never an error. Every index-based operation has a defined clamp or
//! no-op behavior instead. Only two things are considered illegal arguments: a negative worker
//! count for [`for_each_c`](sequence::Sequence::for_each_c) and permuting a sequence whose
//! permutation count doesn't fit in an [`i64`]. Both are available as a `try_` method returning a
//! strongly typed error and as a plain method which panics with that error's message.
//!
//! # Features
//! - `concurrent`: the bounded worker pool behind `for_each_c`.
//! - `permute`: permutation counting and generation, which pulls in `ibig` for arbitrary
//!   precision factorials.
//!
//! Both are enabled by default.
//!
//! [`Sequence`]: sequence::Sequence

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod sequence;

pub(crate) mod util;
