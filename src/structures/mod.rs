//! The structures a formula is read into during a validation.
//!
//! - A formula is read into a stream of [tokens](token).
//! - The top level of a formula is read into [groups](group).
//! - Each group is read into [literals](literal).
//!
//! All are transient, and built and discarded within a single validation.

pub mod group;
pub mod literal;
pub mod token;
