//! Exact integer square roots for fixed-width binary integers
//!
//! This crate computes the *nearest integer root* of a binary integer: the
//! largest `r` with `r * r <= value`. It never touches floating point,
//! which silently loses precision above 53 significant bits, and it never
//! relies on a wider scratch type, so it stays exact at the maximum value
//! of the widest type it runs on.
//!
//! # Module overview
//!
//! - `numerics`  
//!   The root algorithm and the bit-width helper, generic over the
//!   [`BinaryInteger`](numerics::BinaryInteger) capability set. Implemented
//!   for every native integer and for the crate's own wide primitives.
//!
//! - `primitives`  
//!   Fixed-size integers wider than the native ones (`U256`), with wrapping
//!   arithmetic and explicit big-endian conversions.
//!
//! - `validation`  
//!   Tools for checking roots in bulk: the `(value, root, root²)` record,
//!   value generators around powers of two, and a multi-threaded exhaustive
//!   sweep.
//!
//! # Design goals
//!
//! - No heap allocations in the algorithm
//! - No floating point, no wider intermediate type
//! - Pure functions, safe to call from any thread
//! - No dependencies

pub mod numerics;
pub mod primitives;
pub mod validation;
