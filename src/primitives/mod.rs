//! Primitive types
//!
//! This module defines the low-level primitive types of the crate.
//!
//! Primitives are simple, fixed-size building blocks that provide
//! well-defined semantics and predictable behavior. They are intentionally
//! minimal and do not attempt to replicate full standard library
//! abstractions or full-featured big-integer libraries.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer with wrapping
//!   arithmetic, rotation and a hexadecimal text form

mod u256;

/// Fixed-size unsigned integer primitive and its error type.
pub use u256::{U256, U256Error};
