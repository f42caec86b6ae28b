//! Integer conversion utilities
//!
//! This module groups explicit conversion implementations between the
//! fixed-size `U256` primitive and native integer and byte types.
//!
//! Each submodule is responsible for conversions to and from a specific
//! integer width, following these principles:
//! - widening conversions are infallible `From` impls
//! - narrowing conversions are `TryFrom` impls failing with
//!   `U256Error::DoesNotFit` instead of truncating
//! - word arrays are little-endian (least significant word first), byte
//!   arrays state their endianness explicitly

mod u128;
mod u32;
mod u64;
mod u8;
