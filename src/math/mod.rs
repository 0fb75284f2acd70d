//! Mathematical utilities for tile sizing

/// Greatest common divisor and divisor enumeration
pub mod arithmetic;
