//! Command implementations.

pub mod assemble;
