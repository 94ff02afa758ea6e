//! Command implementations.

pub mod demo;
pub mod keys;
pub mod show;
