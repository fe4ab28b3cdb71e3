//! Command implementations.

pub mod check;
pub mod platforms;
pub mod resolve;
