//! Shared utilities

pub mod diagnostic;
pub mod fs;

pub use diagnostic::Diagnostic;
pub use fs::{FileProbe, RealFs};
