//! Annotated schema model (Intermediate Representation).
//!
//! This module defines the module tree that the upstream YANG toolchain
//! exports after parsing and validation. Renderers walk these values and
//! never look at YANG source text.

mod module;
mod statement;
mod types;

pub use module::*;
pub use statement::*;
pub use types::*;
