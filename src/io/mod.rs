//! I/O utilities for lev-bounds.
//!
//! Loads file contents into byte buffers, honoring a read limit and
//! memory mapping large inputs.

pub mod reader;

pub use reader::{FileReader, load};
