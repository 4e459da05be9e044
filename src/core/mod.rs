//! Core building blocks for lev-bounds.
//!
//! This module contains the byte buffer that holds each input and the
//! overflow-checked arithmetic every size computation goes through.

pub mod buffer;
pub mod checked;

pub use buffer::ByteBuffer;
