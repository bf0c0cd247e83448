//! Integration tests for the magpie crates.
//!
//! - [`reference`] - Shared colour pairs and single-pixel runners
//! - `blend_vectors` - Reference colours for every blend mode and flag
//! - `composite_vectors` - Reference colours for the Porter-Duff operators
//! - `scenarios` - End-to-end draws through the high-level API
//!
//! Every vector runs twice: once on straight buffers and once on
//! premultiplied copies of the same colours.

pub mod reference;

#[cfg(test)]
mod blend_vectors;
#[cfg(test)]
mod composite_vectors;
