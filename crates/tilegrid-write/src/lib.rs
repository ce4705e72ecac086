//! Dense-write tiling.
//!
//! The writer half of a dense write pipeline: given an array schema, a unary
//! subarray, and one contiguous query buffer per attribute, [`DenseTiler`]
//! decomposes the write into fixed-shape tiles aligned to the array's global
//! tile grid and materializes each (tile, attribute) payload on demand.

mod dense_tiler;
pub use dense_tiler::*;

mod error;
pub use error::*;
