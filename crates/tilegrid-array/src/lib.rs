//! Array data model for dense tiling.
//!
//! Everything a dense write consumes lives here: the schema (dimensions,
//! domains, attributes with fill values, tile order), the subarray being
//! written, the caller's query buffers, and the writable [`Tile`] the writer
//! materializes into.

mod attribute;
pub use attribute::*;

mod buffer;
pub use buffer::*;

mod coord;
pub use coord::*;

mod datatype;
pub use datatype::*;

mod dimension;
pub use dimension::*;

mod domain;
pub use domain::*;

mod error;
pub use error::*;

mod order;
pub use order::*;

mod schema;
pub use schema::*;

mod subarray;
pub use subarray::*;

mod tile;
pub use tile::*;
