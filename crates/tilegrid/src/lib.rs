//! Dense N-dimensional array tiling.

pub use tilegrid_array as array;
pub use tilegrid_write as write;

/// One-stop imports for writing dense tiles.
pub mod prelude {
    pub use tilegrid_array::{
        ArraySchema, ArraySchemaBuilder, Attribute, CellOrder, Coord, Datatype, Dimension, Domain,
        QueryBuffer, QueryBuffers, SchemaError, Subarray, SubarrayError, Tile, TileError,
    };
    pub use tilegrid_write::{CopyPlan, DenseTiler, TilerError};
}
