use derive_more::Display;
use tilegrid_array::TileError;

/// Failure producing a tile for a dense write.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum TilerError {
    #[display("tile id {id} is out of range ({tile_num} tiles intersect the subarray)")]
    InvalidTileId { id: u64, tile_num: u64 },
    #[display("attribute '{name}' is not part of this write")]
    UnknownAttribute { name: String },
    #[display("attribute '{name}' is variable-sized; dense tiling handles fixed-size cells only")]
    VarSizedNotSupported { name: String },
    #[display("initializing tile: {_0}")]
    TileInit(TileError),
    #[display("writing tile: {_0}")]
    TileWrite(TileError),
}

impl core::error::Error for TilerError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            TilerError::TileInit(e) | TilerError::TileWrite(e) => Some(e),
            _ => None,
        }
    }
}
