use derive_more::Display;

/// Failure building or validating an array schema.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum SchemaError {
    #[display("schema has no domain")]
    MissingDomain,
    #[display("domain has no dimensions")]
    EmptyDomain,
    #[display("dimension '{name}' has an empty domain (lo > hi)")]
    InvalidDomain { name: String },
    #[display("dimension '{name}' has a non-positive tile extent")]
    InvalidTileExtent { name: String },
    #[display(
        "dimension '{name}': the domain rounded up to whole tiles does not fit the coordinate type"
    )]
    DomainOverflow { name: String },
    #[display("schema has no attributes")]
    NoAttributes,
    #[display("duplicate attribute '{name}'")]
    DuplicateAttribute { name: String },
    #[display("attribute '{name}': fill value is {got} bytes, cell size is {expected}")]
    FillValueSize { name: String, got: u64, expected: u64 },
    #[display("tile cell count overflows u64")]
    TileTooLarge,
}

impl core::error::Error for SchemaError {}

/// Failure constructing a subarray.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum SubarrayError {
    #[display("subarray has {got} ranges, schema has {expected} dimensions")]
    DimensionCountMismatch { got: usize, expected: usize },
    #[display("range {dim} is empty (lo > hi)")]
    EmptyRange { dim: usize },
    #[display("range {dim} falls outside the array domain")]
    OutOfDomain { dim: usize },
}

impl core::error::Error for SubarrayError {}

/// Failure initializing or writing a tile buffer.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum TileError {
    #[display("tile size {size} is not a multiple of cell size {cell_size}")]
    SizeNotAligned { size: u64, cell_size: u64 },
    #[display("tile write of {nbytes} bytes at offset {offset} exceeds tile size {size}")]
    WriteOverflow { offset: u64, nbytes: u64, size: u64 },
    #[display("tile was not initialized")]
    Uninitialized,
}

impl core::error::Error for TileError {}
