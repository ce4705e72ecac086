use crate::{ArraySchema, CellOrder, Coord, SubarrayError};

/// A single rectangular region of interest inside an array domain, together
/// with the order its cells are laid out in the caller's query buffers.
#[derive(Clone, Debug)]
pub struct Subarray<'a, T: Coord> {
    schema: &'a ArraySchema<T>,
    ranges: Vec<[T; 2]>,
    layout: CellOrder,
}

impl<'a, T: Coord> Subarray<'a, T> {
    /// Create a subarray from one inclusive `[lo, hi]` range per dimension.
    pub fn new(
        schema: &'a ArraySchema<T>,
        ranges: &[[T; 2]],
        layout: CellOrder,
    ) -> Result<Self, SubarrayError> {
        if ranges.len() != schema.dim_num() {
            return Err(SubarrayError::DimensionCountMismatch {
                got: ranges.len(),
                expected: schema.dim_num(),
            });
        }
        for (d, range) in ranges.iter().enumerate() {
            if range[0] > range[1] {
                return Err(SubarrayError::EmptyRange { dim: d });
            }
            let dim = schema.domain().dimension(d);
            if range[0] < dim.domain_lo() || range[1] > dim.domain_hi() {
                return Err(SubarrayError::OutOfDomain { dim: d });
            }
        }
        Ok(Self {
            schema,
            ranges: ranges.to_vec(),
            layout,
        })
    }

    pub fn schema(&self) -> &'a ArraySchema<T> {
        self.schema
    }

    pub fn layout(&self) -> CellOrder {
        self.layout
    }

    pub fn dim_num(&self) -> usize {
        self.ranges.len()
    }

    pub fn range(&self, d: usize) -> [T; 2] {
        self.ranges[d]
    }

    pub fn ranges(&self) -> &[[T; 2]] {
        &self.ranges
    }

    /// Width of the subarray along dimension `d`, in cells.
    pub fn extent_el(&self, d: usize) -> u64 {
        self.ranges[d][1].offset_from(self.ranges[d][0]) + 1
    }

    /// Total cell count of the subarray.
    pub fn cell_num(&self) -> u64 {
        (0..self.dim_num()).map(|d| self.extent_el(d)).product()
    }
}
