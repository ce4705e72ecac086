use log::{debug, trace};
use tilegrid_array::{
    ArraySchema, Attribute, CellOrder, Coord, FORMAT_VERSION, QueryBuffers, Subarray, Tile,
};

use crate::TilerError;

mod copy_plan;
pub use copy_plan::CopyPlan;


/// Cells expanded into one fill batch at most. A knob, not a contract.
const FILL_BATCH_CELLS: u64 = 1_000_000;

/// Decomposes one dense subarray write into tiles of the array's global grid.
///
/// All geometry is fixed at construction; afterwards the tiler is read-only,
/// so distinct tile ids can be materialized from multiple threads as long as
/// each call owns its destination [`Tile`].
///
/// Three coordinate systems meet here: global domain coordinates (`T`),
/// subarray-relative positions in the query buffers, and tile-local positions
/// in the output. The precomputed element strides translate between them
/// under whichever mix of row- and column-major orders the schema and the
/// subarray use.
#[derive(Debug)]
pub struct DenseTiler<'a, T: Coord> {
    schema: &'a ArraySchema<T>,
    subarray: &'a Subarray<'a, T>,
    buffers: &'a QueryBuffers<'a>,

    /// Number of global tiles intersecting the subarray.
    tile_num: u64,
    /// Grid coordinates of the first tile intersecting the subarray.
    first_sub_tile_coords: Vec<u64>,
    /// Element strides of the cell layout inside a tile.
    tile_strides_el: Vec<u64>,
    /// Element strides of the cell layout inside the query buffers.
    sub_strides_el: Vec<u64>,
    /// Per-dimension divisors turning a linear tile id into grid coordinates.
    sub_tile_coord_offsets: Vec<u64>,
}

impl<'a, T: Coord> DenseTiler<'a, T> {
    /// Create a tiler for one write.
    ///
    /// Fails if `buffers` names an attribute the schema does not have. A
    /// buffer whose size disagrees with the subarray is a caller bug and
    /// panics.
    pub fn new(
        buffers: &'a QueryBuffers<'a>,
        subarray: &'a Subarray<'a, T>,
    ) -> Result<Self, TilerError> {
        let schema = subarray.schema();

        let sub_cell_num = subarray.cell_num();
        for (name, buffer) in buffers.iter() {
            let attr = schema
                .attribute(name)
                .ok_or_else(|| TilerError::UnknownAttribute {
                    name: name.to_string(),
                })?;
            if !attr.var_size() {
                let expected = sub_cell_num * attr.cell_size();
                assert_eq!(
                    buffer.size(),
                    expected,
                    "buffer '{name}' holds {} bytes, the subarray needs {expected}",
                    buffer.size(),
                );
            }
        }

        let dim_num = schema.dim_num();
        let ranges = subarray.ranges();
        let dims = schema.domain().dimensions();

        let tile_num = schema.tile_num_in_range(ranges);
        let first_sub_tile_coords: Vec<u64> = (0..dim_num)
            .map(|d| dims[d].tile_idx(ranges[d][0]))
            .collect();

        let tile_extents: Vec<u64> = dims.iter().map(|dim| dim.tile_extent_el()).collect();
        let sub_extents: Vec<u64> = (0..dim_num).map(|d| subarray.extent_el(d)).collect();
        let tiles_in_sub: Vec<u64> = (0..dim_num)
            .map(|d| dims[d].tile_num_in_range(ranges[d]))
            .collect();

        let tile_strides_el = layout_strides(&tile_extents, schema.tile_order());
        let sub_strides_el = layout_strides(&sub_extents, subarray.layout());
        let sub_tile_coord_offsets = layout_strides(&tiles_in_sub, schema.tile_order());

        debug!("dense tiler over {dim_num} dims: {tile_num} tiles intersect the subarray");

        Ok(Self {
            schema,
            subarray,
            buffers,
            tile_num,
            first_sub_tile_coords,
            tile_strides_el,
            sub_strides_el,
            sub_tile_coord_offsets,
        })
    }

    pub fn schema(&self) -> &'a ArraySchema<T> {
        self.schema
    }

    pub fn subarray(&self) -> &'a Subarray<'a, T> {
        self.subarray
    }

    /// Number of global tiles intersecting the subarray.
    pub fn tile_num(&self) -> u64 {
        self.tile_num
    }

    pub fn first_sub_tile_coords(&self) -> &[u64] {
        &self.first_sub_tile_coords
    }

    pub fn tile_strides_el(&self) -> &[u64] {
        &self.tile_strides_el
    }

    pub fn sub_strides_el(&self) -> &[u64] {
        &self.sub_strides_el
    }

    pub fn sub_tile_coord_offsets(&self) -> &[u64] {
        &self.sub_tile_coord_offsets
    }

    /// Grid coordinates of tile `id` inside the subarray's tile domain.
    pub fn tile_coords_in_sub(&self, id: u64) -> Vec<u64> {
        assert!(id < self.tile_num, "tile id {id} out of range");
        let dim_num = self.schema.dim_num();
        let offsets = &self.sub_tile_coord_offsets;
        let mut coords = vec![0u64; dim_num];
        let mut rem = id;
        // Offsets decrease along the iteration direction, so peeling with
        // div/mod starts from the slowest axis of the tile order.
        match self.schema.tile_order() {
            CellOrder::RowMajor => {
                for d in 0..dim_num {
                    coords[d] = rem / offsets[d];
                    rem %= offsets[d];
                }
            }
            CellOrder::ColMajor => {
                for d in (0..dim_num).rev() {
                    coords[d] = rem / offsets[d];
                    rem %= offsets[d];
                }
            }
        }
        coords
    }

    /// Global coordinate box of tile `id`.
    ///
    /// Tiles always span a full extent; the box may reach past the domain's
    /// high edge, and cells out there end up fill-valued.
    pub fn tile_subarray(&self, id: u64) -> Vec<[T; 2]> {
        let coords = self.tile_coords_in_sub(id);
        let dims = self.schema.domain().dimensions();
        (0..self.schema.dim_num())
            .map(|d| {
                let ext = dims[d].tile_extent_el();
                let lo = dims[d]
                    .domain_lo()
                    .offset_by((self.first_sub_tile_coords[d] + coords[d]) * ext);
                [lo, lo.offset_by(ext - 1)]
            })
            .collect()
    }

    /// Materialize tile `id` of attribute `name` into `tile`.
    ///
    /// The tile is initialized to one full extent of cells, filled with the
    /// attribute's fill value, then overlaid with the part of the query
    /// buffer that falls inside the tile, one contiguous slab per innermost
    /// iteration of the copy plan. The write cursor is reset before
    /// returning.
    pub fn get_tile(&self, id: u64, name: &str, tile: &mut Tile) -> Result<(), TilerError> {
        if id >= self.tile_num {
            return Err(TilerError::InvalidTileId {
                id,
                tile_num: self.tile_num,
            });
        }
        let attr = self
            .schema
            .attribute(name)
            .ok_or_else(|| TilerError::UnknownAttribute {
                name: name.to_string(),
            })?;
        if attr.var_size() {
            return Err(TilerError::VarSizedNotSupported {
                name: name.to_string(),
            });
        }
        let buffer = self
            .buffers
            .get(name)
            .ok_or_else(|| TilerError::UnknownAttribute {
                name: name.to_string(),
            })?;

        trace!("materializing tile {id} for attribute '{name}'");

        let cell_size = attr.cell_size();
        let cell_num = self.schema.cells_per_tile();
        tile.init_unfiltered(FORMAT_VERSION, attr.datatype(), cell_num * cell_size, cell_size)
            .map_err(TilerError::TileInit)?;

        fill_tile(attr, cell_num, tile)?;
        copy_overlap(&self.copy_plan(id), buffer.bytes(), cell_size, tile)?;

        tile.reset_offset();
        Ok(())
    }
}

/// Element strides of a box with the given per-dimension `extents`: the
/// fastest axis of `order` gets stride 1 and strides grow toward the slowest.
fn layout_strides(extents: &[u64], order: CellOrder) -> Vec<u64> {
    let n = extents.len();
    let mut strides = vec![1u64; n];
    match order {
        CellOrder::RowMajor => {
            for d in (0..n - 1).rev() {
                strides[d] = strides[d + 1] * extents[d + 1];
            }
        }
        CellOrder::ColMajor => {
            for d in 1..n {
                strides[d] = strides[d - 1] * extents[d - 1];
            }
        }
    }
    strides
}

/// Overwrite every cell of `tile` with the attribute's fill value.
fn fill_tile(attr: &Attribute, cell_num: u64, tile: &mut Tile) -> Result<(), TilerError> {
    let fill = attr.fill_value();
    // Freshly initialized tile storage is already zeroed.
    if fill.iter().all(|&b| b == 0) {
        return Ok(());
    }

    let batch_cells = cell_num.min(FILL_BATCH_CELLS);
    let batch = fill.repeat(batch_cells as usize);
    let mut remaining = cell_num;
    while remaining > 0 {
        let n = remaining.min(batch_cells);
        tile.write(&batch[..(n as usize) * fill.len()])
            .map_err(TilerError::TileWrite)?;
        remaining -= n;
    }
    Ok(())
}

/// Drive the copy plan: a row-major odometer over `dim_ranges`, one
/// positioned write of `copy_el` cells per innermost step.
///
/// When a dimension wraps, the next dimension out advances by its stride and
/// every dimension further in restarts from that new offset.
fn copy_overlap(
    plan: &CopyPlan,
    src: &[u8],
    cell_size: u64,
    tile: &mut Tile,
) -> Result<(), TilerError> {
    let nd = plan.dim_ranges.len();
    let copy_nbytes = (plan.copy_el * cell_size) as usize;

    let mut cell = vec![0u64; nd];
    let mut sub_offsets = vec![plan.sub_start_el * cell_size; nd];
    let mut tile_offsets = vec![plan.tile_start_el * cell_size; nd];

    loop {
        let start = sub_offsets[nd - 1] as usize;
        tile.write_at(&src[start..start + copy_nbytes], tile_offsets[nd - 1])
            .map_err(TilerError::TileWrite)?;

        let mut d = nd as i64 - 1;
        while d >= 0 {
            let du = d as usize;
            cell[du] += 1;
            if cell[du] <= plan.dim_ranges[du][1] {
                sub_offsets[du] += plan.sub_strides_el[du] * cell_size;
                tile_offsets[du] += plan.tile_strides_el[du] * cell_size;
                break;
            }
            cell[du] = 0;
            d -= 1;
        }
        if d < 0 {
            break;
        }
        for i in (d as usize + 1)..nd {
            sub_offsets[i] = sub_offsets[i - 1];
            tile_offsets[i] = tile_offsets[i - 1];
        }
    }
    Ok(())
}
