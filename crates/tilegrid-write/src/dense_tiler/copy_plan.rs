use tilegrid_array::{CellOrder, Coord};

use super::DenseTiler;

/// How to materialize the overlap between one tile and the subarray: a
/// contiguous run length plus an iteration box over the dimensions the run
/// could not absorb.
///
/// `dim_ranges` is listed outermost first with inclusive bounds and a low
/// bound of 0; entry `i` pairs with index `i` of both stride vectors. A fully
/// fused plan keeps the single sentinel range `[0, 0]` so the copy loop runs
/// exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyPlan {
    /// Cells moved by each innermost contiguous copy.
    pub copy_el: u64,
    /// Inclusive iteration ranges over the retained dimensions.
    pub dim_ranges: Vec<[u64; 2]>,
    /// Start of the overlap in the source buffer, in cells.
    pub sub_start_el: u64,
    /// Start of the overlap in the destination tile, in cells.
    pub tile_start_el: u64,
    /// Source buffer strides, index-aligned with `dim_ranges`.
    pub sub_strides_el: Vec<u64>,
    /// Destination tile strides, index-aligned with `dim_ranges`.
    pub tile_strides_el: Vec<u64>,
}

impl<T: Coord> DenseTiler<'_, T> {
    /// Compute the copy plan of tile `id`.
    ///
    /// A dimension is absorbed into the contiguous run only when the next
    /// inner dimension's overlap spans both the full tile extent (so tile
    /// storage stays contiguous across it) and the full subarray extent (so
    /// buffer storage does too). With differing tile and buffer orders no
    /// run longer than one cell is contiguous on both sides.
    pub fn copy_plan(&self, id: u64) -> CopyPlan {
        assert!(id < self.tile_num(), "tile id {id} out of range");

        let dim_num = self.schema().dim_num();
        let tile_order = self.schema().tile_order();
        let sub_order = self.subarray().layout();
        let sub = self.subarray().ranges();
        let tile_sub = self.tile_subarray(id);

        // Overlap of the subarray with this tile, clipped per dimension.
        let sub_in_tile: Vec<[T; 2]> = (0..dim_num)
            .map(|d| {
                [
                    sub[d][0].max(tile_sub[d][0]),
                    sub[d][1].min(tile_sub[d][1]),
                ]
            })
            .collect();
        let widths: Vec<u64> = sub_in_tile
            .iter()
            .map(|r| r[1].offset_from(r[0]) + 1)
            .collect();

        let sub_start_el: u64 = (0..dim_num)
            .map(|d| sub_in_tile[d][0].offset_from(sub[d][0]) * self.sub_strides_el()[d])
            .sum();
        let tile_start_el: u64 = (0..dim_num)
            .map(|d| sub_in_tile[d][0].offset_from(tile_sub[d][0]) * self.tile_strides_el()[d])
            .sum();

        let full = |d: usize| {
            widths[d] == self.schema().domain().dimension(d).tile_extent_el()
                && sub_in_tile[d] == sub[d]
        };

        let mut sub_strides_el = self.sub_strides_el().to_vec();
        let mut tile_strides_el = self.tile_strides_el().to_vec();

        let (copy_el, dim_ranges) = if dim_num == 1 {
            (widths[0], vec![[0, 0]])
        } else if sub_order != tile_order {
            (1, widths.iter().map(|w| [0, w - 1]).collect())
        } else if tile_order == CellOrder::RowMajor {
            let mut copy_el = widths[dim_num - 1];
            let mut first_in_run = dim_num - 1;
            for k in (0..dim_num - 1).rev() {
                if !full(k + 1) {
                    break;
                }
                copy_el *= widths[k];
                first_in_run = k;
            }
            let dim_ranges: Vec<[u64; 2]> =
                widths[..first_in_run].iter().map(|w| [0, w - 1]).collect();
            (copy_el, dim_ranges)
        } else {
            let mut copy_el = widths[0];
            let mut last_in_run = 0;
            for k in 1..dim_num {
                if !full(k - 1) {
                    break;
                }
                copy_el *= widths[k];
                last_in_run = k;
            }
            // Emitted outermost first, so the strides flip to stay
            // index-aligned with the iteration.
            let dim_ranges: Vec<[u64; 2]> = widths[last_in_run + 1..]
                .iter()
                .rev()
                .map(|w| [0, w - 1])
                .collect();
            sub_strides_el.reverse();
            tile_strides_el.reverse();
            (copy_el, dim_ranges)
        };

        let dim_ranges = if dim_ranges.is_empty() {
            vec![[0, 0]]
        } else {
            dim_ranges
        };

        CopyPlan {
            copy_el,
            dim_ranges,
            sub_start_el,
            tile_start_el,
            sub_strides_el,
            tile_strides_el,
        }
    }
}
