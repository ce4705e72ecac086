use crate::{Coord, Datatype, SchemaError};

/// One dimension of an array domain: an inclusive coordinate range plus the
/// tile extent that induces the regular tile grid anchored at the low edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dimension<T: Coord> {
    name: String,
    domain: [T; 2],
    extent: T,
}

impl<T: Coord> Dimension<T> {
    /// Create a dimension over the inclusive `domain` with tiles of `extent`
    /// cells.
    ///
    /// The domain rounded up to a whole number of tiles must still be
    /// representable in `T`; edge tiles always span a full extent, so tile
    /// coordinates past the domain's high edge show up in ordinary geometry.
    pub fn new(
        name: impl Into<String>,
        domain: [T; 2],
        extent: T,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        if domain[0] > domain[1] {
            return Err(SchemaError::InvalidDomain { name });
        }
        if extent <= T::zero() {
            return Err(SchemaError::InvalidTileExtent { name });
        }

        let span = domain[1].offset_from(domain[0]);
        let extent_el = extent.offset_from(T::zero());
        let full_tiles = span / extent_el + 1;
        let aligned_span = full_tiles
            .checked_mul(extent_el)
            .ok_or(SchemaError::DomainOverflow { name: name.clone() })?
            - 1;
        if aligned_span > T::max_value().offset_from(domain[0]) {
            return Err(SchemaError::DomainOverflow { name });
        }

        Ok(Self {
            name,
            domain,
            extent,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn datatype(&self) -> Datatype {
        T::DATATYPE
    }

    pub fn domain_lo(&self) -> T {
        self.domain[0]
    }

    pub fn domain_hi(&self) -> T {
        self.domain[1]
    }

    pub fn tile_extent(&self) -> T {
        self.extent
    }

    /// Tile extent as a cell count.
    pub fn tile_extent_el(&self) -> u64 {
        self.extent.offset_from(T::zero())
    }

    /// Index of the tile containing `coord`, counting from the domain low
    /// edge.
    pub fn tile_idx(&self, coord: T) -> u64 {
        coord.offset_from(self.domain[0]) / self.tile_extent_el()
    }

    /// Number of tiles of this dimension's grid intersecting the inclusive
    /// `range`.
    pub fn tile_num_in_range(&self, range: [T; 2]) -> u64 {
        self.tile_idx(range[1]) - self.tile_idx(range[0]) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_domain() {
        let err = Dimension::new("d", [10i32, 1], 5).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDomain { .. }));
    }

    #[test]
    fn rejects_zero_extent() {
        let err = Dimension::new("d", [1i32, 10], 0).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidTileExtent { .. }));
    }

    #[test]
    fn rejects_unrepresentable_edge_tile() {
        // Last tile would cover [121, 130], past i8::MAX.
        let err = Dimension::new("d", [1i8, 127], 10).unwrap_err();
        assert!(matches!(err, SchemaError::DomainOverflow { .. }));

        // A 5-wide grid over [1, 125] ends exactly at 125.
        assert!(Dimension::new("d", [1i8, 125], 5).is_ok());
    }

    #[test]
    fn tile_idx_signed() {
        let dim = Dimension::new("d", [-4i32, 5], 5).unwrap();
        assert_eq!(dim.tile_idx(-4), 0);
        assert_eq!(dim.tile_idx(0), 0);
        assert_eq!(dim.tile_idx(1), 1);
        assert_eq!(dim.tile_idx(5), 1);
    }

    #[test]
    fn tile_num_in_range() {
        let dim = Dimension::new("d", [1i32, 30], 10).unwrap();
        assert_eq!(dim.tile_num_in_range([18, 22]), 2);
        assert_eq!(dim.tile_num_in_range([1, 30]), 3);
        assert_eq!(dim.tile_num_in_range([11, 20]), 1);
    }
}
