use crate::{Attribute, CellOrder, Coord, Datatype, Domain, SchemaError};

/// Immutable description of a dense array: its domain, its attributes, and
/// the cell order of tile storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArraySchema<T: Coord> {
    domain: Domain<T>,
    attributes: Vec<Attribute>,
    tile_order: CellOrder,
    cells_per_tile: u64,
}

impl<T: Coord> ArraySchema<T> {
    pub fn builder() -> ArraySchemaBuilder<T> {
        ArraySchemaBuilder::default()
    }

    pub fn domain(&self) -> &Domain<T> {
        &self.domain
    }

    pub fn dim_num(&self) -> usize {
        self.domain.dim_num()
    }

    pub fn tile_order(&self) -> CellOrder {
        self.tile_order
    }

    /// Number of cells in one tile, the product of the tile extents.
    pub fn cells_per_tile(&self) -> u64 {
        self.cells_per_tile
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    pub fn is_attr(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn cell_size(&self, name: &str) -> Option<u64> {
        self.attribute(name).map(|a| a.cell_size())
    }

    pub fn datatype(&self, name: &str) -> Option<Datatype> {
        self.attribute(name).map(|a| a.datatype())
    }

    /// Number of tiles of the global grid intersecting the inclusive N-D
    /// `range`, one `[lo, hi]` pair per dimension.
    pub fn tile_num_in_range(&self, range: &[[T; 2]]) -> u64 {
        assert_eq!(range.len(), self.dim_num(), "range rank mismatch");
        range
            .iter()
            .zip(self.domain.dimensions())
            .map(|(r, dim)| dim.tile_num_in_range(*r))
            .product()
    }
}

/// Builder for [ArraySchema].
#[derive(Debug)]
pub struct ArraySchemaBuilder<T: Coord> {
    domain: Option<Domain<T>>,
    attributes: Vec<Attribute>,
    tile_order: CellOrder,
}

impl<T: Coord> Default for ArraySchemaBuilder<T> {
    fn default() -> Self {
        Self {
            domain: None,
            attributes: Vec::new(),
            tile_order: CellOrder::RowMajor,
        }
    }
}

impl<T: Coord> ArraySchemaBuilder<T> {
    pub fn domain(mut self, domain: Domain<T>) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn tile_order(mut self, tile_order: CellOrder) -> Self {
        self.tile_order = tile_order;
        self
    }

    pub fn build(self) -> Result<ArraySchema<T>, SchemaError> {
        let domain = self.domain.ok_or(SchemaError::MissingDomain)?;
        if self.attributes.is_empty() {
            return Err(SchemaError::NoAttributes);
        }
        for (i, attr) in self.attributes.iter().enumerate() {
            if self.attributes[..i].iter().any(|a| a.name() == attr.name()) {
                return Err(SchemaError::DuplicateAttribute {
                    name: attr.name().to_string(),
                });
            }
        }

        let mut cells_per_tile = 1u64;
        for dim in domain.dimensions() {
            cells_per_tile = cells_per_tile
                .checked_mul(dim.tile_extent_el())
                .ok_or(SchemaError::TileTooLarge)?;
        }

        Ok(ArraySchema {
            domain,
            attributes: self.attributes,
            tile_order: self.tile_order,
            cells_per_tile,
        })
    }
}
