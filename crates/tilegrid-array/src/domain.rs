use crate::{Coord, Dimension, SchemaError};

/// Ordered set of dimensions sharing one coordinate type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain<T: Coord> {
    dimensions: Vec<Dimension<T>>,
}

impl<T: Coord> Domain<T> {
    pub fn new(dimensions: Vec<Dimension<T>>) -> Result<Self, SchemaError> {
        if dimensions.is_empty() {
            return Err(SchemaError::EmptyDomain);
        }
        Ok(Self { dimensions })
    }

    pub fn dim_num(&self) -> usize {
        self.dimensions.len()
    }

    pub fn dimension(&self, d: usize) -> &Dimension<T> {
        &self.dimensions[d]
    }

    pub fn dimensions(&self) -> &[Dimension<T>] {
        &self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Domain::<i32>::new(vec![]).unwrap_err(),
            SchemaError::EmptyDomain
        );
    }

    #[test]
    fn dim_access() {
        let dom = Domain::new(vec![
            Dimension::new("rows", [1i32, 10], 5).unwrap(),
            Dimension::new("cols", [1i32, 30], 10).unwrap(),
        ])
        .unwrap();
        assert_eq!(dom.dim_num(), 2);
        assert_eq!(dom.dimension(1).name(), "cols");
    }
}
