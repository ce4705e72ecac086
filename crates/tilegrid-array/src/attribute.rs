use bytemuck::Pod;

use crate::{Datatype, SchemaError};

/// A named value stored per cell, with the byte pattern written to cells a
/// query never touches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    datatype: Datatype,
    fill_value: Vec<u8>,
    var_size: bool,
}

impl Attribute {
    /// Create a fixed-size attribute with the datatype's default fill value.
    pub fn new(name: impl Into<String>, datatype: Datatype) -> Self {
        Self {
            name: name.into(),
            datatype,
            fill_value: datatype.default_fill(),
            var_size: false,
        }
    }

    /// Create a variable-sized attribute.
    ///
    /// Dense tiling rejects these at materialization time; the constructor
    /// exists so schemas describing such attributes can still be expressed.
    pub fn var_sized(name: impl Into<String>, datatype: Datatype) -> Self {
        Self {
            name: name.into(),
            datatype,
            fill_value: datatype.default_fill(),
            var_size: true,
        }
    }

    /// Replace the fill value with `value`, which must be exactly one cell.
    pub fn with_fill(mut self, value: impl Pod) -> Result<Self, SchemaError> {
        let bytes = bytemuck::bytes_of(&value);
        if bytes.len() as u64 != self.cell_size() {
            return Err(SchemaError::FillValueSize {
                name: self.name,
                got: bytes.len() as u64,
                expected: self.datatype.size(),
            });
        }
        self.fill_value = bytes.to_vec();
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn datatype(&self) -> Datatype {
        self.datatype
    }

    pub fn cell_size(&self) -> u64 {
        self.datatype.size()
    }

    pub fn var_size(&self) -> bool {
        self.var_size
    }

    /// Fill value bytes, one cell long.
    pub fn fill_value(&self) -> &[u8] {
        &self.fill_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fill_tracks_datatype() {
        let a = Attribute::new("a", Datatype::Int32);
        assert_eq!(a.fill_value(), i32::MIN.to_ne_bytes());
        assert_eq!(a.cell_size(), 4);
        assert!(!a.var_size());
    }

    #[test]
    fn custom_fill() {
        let a = Attribute::new("a", Datatype::Int32).with_fill(-7i32).unwrap();
        assert_eq!(a.fill_value(), (-7i32).to_ne_bytes());
    }

    #[test]
    fn custom_fill_wrong_width() {
        let err = Attribute::new("a", Datatype::Int32).with_fill(0i64).unwrap_err();
        assert!(matches!(err, SchemaError::FillValueSize { .. }));
    }
}
