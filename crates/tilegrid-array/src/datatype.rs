use derive_more::Display;

/// Physical type of a dimension coordinate or attribute cell.
///
/// Only fixed-width integer types are supported; dense tiling has no
/// meaningful tile grid over float or string dimensions.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Datatype {
    #[display("int8")]
    Int8,
    #[display("uint8")]
    UInt8,
    #[display("int16")]
    Int16,
    #[display("uint16")]
    UInt16,
    #[display("int32")]
    Int32,
    #[display("uint32")]
    UInt32,
    #[display("int64")]
    Int64,
    #[display("uint64")]
    UInt64,
}

impl Datatype {
    /// Size of one cell of this type, in bytes.
    pub fn size(self) -> u64 {
        match self {
            Datatype::Int8 | Datatype::UInt8 => 1,
            Datatype::Int16 | Datatype::UInt16 => 2,
            Datatype::Int32 | Datatype::UInt32 => 4,
            Datatype::Int64 | Datatype::UInt64 => 8,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Datatype::Int8 | Datatype::Int16 | Datatype::Int32 | Datatype::Int64
        )
    }

    /// Default fill value for attributes of this type, in native byte order.
    ///
    /// The minimum value for signed types and the maximum for unsigned ones,
    /// so that fill cells sit outside the range of most real data.
    pub fn default_fill(self) -> Vec<u8> {
        match self {
            Datatype::Int8 => i8::MIN.to_ne_bytes().to_vec(),
            Datatype::UInt8 => u8::MAX.to_ne_bytes().to_vec(),
            Datatype::Int16 => i16::MIN.to_ne_bytes().to_vec(),
            Datatype::UInt16 => u16::MAX.to_ne_bytes().to_vec(),
            Datatype::Int32 => i32::MIN.to_ne_bytes().to_vec(),
            Datatype::UInt32 => u32::MAX.to_ne_bytes().to_vec(),
            Datatype::Int64 => i64::MIN.to_ne_bytes().to_vec(),
            Datatype::UInt64 => u64::MAX.to_ne_bytes().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(Datatype::Int8.size(), 1);
        assert_eq!(Datatype::UInt16.size(), 2);
        assert_eq!(Datatype::Int32.size(), 4);
        assert_eq!(Datatype::UInt64.size(), 8);
    }

    #[test]
    fn default_fill_matches_cell_size() {
        for dt in [
            Datatype::Int8,
            Datatype::UInt8,
            Datatype::Int16,
            Datatype::UInt16,
            Datatype::Int32,
            Datatype::UInt32,
            Datatype::Int64,
            Datatype::UInt64,
        ] {
            assert_eq!(dt.default_fill().len() as u64, dt.size());
        }
    }

    #[test]
    fn default_fill_int32_is_min() {
        let fill = Datatype::Int32.default_fill();
        assert_eq!(i32::from_ne_bytes(fill.try_into().unwrap()), i32::MIN);
    }

    #[test]
    fn default_fill_uint32_is_max() {
        let fill = Datatype::UInt32.default_fill();
        assert_eq!(u32::from_ne_bytes(fill.try_into().unwrap()), u32::MAX);
    }
}
