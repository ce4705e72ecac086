use core::fmt::{Debug, Display};

use bytemuck::Pod;
use num_traits::PrimInt;

use crate::Datatype;

/// Coordinate type of an array dimension.
///
/// Implemented for the eight fixed-width integer types. All tiler geometry
/// reduces to two primitives: the exact distance between two coordinates as a
/// `u64`, and walking a coordinate forward by a `u64` offset. Both are total
/// over the full range of every supported width, including `u64` domains
/// larger than `i64::MAX`.
pub trait Coord: PrimInt + Pod + Debug + Display + Send + Sync + 'static {
    /// The [`Datatype`] tag of this coordinate type.
    const DATATYPE: Datatype;

    /// Distance from `origin` to `self`, in cells.
    ///
    /// Requires `origin <= self`.
    fn offset_from(self, origin: Self) -> u64;

    /// The coordinate `offset` cells after `self`.
    ///
    /// The result must be representable; schema validation guarantees this
    /// for every coordinate of a tile-aligned domain.
    fn offset_by(self, offset: u64) -> Self;
}

macro_rules! impl_coord_signed {
    ($($ty:ty => $dt:ident),* $(,)?) => {
        $(impl Coord for $ty {
            const DATATYPE: Datatype = Datatype::$dt;

            fn offset_from(self, origin: Self) -> u64 {
                debug_assert!(origin <= self, "offset_from: origin {origin} > {self}");
                // Exact modulo 2^64, and the true difference is in [0, 2^64).
                (self as i64).wrapping_sub(origin as i64) as u64
            }

            fn offset_by(self, offset: u64) -> Self {
                ((self as i64).wrapping_add(offset as i64)) as $ty
            }
        })*
    };
}

macro_rules! impl_coord_unsigned {
    ($($ty:ty => $dt:ident),* $(,)?) => {
        $(impl Coord for $ty {
            const DATATYPE: Datatype = Datatype::$dt;

            fn offset_from(self, origin: Self) -> u64 {
                debug_assert!(origin <= self, "offset_from: origin {origin} > {self}");
                (self - origin) as u64
            }

            fn offset_by(self, offset: u64) -> Self {
                self.wrapping_add(offset as $ty)
            }
        })*
    };
}

impl_coord_signed!(i8 => Int8, i16 => Int16, i32 => Int32, i64 => Int64);
impl_coord_unsigned!(u8 => UInt8, u16 => UInt16, u32 => UInt32, u64 => UInt64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_i32() {
        assert_eq!(7i32.offset_from(3), 4);
        assert_eq!((-2i32).offset_from(-4), 2);
        assert_eq!(3i32.offset_by(4), 7);
        assert_eq!((-4i32).offset_by(2), -2);
    }

    #[test]
    fn offsets_full_signed_range() {
        assert_eq!(i8::MAX.offset_from(i8::MIN), 255);
        assert_eq!(i8::MIN.offset_by(255), i8::MAX);
        assert_eq!(i64::MAX.offset_from(i64::MIN), u64::MAX);
        assert_eq!(i64::MIN.offset_by(u64::MAX), i64::MAX);
    }

    #[test]
    fn offsets_full_unsigned_range() {
        assert_eq!(u64::MAX.offset_from(0), u64::MAX);
        assert_eq!(0u64.offset_by(u64::MAX), u64::MAX);
        assert_eq!(u8::MAX.offset_from(0), 255);
    }

    #[test]
    fn datatype_tags() {
        assert_eq!(<i32 as Coord>::DATATYPE, Datatype::Int32);
        assert_eq!(<u64 as Coord>::DATATYPE, Datatype::UInt64);
    }
}
