use crate::{Datatype, TileError};

/// On-disk format version stamped on freshly initialized tiles.
pub const FORMAT_VERSION: u32 = 1;

/// A writable tile buffer with a cursor, as handed to the filter pipeline.
///
/// `init_unfiltered` sizes the tile and zeroes its storage; writes are either
/// appending (cursor-relative) or positioned. The buffer never grows past the
/// initialized size.
#[derive(Clone, Debug, Default)]
pub struct Tile {
    format_version: u32,
    datatype: Option<Datatype>,
    cell_size: u64,
    data: Vec<u8>,
    offset: u64,
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the tile for `size` bytes of unfiltered `datatype` cells and
    /// reset the cursor. Storage is zero-initialized.
    pub fn init_unfiltered(
        &mut self,
        format_version: u32,
        datatype: Datatype,
        size: u64,
        cell_size: u64,
    ) -> Result<(), TileError> {
        if cell_size == 0 || size % cell_size != 0 {
            return Err(TileError::SizeNotAligned { size, cell_size });
        }
        self.format_version = format_version;
        self.datatype = Some(datatype);
        self.cell_size = cell_size;
        self.data = vec![0; size as usize];
        self.offset = 0;
        Ok(())
    }

    /// Append `src` at the cursor and advance it.
    pub fn write(&mut self, src: &[u8]) -> Result<(), TileError> {
        self.write_at(src, self.offset)?;
        self.offset += src.len() as u64;
        Ok(())
    }

    /// Write `src` at the absolute byte `offset`, leaving the cursor alone.
    pub fn write_at(&mut self, src: &[u8], offset: u64) -> Result<(), TileError> {
        if self.datatype.is_none() {
            return Err(TileError::Uninitialized);
        }
        let nbytes = src.len() as u64;
        let end = offset + nbytes;
        if end > self.size() {
            return Err(TileError::WriteOverflow {
                offset,
                nbytes,
                size: self.size(),
            });
        }
        self.data[offset as usize..end as usize].copy_from_slice(src);
        Ok(())
    }

    pub fn reset_offset(&mut self) {
        self.offset = 0;
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn cell_size(&self) -> u64 {
        self.cell_size
    }

    pub fn format_version(&self) -> u32 {
        self.format_version
    }

    pub fn datatype(&self) -> Option<Datatype> {
        self.datatype
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_sizes_and_zeroes() {
        let mut tile = Tile::new();
        tile.init_unfiltered(FORMAT_VERSION, Datatype::Int32, 20, 4).unwrap();
        assert_eq!(tile.size(), 20);
        assert_eq!(tile.offset(), 0);
        assert!(tile.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn init_rejects_misaligned_size() {
        let mut tile = Tile::new();
        let err = tile
            .init_unfiltered(FORMAT_VERSION, Datatype::Int32, 21, 4)
            .unwrap_err();
        assert!(matches!(err, TileError::SizeNotAligned { .. }));
    }

    #[test]
    fn appending_writes_advance_cursor() {
        let mut tile = Tile::new();
        tile.init_unfiltered(FORMAT_VERSION, Datatype::UInt8, 4, 1).unwrap();
        tile.write(&[1, 2]).unwrap();
        tile.write(&[3]).unwrap();
        assert_eq!(tile.offset(), 3);
        assert_eq!(tile.as_bytes(), &[1, 2, 3, 0]);

        tile.reset_offset();
        assert_eq!(tile.offset(), 0);
    }

    #[test]
    fn positioned_write_leaves_cursor() {
        let mut tile = Tile::new();
        tile.init_unfiltered(FORMAT_VERSION, Datatype::UInt8, 4, 1).unwrap();
        tile.write_at(&[9, 9], 2).unwrap();
        assert_eq!(tile.offset(), 0);
        assert_eq!(tile.as_bytes(), &[0, 0, 9, 9]);
    }

    #[test]
    fn write_past_end_fails() {
        let mut tile = Tile::new();
        tile.init_unfiltered(FORMAT_VERSION, Datatype::UInt8, 4, 1).unwrap();
        let err = tile.write_at(&[0; 3], 2).unwrap_err();
        assert!(matches!(err, TileError::WriteOverflow { .. }));
    }

    #[test]
    fn write_before_init_fails() {
        let mut tile = Tile::new();
        assert_eq!(tile.write(&[1]).unwrap_err(), TileError::Uninitialized);
    }
}
