#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Traversal order of the cells of an N-dimensional box.
///
/// Used both for the cell layout inside a tile and for the layout of a query
/// buffer over its subarray.
pub enum CellOrder {
    /// The last dimension varies fastest.
    RowMajor,
    /// The first dimension varies fastest.
    ColMajor,
}
