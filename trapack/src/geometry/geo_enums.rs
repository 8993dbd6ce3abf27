/// Position of a point relative to a closed shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoPosition {
    /// Outside the shape
    Exterior,
    /// Inside the shape or on its boundary
    Interior,
}
