pub mod boundary;
pub mod region;
pub mod square;

pub use boundary::{Boundary, BoundaryKind};
pub use region::{Region, RegionPair};
pub use square::{BoundingSquare, Edge, GRAPH_SIZE};
