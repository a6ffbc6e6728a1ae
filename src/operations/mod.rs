pub mod classify;
pub mod intersect;
pub mod line;
pub mod partition;
pub mod validate;
