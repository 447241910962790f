pub mod gesture;
pub mod session;
pub mod transform;

pub use gesture::{Point, TouchBatch};
pub use session::Session;
pub use transform::{ImageSize, ImageTransform, Placement};
