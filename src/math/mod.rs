mod basis;
mod rotation;

pub use basis::gram_schmidt;
pub use rotation::{rotate_direction, rotation_about};
