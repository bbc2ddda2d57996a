pub mod input;
pub mod navigation;

pub use input::{InputEvent, InputTracker};
pub use navigation::Navigator;
