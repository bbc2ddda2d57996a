pub mod billboard;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod math;
pub mod session;
pub mod traits;
pub mod types;

pub use camera::Camera;
pub use config::Config;
pub use session::{Script, Session};
