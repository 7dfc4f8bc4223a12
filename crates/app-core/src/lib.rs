pub mod constants;
pub mod debounce;
pub mod detect;
pub mod error;
pub mod field;
pub mod gesture;
pub mod grammar;
pub mod history;
pub mod landmark;
pub mod raster;
pub mod render;
pub mod session;

pub static DISK_WGSL: &str = include_str!("../shaders/disk.wgsl");

pub use debounce::*;
pub use detect::*;
pub use error::SetupError;
pub use field::*;
pub use gesture::*;
pub use grammar::*;
pub use history::*;
pub use landmark::*;
pub use raster::*;
pub use render::*;
pub use session::*;
