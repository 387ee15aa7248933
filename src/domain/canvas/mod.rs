pub mod canvas;
pub mod png_file;

pub use canvas::{Canvas, CanvasError, CanvasSize, RICH_MENU_COMPACT};
pub use png_file::{PngError, PngFile};
