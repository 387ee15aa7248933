pub mod path_error;
pub mod source_image;
pub mod source_path;

pub use path_error::PathError;
pub use source_image::{DecodeError, SourceImage};
pub use source_path::SourcePath;
