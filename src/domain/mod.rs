pub mod canvas;
pub mod slot_layout;
pub mod source_image;
