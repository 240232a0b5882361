pub mod a001_event;
pub mod a002_image;
pub mod common;
