pub mod carousel;
pub mod lightbox;
