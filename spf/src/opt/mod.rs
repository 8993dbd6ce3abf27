pub mod batch;
pub mod packer;
pub mod spiral;

#[doc(inline)]
pub use packer::{SpiralPacker, pack};
