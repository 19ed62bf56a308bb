/// Encoder working grid
pub mod grid;
/// Packed bit matrix
pub mod matrix;
/// Version, level, mask and finished-symbol types
pub mod qr_code;

pub use grid::{Module, ModuleGrid};
pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, QrSymbol, Version};
