//! QR code encoding modules
//!
//! This module turns a byte payload into a finished QR Code Model 2 symbol:
//! - Data codeword building (byte mode, terminator, padding)
//! - Reed-Solomon error correction and block interleaving
//! - Function pattern drawing and zigzag codeword placement
//! - Mask evaluation with the four penalty rules

/// Bit buffer used by the codeword builder
pub mod bitstream;
/// Byte-mode data codeword builder and version selection
pub mod codewords;
pub(crate) mod config;
/// Encoder error types
pub mod error;
/// Format information (EC level + mask id, BCH(15,5))
pub mod format;
/// Finder, separator, timing and alignment patterns
pub mod function_patterns;
/// Mask application and selection
pub mod mask;
/// Mask penalty rules
pub mod penalty;
/// Zigzag codeword placement
pub mod placement;
/// Main encoder that orchestrates the pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction and block interleaving
pub mod reed_solomon;
/// QR Code Model 2 tables (ECC codewords/blocks, capacities)
pub mod tables;
/// Version information (versions 7-10, BCH(18,6))
pub mod version;

pub use error::{EncodeError, EncodeResult};
pub use qr_encoder::{EncodeOptions, QrEncoder};
