//! vcard_qr - vCard QR code generator
//!
//! A pure Rust QR Code Model 2 encoder (versions 1-10, byte mode, all four
//! error correction levels) plus the pieces a contact-card generator needs
//! around it: vCard payloads, image/SVG rendering and a saved-code history.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (codewords, error correction, placement, masking)
pub mod encoder;
/// Core data structures (QrSymbol, ModuleGrid, BitMatrix, Version, etc.)
pub mod models;
/// Symbol rendering (RGB image, SVG, ASCII)
pub mod render;
/// Saved-code history stores
pub mod store;
/// vCard payload builder
pub mod vcard;

pub use encoder::{EncodeError, EncodeOptions, EncodeResult, QrEncoder};
pub use models::{BitMatrix, ECLevel, MaskPattern, Module, ModuleGrid, QrSymbol, Version};
pub use vcard::Contact;

/// Encode a byte payload at the given error correction level
///
/// Picks the smallest version (1-10) that holds the data and the mask with
/// the lowest penalty score.
///
/// # Example
///
/// ```rust
/// use vcard_qr::{ECLevel, encode};
///
/// let symbol = encode(b"BEGIN:VCARD\nVERSION:3.0\nFN:Ada\nEND:VCARD", ECLevel::M).unwrap();
/// assert_eq!(symbol.size(), 17 + 4 * symbol.version().number() as usize);
/// ```
pub fn encode(text: &[u8], ec_level: ECLevel) -> EncodeResult<QrSymbol> {
    QrEncoder::encode(text, &EncodeOptions::new(ec_level))
}

/// Encode with explicit options (version range, forced mask, EC boosting)
pub fn encode_with(text: &[u8], options: &EncodeOptions) -> EncodeResult<QrSymbol> {
    QrEncoder::encode(text, options)
}

/// Build the contact's vCard and encode it
pub fn encode_contact(contact: &Contact, ec_level: ECLevel) -> EncodeResult<QrSymbol> {
    encode(contact.to_vcard().as_bytes(), ec_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_contact() {
        let contact = Contact {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..Contact::default()
        };
        let symbol = encode_contact(&contact, ECLevel::M).unwrap();
        assert_eq!(symbol.version().number(), 5);
        assert_eq!(symbol.mask(), MaskPattern::Pattern2);
    }

    #[test]
    fn test_encode_deterministic() {
        let a = encode(b"determinism", ECLevel::Q).unwrap();
        let b = encode(b"determinism", ECLevel::Q).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_bit_matrix(), b.to_bit_matrix());
    }

    #[test]
    fn test_encode_empty_payload() {
        let symbol = encode(b"", ECLevel::H).unwrap();
        assert_eq!(symbol.version(), Version::MIN);
    }
}
