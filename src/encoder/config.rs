use std::sync::OnceLock;

use crate::models::ECLevel;

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

/// Evaluate the eight mask trials on the rayon pool (`QR_PARALLEL_MASKS`, default on)
pub(crate) fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", true))
}

static DEFAULT_EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

/// Level used by `EncodeOptions::default()` (`QR_DEFAULT_EC`, default M)
pub(crate) fn default_ec_level() -> ECLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| {
        std::env::var("QR_DEFAULT_EC")
            .ok()
            .and_then(|v| v.parse::<ECLevel>().ok())
            .unwrap_or_default()
    })
}
