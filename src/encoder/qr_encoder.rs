use crate::encoder::codewords::{boost_ec_level, build_data_codewords, select_version};
use crate::encoder::config;
use crate::encoder::error::{EncodeError, EncodeResult};
use crate::encoder::function_patterns::draw_function_patterns;
use crate::encoder::mask::{select_mask, trial};
use crate::encoder::placement::place_codewords;
use crate::encoder::reed_solomon::{encode_blocks, interleave};
use crate::encoder::tables::ec_block_info;
/// Main QR code encoder - wires the stages together
use crate::models::{ECLevel, MaskPattern, ModuleGrid, QrSymbol, Version};

/// Per-call encoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Requested error correction level
    pub ec_level: ECLevel,
    /// Smallest version to consider
    pub min_version: Version,
    /// Largest version to consider
    pub max_version: Version,
    /// Skip mask evaluation and use this mask
    pub mask: Option<MaskPattern>,
    /// Raise the EC level while the data still fits the selected version
    pub boost_ec_level: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: config::default_ec_level(),
            min_version: Version::MIN,
            max_version: Version::MAX,
            mask: None,
            boost_ec_level: false,
        }
    }
}

impl EncodeOptions {
    /// Defaults with the given level
    pub fn new(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            ..Self::default()
        }
    }

    /// Restrict version selection to `min..=max`
    pub fn with_version_range(mut self, min: Version, max: Version) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Force `mask` instead of scoring all eight
    pub fn with_mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Enable or disable the EC level boost
    pub fn with_boost_ec_level(mut self, boost: bool) -> Self {
        self.boost_ec_level = boost;
        self
    }
}

/// Main QR encoder: builder -> EC -> assembler -> mask evaluator
pub struct QrEncoder;

impl QrEncoder {
    /// Encode `data` in byte mode. Fails without producing a partial symbol.
    #[tracing::instrument(level = "debug", skip_all, fields(len = data.len(), ec = %options.ec_level))]
    pub fn encode(data: &[u8], options: &EncodeOptions) -> EncodeResult<QrSymbol> {
        if options.min_version > options.max_version {
            return Err(EncodeError::InvalidInput(format!(
                "min version {} is above max version {}",
                options.min_version, options.max_version
            )));
        }

        let version = select_version(
            data.len(),
            options.ec_level,
            options.min_version,
            options.max_version,
        )?;
        let ec_level = if options.boost_ec_level {
            boost_ec_level(data.len(), version, options.ec_level)?
        } else {
            options.ec_level
        };
        tracing::debug!(version = version.number(), %ec_level, "selected version");

        let unmasked = Self::assemble(data, version, ec_level)?;

        let best = match options.mask {
            Some(mask) => trial(&unmasked, ec_level, mask),
            None => select_mask(&unmasked, ec_level),
        };
        tracing::debug!(mask = best.mask.id(), penalty = best.penalty, "selected mask");

        Ok(QrSymbol::new(
            version,
            ec_level,
            best.mask,
            best.penalty,
            best.grid,
        ))
    }

    /// Build the unmasked grid: function patterns plus placed data and EC codewords
    pub fn assemble(data: &[u8], version: Version, ec_level: ECLevel) -> EncodeResult<ModuleGrid> {
        let codewords = build_data_codewords(data, version, ec_level)?;
        let info = ec_block_info(version, ec_level)?;
        let blocks = encode_blocks(&codewords, &info)?;
        let stream = interleave(&blocks);

        let mut grid = ModuleGrid::new(version.size());
        draw_function_patterns(&mut grid, version);
        let placed = place_codewords(&mut grid, &stream);
        debug_assert_eq!(placed, info.total_codewords * 8);
        Ok(grid)
    }
}
