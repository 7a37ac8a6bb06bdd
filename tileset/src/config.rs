use palette::Srgb;

use crate::error::TileError;

// Generation parameters with their script-level defaults: 32x32 tiles, a
// blue over grey terrain palette, seed 1, unscaled noise coordinates and a
// 10x nearest-neighbor upscale on save.
#[derive(Debug, Clone)]
pub struct TileConfig {
    pub size: u32,         // square tile side in pixels, multiple of 8
    pub light: Srgb<u8>,   // bright end of the base fill
    pub dark: Srgb<u8>,    // dark end of the base fill, bright end of decorations
    pub darker: Srgb<u8>,  // dark end of decorations
    pub seed: u32,
    pub noise_scale: f64,  // multiplier applied to both sample coordinates
    pub output_scale: u32, // integer upscale factor applied when saving
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            size: 32,
            light: Srgb::new(161, 196, 240),
            dark: Srgb::new(60, 65, 71),
            darker: Srgb::new(27, 35, 43),
            seed: 1,
            noise_scale: 1.0,
            output_scale: 10,
        }
    }
}

impl TileConfig {
    // Decoration strips are cut at both a quarter and an eighth of the side,
    // so the side has to stay divisible by 8 to keep them whole pixels.
    pub fn validate(&self) -> Result<(), TileError> {
        if self.size == 0 || self.size % 8 != 0 {
            return Err(TileError::Config(format!(
                "tile size must be a positive multiple of 8, got {}",
                self.size
            )));
        }
        if !self.noise_scale.is_finite() || self.noise_scale <= 0.0 {
            return Err(TileError::Config(format!(
                "noise scale must be finite and positive, got {}",
                self.noise_scale
            )));
        }
        if self.output_scale == 0 {
            return Err(TileError::Config(
                "output scale must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
