use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use palette::Srgb;

use crate::color::colorize;
use crate::config::TileConfig;
use crate::decoration::{Corner, Decoration, Side, combo_label};
use crate::error::TileError;
use crate::noise::NoiseField;
use crate::wave::WaveProfile;

// Sand palette for the wavy top band.
fn sand_light() -> Srgb<u8> {
    Srgb::new(194, 178, 128)
}

fn sand_dark() -> Srgb<u8> {
    Srgb::new(174, 160, 115)
}

// One terrain cell: a square RGBA buffer plus the ordered list of
// decorations painted onto it. The buffer starts as a full noise fill
// between `dark` and `light`; decorations repaint border strips, corner
// blocks or the sandy top band over it. Markers are append-only and define
// the canonical tile name.
pub struct Tile {
    image: RgbaImage,
    size: u32,
    decoration_size: u32,
    light: Srgb<u8>,
    dark: Srgb<u8>,
    darker: Srgb<u8>,
    noise: NoiseField,
    seed: u32,
    decorations: Vec<Decoration>,
}

impl Tile {
    // Standard tile: decoration strips are a quarter of the side.
    pub fn new(config: &TileConfig) -> Result<Self, TileError> {
        Self::with_decoration_size(config, config.size / 4)
    }

    // Caller-chosen strip thickness. The atlas builder passes size / 8 so
    // borders stay thin next to the wider top band.
    pub fn with_decoration_size(
        config: &TileConfig,
        decoration_size: u32,
    ) -> Result<Self, TileError> {
        config.validate()?;
        // Strips and blocks are painted inside the tile bounds only.
        if decoration_size == 0 || decoration_size > config.size {
            return Err(TileError::Config(format!(
                "decoration size must be between 1 and the tile side, got {decoration_size}"
            )));
        }
        let mut tile = Self {
            image: RgbaImage::new(config.size, config.size),
            size: config.size,
            decoration_size,
            light: config.light,
            dark: config.dark,
            darker: config.darker,
            noise: NoiseField::new(config.seed, config.noise_scale),
            seed: config.seed,
            decorations: Vec::new(),
        };
        tile.fill();
        Ok(tile)
    }

    // Base terrain: every pixel colored from the noise field, dark at -1 up
    // to light at +1. A pure function of (seed, scale, palette), so filling
    // again reproduces the buffer exactly.
    fn fill(&mut self) {
        for x in 0..self.size {
            for y in 0..self.size {
                let value = self.noise.sample(f64::from(x), f64::from(y));
                self.put(x, y, colorize(value, self.dark, self.light));
            }
        }
    }

    fn put(&mut self, x: u32, y: u32, color: Srgb<u8>) {
        self.image
            .put_pixel(x, y, Rgba([color.red, color.green, color.blue, 255]));
    }

    // Target pixel for paint-frame coordinates (x, y) under a quarter turn
    // of `angle` degrees. The earlier scheme rotated the whole image,
    // painted at the top-left origin and rotated back; mapping each painted
    // pixel to where the back-rotation would have put it produces the same
    // buffer without a rotation primitive. Quarter turns are lossless, so
    // unpainted pixels are untouched either way.
    fn rotated(&self, angle: i32, x: u32, y: u32) -> (u32, u32) {
        let n = self.size - 1;
        match angle.rem_euclid(360) {
            0 => (x, y),
            90 => (n - y, x),
            180 => (n - x, n - y),
            270 => (y, n - x),
            other => unreachable!("decoration angles are quarter turns, got {other}"),
        }
    }

    // Repaint a w x h paint-frame block through the decoration angle,
    // shaded between `darker` and `dark`. Noise is sampled at paint-frame
    // coordinates, the same values the rotated painter used to see, so all
    // four sides of a tile shade identically.
    fn paint_block(&mut self, angle: i32, w: u32, h: u32) {
        for x in 0..w {
            for y in 0..h {
                let value = self.noise.sample(f64::from(x), f64::from(y));
                let (tx, ty) = self.rotated(angle, x, y);
                self.put(tx, ty, colorize(value, self.darker, self.dark));
            }
        }
    }

    // Full-width border strip along the given side.
    pub fn add_border(&mut self, side: Side) {
        self.decorations.push(Decoration::Side(side));
        self.paint_block(side.angle(), self.size, self.decoration_size);
    }

    // Square block filling the given corner.
    pub fn add_corner(&mut self, corner: Corner) {
        self.decorations.push(Decoration::Corner(corner));
        self.paint_block(corner.angle(), self.decoration_size, self.decoration_size);
    }

    // Sandy band along the top edge with a noise-driven lower silhouette:
    // column x is painted from row 0 down to wave[x] + size / 2, exclusive
    // and clamped to the tile. Not a quarter-turn repaint; the wave only
    // ever runs along the top.
    pub fn add_top(&mut self, size: u32) {
        self.decorations.push(Decoration::Side(Side::Top));
        let wave: Vec<f64> = WaveProfile {
            noise: &self.noise,
            size: self.size,
            amplitude: (0.0, f64::from(size)),
        }
        .samples()
        .collect();
        for x in 0..self.size {
            let depth = wave[x as usize] as i64 + i64::from(size / 2);
            let max_y = depth.clamp(0, i64::from(self.size)) as u32;
            for y in 0..max_y {
                let value = self.noise.sample(f64::from(x), f64::from(y));
                self.put(x, y, colorize(value, sand_dark(), sand_light()));
            }
        }
    }

    // Apply a planned combination: border strips and corner blocks in set
    // order, then the top band last so its silhouette overlays the strips.
    pub fn apply(&mut self, combo: &[Decoration]) {
        for decoration in combo {
            match decoration {
                Decoration::Side(Side::Top) => {}
                Decoration::Side(side) => self.add_border(*side),
                Decoration::Corner(corner) => self.add_corner(*corner),
            }
        }
        if combo.contains(&Decoration::Side(Side::Top)) {
            self.add_top(self.size / 4);
        }
    }

    // "center" or the markers joined in application order, then the seed.
    pub fn name(&self) -> String {
        format!("{}_s{}", combo_label(&self.decorations), self.seed)
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    // Upscale by `scale` and write `{dir}/{name}.png`, creating the
    // directory if needed. Saving reads tile state and never mutates it.
    pub fn save(&self, dir: &Path, scale: u32) -> Result<PathBuf, TileError> {
        let path = dir.join(format!("{}.png", self.name()));
        write_scaled(&self.image, &path, scale)?;
        Ok(path)
    }
}

// Write an RGBA buffer as PNG, upscaled by an integer factor with the
// nearest-neighbor filter so pixel edges stay crisp.
pub(crate) fn write_scaled(image: &RgbaImage, path: &Path, scale: u32) -> Result<(), TileError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let (w, h) = image.dimensions();
    let scaled = imageops::resize(image, w * scale, h * scale, FilterType::Nearest);
    scaled.save(path)?;
    Ok(())
}
