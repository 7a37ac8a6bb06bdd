use std::path::Path;

use image::imageops;
use image::RgbaImage;

use crate::config::TileConfig;
use crate::decoration::combo_label;
use crate::error::TileError;
use crate::planner;
use crate::tile::{Tile, write_scaled};

// One generated variant: the combination label plus its painted buffer.
pub struct AtlasEntry {
    pub label: String,
    pub image: RgbaImage,
}

// A complete tile set: the base tile followed by every valid decorated
// variant in planner order, together with the square sheet layout over them.
pub struct Atlas {
    tile_size: u32,
    output_scale: u32,
    entries: Vec<AtlasEntry>,
}

impl Atlas {
    // Build every variant from one config. Each variant starts from a fresh
    // tile with the same seed, which equals stamping copies of the base
    // because the fill is deterministic. Variants use thin size / 8 border
    // strips while the top band keeps its size / 4 amplitude.
    pub fn generate(config: &TileConfig) -> Result<Self, TileError> {
        config.validate()?;
        let mut entries = Vec::new();
        for combo in planner::enumerate() {
            let mut tile = Tile::with_decoration_size(config, config.size / 8)?;
            tile.apply(&combo);
            entries.push(AtlasEntry {
                label: combo_label(&combo),
                image: tile.into_image(),
            });
        }
        Ok(Self {
            tile_size: config.size,
            output_scale: config.output_scale,
            entries,
        })
    }

    // Wrap externally produced entries in a sheet layout.
    pub fn from_entries(tile_size: u32, output_scale: u32, entries: Vec<AtlasEntry>) -> Self {
        Self {
            tile_size,
            output_scale,
            entries,
        }
    }

    pub fn entries(&self) -> &[AtlasEntry] {
        &self.entries
    }

    // Side of the smallest square grid that fits every entry.
    pub fn columns(&self) -> u32 {
        (self.entries.len() as f64).sqrt().ceil() as u32
    }

    // Pack the entries row-major into a columns x columns grid of cells.
    // Cells past the last entry stay fully transparent.
    pub fn sheet(&self) -> RgbaImage {
        let cols = self.columns();
        let mut sheet = RgbaImage::new(self.tile_size * cols, self.tile_size * cols);
        for (i, entry) in self.entries.iter().enumerate() {
            let col = i as u32 % cols;
            let row = i as u32 / cols;
            imageops::replace(
                &mut sheet,
                &entry.image,
                i64::from(col * self.tile_size),
                i64::from(row * self.tile_size),
            );
        }
        sheet
    }

    // Write every variant upscaled by the output scale, then the sheet at
    // native tile resolution.
    pub fn save(&self, dir: &Path) -> Result<(), TileError> {
        for entry in &self.entries {
            let path = dir.join(format!("{}.png", entry.label));
            write_scaled(&entry.image, &path, self.output_scale)?;
        }
        write_scaled(&self.sheet(), &dir.join("tileset.png"), 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn blank_entries(count: usize, size: u32) -> Vec<AtlasEntry> {
        (0..count)
            .map(|i| AtlasEntry {
                label: format!("tile{i}"),
                image: RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255])),
            })
            .collect()
    }

    #[test]
    fn columns_round_up_to_square() {
        assert_eq!(Atlas::from_entries(8, 1, blank_entries(1, 8)).columns(), 1);
        assert_eq!(Atlas::from_entries(8, 1, blank_entries(10, 8)).columns(), 4);
        assert_eq!(Atlas::from_entries(8, 1, blank_entries(16, 8)).columns(), 4);
        assert_eq!(Atlas::from_entries(8, 1, blank_entries(47, 8)).columns(), 7);
    }

    #[test]
    fn sheet_packs_row_major_with_transparent_tail() {
        let atlas = Atlas::from_entries(8, 1, blank_entries(10, 8));
        let sheet = atlas.sheet();
        assert_eq!(sheet.dimensions(), (32, 32));

        // 10 entries fill cells 0..10 row-major; the 6 trailing cells of
        // the 4x4 grid stay transparent.
        for cell in 0..16u32 {
            let (cx, cy) = (cell % 4 * 8, cell / 4 * 8);
            let expected = if cell < 10 { 255 } else { 0 };
            assert_eq!(sheet.get_pixel(cx, cy)[3], expected, "cell {cell}");
            assert_eq!(sheet.get_pixel(cx + 7, cy + 7)[3], expected, "cell {cell}");
        }
    }

    #[test]
    fn generate_covers_every_combination() {
        let config = TileConfig {
            size: 16,
            ..TileConfig::default()
        };
        let atlas = Atlas::generate(&config).unwrap();
        assert_eq!(atlas.entries().len(), 47);
        assert_eq!(atlas.entries()[0].label, "center");
        assert_eq!(atlas.columns(), 7);

        let labels: Vec<&str> = atlas.entries().iter().map(|e| e.label.as_str()).collect();
        assert!(labels.contains(&"top-left"));
        assert!(!labels.contains(&"top-top_left"));
        let mut unique = labels.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), labels.len());
    }
}
