// tileset holds the whole generation pipeline: seeded noise sampling, noise
// to color mapping, decoration painting, combination planning and atlas
// sheet packing. All randomness flows through one seeded noise field, so a
// (config, operations) pair always reproduces the same images.

pub mod atlas;
pub mod color;
pub mod config;
pub mod decoration;
pub mod error;
pub mod noise;
pub mod planner;
pub mod tile;
pub mod wave;

pub use atlas::{Atlas, AtlasEntry};
pub use config::TileConfig;
pub use decoration::{Corner, Decoration, Side, combo_label};
pub use error::TileError;
pub use noise::NoiseField;
pub use tile::Tile;
pub use wave::WaveProfile;
