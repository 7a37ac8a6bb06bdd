use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use palette::Srgb;
use tileset::{Atlas, Corner, Side, Tile, TileConfig};

#[derive(Parser, Debug)]
#[command(name = "tileset")]
#[command(about = "Generate a decorated terrain tile set and its atlas sheet")]
struct Args {
    /// What to produce: the full atlas, or one tile saved after each
    /// decoration step
    #[arg(long, value_enum, default_value_t = Mode::Atlas)]
    mode: Mode,

    /// Square tile side in pixels, must be a multiple of 8
    #[arg(long, default_value_t = 32)]
    size: u32,

    /// Noise seed
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Scale applied to noise sample coordinates
    #[arg(long, default_value_t = 1.0)]
    noise_scale: f64,

    /// Integer nearest-neighbor upscale for saved tiles
    #[arg(long, default_value_t = 10)]
    output_scale: u32,

    /// Bright end of the base fill as "r,g,b"
    #[arg(long, default_value = "161,196,240", value_parser = parse_rgb)]
    light: Srgb<u8>,

    /// Dark end of the base fill as "r,g,b"
    #[arg(long, default_value = "60,65,71", value_parser = parse_rgb)]
    dark: Srgb<u8>,

    /// Dark end of the decoration shading as "r,g,b"
    #[arg(long, default_value = "27,35,43", value_parser = parse_rgb)]
    darker: Srgb<u8>,

    /// Output directory; defaults to "tileset" in atlas mode and "tiles"
    /// in tiles mode
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Atlas,
    Tiles,
}

fn parse_rgb(s: &str) -> Result<Srgb<u8>, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected \"r,g,b\", got {s:?}"));
    }
    let channel = |i: usize| {
        parts[i]
            .parse::<u8>()
            .map_err(|e| format!("bad channel {:?}: {e}", parts[i]))
    };
    Ok(Srgb::new(channel(0)?, channel(1)?, channel(2)?))
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = TileConfig {
        size: args.size,
        light: args.light,
        dark: args.dark,
        darker: args.darker,
        seed: args.seed,
        noise_scale: args.noise_scale,
        output_scale: args.output_scale,
    };

    match args.mode {
        Mode::Atlas => {
            let out = args.out.unwrap_or_else(|| PathBuf::from("tileset"));
            println!(
                "Generating tile set ({}x{} tiles, seed {})...",
                config.size, config.size, config.seed
            );
            let start = Instant::now();
            let atlas = Atlas::generate(&config)?;
            println!(
                "Generated {} tiles in {:.2?}, sheet grid {}x{}",
                atlas.entries().len(),
                start.elapsed(),
                atlas.columns(),
                atlas.columns()
            );
            atlas.save(&out)?;
            println!("Saved tile set to {}", out.display());
        }
        Mode::Tiles => {
            let out = args.out.unwrap_or_else(|| PathBuf::from("tiles"));
            let scale = config.output_scale;
            let mut tile = Tile::new(&config)?;
            println!("Saved {}", tile.save(&out, scale)?.display());
            tile.add_border(Side::Left);
            println!("Saved {}", tile.save(&out, scale)?.display());
            tile.add_corner(Corner::BottomRight);
            println!("Saved {}", tile.save(&out, scale)?.display());
            tile.add_top(config.size / 4);
            println!("Saved {}", tile.save(&out, scale)?.display());
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("tileset: {e}");
        std::process::exit(1);
    }
}
