use criterion::{Criterion, criterion_group, criterion_main};
use tileset::{Atlas, Corner, Side, Tile, TileConfig, WaveProfile};

const SIZE: u32 = 32;
const SEED: u32 = 2025;

fn config() -> TileConfig {
    TileConfig {
        size: SIZE,
        seed: SEED,
        ..TileConfig::default()
    }
}

fn bench_base_fill(c: &mut Criterion) {
    c.bench_function("Tile fill 32x32", |b| {
        b.iter(|| {
            let _tile = Tile::new(&config()).unwrap();
        })
    });
}

fn bench_full_decoration(c: &mut Criterion) {
    c.bench_function("Tile fill + 2 borders + corner + top band", |b| {
        b.iter(|| {
            let mut tile = Tile::new(&config()).unwrap();
            tile.add_border(Side::Left);
            tile.add_border(Side::Bottom);
            tile.add_corner(Corner::TopRight);
            tile.add_top(SIZE / 4);
        })
    });
}

fn bench_wave_profile(c: &mut Criterion) {
    c.bench_function("WaveProfile 256 samples", |b| {
        let noise = tileset::NoiseField::new(SEED, 1.0);
        b.iter(|| {
            let wave: Vec<f64> = WaveProfile {
                noise: &noise,
                size: 256,
                amplitude: (0.0, 64.0),
            }
            .samples()
            .collect();
            wave
        })
    });
}

fn bench_atlas_pipeline(c: &mut Criterion) {
    c.bench_function("Atlas generate (47 variants) + sheet", |b| {
        b.iter(|| {
            let atlas = Atlas::generate(&config()).unwrap();
            let _sheet = atlas.sheet();
        })
    });
}

criterion_group!(
    tileset_benchmarks,
    bench_base_fill,
    bench_full_decoration,
    bench_wave_profile,
    bench_atlas_pipeline
);
criterion_main!(tileset_benchmarks);
