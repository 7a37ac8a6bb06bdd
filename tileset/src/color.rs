use palette::Srgb;

// Linearly remap x from one range onto another. No clamping is performed;
// callers feed values inside `from`.
pub fn remap(x: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    (x - from.0) * (to.1 - to.0) / (from.1 - from.0) + to.0
}

// Map a noise value in [-1, 1] onto a color between `dark` (at -1) and
// `light` (at +1). Each channel is remapped independently and truncated
// toward zero. Swapping the two arguments inverts the shading, which is how
// the decoration painters get their darker overlay look from the same noise.
pub fn colorize(value: f64, dark: Srgb<u8>, light: Srgb<u8>) -> Srgb<u8> {
    let channel = |d: u8, l: u8| remap(value, (-1.0, 1.0), (f64::from(d), f64::from(l))) as u8;
    Srgb::new(
        channel(dark.red, light.red),
        channel(dark.green, light.green),
        channel(dark.blue, light.blue),
    )
}
