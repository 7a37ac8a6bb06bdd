use crate::color::remap;
use crate::noise::NoiseField;

// Integer lattice points on a circle of the given radius: `points + 1` steps
// of 2*pi / points starting at angle zero, coordinates truncated toward zero.
// The extra step closes the loop, so first and last point coincide.
pub fn points_on_circle(radius: u32, points: u32) -> impl Iterator<Item = (i32, i32)> {
    (0..=points).map(move |i| {
        let angle = 2.0 * std::f64::consts::PI / f64::from(points) * f64::from(i);
        (
            (angle.cos() * f64::from(radius)) as i32,
            (angle.sin() * f64::from(radius)) as i32,
        )
    })
}

// Smooth closed wave: one noise sample per point on a circle of radius
// `size`, remapped from [-1, 1] into `amplitude`. Sampling along a circle
// instead of a line brings the profile back to its starting value, which
// keeps the decorated edge tileable. Profiles are recomputed on every call;
// nothing is cached.
pub struct WaveProfile<'a> {
    pub noise: &'a NoiseField,
    pub size: u32,
    pub amplitude: (f64, f64),
}

impl<'a> WaveProfile<'a> {
    // Yields `size + 1` values, each inside `amplitude`.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        points_on_circle(self.size, self.size).map(|(x, y)| {
            remap(
                self.noise.sample(f64::from(x), f64::from(y)),
                (-1.0, 1.0),
                self.amplitude,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_point_count_and_start() {
        let points: Vec<_> = points_on_circle(16, 32).collect();
        assert_eq!(points.len(), 33);
        assert_eq!(points[0], (16, 0));
        // The closing step lands back on the start.
        assert_eq!(points[32], points[0]);
    }

    #[test]
    fn circle_points_stay_on_lattice_disk() {
        for (x, y) in points_on_circle(10, 24) {
            assert!(x.abs() <= 10 && y.abs() <= 10);
        }
    }

    #[test]
    fn wave_sample_count() {
        let noise = NoiseField::new(1, 1.0);
        let profile = WaveProfile {
            noise: &noise,
            size: 32,
            amplitude: (0.0, 8.0),
        };
        assert_eq!(profile.samples().count(), 33);
    }

    #[test]
    fn wave_respects_amplitude() {
        let noise = NoiseField::new(9, 1.0);
        let profile = WaveProfile {
            noise: &noise,
            size: 64,
            amplitude: (2.0, 6.0),
        };
        for v in profile.samples() {
            assert!((2.0..=6.0).contains(&v), "wave sample out of range: {v}");
        }
    }

    #[test]
    fn wave_is_deterministic() {
        let noise = NoiseField::new(3, 1.0);
        let profile = WaveProfile {
            noise: &noise,
            size: 16,
            amplitude: (0.0, 4.0),
        };
        let first: Vec<f64> = profile.samples().collect();
        let second: Vec<f64> = profile.samples().collect();
        assert_eq!(first, second);
    }
}
