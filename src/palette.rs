// palette.rs - The logo color law, mirrored on the CPU.
//
// Kept in sync with the fragment stage of logo.wgsl. The shader is the
// one that runs; this mirror exists so the law's properties (range,
// continuity, progression) can be asserted without a GPU.

/// Vibrant pink
pub const COLOR_A: [f32; 3] = [0.912, 0.191, 0.652];
/// Cool cyan
pub const COLOR_B: [f32; 3] = [0.204, 0.891, 0.925];
/// Aurora green
pub const COLOR_C: [f32; 3] = [0.358, 0.921, 0.556];
/// Shimmer highlight
pub const HIGHLIGHT: [f32; 3] = [0.950, 0.900, 1.000];

const PI: f32 = std::f32::consts::PI;

fn mix(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Color at surface coordinate (u, v) in [0,1]^2 at time t seconds.
///
/// Pure and stateless: identical inputs always yield identical output.
/// Continuous in u, v and t; channels clamped to [0, 1].
pub fn logo_color(u: f32, v: f32, t: f32) -> [f32; 3] {
    // Two-color wave travelling across the label
    let wave = 0.5 + 0.5 * (t * 0.4 + u * PI).sin();
    let base = mix(COLOR_A, COLOR_B, wave);

    // Slow third-color drift layered on top
    let drift = 0.5 + 0.5 * (t * 0.25 + v * 2.0 + u * 1.5).sin();
    let aurora = mix(base, COLOR_C, drift * 0.6);

    // Shimmer band sweeping vertically through the glyphs
    let band = 0.5 + 0.35 * (t * 0.6 + u * 4.0).sin();
    let shimmer = 1.0 - smoothstep(0.0, 0.25, (v - band).abs());

    [
        (aurora[0] + HIGHLIGHT[0] * shimmer * 0.35).clamp(0.0, 1.0),
        (aurora[1] + HIGHLIGHT[1] * shimmer * 0.35).clamp(0.0, 1.0),
        (aurora[2] + HIGHLIGHT[2] * shimmer * 0.35).clamp(0.0, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_at_origin_is_in_range() {
        let rgb = logo_color(0.0, 0.0, 0.0);
        for c in rgb {
            assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(COLOR_A, COLOR_B, 0.0), COLOR_A);
        assert_eq!(mix(COLOR_A, COLOR_B, 1.0), COLOR_B);
    }

    #[test]
    fn test_smoothstep_clamps() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 0.001);
    }
}
