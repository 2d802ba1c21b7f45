use generative_logo::config::StarfieldConfig;
use generative_logo::starfield::generate_stars;

fn test_config() -> StarfieldConfig {
    StarfieldConfig {
        radius: 100.0,
        depth: 50.0,
        count: 500,
        factor: 4.0,
        speed: 1.0,
    }
}

#[test]
fn test_star_counts_match_config() {
    let config = test_config();
    let (vertices, indices) = generate_stars(&config);

    assert_eq!(vertices.len(), config.count * 4, "four corners per star");
    assert_eq!(indices.len(), config.count * 6, "two triangles per star");
}

#[test]
fn test_stars_lie_on_the_shell() {
    let config = test_config();
    let (vertices, _) = generate_stars(&config);

    for vertex in vertices.iter().step_by(4) {
        let [x, y, z] = vertex.center;
        let r = (x * x + y * y + z * z).sqrt();
        assert!(
            r >= config.radius - 1e-3 && r <= config.radius + config.depth + 1e-3,
            "star at radius {} outside shell [{}, {}]",
            r,
            config.radius,
            config.radius + config.depth
        );
    }
}

#[test]
fn test_quads_reference_their_own_corners() {
    let config = test_config();
    let (vertices, indices) = generate_stars(&config);

    for (star, quad) in indices.chunks(6).enumerate() {
        let base = (star * 4) as u32;
        for &index in quad {
            assert!(
                index >= base && index < base + 4,
                "quad {} reaches outside its four vertices",
                star
            );
        }
    }

    for star in vertices.chunks(4) {
        let corners: Vec<[f32; 2]> = star.iter().map(|v| v.corner).collect();
        assert_eq!(
            corners,
            [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]],
            "every star carries the same unit-quad corners"
        );

        for pair in star.windows(2) {
            assert_eq!(pair[0].center, pair[1].center);
            assert_eq!(pair[0].seed, pair[1].seed);
        }
    }
}

#[test]
fn test_seeds_are_normalized() {
    let (vertices, _) = generate_stars(&test_config());
    for vertex in &vertices {
        assert!(
            (0.0..1.0).contains(&vertex.seed),
            "twinkle seed {} outside [0, 1)",
            vertex.seed
        );
    }
}
