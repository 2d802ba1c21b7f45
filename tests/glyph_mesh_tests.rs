use generative_logo::config::{self, LogoConfig};
use generative_logo::glyph::{build_label_mesh, glyph_strokes};

fn test_config() -> LogoConfig {
    config::LOGO
}

#[cfg(test)]
mod stroke_table_tests {
    use super::*;

    #[test]
    fn test_every_label_character_has_strokes() {
        for c in config::LABEL.chars() {
            assert!(
                glyph_strokes(c).is_some(),
                "label character '{}' must have a stroke table",
                c
            );
        }
    }

    #[test]
    fn test_unknown_characters_have_no_strokes() {
        assert!(glyph_strokes('X').is_none());
        assert!(glyph_strokes('m').is_none(), "tables are uppercase only");
        assert!(glyph_strokes(' ').is_none());
    }

    #[test]
    fn test_strokes_stay_inside_unit_cell() {
        for c in config::LABEL.chars() {
            for (start, end) in glyph_strokes(c).unwrap() {
                for p in [start, end] {
                    assert!((0.0..=1.0).contains(&p[0]), "'{}' x out of cell", c);
                    assert!((0.0..=1.0).contains(&p[1]), "'{}' y out of cell", c);
                }
            }
        }
    }
}

#[cfg(test)]
mod mesh_build_tests {
    use super::*;

    #[test]
    fn test_label_mesh_face_counts() {
        let mesh = build_label_mesh(config::LABEL, &test_config());

        let stroke_count: usize = config::LABEL
            .chars()
            .map(|c| glyph_strokes(c).unwrap().len())
            .sum();

        // Each stroke extrudes to a box: 6 faces, 4 vertices and
        // 6 indices per face
        assert_eq!(mesh.vertices.len(), stroke_count * 24);
        assert_eq!(mesh.indices.len(), stroke_count * 36);
        assert_eq!(mesh.indices.len() % 3, 0, "indices must form triangles");
    }

    #[test]
    fn test_indices_reference_existing_vertices() {
        let mesh = build_label_mesh(config::LABEL, &test_config());

        let vertex_count = mesh.vertices.len() as u32;
        for &index in &mesh.indices {
            assert!(index < vertex_count, "index {} out of range", index);
        }
    }

    #[test]
    fn test_mesh_is_centered_on_origin() {
        let mesh = build_label_mesh(config::LABEL, &test_config());

        let mut min = [f32::INFINITY; 2];
        let mut max = [f32::NEG_INFINITY; 2];
        for v in &mesh.vertices {
            for axis in 0..2 {
                min[axis] = min[axis].min(v.position[axis]);
                max[axis] = max[axis].max(v.position[axis]);
            }
        }

        for axis in 0..2 {
            let center = (min[axis] + max[axis]) * 0.5;
            assert!(
                center.abs() < 1e-4,
                "axis {} centered at {}, expected origin",
                axis,
                center
            );
        }
    }

    #[test]
    fn test_extrusion_depth_matches_config() {
        let config = test_config();
        let mesh = build_label_mesh(config::LABEL, &config);

        let half_depth = config.depth * 0.5;
        for v in &mesh.vertices {
            assert!(
                v.position[2].abs() <= half_depth + 1e-5,
                "vertex z {} beyond extrusion depth",
                v.position[2]
            );
        }
    }

    #[test]
    fn test_uvs_span_the_label_bounds() {
        let mesh = build_label_mesh(config::LABEL, &test_config());

        let mut min = [f32::INFINITY; 2];
        let mut max = [f32::NEG_INFINITY; 2];
        for v in &mesh.vertices {
            for axis in 0..2 {
                min[axis] = min[axis].min(v.uv[axis]);
                max[axis] = max[axis].max(v.uv[axis]);
                assert!(
                    (0.0..=1.0).contains(&v.uv[axis]),
                    "uv component out of range: {}",
                    v.uv[axis]
                );
            }
        }

        // A wave in u must be able to travel the whole word
        assert!(min[0] < 1e-4 && max[0] > 1.0 - 1e-4);
        assert!(min[1] < 1e-4 && max[1] > 1.0 - 1e-4);
    }

    #[test]
    fn test_unknown_characters_advance_the_pen() {
        let config = test_config();
        let with_gap = build_label_mesh("M M", &config);
        let without_gap = build_label_mesh("MM", &config);

        assert_eq!(
            with_gap.vertices.len(),
            without_gap.vertices.len(),
            "a skipped character contributes no geometry"
        );

        let width = |mesh: &generative_logo::glyph::MeshData| {
            let mut min = f32::INFINITY;
            let mut max = f32::NEG_INFINITY;
            for v in &mesh.vertices {
                min = min.min(v.position[0]);
                max = max.max(v.position[0]);
            }
            max - min
        };

        assert!(
            width(&with_gap) > width(&without_gap),
            "a skipped character still widens the label"
        );
    }

    #[test]
    fn test_empty_label_yields_empty_mesh() {
        let mesh = build_label_mesh("", &test_config());
        assert!(mesh.vertices.is_empty());
        assert!(mesh.indices.is_empty());
    }
}
