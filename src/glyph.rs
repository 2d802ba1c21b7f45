// glyph.rs - Procedural stroke glyphs for the logo label.
//
// Each glyph is a list of line strokes in a unit cell, extruded into
// boxes. No font asset: the label is fixed, so five tables suffice.

use glam::{Vec2, Vec3};

use crate::config::LogoConfig;

/// Vertex layout shared by the logo pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// CPU-side mesh ready for buffer upload.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Line stroke in unit glyph space, ((x0, y0), (x1, y1)), y up.
pub type Stroke = ([f32; 2], [f32; 2]);

const M_STROKES: [Stroke; 4] = [
    ([0.0, 0.0], [0.0, 1.0]),
    ([0.0, 1.0], [0.5, 0.45]),
    ([0.5, 0.45], [1.0, 1.0]),
    ([1.0, 1.0], [1.0, 0.0]),
];

const N_STROKES: [Stroke; 3] = [
    ([0.0, 0.0], [0.0, 1.0]),
    ([0.0, 1.0], [1.0, 0.0]),
    ([1.0, 0.0], [1.0, 1.0]),
];

const SIX_STROKES: [Stroke; 6] = [
    ([0.0, 1.0], [1.0, 1.0]),
    ([0.0, 0.5], [0.0, 1.0]),
    ([0.0, 0.5], [1.0, 0.5]),
    ([0.0, 0.0], [0.0, 0.5]),
    ([1.0, 0.0], [1.0, 0.5]),
    ([0.0, 0.0], [1.0, 0.0]),
];

const ONE_STROKES: [Stroke; 3] = [
    ([0.5, 0.0], [0.5, 1.0]),
    ([0.5, 1.0], [0.25, 0.78]),
    ([0.25, 0.0], [0.75, 0.0]),
];

const TWO_STROKES: [Stroke; 5] = [
    ([0.0, 1.0], [1.0, 1.0]),
    ([1.0, 0.5], [1.0, 1.0]),
    ([0.0, 0.5], [1.0, 0.5]),
    ([0.0, 0.0], [0.0, 0.5]),
    ([0.0, 0.0], [1.0, 0.0]),
];

/// Stroke table for a glyph, or None for characters the label never uses.
pub fn glyph_strokes(c: char) -> Option<&'static [Stroke]> {
    match c {
        'M' => Some(&M_STROKES),
        'N' => Some(&N_STROKES),
        '6' => Some(&SIX_STROKES),
        '1' => Some(&ONE_STROKES),
        '2' => Some(&TWO_STROKES),
        _ => None,
    }
}

/// Append one quad face with a uniform normal. UVs are assigned later
/// from the finished label bounds.
fn push_face(mesh: &mut MeshData, corners: [Vec3; 4], normal: Vec3) {
    let base = mesh.vertices.len() as u32;
    for corner in corners {
        mesh.vertices.push(Vertex {
            position: corner.to_array(),
            normal: normal.to_array(),
            uv: [0.0, 0.0],
        });
    }
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Extrude one stroke into a box: front, back and four side faces.
fn extrude_stroke(mesh: &mut MeshData, p0: Vec2, p1: Vec2, half_width: f32, half_depth: f32) {
    let dir = (p1 - p0).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let side = Vec2::new(-dir.y, dir.x);

    // Extend the ends by the half width so joined strokes meet cleanly
    let q0 = p0 - dir * half_width;
    let q1 = p1 + dir * half_width;

    let a = q0 + side * half_width;
    let b = q0 - side * half_width;
    let c = q1 - side * half_width;
    let d = q1 + side * half_width;

    let front = |p: Vec2| Vec3::new(p.x, p.y, half_depth);
    let back = |p: Vec2| Vec3::new(p.x, p.y, -half_depth);

    push_face(mesh, [front(a), front(b), front(c), front(d)], Vec3::Z);
    push_face(mesh, [back(d), back(c), back(b), back(a)], -Vec3::Z);

    let side3 = Vec3::new(side.x, side.y, 0.0);
    let dir3 = Vec3::new(dir.x, dir.y, 0.0);
    push_face(mesh, [back(a), front(a), front(d), back(d)], side3);
    push_face(mesh, [back(c), front(c), front(b), back(b)], -side3);
    push_face(mesh, [back(b), front(b), front(a), back(a)], -dir3);
    push_face(mesh, [back(d), front(d), front(c), back(c)], dir3);
}

/// Build the extruded mesh for a label, centered on the origin, with
/// UVs spanning the label's bounding box so a wave in u travels across
/// the whole word.
pub fn build_label_mesh(label: &str, config: &LogoConfig) -> MeshData {
    let cell_h = config.glyph_height;
    let cell_w = cell_h * config.glyph_aspect;
    let advance = cell_w * (1.0 + config.letter_spacing);
    let half_width = config.stroke_width * cell_h * 0.5;
    let half_depth = config.depth * 0.5;

    let mut mesh = MeshData::default();
    let mut pen_x = 0.0_f32;

    for c in label.chars() {
        if let Some(strokes) = glyph_strokes(c) {
            for (start, end) in strokes {
                let p0 = Vec2::new(pen_x + start[0] * cell_w, start[1] * cell_h);
                let p1 = Vec2::new(pen_x + end[0] * cell_w, end[1] * cell_h);
                extrude_stroke(&mut mesh, p0, p1, half_width, half_depth);
            }
        }
        pen_x += advance;
    }

    if mesh.vertices.is_empty() {
        return mesh;
    }

    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    for v in &mesh.vertices {
        min = min.min(Vec2::new(v.position[0], v.position[1]));
        max = max.max(Vec2::new(v.position[0], v.position[1]));
    }
    let center = (min + max) * 0.5;
    let extent = (max - min).max(Vec2::splat(1e-6));

    for v in &mut mesh.vertices {
        v.uv = [
            (v.position[0] - min.x) / extent.x,
            (v.position[1] - min.y) / extent.y,
        ];
        v.position[0] -= center.x;
        v.position[1] -= center.y;
    }

    mesh
}
