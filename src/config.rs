// config.rs - Compile-time scene configuration
//
// Everything here is a constant, not a runtime flag. The values are the
// final iteration of the design: aurora color law, default starfield,
// camera at (0, 0, 10) with a 45 degree field of view.

use glam::Vec3;

/// The label rendered by the logo mesh.
pub const LABEL: &str = "MN612";

/// Footer navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// Footer navigation, rendered independently of scene state.
pub const FOOTER_LINKS: [FooterLink; 4] = [
    FooterLink { name: "About", href: "#" },
    FooterLink { name: "Projects", href: "#" },
    FooterLink { name: "Contact", href: "#" },
    FooterLink { name: "Source", href: "#" },
];

/// Fixed perspective camera.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    pub position: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

pub const CAMERA: CameraConfig = CameraConfig {
    position: Vec3::new(0.0, 0.0, 10.0),
    fov_y_degrees: 45.0,
    near: 0.1,
    far: 400.0,
};

/// Ambient + point lighting constants consumed by the logo shader.
#[derive(Debug, Clone, Copy)]
pub struct LightConfig {
    pub ambient_intensity: f32,
    pub point_position: Vec3,
    pub point_intensity: f32,
}

pub const LIGHTS: LightConfig = LightConfig {
    ambient_intensity: 0.5,
    point_position: Vec3::new(10.0, 10.0, 10.0),
    point_intensity: 1.0,
};

/// Bloom post-processing parameters.
#[derive(Debug, Clone, Copy)]
pub struct BloomConfig {
    /// Luminance above this contributes to the bloom source.
    pub luminance_threshold: f32,
    /// Width of the soft knee around the threshold, [0, 1].
    pub luminance_smoothing: f32,
    /// Additive strength of the blurred highlights.
    pub intensity: f32,
}

pub const BLOOM: BloomConfig = BloomConfig {
    luminance_threshold: 0.1,
    luminance_smoothing: 0.9,
    intensity: 1.5,
};

/// Decorative starfield shell.
#[derive(Debug, Clone, Copy)]
pub struct StarfieldConfig {
    /// Inner radius of the shell the stars occupy.
    pub radius: f32,
    /// Shell thickness; stars sit in [radius, radius + depth].
    pub depth: f32,
    pub count: usize,
    /// Star size in pixels before twinkle modulation.
    pub factor: f32,
    /// Rotation / twinkle rate multiplier.
    pub speed: f32,
}

pub const STARFIELD: StarfieldConfig = StarfieldConfig {
    radius: 100.0,
    depth: 50.0,
    count: 5000,
    factor: 4.0,
    speed: 1.0,
};

/// Logo geometry proportions.
#[derive(Debug, Clone, Copy)]
pub struct LogoConfig {
    /// Height of one glyph cell in world units.
    pub glyph_height: f32,
    /// Width of one glyph cell relative to its height.
    pub glyph_aspect: f32,
    /// Gap between glyph cells as a fraction of glyph width.
    pub letter_spacing: f32,
    /// Stroke thickness as a fraction of glyph height.
    pub stroke_width: f32,
    /// Extrusion depth in world units.
    pub depth: f32,
}

pub const LOGO: LogoConfig = LogoConfig {
    glyph_height: 2.2,
    glyph_aspect: 0.62,
    letter_spacing: 0.28,
    stroke_width: 0.16,
    depth: 0.45,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_has_four_named_links() {
        let names: Vec<_> = FOOTER_LINKS.iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["About", "Projects", "Contact", "Source"]);
    }

    #[test]
    fn bloom_parameters_are_sane() {
        assert!(BLOOM.luminance_threshold >= 0.0);
        assert!(BLOOM.luminance_smoothing >= 0.0 && BLOOM.luminance_smoothing <= 1.0);
        assert!(BLOOM.intensity > 0.0);
    }

    #[test]
    fn starfield_shell_is_outside_camera() {
        assert!(STARFIELD.radius > CAMERA.position.length());
        assert!(STARFIELD.depth > 0.0);
        assert!(STARFIELD.radius + STARFIELD.depth < CAMERA.far);
    }
}
