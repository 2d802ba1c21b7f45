use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Fixed perspective camera looking at the origin.
pub struct Camera {
    position: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        Self {
            position: config.position,
            fov_y: config.fov_y_degrees.to_radians(),
            aspect: width.max(1) as f32 / height.max(1) as f32,
            near: config.near,
            far: config.far,
        }
    }

    /// A zero dimension (minimized window) keeps the previous aspect;
    /// the projection must stay finite.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Combined view-projection matrix for the scene uniform.
    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CAMERA;
    use glam::Vec4;

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = Camera::new(&CAMERA, 800, 600);
        let clip = camera.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;

        assert!(ndc_x.abs() < 0.001, "look-at target should be centered");
        assert!(ndc_y.abs() < 0.001, "look-at target should be centered");
    }

    #[test]
    fn origin_is_inside_depth_range() {
        let camera = Camera::new(&CAMERA, 800, 600);
        let clip = camera.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc_z = clip.z / clip.w;

        assert!(ndc_z > 0.0 && ndc_z < 1.0, "origin must be between near and far");
    }

    #[test]
    fn zero_size_resize_keeps_projection_finite() {
        let mut camera = Camera::new(&CAMERA, 800, 600);
        let before = camera.view_proj();

        // Minimized window reports a 0x0 inner size
        camera.set_aspect(0, 0);
        let after = camera.view_proj();

        assert!(
            after.to_cols_array().iter().all(|v| v.is_finite()),
            "projection must stay finite after a zero-size resize"
        );
        assert_eq!(after, before, "zero-size resize keeps the previous aspect");
    }

    #[test]
    fn resize_changes_horizontal_scale_only() {
        let mut camera = Camera::new(&CAMERA, 800, 600);
        let wide_point = Vec4::new(1.0, 1.0, 0.0, 1.0);

        let before = camera.view_proj() * wide_point;
        camera.set_aspect(1600, 600);
        let after = camera.view_proj() * wide_point;

        assert!((after.x / after.w).abs() < (before.x / before.w).abs());
        assert!(((after.y / after.w) - (before.y / before.w)).abs() < 0.001);
    }
}
