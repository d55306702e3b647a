//! Perspective camera looking down -z at the board plane.
//!
//! Window coordinates follow the OpenGL convention: origin at the bottom-left,
//! y up, depth 0 on the near plane and 1 on the far plane.
//! [`Camera::screen_ray`] takes window-system coordinates (y down) and flips
//! them.

use glam::{Mat4, Vec3};

use crate::ray::Ray;
use crate::types::{CAMERA_DISTANCE, FAR_PLANE, NEAR_PLANE};

/// Pixel dimensions of the surface the scene is drawn on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenViewport {
    pub width: f32,
    pub height: f32,
}

impl ScreenViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height, 1.0 for a degenerate viewport
    pub fn aspect(&self) -> f32 {
        if self.width <= 0.0 || self.height <= 0.0 {
            1.0
        } else {
            self.width / self.height
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    fov_deg: f32,
    view: Mat4,
    proj: Mat4,
    view_proj: Mat4,
    inv_view_proj: Mat4,
}

impl Camera {
    pub fn new(fov_deg: f32, aspect: f32) -> Self {
        let proj = Mat4::perspective_rh_gl(fov_deg.to_radians(), aspect, NEAR_PLANE, FAR_PLANE);
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -CAMERA_DISTANCE));
        let view_proj = proj * view;
        Self {
            fov_deg,
            view,
            proj,
            view_proj,
            inv_view_proj: view_proj.inverse(),
        }
    }

    /// Camera whose aspect ratio matches `viewport`
    pub fn for_viewport(fov_deg: f32, viewport: ScreenViewport) -> Self {
        Self::new(fov_deg, viewport.aspect())
    }

    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn proj(&self) -> Mat4 {
        self.proj
    }

    /// Eye position in world space
    pub fn position(&self) -> Vec3 {
        self.view.inverse().transform_point3(Vec3::ZERO)
    }

    /// World point to window coordinates
    pub fn project(&self, world: Vec3, viewport: ScreenViewport) -> Vec3 {
        let ndc = self.view_proj.project_point3(world);
        Vec3::new(
            (ndc.x + 1.0) * 0.5 * viewport.width,
            (ndc.y + 1.0) * 0.5 * viewport.height,
            (ndc.z + 1.0) * 0.5,
        )
    }

    /// Window coordinates back to a world point
    pub fn unproject(&self, window: Vec3, viewport: ScreenViewport) -> Vec3 {
        let ndc = Vec3::new(
            window.x / viewport.width * 2.0 - 1.0,
            window.y / viewport.height * 2.0 - 1.0,
            window.z * 2.0 - 1.0,
        );
        self.inv_view_proj.project_point3(ndc)
    }

    /// Ray through the screen point `(x, y)`, with `y` growing downward
    ///
    /// Starts on the near plane and points at the matching far-plane point.
    pub fn screen_ray(&self, x: f32, y: f32, viewport: ScreenViewport) -> Ray {
        let window_y = viewport.height - y;
        let start = self.unproject(Vec3::new(x, window_y, 0.0), viewport);
        let end = self.unproject(Vec3::new(x, window_y, 1.0), viewport);
        Ray::new(start, end - start)
    }
}
