//! Screen position to board tile, by casting a camera ray into the collision world.

use crate::camera::{Camera, ScreenViewport};
use crate::collision::CollisionWorld;
use crate::layout::TileLayout;
use crate::ray::{Ray, RayHit};
use crate::types::{Pos, PICK_RAY_LENGTH};

#[derive(Debug, Clone)]
pub struct Picker {
    camera: Camera,
    world: CollisionWorld,
}

impl Picker {
    /// Picker over the standard nine-tile layout
    pub fn new(camera: Camera) -> Self {
        Self::with_world(camera, CollisionWorld::from_layout(&TileLayout::new()))
    }

    pub fn with_world(camera: Camera, world: CollisionWorld) -> Self {
        Self { camera, world }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Swap the camera, e.g. after the viewport changed aspect ratio
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }

    /// Closest tile hit under the screen point `(x, y)` (y grows downward)
    pub fn pick_hit(&self, x: f32, y: f32, viewport: ScreenViewport) -> Option<RayHit> {
        self.pick_ray(&self.camera.screen_ray(x, y, viewport))
    }

    /// Closest tile hit along `ray`, tested over [`PICK_RAY_LENGTH`]
    pub fn pick_ray(&self, ray: &Ray) -> Option<RayHit> {
        self.world.ray_test(ray.origin, ray.at(PICK_RAY_LENGTH))
    }

    pub fn pick(&self, x: f32, y: f32, viewport: ScreenViewport) -> Option<Pos> {
        self.pick_hit(x, y, viewport).map(|hit| hit.pos)
    }
}
