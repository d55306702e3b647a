//! Collision world holding one pick box per tile.

use arrayvec::ArrayVec;
use glam::Vec3;

use crate::layout::TileLayout;
use crate::ray::{Aabb, Ray, RayHit};
use crate::types::{Pos, CELL_COUNT};

/// A tile's pick box, tagged with the board position it stands for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileCollider {
    pub pos: Pos,
    pub bounds: Aabb,
}

/// Up to nine tile colliders, queried with segment ray tests
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    colliders: ArrayVec<TileCollider, CELL_COUNT>,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self {
            colliders: ArrayVec::new(),
        }
    }

    /// One collider per tile of `layout`
    pub fn from_layout(layout: &TileLayout) -> Self {
        let mut world = Self::new();
        for (pos, center) in layout.iter() {
            world.add(TileCollider {
                pos,
                bounds: Aabb::from_center_half_extents(center, layout.half_extents()),
            });
        }
        world
    }

    /// Add a collider; returns false once the world holds nine
    pub fn add(&mut self, collider: TileCollider) -> bool {
        self.colliders.try_push(collider).is_ok()
    }

    pub fn colliders(&self) -> &[TileCollider] {
        &self.colliders
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Closest collider hit on the segment `from -> to`
    pub fn ray_test(&self, from: Vec3, to: Vec3) -> Option<RayHit> {
        let segment = to - from;
        let length = segment.length();
        if length <= f32::EPSILON {
            return None;
        }
        let ray = Ray::new(from, segment);

        self.colliders
            .iter()
            .filter_map(|c| {
                let t = c.bounds.intersect(&ray)?;
                (t <= length).then_some((c.pos, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(pos, t)| RayHit {
                pos,
                fraction: t / length,
                point: ray.at(t),
            })
    }
}
