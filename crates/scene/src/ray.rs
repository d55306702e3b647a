//! Rays and ray/box intersection.

use glam::Vec3;

use crate::types::Pos;

const PARALLEL_EPSILON: f32 = 1e-6;

/// A half-line with a unit-length direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; `direction` is normalized (zero stays zero)
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Where the ray crosses the plane `z = const`, if in front of the origin
    pub fn plane_z(&self, z: f32) -> Option<Vec3> {
        if self.direction.z.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (z - self.origin.z) / self.direction.z;
        if t < 0.0 {
            return None;
        }
        Some(self.at(t))
    }
}

/// Closest collider hit along a pick segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Board tile owning the collider
    pub pos: Pos,
    /// Hit distance as a fraction of the segment, in `[0, 1]`
    pub fraction: f32,
    pub point: Vec3,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Slab test: distance along `ray` where it enters the box
    ///
    /// Returns 0 when the origin is inside, None on a miss or when the box is
    /// entirely behind the origin.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let inv = ray.direction.recip();
        let t1 = (self.min - ray.origin) * inv;
        let t2 = (self.max - ray.origin) * inv;

        let t_enter = t1.min(t2).max_element();
        let t_exit = t1.max(t2).min_element();

        if t_exit < 0.0 || t_enter > t_exit {
            return None;
        }
        Some(t_enter.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(0.5))
    }

    #[test]
    fn direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(ray.direction, Vec3::NEG_Z);
        assert_eq!(ray.at(2.0), Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn plane_crossing_in_front_only() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 4.0), Vec3::NEG_Z);
        assert_eq!(ray.plane_z(0.0), Some(Vec3::new(1.0, 2.0, 0.0)));
        assert_eq!(ray.plane_z(5.0), None);

        let flat = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(flat.plane_z(1.0), None);
    }

    #[test]
    fn slab_hit_reports_entry_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 4.0), Vec3::NEG_Z);
        let t = unit_box().intersect(&ray).unwrap();
        assert!((t - 3.5).abs() < 1e-5);
    }

    #[test]
    fn slab_miss_and_behind() {
        let beside = Ray::new(Vec3::new(2.0, 0.0, 4.0), Vec3::NEG_Z);
        assert_eq!(unit_box().intersect(&beside), None);

        let away = Ray::new(Vec3::new(0.0, 0.0, 4.0), Vec3::Z);
        assert_eq!(unit_box().intersect(&away), None);
    }

    #[test]
    fn origin_inside_hits_at_zero() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(unit_box().intersect(&ray), Some(0.0));
    }
}
