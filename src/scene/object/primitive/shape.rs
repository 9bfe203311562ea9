use crate::{
    math::{point::Point, vector::Vector},
    render::ray::Ray,
};

use super::{plane::PlaneXZ, sphere::UnitSphere};

/// Primitive surface in its own object space.
/// World space transformations are applied by [`Object`](crate::scene::object::Object).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Unit sphere at point zero
    Sphere,
    /// Plane extending in x and z directions, at y = 0
    Plane,
}

impl Shape {
    pub fn local_normal_at(&self, object_point: Point) -> Vector {
        match self {
            Shape::Sphere => UnitSphere::local_normal_at(object_point),
            Shape::Plane => PlaneXZ::local_normal_at(),
        }
    }

    /// Calls `add` with the time of every intersection, in ascending order.
    pub fn local_intersect(&self, object_ray: &Ray, add: impl FnMut(f64)) {
        match self {
            Shape::Sphere => UnitSphere::local_intersect(object_ray, add),
            Shape::Plane => PlaneXZ::local_intersect(object_ray, add),
        }
    }
}
