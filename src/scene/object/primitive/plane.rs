use crate::{
    math::{approx_eq::ApproxEq, tuple::Tuple, vector::Vector},
    render::ray::Ray,
};

/// Infinite plane extending in x and z directions, at y = 0
pub struct PlaneXZ {}

impl PlaneXZ {
    pub fn local_normal_at() -> Vector {
        Vector::new(0., 1., 0.)
    }

    pub fn local_intersect(object_ray: &Ray, mut add: impl FnMut(f64)) {
        let parallel = object_ray.direction().y().approx_eq(&0.);
        if parallel {
            return;
        }
        add(-object_ray.origin().y() / object_ray.direction().y());
    }
}
