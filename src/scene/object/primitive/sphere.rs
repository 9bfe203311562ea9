use crate::{
    math::{point::Point, tuple::Tuple, vector::Vector},
    render::ray::Ray,
};

pub struct UnitSphere {}

impl UnitSphere {
    pub fn local_normal_at(object_point: Point) -> Vector {
        object_point - Point::zero()
    }

    /// Both roots of `|O + tD|^2 = 1`, smaller first, even when they are negative.
    pub fn local_intersect(object_ray: &Ray, mut add: impl FnMut(f64)) {
        let vector_sphere_to_ray = *object_ray.origin() - Point::zero();

        let a = object_ray.direction().dot(*object_ray.direction());
        let b = 2. * object_ray.direction().dot(vector_sphere_to_ray);
        let c = vector_sphere_to_ray.dot(vector_sphere_to_ray) - 1.;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. || a == 0. {
            return;
        }

        let delta_sqrt = discriminant.sqrt();
        add((-b - delta_sqrt) / (2. * a));
        add((-b + delta_sqrt) / (2. * a));
    }
}
