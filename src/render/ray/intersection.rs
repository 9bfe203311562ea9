use crate::{
    math::{point::Point, vector::Vector},
    scene::object::Object,
};

use super::Ray;

#[derive(Clone, Copy, Debug)]
pub struct Intersection<'a> {
    time: f64,
    object: &'a Object,
}

impl<'a> Intersection<'a> {
    pub fn new(time: f64, object: &'a Object) -> Self {
        Self { time, object }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn object(&self) -> &'a Object {
        self.object
    }

    /// Precomputes the state needed to shade this intersection.
    /// The normal is flipped toward the eye when the ray hits the surface from inside.
    pub fn computations(&self, ray: &Ray) -> IntersecComputations<'a> {
        let point = ray.position(self.time);
        let eye_v = -*ray.direction();
        let normal_v = self.object.normal_vector_at(point);

        let inside = normal_v.dot(eye_v) < 0.;
        let normal_v = if inside { -normal_v } else { normal_v };

        IntersecComputations {
            time: self.time,
            object: self.object,
            point,
            eye_v,
            normal_v,
            inside,
        }
    }
}

/// Intersection with the smallest non-negative time.
/// Input doesn't need to be sorted.
pub fn hit<'a, 'b>(intersections: &'b [Intersection<'a>]) -> Option<&'b Intersection<'a>> {
    intersections
        .iter()
        .filter(|inter| inter.time() >= 0.)
        .min_by(|a, b| a.time().total_cmp(&b.time()))
}

/// All intersections of a ray, sorted by time.
#[derive(Debug)]
pub struct IntersectionCollection<'a> {
    ray: Ray,
    vec: Vec<Intersection<'a>>,
}

impl<'a> IntersectionCollection<'a> {
    pub fn new(ray: Ray, mut vec: Vec<Intersection<'a>>) -> Self {
        vec.sort_unstable_by(|i1, i2| i1.time().total_cmp(&i2.time()));
        Self { ray, vec }
    }

    pub fn from_times_and_obj(ray: Ray, times: Vec<f64>, object: &'a Object) -> Self {
        Self::new(
            ray,
            times
                .into_iter()
                .map(|time| Intersection::new(time, object))
                .collect(),
        )
    }

    pub fn from_ray_and_obj(ray: Ray, object: &'a Object) -> Self {
        let mut vec = Vec::new();
        object.intersect(&ray, &mut vec);
        Self::new(ray, vec)
    }

    pub fn hit(&self) -> Option<&Intersection<'a>> {
        // sorted, so the first non-negative one is the closest
        self.vec.iter().find(|inter| inter.time() >= 0.)
    }

    pub fn hit_computations(&self) -> Option<IntersecComputations<'a>> {
        self.hit().map(|inter| inter.computations(&self.ray))
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn vec(&self) -> &[Intersection<'a>] {
        &self.vec
    }

    pub fn times_vec(&self) -> Vec<f64> {
        self.vec.iter().map(|inter| inter.time()).collect()
    }
}

#[derive(Clone, Debug)]
pub struct IntersecComputations<'a> {
    time: f64,
    object: &'a Object,
    point: Point,
    eye_v: Vector,
    normal_v: Vector,
    inside: bool,
}

impl<'a> IntersecComputations<'a> {
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn object(&self) -> &'a Object {
        self.object
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn eye_v(&self) -> Vector {
        self.eye_v
    }

    pub fn normal_v(&self) -> Vector {
        self.normal_v
    }

    pub fn inside(&self) -> bool {
        self.inside
    }
}
