pub mod material;

pub mod primitive {
    pub mod plane;
    pub mod shape;
    pub mod sphere;
}

use tracing::trace;

use crate::{
    error::Result,
    math::{matrix::Matrix, point::Point, transform::Transform, vector::Vector},
    render::ray::{Ray, intersection::Intersection},
    targets::SCENE,
};

use material::Material;
use primitive::shape::Shape;

/// A shape placed in the world.
/// The inverse transformation is computed once, when the transformation is set.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    shape: Shape,
    material: Material,
    transformation: Matrix,
    transformation_inverse: Matrix,
}

impl Object {
    pub fn new(shape: Shape, material: Material, transformation: Matrix) -> Result<Self> {
        let mut obj = Self::with_shape_material(shape, material);
        obj.set_transformation(transformation)?;
        Ok(obj)
    }

    pub fn with_shape(shape: Shape) -> Self {
        Self::with_shape_material(shape, Material::default())
    }

    pub fn with_shape_material(shape: Shape, material: Material) -> Self {
        Self {
            shape,
            material,
            transformation: Matrix::identity(),
            transformation_inverse: Matrix::identity(),
        }
    }

    pub fn with_transformation(shape: Shape, transformation: Matrix) -> Result<Self> {
        Self::new(shape, Material::default(), transformation)
    }

    pub fn sphere() -> Self {
        Self::with_shape(Shape::Sphere)
    }

    pub fn plane() -> Self {
        Self::with_shape(Shape::Plane)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }

    pub fn transformation_inverse(&self) -> &Matrix {
        &self.transformation_inverse
    }

    /// Fails if the matrix is not invertible, leaving the object unchanged.
    pub fn set_transformation(&mut self, transformation: Matrix) -> Result<()> {
        let inverse = transformation.try_inverse().inspect_err(|err| {
            trace!(target: SCENE, ?transformation, %err, "rejected object transformation");
        })?;

        self.transformation = transformation;
        self.transformation_inverse = inverse;
        Ok(())
    }

    /// Applies `matrix` after the current transformation.
    pub fn transform(&mut self, matrix: &Matrix) -> Result<()> {
        self.set_transformation(self.transformation.transform_new(matrix))
    }

    /// Pushes every intersection of the world space `ray` with this object, including negative ones.
    pub fn intersect<'a>(&'a self, ray: &Ray, intersections: &mut Vec<Intersection<'a>>) {
        let object_ray = ray.transform_new(&self.transformation_inverse);
        self.shape.local_intersect(&object_ray, |time| {
            intersections.push(Intersection::new(time, self))
        });
    }

    pub fn intersection_times(&self, ray: &Ray) -> Vec<f64> {
        let mut times = Vec::new();
        let object_ray = ray.transform_new(&self.transformation_inverse);
        self.shape
            .local_intersect(&object_ray, |time| times.push(time));
        times
    }

    /// Unit normal in world space at `world_point`, assumed to lie on the surface.
    pub fn normal_vector_at(&self, world_point: Point) -> Vector {
        let object_point = self.transformation_inverse * world_point;
        let object_normal = self.shape.local_normal_at(object_point);

        // transpose of the inverse keeps the normal perpendicular under non-uniform scaling,
        // dropping w discards the translation part
        let world_normal = self.transformation_inverse.mul_transposed(object_normal);
        world_normal.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        error::Error,
        math::{color::Color, tuple::Tuple},
    };

    #[test]
    fn default_object() {
        let obj = Object::sphere();

        assert_eq!(obj.transformation(), &Matrix::identity());
        assert_eq!(obj.material(), &Material::default());
        assert_eq!(obj.shape(), Shape::Sphere);
    }

    #[test]
    fn change_transformation() {
        let mut obj = Object::sphere();
        obj.set_transformation(Matrix::translation(2., 3., 4.)).unwrap();

        assert_eq!(obj.transformation(), &Matrix::translation(2., 3., 4.));
        assert_eq!(
            obj.transformation_inverse(),
            &Matrix::translation(-2., -3., -4.)
        );
    }

    #[test]
    fn transform_composes_after_current() {
        let mut obj = Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(2.))
            .unwrap();
        obj.transform(&Matrix::translation(1., 0., 0.)).unwrap();

        assert_eq!(
            obj.transformation(),
            &(Matrix::translation(1., 0., 0.) * Matrix::scaling_uniform(2.))
        );
    }

    #[test]
    fn non_invertible_transformation_is_rejected() {
        let mut obj = Object::sphere();
        let res = obj.set_transformation(Matrix::scaling(1., 0., 1.));

        assert!(matches!(res, Err(Error::NonInvertibleMatrix)));
        assert_eq!(obj.transformation(), &Matrix::identity());
        assert!(Object::with_transformation(Shape::Plane, Matrix::scaling_uniform(0.)).is_err());
    }

    #[test]
    fn tiny_sphere_is_constructible() {
        let obj = Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(1e-6))
            .unwrap();
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));

        let times = obj.intersection_times(&ray);
        assert_eq!(times.len(), 2);
        assert_approx_eq_low_prec!(times[0], 5. - 1e-6);
        assert_approx_eq_low_prec!(times[1], 5. + 1e-6);
    }

    #[test]
    fn assign_material() {
        let mut obj = Object::sphere();
        let material = Material {
            ambient: 1.,
            ..Material::with_color(Color::red())
        };
        obj.set_material(material.clone());

        assert_eq!(obj.material(), &material);
    }

    #[test]
    fn intersect_pushes_object_reference() {
        let obj = Object::sphere();
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let mut intersections = Vec::new();
        obj.intersect(&ray, &mut intersections);

        assert_eq!(intersections.len(), 2);
        assert!(
            intersections
                .iter()
                .all(|inter| std::ptr::eq(inter.object(), &obj))
        );
    }

    #[test]
    fn normal_is_normalized_under_non_uniform_scaling() {
        let obj = Object::with_transformation(Shape::Sphere, Matrix::scaling(3., 1., 0.2))
            .unwrap();
        let normal = obj.normal_vector_at(Point::new(0., 1., 0.));

        assert_approx_eq_low_prec!(normal.magnitude(), 1.);
        assert_approx_eq_low_prec!(normal, Vector::new(0., 1., 0.));
    }
}
