pub mod camera;
pub mod light;
pub mod object;

use tracing::debug;

use crate::{
    error::Result,
    math::{color::Color, matrix::Matrix, point::Point, tuple::Tuple},
    render::{
        canvas::Canvas,
        ray::{
            Ray,
            intersection::{IntersecComputations, IntersectionCollection},
        },
    },
    targets::SCENE,
};

use camera::Camera;
use light::PointLightSource;
use object::{Object, material::Material, primitive::shape::Shape};

/// Objects and light sources, both kept in insertion order.
/// Objects are scanned linearly for every ray.
#[derive(PartialEq, Debug, Clone)]
pub struct World {
    objects: Vec<Object>,
    light_sources: Vec<PointLightSource>,
}

impl Default for World {
    fn default() -> Self {
        Self::empty()
    }
}

impl World {
    pub fn new(objects: Vec<Object>, light_sources: Vec<PointLightSource>) -> Self {
        debug!(
            target: SCENE,
            objects = objects.len(),
            lights = light_sources.len(),
            "created world"
        );
        Self {
            objects,
            light_sources,
        }
    }

    pub fn empty() -> Self {
        Self {
            objects: Vec::new(),
            light_sources: Vec::new(),
        }
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [Object] {
        &mut self.objects
    }

    pub fn light_sources(&self) -> &[PointLightSource] {
        &self.light_sources
    }

    pub fn add_light(&mut self, light_source: PointLightSource) {
        self.light_sources.push(light_source);
    }

    pub fn set_light_sources(&mut self, light_sources: Vec<PointLightSource>) {
        self.light_sources = light_sources;
    }

    /// Intersections with every object, sorted by time. Negative times are kept.
    pub fn intersect(&self, ray: Ray) -> IntersectionCollection<'_> {
        let mut intersections = Vec::with_capacity(self.objects.len() * 2);
        for obj in &self.objects {
            obj.intersect(&ray, &mut intersections);
        }
        IntersectionCollection::new(ray, intersections)
    }

    /// Sum of the contribution of every light source. Nothing is occluded.
    pub fn shade_hit(&self, hit_comps: &IntersecComputations) -> Color {
        let material = hit_comps.object().material();
        self.light_sources
            .iter()
            .map(|light_source| {
                light_source.color_of_illuminated_point(
                    material,
                    hit_comps.point(),
                    hit_comps.eye_v(),
                    hit_comps.normal_v(),
                    false,
                )
            })
            .sum()
    }

    pub fn color_at(&self, ray: Ray) -> Color {
        self.intersect(ray)
            .hit_computations()
            .map_or(Color::black(), |hit_comps| self.shade_hit(&hit_comps))
    }

    /// Casts one ray through the center of every pixel, rows are shaded in parallel.
    pub fn render(&self, camera: &Camera) -> Canvas {
        self.render_with_progress(camera, None)
    }

    pub fn render_with_progress(
        &self,
        camera: &Camera,
        progressbar: Option<indicatif::ProgressBar>,
    ) -> Canvas {
        let mut image = camera.canvas();
        image.set_each_pixel(
            |x: usize, y: usize| self.color_at(camera.ray_for_pixel(x as f64, y as f64)),
            progressbar,
        );
        image
    }
}

// Reference world shared by tests and the default scene
impl World {
    pub fn default_testing() -> Result<Self> {
        let sphere1 = Object::with_shape_material(
            Shape::Sphere,
            Material {
                color: Color::new(0.8, 1.0, 0.6),
                diffuse: 0.7,
                specular: 0.2,
                ..Default::default()
            },
        );
        let sphere2 = Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(0.5))?;

        let lights = vec![PointLightSource::new(
            Point::new(-10., 10., -10.),
            Color::white(),
        )];
        Ok(Self::new(vec![sphere1, sphere2], lights))
    }
}
