pub mod error;
pub mod targets;

pub mod math {
    pub mod approx_eq;
    pub mod color;
    pub mod matrix;
    pub mod point;
    pub mod transform;
    pub mod tuple;
    pub mod vector;
}

pub mod render {
    pub mod canvas;
    pub mod ray;
    pub mod renderer;
}

pub mod scene;

pub use error::{Error, Result};
pub use math::{
    color::Color, matrix::Matrix, point::Point, transform::Transform, tuple::Tuple,
    vector::Vector,
};
pub use render::{
    canvas::{Canvas, ImageFormat},
    ray::Ray,
    renderer::{Renderer, RendererBuilder},
};
pub use scene::{
    World,
    camera::Camera,
    light::PointLightSource,
    object::{Object, material::Material, primitive::shape::Shape},
};
