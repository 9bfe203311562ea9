use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    math::{matrix::Matrix, point::Point, tuple::Tuple},
    render::{canvas::Canvas, ray::Ray},
    targets::SCENE,
};

// camera looks toward -z direction from point zero
// this makes +x to be on the left
#[derive(PartialEq, Debug, Clone)]
pub struct Camera {
    target_width: usize,
    target_height: usize,
    inverse_transformation: Matrix,

    pixel_size: f64,
    half_width: f64,
    half_height: f64,
    field_of_view: f64,
}

impl Camera {
    pub fn new(target_width: usize, target_height: usize, field_of_view: f64) -> Result<Self> {
        Self::with_inverse_transformation(
            target_width,
            target_height,
            field_of_view,
            Matrix::identity(),
        )
    }

    /// `transformation` maps world space to camera space,
    /// usually built with [`Matrix::view_transformation`].
    pub fn with_transformation(
        target_width: usize,
        target_height: usize,
        field_of_view: f64,
        transformation: Matrix,
    ) -> Result<Self> {
        let inverse_transformation = transformation.try_inverse()?;
        Self::with_inverse_transformation(
            target_width,
            target_height,
            field_of_view,
            inverse_transformation,
        )
    }

    pub fn with_inverse_transformation(
        target_width: usize,
        target_height: usize,
        field_of_view: f64,
        inverse_transformation: Matrix,
    ) -> Result<Self> {
        if target_width == 0 || target_height == 0 {
            trace!(target: SCENE, target_width, target_height, "rejected camera size");
            return Err(Error::InvalidCanvasSize {
                width: target_width,
                height: target_height,
            });
        }
        if !field_of_view.is_finite() || field_of_view <= 0. || field_of_view >= PI {
            trace!(target: SCENE, field_of_view, "rejected camera field of view");
            return Err(Error::InvalidFieldOfView(field_of_view));
        }

        let half_view = (field_of_view / 2.).tan();
        let h_v_aspect = target_width as f64 / target_height as f64;

        let (half_width, half_height) = match h_v_aspect >= 1. {
            true => (half_view, half_view / h_v_aspect),
            false => (half_view * h_v_aspect, half_view),
        };

        let pixel_size = 2. * half_width / target_width as f64;

        debug!(
            target: SCENE,
            target_width, target_height, field_of_view, pixel_size, "created camera"
        );

        Ok(Self {
            target_width,
            target_height,
            inverse_transformation,

            pixel_size,
            half_width,
            half_height,
            field_of_view,
        })
    }

    /// Ray from the camera through the point `(x, y)` on the canvas,
    /// pixel centers lie at half-integer offsets.
    pub fn ray_for_pixel(&self, x: f64, y: f64) -> Ray {
        let x_offset_to_center = (x + 0.5) * self.pixel_size;
        let y_offset_to_center = (y + 0.5) * self.pixel_size;

        let scene_x = self.half_width - x_offset_to_center;
        let scene_y = self.half_height - y_offset_to_center;

        let pixel = self.inverse_transformation * Point::new(scene_x, scene_y, -1.);
        let origin = self.inverse_transformation * Point::zero();
        let direction = pixel - origin;

        Ray::new(origin, direction.normalize())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.target_width, self.target_height)
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    pub fn target_height(&self) -> usize {
        self.target_height
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    pub fn inverse_transformation(&self) -> Matrix {
        self.inverse_transformation
    }
}
