use crate::{
    math::{color::Color, point::Point, vector::Vector},
    scene::object::material::Material,
};

#[derive(PartialEq, Debug, Clone)]
pub struct PointLightSource {
    position: Point,
    intensity: Color,
}

impl Default for PointLightSource {
    fn default() -> Self {
        Self {
            position: Point::zero(),
            intensity: Color::white(),
        }
    }
}

impl PointLightSource {
    pub fn new(position: Point, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// compute color of illuminated point using Phong reflection model
    pub fn color_of_illuminated_point(
        &self,
        material: &Material,
        point: Point,
        eye_v: Vector,
        normal_v: Vector,
        in_shadow: bool,
    ) -> Color {
        // combine surface color with lights's intensity (color)
        let effective_color = material.color * self.intensity;
        let ambient = effective_color * material.ambient;

        let light_v = (self.position - point).normalize();
        let light_dot_normal = light_v.dot(normal_v);

        // light is on the other side of surface
        if in_shadow || light_dot_normal < 0. {
            return ambient;
        }
        let diffuse = effective_color * material.diffuse * light_dot_normal;

        let reflect_v = (-light_v).reflect(normal_v);
        let reflect_dot_eye = reflect_v.dot(eye_v);

        // light reflects away from the eye
        let specular = if reflect_dot_eye <= 0. {
            Color::black()
        } else {
            let factor = reflect_dot_eye.powf(material.shininess);
            self.intensity * material.specular * factor
        };

        ambient + diffuse + specular
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use super::*;
    use crate::{assert_approx_eq_low_prec, math::tuple::Tuple};

    fn front_facing() -> (Material, Point, Vector) {
        (Material::default(), Point::zero(), Vector::new(0., 0., -1.))
    }

    #[test]
    fn light_has_position_and_intensity() {
        let light = PointLightSource::new(Point::new(0., 0., 0.), Color::white());

        assert_eq!(light.position(), Point::zero());
        assert_eq!(light.intensity(), Color::white());
        assert_eq!(light, PointLightSource::default());
    }

    #[test]
    fn lighting_with_surface_in_shadow() {
        let (material, point, normal_v) = front_facing();
        let eye_v = Vector::new(0., 0., -1.);
        let light = PointLightSource::new(Point::new(0., 0., -10.), Color::white());

        assert_approx_eq_low_prec!(
            light.color_of_illuminated_point(&material, point, eye_v, normal_v, true),
            Color::new(0.1, 0.1, 0.1)
        );
    }

    #[test]
    fn lighting_with_eye_between_light_and_surface() {
        let (material, point, normal_v) = front_facing();
        let eye_v = Vector::new(0., 0., -1.);
        let light = PointLightSource::new(Point::new(0., 0., -10.), Color::white());

        assert_approx_eq_low_prec!(
            light.color_of_illuminated_point(&material, point, eye_v, normal_v, false),
            Color::new(1.9, 1.9, 1.9)
        );
    }

    #[test]
    fn lighting_with_eye_between_light_and_surface_eye_offset_45() {
        let (material, point, normal_v) = front_facing();
        let eye_v = Vector::new(0., FRAC_1_SQRT_2, -FRAC_1_SQRT_2);
        let light = PointLightSource::new(Point::new(0., 0., -10.), Color::white());

        assert_approx_eq_low_prec!(
            light.color_of_illuminated_point(&material, point, eye_v, normal_v, false),
            Color::new(1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn lighting_with_eye_opposite_surface_light_offset_45() {
        let (material, point, normal_v) = front_facing();
        let eye_v = Vector::new(0., 0., -1.);
        let light = PointLightSource::new(Point::new(0., 10., -10.), Color::white());

        let intensity = 0.1 + 0.9 * FRAC_1_SQRT_2;
        assert_approx_eq_low_prec!(
            light.color_of_illuminated_point(&material, point, eye_v, normal_v, false),
            Color::new(intensity, intensity, intensity)
        );
    }

    #[test]
    fn lighting_with_eye_in_path_of_reflection() {
        let (material, point, normal_v) = front_facing();
        let eye_v = Vector::new(0., -FRAC_1_SQRT_2, -FRAC_1_SQRT_2);
        let light = PointLightSource::new(Point::new(0., 10., -10.), Color::white());

        let intensity = 1. + 0.9 * FRAC_1_SQRT_2;
        assert_approx_eq_low_prec!(
            light.color_of_illuminated_point(&material, point, eye_v, normal_v, false),
            Color::new(intensity, intensity, intensity)
        );
    }

    #[test]
    fn lighting_with_light_behind_surface() {
        let (material, point, normal_v) = front_facing();
        let eye_v = Vector::new(0., 0., -1.);
        let light = PointLightSource::new(Point::new(0., 0., 10.), Color::white());

        assert_approx_eq_low_prec!(
            light.color_of_illuminated_point(&material, point, eye_v, normal_v, false),
            Color::new(0.1, 0.1, 0.1)
        );
    }

    #[test]
    fn lighting_is_not_clamped() {
        let material = Material {
            ambient: 1.,
            ..Material::with_color(Color::new(2., 2., 2.))
        };
        let (_, point, normal_v) = front_facing();
        let light = PointLightSource::new(Point::new(0., 0., 10.), Color::white());

        assert_approx_eq_low_prec!(
            light.color_of_illuminated_point(&material, point, normal_v, normal_v, false),
            Color::new(2., 2., 2.)
        );
    }

    #[test]
    fn light_intensity_tints_surface_color() {
        let material = Material {
            ambient: 1.,
            diffuse: 0.,
            specular: 0.,
            ..Material::with_color(Color::new(0.5, 1., 1.))
        };
        let (_, point, normal_v) = front_facing();
        let light = PointLightSource::new(Point::new(0., 0., -10.), Color::new(1., 0.5, 0.));

        assert_approx_eq_low_prec!(
            light.color_of_illuminated_point(&material, point, normal_v, normal_v, false),
            Color::new(0.5, 0.5, 0.)
        );
    }
}
