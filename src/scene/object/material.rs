use crate::math::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,   // [0;1]
    pub diffuse: f64,   // [0;1]
    pub specular: f64,  // [0;1]
    pub shininess: f64, // [10;+inf) (typically up to 200.0)
}

impl Material {
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn matte_with_color(color: Color) -> Self {
        Self {
            color,
            specular: 0.05,
            shininess: 15.,
            ..Default::default()
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::white(),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_low_prec;

    #[test]
    fn default_material() {
        let m = Material::default();

        assert_eq!(m.color, Color::white());
        assert_approx_eq_low_prec!(m.ambient, 0.1);
        assert_approx_eq_low_prec!(m.diffuse, 0.9);
        assert_approx_eq_low_prec!(m.specular, 0.9);
        assert_approx_eq_low_prec!(m.shininess, 200.0);
    }

    #[test]
    fn matte_keeps_lighting_defaults() {
        let m = Material::matte_with_color(Color::red());

        assert_eq!(m.color, Color::red());
        assert_approx_eq_low_prec!(m.ambient, 0.1);
        assert_approx_eq_low_prec!(m.specular, 0.05);
    }
}
