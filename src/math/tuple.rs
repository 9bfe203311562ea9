/// Common interface of [`Point`](super::point::Point) and [`Vector`](super::vector::Vector).
/// The `w` component is fixed by the type: 1 for points, 0 for vectors.
pub trait Tuple {
    fn new(x: f64, y: f64, z: f64) -> Self;

    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
    fn w(&self) -> f64;

    fn is_point(&self) -> bool {
        self.w() == 1.
    }

    fn is_vector(&self) -> bool {
        self.w() == 0.
    }
}
