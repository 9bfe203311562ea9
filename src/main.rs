use std::{
    f64::consts::{FRAC_PI_2, FRAC_PI_4},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use raytracer::{
    Camera, Color, ImageFormat, Material, Matrix, Object, Point, PointLightSource, RendererBuilder,
    Shape, Transform, Tuple, Vector, World, targets::MAIN,
};

const DEFAULT_WIDTH: usize = 800;
const DEFAULT_HEIGHT: usize = 800;
const DEFAULT_FOV: f64 = std::f64::consts::FRAC_PI_3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BuiltinScene {
    /// Two concentric spheres lit from the upper left
    Default,
    /// Three spheres on a floor, in front of two walls
    Demo,
}

/// Simple raytracer renderer
/// Renders one of the built-in scenes with Phong shading
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The scene to render
    #[clap(long, default_value = "default")]
    scene: BuiltinScene,

    /// The format of the output image
    #[clap(short = 'f', long, default_value = "png")]
    format: ImageFormat,

    /// The output path of the rendered image.
    /// By default it's `./<scene>.<format>`
    #[clap(short, long)]
    output: Option<PathBuf>,

    #[clap(long, default_value_t = DEFAULT_WIDTH, help = "Width (in pixels) of the output image")]
    width: usize,

    #[clap(long, default_value_t = DEFAULT_HEIGHT, help = "Height (in pixels) of the output image")]
    height: usize,

    /// Field of view of the camera in radians, defaults to π/3
    #[clap(long, default_value_t = DEFAULT_FOV)]
    fov: f64,

    /// Show a progress bar while rendering
    #[clap(short, long)]
    progress: bool,
}

/// World and the view transformation of its camera
fn default_scene() -> raytracer::Result<(World, Matrix)> {
    let view = Matrix::view_transformation(
        Point::new(0., 0., -5.),
        Point::zero(),
        Vector::new(0., 1., 0.),
    )?;
    Ok((World::default_testing()?, view))
}

fn demo_scene() -> raytracer::Result<(World, Matrix)> {
    let wall_material = Material {
        specular: 0.,
        ..Material::with_color(Color::new(1., 0.9, 0.9))
    };
    let floor = Object::with_shape_material(Shape::Plane, wall_material.clone());

    let left_wall = Object::new(
        Shape::Plane,
        wall_material.clone(),
        Matrix::rotation_x(FRAC_PI_2)
            .rotate_y(-FRAC_PI_4)
            .translate(0., 0., 5.)
            .transformed(),
    )?;
    let right_wall = Object::new(
        Shape::Plane,
        wall_material,
        Matrix::rotation_x(FRAC_PI_2)
            .rotate_y(FRAC_PI_4)
            .translate(0., 0., 5.)
            .transformed(),
    )?;

    let sphere_material = Material {
        diffuse: 0.7,
        specular: 0.3,
        ..Material::with_color(Color::new(0.1, 1., 0.5))
    };
    let middle_sphere = Object::new(
        Shape::Sphere,
        sphere_material.clone(),
        Matrix::translation(-0.5, 1., 0.5),
    )?;
    let right_sphere = Object::new(
        Shape::Sphere,
        Material {
            color: Color::new(0.5, 1., 0.1),
            ..sphere_material
        },
        Matrix::scaling_uniform(0.5)
            .translate(1.5, 0.5, -0.5)
            .transformed(),
    )?;
    let left_sphere = Object::new(
        Shape::Sphere,
        Material::matte_with_color(Color::new(1., 0.8, 0.1)),
        Matrix::scaling_uniform(0.33)
            .translate(-1.5, 0.33, -0.75)
            .transformed(),
    )?;

    let light_sources = vec![PointLightSource::new(
        Point::new(-10., 10., -10.),
        Color::white(),
    )];
    let world = World::new(
        vec![
            floor,
            left_wall,
            right_wall,
            middle_sphere,
            right_sphere,
            left_sphere,
        ],
        light_sources,
    );

    let view = Matrix::view_transformation(
        Point::new(0., 1.5, -5.),
        Point::new(0., 1., 0.),
        Vector::new(0., 1., 0.),
    )?;
    Ok((world, view))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    debug!(target: MAIN, ?args, "parsed arguments");

    let (world, view) = match args.scene {
        BuiltinScene::Default => default_scene(),
        BuiltinScene::Demo => demo_scene(),
    }
    .with_context(|| format!("failed to build {:?} scene", args.scene))?;

    let camera = Camera::with_transformation(args.width, args.height, args.fov, view)
        .context("invalid camera settings")?;

    let renderer = RendererBuilder::default()
        .world(world)
        .camera(camera)
        .use_progress_bar(args.progress)
        .build()
        .context("failed to set up renderer")?;
    let canvas = renderer.render();

    let output = args.output.unwrap_or_else(|| {
        let name = match args.scene {
            BuiltinScene::Default => "default",
            BuiltinScene::Demo => "demo",
        };
        PathBuf::from(format!("{name}.{}", args.format))
    });
    canvas
        .save_to_file(&output, args.format)
        .with_context(|| format!("failed to save image to {}", output.display()))?;

    info!(target: MAIN, path = %output.display(), "image saved");
    Ok(())
}
