use std::time::Instant;

use derive_builder::Builder;
use tracing::info;

use crate::{
    render::canvas::Canvas,
    scene::{World, camera::Camera},
    targets::RENDER,
};

#[derive(PartialEq, Debug, Clone, Builder)]
/// Renders the world as seen by the camera, optionally reporting progress in the terminal.
pub struct Renderer {
    world: World,
    camera: Camera,
    #[builder(default = "false")]
    use_progress_bar: bool,
}

impl Renderer {
    const PROGRESS_TEMPLATE: &'static str = "{spinner:.green} [{elapsed_precise}] {wide_bar:.cyan/blue} rows shaded: {human_pos}/{human_len} {percent}% ({eta})";

    fn progress_bar(&self) -> Option<indicatif::ProgressBar> {
        if !self.use_progress_bar {
            return None;
        }
        let pb = indicatif::ProgressBar::new(self.camera.target_height() as u64);
        match indicatif::ProgressStyle::with_template(Self::PROGRESS_TEMPLATE) {
            Ok(style) => Some(pb.with_style(style)),
            Err(_) => Some(pb),
        }
    }

    pub fn render(&self) -> Canvas {
        info!(
            target: RENDER,
            width = self.camera.target_width(),
            height = self.camera.target_height(),
            objects = self.world.objects().len(),
            lights = self.world.light_sources().len(),
            "rendering image"
        );

        let now = Instant::now();
        let image = self
            .world
            .render_with_progress(&self.camera, self.progress_bar());
        let elapsed = now.elapsed();

        let ray_count = image.width() * image.height();
        let rays_per_sec = ray_count as f64 / elapsed.as_secs_f64();
        info!(
            target: RENDER,
            ?elapsed,
            rays_per_sec = rays_per_sec.round(),
            "render finished"
        );
        image
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn use_progress_bar(&self) -> bool {
        self.use_progress_bar
    }
}
