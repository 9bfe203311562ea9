use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use clap::ValueEnum;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use crate::{error::Result, math::color::Color};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Ppm,
    Png,
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Ppm => write!(f, "ppm"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// Row-major grid of colors, `(0, 0)` is the top left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn with_color(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; height * width],
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_color(width, height, Color::black())
    }

    fn index(&self, x: usize, y: usize) -> usize {
        self.width * y + x
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }
    pub fn write_pixel(&mut self, x: usize, y: usize, new_color: Color) {
        let id = self.index(x, y);
        self.pixels[id] = new_color;
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Sets every pixel to `fun(x, y)`, rows are computed in parallel.
    /// The progress bar, if any, advances once per finished row.
    pub fn set_each_pixel<F>(&mut self, fun: F, progressbar: Option<indicatif::ProgressBar>)
    where
        F: Fn(usize, usize) -> Color + Sync,
    {
        if self.width == 0 {
            return;
        }
        let width = self.width;
        let fill_row = |(y, row): (usize, &mut [Color])| {
            for (x, pixel_color) in row.iter_mut().enumerate() {
                *pixel_color = fun(x, y);
            }
        };

        let rows = self.pixels.par_chunks_mut(width).enumerate();
        match progressbar {
            Some(progressbar) => rows.progress_with(progressbar).for_each(fill_row),
            None => rows.for_each(fill_row),
        }
    }

    pub fn as_u8_rgb(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color.as_scaled_values())
            .collect()
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>, format: ImageFormat) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        match format {
            ImageFormat::Ppm => self.save_to_ppm(&mut writer)?,
            ImageFormat::Png => self.save_to_png(&mut writer)?,
        }
        writer.flush()?;
        Ok(())
    }
}

/// saving image in ppm format
impl Canvas {
    const MAX_LINE_LEN: usize = 70;

    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    /// Every row starts on a new line, no line is longer than 70 characters.
    fn ppm_data(&self) -> String {
        let mut data = String::new();
        if self.width == 0 {
            return data;
        }

        for row in self.pixels.chunks(self.width) {
            let mut line_len = 0;
            for val in row.iter().flat_map(|color| color.as_scaled_values()) {
                let val_str = val.to_string();
                if line_len == 0 {
                    line_len = val_str.len();
                } else if line_len + val_str.len() + 1 > Self::MAX_LINE_LEN {
                    data.push('\n');
                    line_len = val_str.len();
                } else {
                    data.push(' ');
                    line_len += val_str.len() + 1;
                }
                data.push_str(&val_str);
            }
            data.push('\n');
        }
        data
    }

    pub fn save_to_ppm(&self, mut writer: impl Write) -> Result<()> {
        writer.write_all(self.ppm_header().as_bytes())?;
        writer.write_all(self.ppm_data().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// saving image in png format
impl Canvas {
    pub fn save_to_png(&self, writer: impl Write) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.as_u8_rgb())?;
        writer.finish()?;
        Ok(())
    }
}
