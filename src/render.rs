//! Rendering pipeline: load configuration, paint every pixel, save PNG.
use crate::{
    CONFIG_FILE, Config, Error, Image, ImageOwned, Paint, Point, RGB, Scalar, TurrellCircle,
    write_png,
};
use chrono::{DateTime, Local};
use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

/// Default location of the rendered image
pub const OUTPUT_FILE: &str = "turrell_circle.png";

/// Evaluate `paint` at every pixel of a `width x height` image
///
/// Pixel `(col, row)` is sampled at the point `(col, row)`, that is at its
/// top-left corner.
pub fn render_paint<P>(paint: &P, width: u32, height: u32) -> ImageOwned<RGB>
where
    P: Paint + ?Sized,
{
    ImageOwned::new_with(height as usize, width as usize, |row, col| {
        paint.at(Point::new(col as Scalar, row as Scalar))
    })
}

/// Render the circle described by the configuration
pub fn render(config: &Config) -> ImageOwned<RGB> {
    render_paint(
        &TurrellCircle::from_config(config),
        config.width,
        config.height,
    )
}

/// Encode image as PNG into `out` and flush it
pub fn encode<I, W>(image: I, mut out: W) -> Result<(), Error>
where
    I: Image<Pixel = RGB>,
    W: Write,
{
    write_png(image, &mut out)?;
    out.flush().map_err(png::EncodingError::from)?;
    Ok(())
}

/// Save image as a PNG file, the file is created (or truncated) first
pub fn save<I>(image: I, path: impl AsRef<Path>) -> Result<(), Error>
where
    I: Image<Pixel = RGB>,
{
    let file = File::create(path.as_ref()).map_err(Error::OutputCreate)?;
    encode(image, BufWriter::new(file))
}

/// Single rendering run from a configuration file to an image file
#[derive(Debug, Clone)]
pub struct Renderer {
    config_path: PathBuf,
    output_path: PathBuf,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(CONFIG_FILE, OUTPUT_FILE)
    }
}

impl Renderer {
    pub fn new(config_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Run the whole pipeline and report how long each stage took
    ///
    /// Nothing is written if the configuration cannot be loaded.
    pub fn run(&self) -> Result<Timings, Error> {
        let total = Instant::now();

        let start = Instant::now();
        let config =
            tracing::debug_span!("[load]").in_scope(|| Config::load(&self.config_path))?;
        let config_time = start.elapsed();

        let start = Instant::now();
        let circle = tracing::debug_span!("[init]").in_scope(|| TurrellCircle::from_config(&config));
        let init_time = start.elapsed();

        let start = Instant::now();
        let image = tracing::debug_span!("[render]", width = config.width, height = config.height)
            .in_scope(|| render_paint(&circle, config.width, config.height));
        let pixels_time = start.elapsed();

        let start = Instant::now();
        tracing::debug_span!("[save]", path = %self.output_path.display())
            .in_scope(|| save(&image, &self.output_path))?;
        let save_time = start.elapsed();

        Ok(Timings {
            config: config_time,
            init: init_time,
            pixels: pixels_time,
            save: save_time,
            total: total.elapsed(),
            finished: Local::now(),
        })
    }
}

/// Wall-clock duration of every pipeline stage
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    pub config: Duration,
    pub init: Duration,
    pub pixels: Duration,
    pub save: Duration,
    pub total: Duration,
    /// When the run completed
    pub finished: DateTime<Local>,
}

impl fmt::Display for Timings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(
            f,
            "Performance Breakdown ({}):",
            self.finished.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Configuration loading: {:?}", self.config)?;
        writeln!(f, "Initialization: {:?}", self.init)?;
        writeln!(f, "Pixel processing: {:?}", self.pixels)?;
        writeln!(f, "Image saving: {:?}", self.save)?;
        writeln!(f, "{}", rule)?;
        write!(f, "Total execution time: {:?}", self.total)
    }
}
