use crate::{Error, RGB, Scalar};
use serde::Deserialize;
use std::{fmt, fs::File, io::BufReader, io::Read, path::Path};

/// Default location of the configuration file
pub const CONFIG_FILE: &str = "config.json";

/// Parameters of a single rendering run
///
/// ```json
/// {
///     "width": 800,
///     "height": 800,
///     "circle_radius_ratio": 0.4,
///     "center_color": "#00AEC9",
///     "edge_color": "#0D6586"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Fraction of the circle radius filled with solid `center_color`
    pub circle_radius_ratio: Scalar,
    /// `#RRGGBB` or `RRGGBB`
    pub center_color: String,
    /// `#RRGGBB` or `RRGGBB`
    pub edge_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            circle_radius_ratio: 0.4,
            center_color: "#00AEC9".to_owned(),
            edge_color: "#0D6586".to_owned(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(Error::ConfigOpen)?;
        let config = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), ?config, "[config]");
        Ok(config)
    }

    /// Parse and validate configuration from a JSON stream
    pub fn from_reader(reader: impl Read) -> Result<Self, Error> {
        let config: Config = serde_json::from_reader(reader).map_err(|error| {
            if error.is_io() {
                Error::ConfigOpen(error.into())
            } else {
                Error::ConfigParse(error)
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a meaningful image
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        let ratio = self.circle_radius_ratio;
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(ConfigError::RatioOutOfRange(ratio));
        }
        Ok(())
    }

    /// Center color, malformed channels are treated as zero
    pub fn center_color(&self) -> RGB {
        parse_color("center_color", &self.center_color)
    }

    /// Edge color, malformed channels are treated as zero
    pub fn edge_color(&self) -> RGB {
        parse_color("edge_color", &self.edge_color)
    }
}

fn parse_color(field: &str, value: &str) -> RGB {
    if let Err(error) = value.parse::<RGB>() {
        tracing::warn!(field, value, %error, "malformed color, missing channels set to zero");
    }
    RGB::from_hex_lossy(value)
}

/// Configuration that parsed but describes an unusable image
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// One of the dimensions is zero
    EmptyImage { width: u32, height: u32 },
    /// `circle_radius_ratio` is not within `[0, 1]`
    RatioOutOfRange(Scalar),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyImage { width, height } => {
                write!(f, "image size must be positive, got {}x{}", width, height)
            }
            ConfigError::RatioOutOfRange(ratio) => {
                write!(f, "circle_radius_ratio must be within [0, 1], got {}", ratio)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
