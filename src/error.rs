use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
   #[error("the scale must be a positive number of pixels per unit, got {0}")]
   InvalidScale(f64),
   #[error("the font size must be a positive number of pixels, got {0}")]
   InvalidFontSize(f64),
   #[error("the origin and offset must be finite pixel coordinates")]
   InvalidOffset,
   #[error("invalid pointer position {0:?}, expected `x,y`")]
   InvalidPointer(String),
   #[error("cannot determine the configuration directory")]
   NoConfigDirectory,

   #[error("I/O error: {0}")]
   Io(#[from] std::io::Error),
   #[error("cannot read config: {0}")]
   TomlDeserialize(#[from] toml::de::Error),
   #[error("cannot write config: {0}")]
   TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
