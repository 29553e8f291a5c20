//! User configuration.
//!
//! ## Note for adding new keys
//!
//! New keys added to the config _must_ use `#[serde(default)]` to maintain compatibility with
//! older configs. These keys will be added to the user's configuration automatically.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::diagram::Style;
use crate::geometry::{PixelPosition, Transform};
use crate::{Error, Result};

/// An extra pixel offset applied on top of the centered origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Offset {
   pub x: f64,
   pub y: f64,
}

/// How the mathematical plane is laid out on the drawing surface.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SurfaceConfig {
   /// Pixels per unit. The surface is `2 * scale` pixels wide and tall.
   pub scale: f64,
   #[serde(default)]
   pub offset: Offset,
}

/// Label styling.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StyleConfig {
   #[serde(default = "StyleConfig::default_font_family")]
   pub font_family: String,
   #[serde(default = "StyleConfig::default_font_size")]
   pub font_size: f64,
}

impl StyleConfig {
   fn default_font_family() -> String {
      "Arial".to_owned()
   }

   fn default_font_size() -> f64 {
      20.0
   }
}

impl Default for StyleConfig {
   fn default() -> Self {
      Self {
         font_family: Self::default_font_family(),
         font_size: Self::default_font_size(),
      }
   }
}

/// A user `config.toml` file.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserConfig {
   pub surface: SurfaceConfig,
   #[serde(default)]
   pub style: StyleConfig,
}

impl UserConfig {
   /// Returns the platform-specific configuration directory.
   pub fn config_dir() -> Result<PathBuf> {
      let project_dirs = ProjectDirs::from("", "", "UnitCircle").ok_or(Error::NoConfigDirectory)?;
      Ok(project_dirs.config_dir().to_owned())
   }

   /// Returns the path to the `config.toml` file.
   pub fn path() -> Result<PathBuf> {
      Ok(Self::config_dir()?.join("config.toml"))
   }

   /// Checks that the configuration describes a usable surface.
   ///
   /// A non-positive scale or font size can't be drawn with, and is treated as a fatal error at
   /// startup.
   pub fn validate(&self) -> Result<()> {
      let font_size = self.style.font_size;
      if !(font_size.is_finite() && font_size > 0.0) {
         return Err(Error::InvalidFontSize(font_size));
      }
      self.transform().map(|_| ())
   }

   /// Builds the plane-to-surface transform described by this configuration.
   pub fn transform(&self) -> Result<Transform> {
      let scale = self.surface.scale;
      let offset = self.surface.offset;
      Transform::new(
         scale,
         PixelPosition::new(scale, scale),
         PixelPosition::new(offset.x, offset.y),
      )
   }

   /// Returns the diagram style described by this configuration.
   pub fn style(&self) -> Style {
      Style::default().with_font(&self.style.font_family, self.style.font_size)
   }

   /// Parses a configuration from TOML source.
   pub fn from_toml(source: &str) -> Result<Self> {
      let config: Self = toml::from_str(source)?;
      config.validate()?;
      Ok(config)
   }

   /// Loads the configuration from an explicit path. Unlike [`UserConfig::load_or_create`], a
   /// missing or malformed file is an error.
   pub fn load_from(path: &Path) -> Result<Self> {
      let file = std::fs::read_to_string(path)?;
      let config = Self::from_toml(&file)?;
      log::info!("loaded config from {}", path.display());
      Ok(config)
   }

   /// Loads the `config.toml` file.
   ///
   /// If the `config.toml` doesn't exist, it's created with values inherited from
   /// `UserConfig::default`.
   #[cfg(not(target_arch = "wasm32"))]
   pub fn load_or_create() -> Result<Self> {
      let config_dir = Self::config_dir()?;
      let config_file = Self::path()?;
      std::fs::create_dir_all(config_dir)?;
      if !config_file.is_file() {
         let config = Self::default();
         config.save()?;
         Ok(config)
      } else {
         let file = std::fs::read_to_string(&config_file)?;
         let config: Self = match toml::from_str(&file) {
            Ok(config) => config,
            Err(error) => {
               log::warn!("error while deserializing config file: {}", error);
               log::warn!("falling back to default config");
               return Ok(Self::default());
            }
         };
         // A file that parses but describes an unusable surface is not silently replaced.
         config.validate()?;
         // Preemptively save the config to the disk if any new keys have been added.
         config.save()?;
         Ok(config)
      }
   }

   #[cfg(target_arch = "wasm32")]
   pub fn load_or_create() -> Result<Self> {
      use gloo_storage::{LocalStorage, Storage};

      let mut config = Self::default();
      if LocalStorage::get::<f64>(Self::SCALE_KEY).is_err() {
         config.save()?;
      }
      for (key, value) in config.stored_numbers() {
         if let Ok(stored) = LocalStorage::get::<f64>(key) {
            *value = stored;
         }
      }
      if let Ok(family) = LocalStorage::get::<String>(Self::FONT_FAMILY_KEY) {
         config.style.font_family = family;
      }
      config.validate()?;
      Ok(config)
   }

   /// Saves the user configuration to the `config.toml` file.
   #[cfg(not(target_arch = "wasm32"))]
   pub fn save(&self) -> Result<()> {
      // Assumes that `config_dir` was already created in `load_or_create`.
      let config_file = Self::path()?;
      std::fs::write(&config_file, toml::to_string(self)?)?;
      Ok(())
   }

   #[cfg(target_arch = "wasm32")]
   pub fn save(&self) -> Result<()> {
      use gloo_storage::{LocalStorage, Storage};

      let mut config = self.clone();
      let mut results: Vec<_> = config
         .stored_numbers()
         .into_iter()
         .map(|(key, value)| LocalStorage::set(key, *value))
         .collect();
      results.push(LocalStorage::set(Self::FONT_FAMILY_KEY, &self.style.font_family));
      // Storage being unavailable (eg. in private browsing) isn't worth failing over.
      for result in results {
         if let Err(error) = result {
            log::warn!("cannot save config to local storage: {}", error);
         }
      }
      Ok(())
   }

   #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
   const SCALE_KEY: &'static str = "unitcircle.scale";
   #[cfg(target_arch = "wasm32")]
   const FONT_FAMILY_KEY: &'static str = "unitcircle.font_family";

   /// The numeric settings, paired with the LocalStorage keys the browser keeps them under.
   #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
   fn stored_numbers(&mut self) -> [(&'static str, &mut f64); 4] {
      [
         (Self::SCALE_KEY, &mut self.surface.scale),
         ("unitcircle.offset_x", &mut self.surface.offset.x),
         ("unitcircle.offset_y", &mut self.surface.offset.y),
         ("unitcircle.font_size", &mut self.style.font_size),
      ]
   }
}

impl Default for UserConfig {
   fn default() -> Self {
      Self {
         surface: SurfaceConfig {
            scale: 400.0,
            offset: Offset::default(),
         },
         style: StyleConfig::default(),
      }
   }
}
