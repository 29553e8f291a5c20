//! Rendering single frames to SVG documents.

use unitcircle_renderer_svg::SvgSurface;

use crate::config::UserConfig;
use crate::diagram::Diagram;
use crate::geometry::PixelPosition;
use crate::{Error, Result};

/// Renders one frame of the diagram, as it looks with the pointer at the given position.
pub fn export_svg(config: &UserConfig, pointer: Option<PixelPosition>) -> Result<String> {
   config.validate()?;
   let transform = config.transform()?;
   let (width, height) = transform.surface_size();
   let mut diagram = Diagram::new(SvgSurface::new(width, height), transform, config.style());
   match diagram.render(pointer) {
      Some(reading) => log::info!(
         "rendered overlay at {:.2}° (cos {:.4}, sin {:.4})",
         reading.angle_degrees(),
         reading.cosine,
         reading.sine
      ),
      None => log::info!("rendered base diagram"),
   }
   Ok(diagram.surface().finish())
}

/// Parses a pointer position given as `x,y` pixel coordinates.
pub fn parse_pointer(input: &str) -> Result<PixelPosition> {
   let invalid = || Error::InvalidPointer(input.to_owned());
   let (x, y) = input.split_once(',').ok_or_else(invalid)?;
   let x: f64 = x.trim().parse().map_err(|_| invalid())?;
   let y: f64 = y.trim().parse().map_err(|_| invalid())?;
   if !(x.is_finite() && y.is_finite()) {
      return Err(invalid());
   }
   Ok(PixelPosition::new(x, y))
}
