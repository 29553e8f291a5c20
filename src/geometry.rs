//! Mapping between the mathematical plane and the drawing surface.
//!
//! The plane has its origin at the circle's center and y growing upwards. The surface has its
//! origin in the top-left corner and y growing downwards.

use crate::{Error, Result};

pub use unitcircle_renderer::Point as PixelPosition;

/// A point on the mathematical plane, in units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlanePoint {
   pub x: f64,
   pub y: f64,
}

impl PlanePoint {
   pub const fn new(x: f64, y: f64) -> Self {
      Self { x, y }
   }
}

/// A fixed affine mapping between plane coordinates and surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
   scale: f64,
   origin: PixelPosition,
   offset: PixelPosition,
}

impl Transform {
   /// Creates a new transform.
   ///
   /// `scale` is the number of pixels per unit, `origin` is the pixel where the plane's origin
   /// lies, and `offset` is an extra displacement added on top of it.
   pub fn new(scale: f64, origin: PixelPosition, offset: PixelPosition) -> Result<Self> {
      if !(scale.is_finite() && scale > 0.0) {
         return Err(Error::InvalidScale(scale));
      }
      if !(origin.is_finite() && offset.is_finite()) {
         return Err(Error::InvalidOffset);
      }
      Ok(Self {
         scale,
         origin,
         offset,
      })
   }

   /// Creates a transform whose origin lies in the center of a `2 * scale` square surface.
   pub fn centered(scale: f64) -> Result<Self> {
      Self::new(scale, PixelPosition::new(scale, scale), PixelPosition::default())
   }

   /// Pixels per unit.
   pub fn scale(&self) -> f64 {
      self.scale
   }

   /// The pixel corresponding to the plane's origin.
   pub fn origin_pixel(&self) -> PixelPosition {
      PixelPosition::new(self.origin.x + self.offset.x, self.origin.y + self.offset.y)
   }

   /// The size of the drawing surface, which always spans `[-1, 1]` on both axes.
   pub fn surface_size(&self) -> (f64, f64) {
      (2.0 * self.scale, 2.0 * self.scale)
   }

   pub fn to_pixels(&self, point: PlanePoint) -> PixelPosition {
      let origin = self.origin_pixel();
      PixelPosition::new(origin.x + point.x * self.scale, origin.y - point.y * self.scale)
   }

   pub fn to_plane(&self, pixel: PixelPosition) -> PlanePoint {
      let origin = self.origin_pixel();
      PlanePoint::new(
         (pixel.x - origin.x) / self.scale,
         -(pixel.y - origin.y) / self.scale,
      )
   }

   /// Shorthand for converting plane coordinates given as separate numbers.
   pub fn pixel(&self, x: f64, y: f64) -> PixelPosition {
      self.to_pixels(PlanePoint::new(x, y))
   }
}
