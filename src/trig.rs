//! Trigonometric values derived from a pointer position.

use std::f64::consts::TAU;

use crate::geometry::{PixelPosition, Transform};

/// Distances and values below this are treated as zero.
const EPSILON: f64 = 1e-9;

/// Everything the overlay needs to know about the angle the pointer makes with the x axis.
///
/// Readings only exist for pointers that define a direction; see [`TrigReading::from_pointer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrigReading {
   /// The origin pixel of the transform the reading was taken with.
   pub origin: PixelPosition,
   /// The raw pointer position.
   pub pointer: PixelPosition,
   /// Where the ray from the origin through the pointer crosses the unit circle.
   pub point: PixelPosition,
   pub cosine: f64,
   pub sine: f64,
   /// The angle in radians, in `[0, 2π)`.
   pub angle: f64,
}

impl TrigReading {
   /// Projects the pointer onto the unit circle and derives the angle's trigonometric values.
   ///
   /// Returns `None` if the pointer sits on the origin (it defines no direction) or its
   /// coordinates aren't finite.
   pub fn from_pointer(transform: &Transform, pointer: PixelPosition) -> Option<Self> {
      if !pointer.is_finite() {
         log::debug!("pointer {:?} is not finite", pointer);
         return None;
      }
      let origin = transform.origin_pixel();
      let (dx, dy) = (pointer.x - origin.x, pointer.y - origin.y);
      let length = dx.hypot(dy);
      if length < EPSILON {
         log::debug!("pointer {:?} is at the origin", pointer);
         return None;
      }

      let scale = transform.scale();
      let point = PixelPosition::new(origin.x + scale * dx / length, origin.y + scale * dy / length);
      let plane = transform.to_plane(point);
      let (cosine, sine) = (plane.x, plane.y);

      let mut angle = sine.atan2(cosine);
      if angle < 0.0 {
         angle += TAU;
      }
      if angle >= TAU {
         angle -= TAU;
      }

      Some(Self {
         origin,
         pointer,
         point,
         cosine,
         sine,
         // Adding zero turns a negative zero into a positive one.
         angle: angle + 0.0,
      })
   }

   /// The angle in degrees, in `[0, 360)`.
   pub fn angle_degrees(&self) -> f64 {
      let degrees = self.angle.to_degrees();
      if degrees >= 360.0 {
         0.0
      } else {
         degrees
      }
   }

   /// The tangent, or `None` where it's undefined (the radius is vertical).
   pub fn tangent(&self) -> Option<f64> {
      if self.cosine.abs() < EPSILON {
         None
      } else {
         Some(self.sine / self.cosine)
      }
   }

   /// The two dashed rays of the tangent construction.
   ///
   /// Both start at [`TrigReading::point`] and run along the line perpendicular to the radius.
   /// The first ends where that line meets the horizontal line `y = axis_y`; the second is its
   /// mirror image through the circle point. Returns `None` when the radius is horizontal (the
   /// perpendicular never leaves the circle point vertically) or vertical (the perpendicular is
   /// parallel to the axis and never reaches it).
   ///
   /// Both cases are decided on the cosine and sine, with the same threshold as
   /// [`TrigReading::tangent`], so the rays are never drawn while the label reads `∞`.
   pub fn tangent_rays(&self, axis_y: f64) -> Option<(PixelPosition, PixelPosition)> {
      if self.tangent().is_none() || self.sine.abs() < EPSILON {
         return None;
      }
      let dx = self.point.x - self.origin.x;
      let dy = self.point.y - self.origin.y;

      let slope = dy / dx;
      let perpendicular = -1.0 / slope;
      let x = self.point.x + (axis_y - self.point.y) / perpendicular;
      let towards_axis = PixelPosition::new(x, axis_y);
      let away_from_axis =
         PixelPosition::new(2.0 * self.point.x - x, 2.0 * self.point.y - axis_y);

      if towards_axis.is_finite() && away_from_axis.is_finite() {
         Some((towards_axis, away_from_axis))
      } else {
         None
      }
   }

   /// Where the tangent's label goes: three quarters of the way to the circle point, nudged a
   /// quarter of the way towards the pointer.
   pub fn tangent_label_anchor(&self) -> PixelPosition {
      PixelPosition::new(
         self.origin.x
            + (self.point.x - self.origin.x) * 0.75
            + (self.pointer.x - self.origin.x) * 0.25,
         self.origin.y
            + (self.point.y - self.origin.y) * 0.75
            + (self.pointer.y - self.origin.y) * 0.25,
      )
   }
}

/// Formats a value with two decimal places, never producing `-0.00`.
pub fn format_fixed(value: f64) -> String {
   let formatted = format!("{:.2}", value);
   if formatted == "-0.00" {
      "0.00".to_owned()
   } else {
      formatted
   }
}

/// Formats the tangent for display, using `∞` where it's undefined.
pub fn format_tangent(tangent: Option<f64>) -> String {
   match tangent {
      Some(value) if value.is_finite() => format_fixed(value),
      _ => "∞".to_owned(),
   }
}
