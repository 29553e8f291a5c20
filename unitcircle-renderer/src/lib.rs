//! The drawing surface used by the diagram, and the types it speaks in.
//!
//! A [`Surface`] is a 2D immediate-mode canvas: paths are built with `move_to`/`line_to`/`arc`
//! and stroked with whatever style state is current at the time of the `stroke` call. All
//! coordinates are in surface pixels, with the origin in the top-left corner and y growing
//! downwards.

use std::f64::consts::TAU;

pub use paws;
pub use paws::{AlignH, AlignV, Alignment, Color};

mod recording;

pub use recording::*;

/// A position on the surface, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
   pub x: f64,
   pub y: f64,
}

impl Point {
   pub const fn new(x: f64, y: f64) -> Self {
      Self { x, y }
   }

   /// Returns whether both coordinates are finite.
   pub fn is_finite(self) -> bool {
      self.x.is_finite() && self.y.is_finite()
   }

   /// The straight-line distance between two points.
   pub fn distance(self, other: Point) -> f64 {
      (other.x - self.x).hypot(other.y - self.y)
   }
}

/// An axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
   pub x: f64,
   pub y: f64,
   pub width: f64,
   pub height: f64,
}

impl Rect {
   pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
      Self { x, y, width, height }
   }

   pub fn is_finite(&self) -> bool {
      self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
   }

   /// Returns whether `self` fully covers `other`.
   pub fn contains_rect(&self, other: &Rect) -> bool {
      self.x <= other.x
         && self.y <= other.y
         && self.x + self.width >= other.x + other.width
         && self.y + self.height >= other.y + other.height
   }
}

/// A font, identified by its family name and pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
   pub family: String,
   pub size: f64,
}

impl Font {
   pub fn new(family: impl Into<String>, size: f64) -> Self {
      Self {
         family: family.into(),
         size,
      }
   }

   /// Returns the font in CSS shorthand notation, eg. `20px Arial`.
   pub fn css(&self) -> String {
      format!("{}px {}", self.size, self.family)
   }
}

/// Returns the signed angle an arc sweeps through.
///
/// Angles are measured in pixel space, from the +x axis towards +y, which is clockwise on
/// screen. A clockwise arc sweeps `end - start` reduced into `[0, 2π)`, or a full turn if
/// `end - start` is at least `2π`. Anticlockwise arcs are the mirror image and yield a negative
/// sweep.
pub fn arc_sweep(start_angle: f64, end_angle: f64, anticlockwise: bool) -> f64 {
   if anticlockwise {
      let delta = start_angle - end_angle;
      if delta >= TAU {
         -TAU
      } else {
         -delta.rem_euclid(TAU)
      }
   } else {
      let delta = end_angle - start_angle;
      if delta >= TAU {
         TAU
      } else {
         delta.rem_euclid(TAU)
      }
   }
}

/// Returns the point at `angle` on the circle of the given radius.
pub fn point_on_arc(center: Point, radius: f64, angle: f64) -> Point {
   Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Returns the Canvas API keyword for a horizontal text alignment.
pub fn text_align_keyword(align: AlignH) -> &'static str {
   match align {
      AlignH::Left => "left",
      AlignH::Center => "center",
      AlignH::Right => "right",
   }
}

/// Returns the Canvas API keyword for a vertical text alignment.
pub fn text_baseline_keyword(align: AlignV) -> &'static str {
   match align {
      AlignV::Top => "top",
      AlignV::Middle => "middle",
      AlignV::Bottom => "bottom",
   }
}

/// A 2D immediate-mode drawing surface.
///
/// Style setters only affect subsequent drawing calls. Implementations must not fail; errors
/// coming from the host are the backend's to report.
pub trait Surface {
   /// Discards the current path and starts a new one.
   fn begin_path(&mut self);

   /// Starts a new sub-path at the given point.
   fn move_to(&mut self, point: Point);

   /// Adds a straight segment from the current point to the given point.
   fn line_to(&mut self, point: Point);

   /// Adds a circular arc to the current path. See [`arc_sweep`] for the angle convention.
   ///
   /// If the path already has a current point, it's connected to the arc's starting point with
   /// a straight line.
   fn arc(
      &mut self,
      center: Point,
      radius: f64,
      start_angle: f64,
      end_angle: f64,
      anticlockwise: bool,
   );

   /// Strokes the current path with the current stroke color, width and dash pattern.
   fn stroke(&mut self);

   fn stroke_rect(&mut self, rect: Rect);

   fn fill_rect(&mut self, rect: Rect);

   /// Erases the given area back to the surface's background.
   fn clear_rect(&mut self, rect: Rect);

   fn fill_text(&mut self, text: &str, position: Point);

   fn stroke_text(&mut self, text: &str, position: Point);

   fn set_stroke_color(&mut self, color: Color);

   fn set_fill_color(&mut self, color: Color);

   fn set_line_width(&mut self, width: f64);

   /// Sets the dash pattern used for strokes. An empty slice means solid lines.
   fn set_line_dash(&mut self, segments: &[f64]);

   fn set_font(&mut self, font: &Font);

   fn set_text_alignment(&mut self, alignment: Alignment);
}
