//! The pointer-dependent part of the diagram.

use std::f64::consts::TAU;

use unitcircle_renderer::{AlignH, AlignV, Rect, Surface};

use crate::diagram::Style;
use crate::geometry::{PixelPosition, Transform};
use crate::trig::{format_fixed, format_tangent, TrigReading};

/// How far the sine label sits to the right of its segment.
const SINE_LABEL_OFFSET: f64 = 10.0;
/// How far the cosine label sits above the x axis.
const COSINE_LABEL_OFFSET: f64 = 10.0;
/// The height of the strip of x axis erased under the cosine segment.
const AXIS_ERASE_HEIGHT: f64 = 2.0;
/// How far the angle label sits from the angle arc.
const ANGLE_LABEL_OFFSET: f64 = 10.0;

/// Draws the overlay for a reading. The base diagram must already be on the surface.
pub(crate) fn draw(
   surface: &mut impl Surface,
   transform: &Transform,
   style: &Style,
   reading: &TrigReading,
) {
   let origin = reading.origin;
   let point = reading.point;
   let foot = PixelPosition::new(point.x, origin.y);

   surface.set_line_width(style.line_width);
   surface.set_font(&style.font);
   surface.set_text_alignment((AlignH::Center, AlignV::Middle));
   surface.set_fill_color(style.overlay);

   // Radius.
   surface.set_line_dash(&[]);
   surface.set_stroke_color(style.ink);
   stroke_segment(surface, origin, point);

   // Sine.
   surface.set_line_dash(&style.dash);
   surface.set_stroke_color(style.overlay);
   stroke_segment(surface, point, foot);
   surface.fill_text(
      &format!("sin: {}", format_fixed(reading.sine)),
      PixelPosition::new(
         point.x + SINE_LABEL_OFFSET,
         point.y + (origin.y - point.y) / 2.0,
      ),
   );

   // Cosine. The x axis is erased underneath first so the dashes stay visible.
   surface.clear_rect(Rect::new(
      point.x.min(origin.x),
      origin.y,
      (point.x - origin.x).abs(),
      AXIS_ERASE_HEIGHT,
   ));
   stroke_segment(surface, origin, foot);
   surface.fill_text(
      &format!("cos: {}", format_fixed(reading.cosine)),
      PixelPosition::new(
         point.x + (origin.x - point.x) / 2.0,
         origin.y - COSINE_LABEL_OFFSET,
      ),
   );

   // Tangent.
   match reading.tangent_rays(origin.y) {
      Some((towards_axis, away_from_axis)) => {
         surface.begin_path();
         surface.move_to(point);
         surface.line_to(towards_axis);
         surface.move_to(point);
         surface.line_to(away_from_axis);
         surface.stroke();
      }
      None => log::trace!("tangent construction is degenerate at {:?}", point),
   }
   surface.fill_text(
      &format!("tan: {}", format_tangent(reading.tangent())),
      reading.tangent_label_anchor(),
   );

   // Angle. The surface measures angles clockwise on screen, so the arc runs from the mirrored
   // angle up to a full turn, which covers [0, θ] on the plane.
   let radius = transform.scale() / style.angle_arc_divisor;
   surface.begin_path();
   surface.arc(origin, radius, TAU - reading.angle, TAU, false);
   surface.stroke();
   surface.fill_text(
      &format!("{}°", format_fixed(reading.angle_degrees())),
      PixelPosition::new(
         origin.x + radius + ANGLE_LABEL_OFFSET,
         origin.y - radius + ANGLE_LABEL_OFFSET,
      ),
   );
}

fn stroke_segment(surface: &mut impl Surface, from: PixelPosition, to: PixelPosition) {
   surface.begin_path();
   surface.move_to(from);
   surface.line_to(to);
   surface.stroke();
}
