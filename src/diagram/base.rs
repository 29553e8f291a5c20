//! The static part of the diagram: grid, unit circle, axes and their labels.

use std::f64::consts::TAU;

use unitcircle_renderer::{AlignH, AlignV, Rect, Surface};

use crate::diagram::Style;
use crate::geometry::{PixelPosition, Transform};

/// Axis labels, with the pixel offset that keeps each one clear of its arrowhead.
const AXIS_LABELS: [(&str, (f64, f64), (f64, f64)); 4] = [
   ("(1,0)", (1.0, 0.0), (-30.0, 20.0)),
   ("(0,-1)", (0.0, -1.0), (30.0, -30.0)),
   ("(-1,0)", (-1.0, 0.0), (30.0, 20.0)),
   ("(0,1)", (0.0, 1.0), (30.0, 30.0)),
];

/// Draws the base diagram on top of whatever is on the surface.
pub(crate) fn draw(surface: &mut impl Surface, transform: &Transform, style: &Style) {
   surface.set_line_dash(&[]);
   surface.set_line_width(style.line_width);
   surface.set_text_alignment((AlignH::Center, AlignV::Middle));

   draw_grid(surface, transform, style);

   surface.set_stroke_color(style.ink);
   surface.begin_path();
   surface.arc(transform.origin_pixel(), transform.scale(), 0.0, TAU, false);
   surface.stroke();

   draw_line(surface, transform.pixel(-1.0, 0.0), transform.pixel(1.0, 0.0));
   draw_line(surface, transform.pixel(0.0, 1.0), transform.pixel(0.0, -1.0));

   draw_arrowheads(surface, transform, style);
   draw_axis_labels(surface, transform, style);
}

fn draw_grid(surface: &mut impl Surface, transform: &Transform, style: &Style) {
   surface.set_stroke_color(style.grid);
   let cells = style.grid_cells();
   let size = transform.scale() * 2.0 / cells as f64;
   for column in 0..cells {
      for row in 0..cells {
         // Cells are laid out from their top-left corner, starting at (-1, 1).
         let x = -1.0 + 2.0 * column as f64 / cells as f64;
         let y = 1.0 - 2.0 * row as f64 / cells as f64;
         let corner = transform.pixel(x, y);
         surface.stroke_rect(Rect::new(corner.x, corner.y, size, size));
      }
   }
}

fn draw_line(surface: &mut impl Surface, from: PixelPosition, to: PixelPosition) {
   surface.begin_path();
   surface.move_to(from);
   surface.line_to(to);
   surface.stroke();
}

fn draw_arrowheads(surface: &mut impl Surface, transform: &Transform, style: &Style) {
   surface.begin_path();
   for (x, y) in [(1.0, 0.0), (0.0, -1.0), (-1.0, 0.0), (0.0, 1.0)] {
      let tip = transform.pixel(x, y);
      // Pixel-space direction the arrow points in, and the one across it.
      let (along_x, along_y) = (x, -y);
      let (across_x, across_y) = (-along_y, along_x);
      let back = PixelPosition::new(
         tip.x - along_x * style.arrow_length,
         tip.y - along_y * style.arrow_length,
      );
      surface.move_to(tip);
      surface.line_to(PixelPosition::new(
         back.x + across_x * style.arrow_half_width,
         back.y + across_y * style.arrow_half_width,
      ));
      surface.line_to(PixelPosition::new(
         back.x - across_x * style.arrow_half_width,
         back.y - across_y * style.arrow_half_width,
      ));
      surface.line_to(tip);
   }
   surface.stroke();
}

fn draw_axis_labels(surface: &mut impl Surface, transform: &Transform, style: &Style) {
   surface.set_font(&style.font);
   for (text, (x, y), (offset_x, offset_y)) in AXIS_LABELS {
      let anchor = transform.pixel(x, y);
      surface.stroke_text(text, PixelPosition::new(anchor.x + offset_x, anchor.y + offset_y));
   }
}
