use unitcircle_renderer::{
   text_align_keyword, text_baseline_keyword, Alignment, Color, Font, Point, Rect, Surface,
};

use crate::common::*;
use crate::CanvasSurface;

impl Surface for CanvasSurface {
   fn begin_path(&mut self) {
      self.context.begin_path();
   }

   fn move_to(&mut self, point: Point) {
      self.context.move_to(point.x, point.y);
   }

   fn line_to(&mut self, point: Point) {
      self.context.line_to(point.x, point.y);
   }

   fn arc(
      &mut self,
      center: Point,
      radius: f64,
      start_angle: f64,
      end_angle: f64,
      anticlockwise: bool,
   ) {
      // Canvas uses the same angle convention as `Surface::arc`, so no conversion is needed.
      report(
         "arc",
         self.context.arc_with_anticlockwise(
            center.x,
            center.y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
         ),
      );
   }

   fn stroke(&mut self) {
      self.context.stroke();
   }

   fn stroke_rect(&mut self, rect: Rect) {
      self.context.stroke_rect(rect.x, rect.y, rect.width, rect.height);
   }

   fn fill_rect(&mut self, rect: Rect) {
      self.context.fill_rect(rect.x, rect.y, rect.width, rect.height);
   }

   fn clear_rect(&mut self, rect: Rect) {
      self.context.clear_rect(rect.x, rect.y, rect.width, rect.height);
   }

   fn fill_text(&mut self, text: &str, position: Point) {
      report("fillText", self.context.fill_text(text, position.x, position.y));
   }

   fn stroke_text(&mut self, text: &str, position: Point) {
      report("strokeText", self.context.stroke_text(text, position.x, position.y));
   }

   fn set_stroke_color(&mut self, color: Color) {
      self.context.set_stroke_style(&color_to_jsvalue(color));
   }

   fn set_fill_color(&mut self, color: Color) {
      self.context.set_fill_style(&color_to_jsvalue(color));
   }

   fn set_line_width(&mut self, width: f64) {
      self.context.set_line_width(width);
   }

   fn set_line_dash(&mut self, segments: &[f64]) {
      report("setLineDash", self.context.set_line_dash(&dash_to_array(segments)));
   }

   fn set_font(&mut self, font: &Font) {
      self.context.set_font(&font.css());
   }

   fn set_text_alignment(&mut self, (align, baseline): Alignment) {
      self.context.set_text_align(text_align_keyword(align));
      self.context.set_text_baseline(text_baseline_keyword(baseline));
   }
}
