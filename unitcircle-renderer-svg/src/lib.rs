//! A [`Surface`] that produces an SVG document instead of pixels.
//!
//! Every stroke, rectangle and piece of text becomes its own element, styled with the state that
//! was current when it was drawn. Clearing the entire surface throws away everything drawn so
//! far, which keeps documents from growing when a frame is redrawn from scratch.

use std::fmt::Write;

use unitcircle_renderer::{
   paws, text_align_keyword, text_baseline_keyword, AlignH, AlignV, Alignment, Color, Font,
   Point, Rect, Surface,
};

mod path;

use path::PathData;

const WHITE: Color = Color {
   r: 255,
   g: 255,
   b: 255,
   a: 255,
};

const BLACK: Color = Color {
   r: 0,
   g: 0,
   b: 0,
   a: 255,
};

/// Drawing state, mirroring the subset of the Canvas API state the [`Surface`] trait exposes.
#[derive(Clone)]
struct State {
   stroke_color: Color,
   fill_color: Color,
   line_width: f64,
   line_dash: Vec<f64>,
   font: Font,
   alignment: Alignment,
}

impl Default for State {
   fn default() -> Self {
      Self {
         stroke_color: BLACK,
         fill_color: BLACK,
         line_width: 1.0,
         line_dash: Vec::new(),
         font: Font::new("sans-serif", 10.0),
         alignment: (AlignH::Left, AlignV::Bottom),
      }
   }
}

pub struct SvgSurface {
   width: f64,
   height: f64,
   background: Color,
   state: State,
   path: PathData,
   body: String,
}

impl SvgSurface {
   /// Creates a new, empty surface of the given size in pixels.
   pub fn new(width: f64, height: f64) -> Self {
      Self {
         width,
         height,
         background: WHITE,
         state: State::default(),
         path: PathData::default(),
         body: String::new(),
      }
   }

   /// Returns the full SVG document for everything drawn so far.
   pub fn finish(&self) -> String {
      let mut document = String::new();
      let _ = writeln!(
         document,
         r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
         w = number(self.width),
         h = number(self.height),
      );
      let _ = writeln!(
         document,
         r#"<rect x="0" y="0" width="{}" height="{}"{}/>"#,
         number(self.width),
         number(self.height),
         paint("fill", self.background),
      );
      document.push_str(&self.body);
      document.push_str("</svg>\n");
      document
   }

   fn bounds(&self) -> Rect {
      Rect::new(0.0, 0.0, self.width, self.height)
   }

   fn stroke_style(&self) -> String {
      let mut style = paint("stroke", self.state.stroke_color);
      let _ = write!(style, r#" stroke-width="{}""#, number(self.state.line_width));
      if !self.state.line_dash.is_empty() {
         let dash: Vec<String> = self.state.line_dash.iter().map(|&x| number(x)).collect();
         let _ = write!(style, r#" stroke-dasharray="{}""#, dash.join(" "));
      }
      style
   }

   fn text_element(&mut self, text: &str, position: Point, paint_attributes: String) {
      if !position.is_finite() {
         log::warn!("skipping text {:?} at non-finite position {:?}", text, position);
         return;
      }
      let (align, baseline) = self.state.alignment;
      let _ = writeln!(
         self.body,
         r#"<text x="{}" y="{}" font-family="{}" font-size="{}" text-anchor="{}" dominant-baseline="{}"{}>{}</text>"#,
         number(position.x),
         number(position.y),
         escape(&self.state.font.family),
         number(self.state.font.size),
         text_anchor(align),
         dominant_baseline(baseline),
         paint_attributes,
         escape(text),
      );
   }

   fn rect_element(&mut self, rect: Rect, paint_attributes: String) {
      if !rect.is_finite() {
         log::warn!("skipping non-finite rectangle {:?}", rect);
         return;
      }
      let rect = normalize(rect);
      let _ = writeln!(
         self.body,
         r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
         number(rect.x),
         number(rect.y),
         number(rect.width),
         number(rect.height),
         paint_attributes,
      );
   }
}

impl Surface for SvgSurface {
   fn begin_path(&mut self) {
      self.path.clear();
   }

   fn move_to(&mut self, point: Point) {
      self.path.move_to(point);
   }

   fn line_to(&mut self, point: Point) {
      self.path.line_to(point);
   }

   fn arc(
      &mut self,
      center: Point,
      radius: f64,
      start_angle: f64,
      end_angle: f64,
      anticlockwise: bool,
   ) {
      self.path.arc(center, radius, start_angle, end_angle, anticlockwise);
   }

   fn stroke(&mut self) {
      if self.path.is_empty() {
         return;
      }
      let style = self.stroke_style();
      let _ = writeln!(
         self.body,
         r#"<path d="{}" fill="none"{}/>"#,
         self.path.to_svg(),
         style
      );
   }

   fn stroke_rect(&mut self, rect: Rect) {
      let style = format!(r#" fill="none"{}"#, self.stroke_style());
      self.rect_element(rect, style);
   }

   fn fill_rect(&mut self, rect: Rect) {
      let style = paint("fill", self.state.fill_color);
      self.rect_element(rect, style);
   }

   fn clear_rect(&mut self, rect: Rect) {
      if rect.contains_rect(&self.bounds()) {
         self.body.clear();
      } else {
         let style = paint("fill", self.background);
         self.rect_element(rect, style);
      }
   }

   fn fill_text(&mut self, text: &str, position: Point) {
      let style = paint("fill", self.state.fill_color);
      self.text_element(text, position, style);
   }

   fn stroke_text(&mut self, text: &str, position: Point) {
      let style = format!(r#" fill="none"{}"#, self.stroke_style());
      self.text_element(text, position, style);
   }

   fn set_stroke_color(&mut self, color: Color) {
      self.state.stroke_color = color;
   }

   fn set_fill_color(&mut self, color: Color) {
      self.state.fill_color = color;
   }

   fn set_line_width(&mut self, width: f64) {
      if width.is_finite() && width > 0.0 {
         self.state.line_width = width;
      }
   }

   fn set_line_dash(&mut self, segments: &[f64]) {
      // Same as the Canvas API: invalid patterns are ignored, odd ones are repeated.
      if segments.iter().any(|&x| !x.is_finite() || x < 0.0) {
         return;
      }
      let mut dash = segments.to_vec();
      if dash.len() % 2 == 1 {
         dash.extend_from_slice(segments);
      }
      self.state.line_dash = dash;
   }

   fn set_font(&mut self, font: &Font) {
      self.state.font = font.clone();
   }

   fn set_text_alignment(&mut self, alignment: Alignment) {
      self.state.alignment = alignment;
   }
}

/// Formats a number with at most three decimal places and no trailing zeros.
fn number(x: f64) -> String {
   let formatted = format!("{:.3}", x);
   let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
   match trimmed {
      "-0" | "" => "0".to_owned(),
      other => other.to_owned(),
   }
}

fn paint(attribute: &str, color: paws::Color) -> String {
   let mut out = format!(
      r##" {}="#{:02x}{:02x}{:02x}""##,
      attribute, color.r, color.g, color.b
   );
   if color.a != 255 {
      let _ = write!(
         out,
         r#" {}-opacity="{}""#,
         attribute,
         number(color.a as f64 / 255.0)
      );
   }
   out
}

fn escape(text: &str) -> String {
   let mut escaped = String::with_capacity(text.len());
   for c in text.chars() {
      match c {
         '&' => escaped.push_str("&amp;"),
         '<' => escaped.push_str("&lt;"),
         '>' => escaped.push_str("&gt;"),
         '"' => escaped.push_str("&quot;"),
         c => escaped.push(c),
      }
   }
   escaped
}

/// Flips rectangles with negative sizes, which SVG doesn't allow but the Canvas API does.
fn normalize(rect: Rect) -> Rect {
   let (x, width) = if rect.width < 0.0 {
      (rect.x + rect.width, -rect.width)
   } else {
      (rect.x, rect.width)
   };
   let (y, height) = if rect.height < 0.0 {
      (rect.y + rect.height, -rect.height)
   } else {
      (rect.y, rect.height)
   };
   Rect::new(x, y, width, height)
}

fn text_anchor(align: AlignH) -> &'static str {
   match text_align_keyword(align) {
      "left" => "start",
      "right" => "end",
      _ => "middle",
   }
}

fn dominant_baseline(baseline: AlignV) -> &'static str {
   match text_baseline_keyword(baseline) {
      "top" => "hanging",
      "middle" => "central",
      _ => "text-after-edge",
   }
}
