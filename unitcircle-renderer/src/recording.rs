use crate::{text_align_keyword, text_baseline_keyword, Alignment, Color, Font, Point, Rect, Surface};

/// A single call made on a [`RecordingSurface`].
///
/// Colors are stored as `[r, g, b, a]`, fonts as their family and size, and alignments as their
/// Canvas API keywords, so that commands can be compared and printed directly.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
   BeginPath,
   MoveTo(Point),
   LineTo(Point),
   Arc {
      center: Point,
      radius: f64,
      start_angle: f64,
      end_angle: f64,
      anticlockwise: bool,
   },
   Stroke,
   StrokeRect(Rect),
   FillRect(Rect),
   ClearRect(Rect),
   FillText(String, Point),
   StrokeText(String, Point),
   SetStrokeColor([u8; 4]),
   SetFillColor([u8; 4]),
   SetLineWidth(f64),
   SetLineDash(Vec<f64>),
   SetFont(Font),
   SetTextAlignment {
      align: &'static str,
      baseline: &'static str,
   },
}

impl Command {
   /// Returns whether every number carried by the command is finite.
   pub fn is_finite(&self) -> bool {
      match self {
         Command::MoveTo(point) | Command::LineTo(point) => point.is_finite(),
         Command::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ..
         } => {
            center.is_finite()
               && radius.is_finite()
               && start_angle.is_finite()
               && end_angle.is_finite()
         }
         Command::StrokeRect(rect) | Command::FillRect(rect) | Command::ClearRect(rect) => {
            rect.is_finite()
         }
         Command::FillText(text, point) | Command::StrokeText(text, point) => {
            point.is_finite() && !text.contains("NaN") && !text.contains("inf")
         }
         Command::SetLineWidth(width) => width.is_finite(),
         Command::SetLineDash(segments) => segments.iter().all(|x| x.is_finite()),
         Command::SetFont(font) => font.size.is_finite() && font.size > 0.0,
         Command::BeginPath
         | Command::Stroke
         | Command::SetStrokeColor(_)
         | Command::SetFillColor(_)
         | Command::SetTextAlignment { .. } => true,
      }
   }

   /// The text drawn by a `FillText` or `StrokeText` command.
   pub fn text(&self) -> Option<&str> {
      match self {
         Command::FillText(text, _) | Command::StrokeText(text, _) => Some(text.as_str()),
         _ => None,
      }
   }
}

fn color_to_array(color: Color) -> [u8; 4] {
   [color.r, color.g, color.b, color.a]
}

/// A surface that draws nothing and remembers every call made on it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
   commands: Vec<Command>,
}

impl RecordingSurface {
   pub fn new() -> Self {
      Self::default()
   }

   /// Returns the commands recorded so far.
   pub fn commands(&self) -> &[Command] {
      &self.commands
   }

   /// Returns the commands recorded so far and starts a fresh recording.
   pub fn take_commands(&mut self) -> Vec<Command> {
      std::mem::take(&mut self.commands)
   }

   /// Returns whether no recorded command carries a non-finite value.
   pub fn is_finite(&self) -> bool {
      self.commands.iter().all(Command::is_finite)
   }

   /// Returns the strings drawn with `fill_text` and `stroke_text`, in order.
   pub fn texts(&self) -> Vec<&str> {
      self.commands.iter().filter_map(Command::text).collect()
   }
}

impl Surface for RecordingSurface {
   fn begin_path(&mut self) {
      self.commands.push(Command::BeginPath);
   }

   fn move_to(&mut self, point: Point) {
      self.commands.push(Command::MoveTo(point));
   }

   fn line_to(&mut self, point: Point) {
      self.commands.push(Command::LineTo(point));
   }

   fn arc(
      &mut self,
      center: Point,
      radius: f64,
      start_angle: f64,
      end_angle: f64,
      anticlockwise: bool,
   ) {
      self.commands.push(Command::Arc {
         center,
         radius,
         start_angle,
         end_angle,
         anticlockwise,
      });
   }

   fn stroke(&mut self) {
      self.commands.push(Command::Stroke);
   }

   fn stroke_rect(&mut self, rect: Rect) {
      self.commands.push(Command::StrokeRect(rect));
   }

   fn fill_rect(&mut self, rect: Rect) {
      self.commands.push(Command::FillRect(rect));
   }

   fn clear_rect(&mut self, rect: Rect) {
      self.commands.push(Command::ClearRect(rect));
   }

   fn fill_text(&mut self, text: &str, position: Point) {
      self.commands.push(Command::FillText(text.to_owned(), position));
   }

   fn stroke_text(&mut self, text: &str, position: Point) {
      self.commands.push(Command::StrokeText(text.to_owned(), position));
   }

   fn set_stroke_color(&mut self, color: Color) {
      self.commands.push(Command::SetStrokeColor(color_to_array(color)));
   }

   fn set_fill_color(&mut self, color: Color) {
      self.commands.push(Command::SetFillColor(color_to_array(color)));
   }

   fn set_line_width(&mut self, width: f64) {
      self.commands.push(Command::SetLineWidth(width));
   }

   fn set_line_dash(&mut self, segments: &[f64]) {
      self.commands.push(Command::SetLineDash(segments.to_vec()));
   }

   fn set_font(&mut self, font: &Font) {
      self.commands.push(Command::SetFont(font.clone()));
   }

   fn set_text_alignment(&mut self, (align, baseline): Alignment) {
      self.commands.push(Command::SetTextAlignment {
         align: text_align_keyword(align),
         baseline: text_baseline_keyword(baseline),
      });
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::{AlignH, AlignV};

   #[test]
   fn records_calls_in_order() {
      let mut surface = RecordingSurface::new();
      surface.begin_path();
      surface.move_to(Point::new(1.0, 2.0));
      surface.line_to(Point::new(3.0, 4.0));
      surface.stroke();
      assert_eq!(
         surface.commands(),
         &[
            Command::BeginPath,
            Command::MoveTo(Point::new(1.0, 2.0)),
            Command::LineTo(Point::new(3.0, 4.0)),
            Command::Stroke,
         ]
      );
   }

   #[test]
   fn detects_non_finite_values() {
      let mut surface = RecordingSurface::new();
      surface.move_to(Point::new(0.0, 0.0));
      assert!(surface.is_finite());
      surface.line_to(Point::new(f64::NAN, 0.0));
      assert!(!surface.is_finite());

      let mut surface = RecordingSurface::new();
      surface.fill_text("tan: inf", Point::new(0.0, 0.0));
      assert!(!surface.is_finite());

      for size in [f64::NAN, 0.0, -12.0] {
         let mut surface = RecordingSurface::new();
         surface.set_font(&Font::new("Arial", size));
         assert!(!surface.is_finite(), "font size {}", size);
      }
   }

   #[test]
   fn take_commands_resets_the_recording() {
      let mut surface = RecordingSurface::new();
      surface.set_text_alignment((AlignH::Center, AlignV::Middle));
      surface.fill_text("a", Point::new(0.0, 0.0));
      assert_eq!(surface.texts(), vec!["a"]);
      let commands = surface.take_commands();
      assert_eq!(commands.len(), 2);
      assert_eq!(
         commands[0],
         Command::SetTextAlignment {
            align: "center",
            baseline: "middle"
         }
      );
      assert!(surface.commands().is_empty());
   }
}
