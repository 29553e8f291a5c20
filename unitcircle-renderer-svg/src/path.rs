use kurbo::{BezPath, PathEl, Vec2};
use unitcircle_renderer::{arc_sweep, point_on_arc, Point};

/// How far the cubic approximation of an arc may stray from the true arc, in pixels.
const ARC_TOLERANCE: f64 = 0.01;

fn to_kurbo(point: Point) -> kurbo::Point {
   kurbo::Point::new(point.x, point.y)
}

/// The path being built between `begin_path` and `stroke`, with canvas semantics for lines and
/// arcs.
#[derive(Debug, Default)]
pub(crate) struct PathData {
   path: BezPath,
   current: Option<Point>,
}

impl PathData {
   pub(crate) fn clear(&mut self) {
      self.path = BezPath::new();
      self.current = None;
   }

   pub(crate) fn is_empty(&self) -> bool {
      self.path.elements().is_empty()
   }

   pub(crate) fn elements(&self) -> &[PathEl] {
      self.path.elements()
   }

   /// The `d` attribute of an SVG `<path>`.
   pub(crate) fn to_svg(&self) -> String {
      self.path.to_svg()
   }

   pub(crate) fn move_to(&mut self, point: Point) {
      if !point.is_finite() {
         log::trace!("ignoring move_to({:?})", point);
         return;
      }
      self.path.move_to(to_kurbo(point));
      self.current = Some(point);
   }

   pub(crate) fn line_to(&mut self, point: Point) {
      if !point.is_finite() {
         log::trace!("ignoring line_to({:?})", point);
         return;
      }
      // A line with no current point behaves like a move, like it does on a canvas.
      if self.current.is_none() {
         self.move_to(point);
      } else {
         self.path.line_to(to_kurbo(point));
         self.current = Some(point);
      }
   }

   pub(crate) fn arc(
      &mut self,
      center: Point,
      radius: f64,
      start_angle: f64,
      end_angle: f64,
      anticlockwise: bool,
   ) {
      if !(center.is_finite() && radius.is_finite() && start_angle.is_finite())
         || !end_angle.is_finite()
         || radius < 0.0
      {
         log::trace!(
            "ignoring arc({:?}, {}, {}, {}, {})",
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise
         );
         return;
      }

      let start = point_on_arc(center, radius, start_angle);
      if self.current.is_some() {
         self.line_to(start);
      } else {
         self.move_to(start);
      }

      let sweep = arc_sweep(start_angle, end_angle, anticlockwise);
      if sweep == 0.0 || radius == 0.0 {
         return;
      }
      let arc = kurbo::Arc {
         center: to_kurbo(center),
         radii: Vec2::new(radius, radius),
         start_angle,
         sweep_angle: sweep,
         x_rotation: 0.0,
      };
      self.path.extend(arc.append_iter(ARC_TOLERANCE));
      self.current = Some(point_on_arc(center, radius, start_angle + sweep));
   }
}
