use std::f64::consts::TAU;

use test_log::test;
use unitcircle_renderer::{arc_sweep, Command, Font, Point, Rect, RecordingSurface};

use super::*;

const SCALE: f64 = 400.0;
const RED: [u8; 4] = [255, 0, 0, 255];
const LIGHT_GRAY: [u8; 4] = [211, 211, 211, 255];

fn diagram() -> Diagram<RecordingSurface> {
   Diagram::new(
      RecordingSurface::new(),
      Transform::centered(SCALE).unwrap(),
      Style::default(),
   )
}

fn render(pointer: Option<PixelPosition>) -> Vec<Command> {
   let mut diagram = diagram();
   diagram.render(pointer);
   diagram.into_surface().take_commands()
}

fn texts(commands: &[Command]) -> Vec<&str> {
   commands.iter().filter_map(Command::text).collect()
}

fn text_position(commands: &[Command], prefix: &str) -> Point {
   commands
      .iter()
      .find_map(|command| match command {
         Command::FillText(text, position) if text.starts_with(prefix) => Some(*position),
         _ => None,
      })
      .unwrap_or_else(|| panic!("no label starting with {:?}", prefix))
}

fn arcs(commands: &[Command]) -> Vec<(Point, f64, f64, f64, bool)> {
   commands
      .iter()
      .filter_map(|command| match *command {
         Command::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
         } => Some((center, radius, start_angle, end_angle, anticlockwise)),
         _ => None,
      })
      .collect()
}

#[test]
fn idle_frame_draws_only_the_base() {
   let mut diagram = diagram();
   assert_eq!(diagram.render(None), None);
   assert_eq!(diagram.state(), DiagramState::Idle);

   let commands = diagram.into_surface().take_commands();
   assert_eq!(
      commands[0],
      Command::ClearRect(Rect::new(0.0, 0.0, 2.0 * SCALE, 2.0 * SCALE))
   );
   assert_eq!(texts(&commands), vec!["(1,0)", "(0,-1)", "(-1,0)", "(0,1)"]);
   assert!(!commands.contains(&Command::SetStrokeColor(RED)));
}

#[test]
fn grid_covers_the_visible_plane() {
   let commands = render(None);
   let cells: Vec<Rect> = commands
      .iter()
      .filter_map(|command| match command {
         Command::StrokeRect(rect) => Some(*rect),
         _ => None,
      })
      .collect();
   assert_eq!(cells.len(), 64);
   for cell in &cells {
      assert_eq!((cell.width, cell.height), (100.0, 100.0));
      assert!(cell.x >= 0.0 && cell.x + cell.width <= 2.0 * SCALE);
      assert!(cell.y >= 0.0 && cell.y + cell.height <= 2.0 * SCALE);
   }
   assert_eq!(cells[0], Rect::new(0.0, 0.0, 100.0, 100.0));
   assert_eq!(cells[63], Rect::new(700.0, 700.0, 100.0, 100.0));

   let grid_color = commands.iter().position(|c| *c == Command::SetStrokeColor(LIGHT_GRAY));
   let first_cell = commands.iter().position(|c| matches!(c, Command::StrokeRect(_)));
   assert!(grid_color < first_cell);
}

#[test]
fn base_draws_circle_axes_and_arrowheads() {
   let commands = render(None);
   assert_eq!(
      arcs(&commands),
      vec![(Point::new(SCALE, SCALE), SCALE, 0.0, TAU, false)]
   );
   let expected_axis = [
      Command::BeginPath,
      Command::MoveTo(Point::new(0.0, 400.0)),
      Command::LineTo(Point::new(800.0, 400.0)),
      Command::Stroke,
      Command::BeginPath,
      Command::MoveTo(Point::new(400.0, 0.0)),
      Command::LineTo(Point::new(400.0, 800.0)),
      Command::Stroke,
   ];
   assert!(commands.windows(expected_axis.len()).any(|window| window == expected_axis));

   let right_arrow = [
      Command::MoveTo(Point::new(800.0, 400.0)),
      Command::LineTo(Point::new(790.0, 405.0)),
      Command::LineTo(Point::new(790.0, 395.0)),
      Command::LineTo(Point::new(800.0, 400.0)),
   ];
   assert!(commands.windows(right_arrow.len()).any(|window| window == right_arrow));
   let top_arrow = [
      Command::MoveTo(Point::new(400.0, 0.0)),
      Command::LineTo(Point::new(405.0, 10.0)),
      Command::LineTo(Point::new(395.0, 10.0)),
      Command::LineTo(Point::new(400.0, 0.0)),
   ];
   assert!(commands.windows(top_arrow.len()).any(|window| window == top_arrow));
}

#[test]
fn axis_labels_keep_clear_of_the_arrows() {
   let commands = render(None);
   let labels: Vec<(String, Point)> = commands
      .iter()
      .filter_map(|command| match command {
         Command::StrokeText(text, position) => Some((text.clone(), *position)),
         _ => None,
      })
      .collect();
   assert_eq!(
      labels,
      vec![
         ("(1,0)".to_owned(), Point::new(770.0, 420.0)),
         ("(0,-1)".to_owned(), Point::new(430.0, 770.0)),
         ("(-1,0)".to_owned(), Point::new(30.0, 420.0)),
         ("(0,1)".to_owned(), Point::new(430.0, 30.0)),
      ]
   );
}

#[test]
fn overlay_at_forty_five_degrees() {
   let mut diagram = diagram();
   let reading = diagram.render(Some(Point::new(500.0, 300.0))).unwrap();
   assert_eq!(diagram.state(), DiagramState::Tracking);

   let commands = diagram.into_surface().take_commands();
   let texts = texts(&commands);
   assert_eq!(
      &texts[4..],
      &["sin: 0.71", "cos: 0.71", "tan: 1.00", "45.00°"]
   );

   let sine = text_position(&commands, "sin");
   assert!((sine.x - (reading.point.x + 10.0)).abs() < 1e-9);
   assert!((sine.y - (reading.point.y + SCALE) / 2.0).abs() < 1e-9);
   let cosine = text_position(&commands, "cos");
   assert!((cosine.x - (reading.point.x + SCALE) / 2.0).abs() < 1e-9);
   assert_eq!(cosine.y, SCALE - 10.0);
   assert_eq!(text_position(&commands, "45"), Point::new(460.0, 360.0));
   assert!(commands.iter().all(Command::is_finite));
}

#[test]
fn overlay_order_and_styles() {
   let commands = render(Some(Point::new(650.0, 150.0)));
   let base_end = commands
      .iter()
      .rposition(|c| matches!(c, Command::StrokeText(..)))
      .unwrap();
   let overlay = &commands[base_end + 1..];

   // The radius is solid black, everything after it dashed red.
   let radius_dash = overlay.iter().position(|c| *c == Command::SetLineDash(vec![])).unwrap();
   let dashed = overlay.iter().position(|c| *c == Command::SetLineDash(vec![5.0, 5.0])).unwrap();
   let red = overlay.iter().position(|c| *c == Command::SetStrokeColor(RED)).unwrap();
   assert!(radius_dash < dashed);
   assert!(dashed < red);

   let clear = overlay.iter().position(|c| matches!(c, Command::ClearRect(_))).unwrap();
   let label = |prefix: &str| {
      overlay
         .iter()
         .position(|c| matches!(c, Command::FillText(t, _) if t.starts_with(prefix)))
         .unwrap()
   };
   let (sine, cosine) = (label("sin"), label("cos"));
   assert!(sine < clear && clear < cosine);
}

#[test]
fn axis_is_erased_under_the_cosine() {
   let left = render(Some(Point::new(100.0, 100.0)));
   let erased: Vec<Rect> = left
      .iter()
      .skip(1)
      .filter_map(|c| match c {
         Command::ClearRect(rect) => Some(*rect),
         _ => None,
      })
      .collect();
   assert_eq!(erased.len(), 1);
   let rect = erased[0];
   let expected_x = SCALE - SCALE / 2f64.sqrt();
   assert!((rect.x - expected_x).abs() < 1e-9);
   assert!((rect.width - SCALE / 2f64.sqrt()).abs() < 1e-9);
   assert_eq!((rect.y, rect.height), (SCALE, 2.0));
}

#[test]
fn angle_arc_sweeps_the_angle() {
   for (pointer, degrees) in [
      (Point::new(500.0, 300.0), 45.0),
      (Point::new(300.0, 300.0), 135.0),
      (Point::new(300.0, 500.0), 225.0),
      (Point::new(500.0, 500.0), 315.0),
   ] {
      let commands = render(Some(pointer));
      let arcs = arcs(&commands);
      assert_eq!(arcs.len(), 2);
      let (center, radius, start, end, anticlockwise) = arcs[1];
      assert_eq!(center, Point::new(SCALE, SCALE));
      assert_eq!(radius, SCALE / 8.0);
      let sweep = arc_sweep(start, end, anticlockwise);
      assert!(
         (sweep.to_degrees() - degrees).abs() < 1e-9,
         "sweep {} for {}",
         sweep.to_degrees(),
         degrees
      );
      // The arc starts at the radius, mirrored into pixel space, and ends on the +x axis.
      assert!(((TAU - start).to_degrees() - degrees).abs() < 1e-9);
      assert_eq!(end.rem_euclid(TAU), 0.0);
   }
}

#[test]
fn pointer_on_the_positive_x_axis() {
   let commands = render(Some(Point::new(SCALE + SCALE, SCALE)));
   assert_eq!(
      &texts(&commands)[4..],
      &["sin: 0.00", "cos: 1.00", "tan: 0.00", "0.00°"]
   );
   assert!(commands.iter().all(Command::is_finite));
}

#[test]
fn pointer_on_the_positive_y_axis() {
   let commands = render(Some(Point::new(SCALE, 0.0)));
   assert_eq!(
      &texts(&commands)[4..],
      &["sin: 1.00", "cos: 0.00", "tan: ∞", "90.00°"]
   );
   assert!(commands.iter().all(Command::is_finite));
}

#[test]
fn axis_aligned_pointers_skip_the_tangent_rays() {
   for pointer in [
      Point::new(900.0, SCALE),
      Point::new(SCALE, 50.0),
      Point::new(-20.0, SCALE),
      Point::new(SCALE, 780.0),
   ] {
      let commands = render(Some(pointer));
      assert!(commands.iter().all(Command::is_finite), "{:?}", pointer);
      // Radius, sine and cosine are the only straight strokes in the overlay.
      let base = render(None);
      let segments = |commands: &[Command]| {
         commands.iter().filter(|c| matches!(c, Command::LineTo(_))).count()
      };
      assert_eq!(segments(&commands) - segments(&base), 3, "{:?}", pointer);
   }
}

#[test]
fn infinite_tangent_draws_no_rays() {
   let base = render(None);
   let commands = render(Some(Point::new(SCALE + 1e-7, 0.0)));
   assert!(texts(&commands).contains(&"tan: ∞"));
   assert!(commands.iter().all(Command::is_finite));
   let segments =
      |commands: &[Command]| commands.iter().filter(|c| matches!(c, Command::LineTo(_))).count();
   assert_eq!(segments(&commands) - segments(&base), 3);
}

#[test]
fn general_pointer_draws_both_tangent_rays() {
   let base = render(None);
   let commands = render(Some(Point::new(650.0, 150.0)));
   let segments =
      |commands: &[Command]| commands.iter().filter(|c| matches!(c, Command::LineTo(_))).count();
   assert_eq!(segments(&commands) - segments(&base), 5);
}

#[test]
fn pointer_at_the_origin_suppresses_the_overlay() {
   let mut diagram = diagram();
   diagram.render(Some(Point::new(100.0, 100.0)));
   assert_eq!(diagram.state(), DiagramState::Tracking);

   diagram.surface_mut().take_commands();
   assert_eq!(diagram.render(Some(Point::new(SCALE, SCALE))), None);
   assert_eq!(diagram.state(), DiagramState::Idle);
   let commands = diagram.surface_mut().take_commands();
   assert!(commands.iter().all(Command::is_finite));
   assert_eq!(commands, render(None));
}

#[test]
fn non_finite_pointers_suppress_the_overlay() {
   for pointer in [
      Point::new(f64::NAN, 10.0),
      Point::new(10.0, f64::INFINITY),
   ] {
      let commands = render(Some(pointer));
      assert!(commands.iter().all(Command::is_finite));
      assert_eq!(commands, render(None));
   }
}

#[test]
fn rendering_is_idempotent() {
   let mut diagram = diagram();
   let pointer = Some(Point::new(123.0, 654.0));
   diagram.render(pointer);
   let first = diagram.surface_mut().take_commands();
   diagram.render(pointer);
   let second = diagram.surface_mut().take_commands();
   assert_eq!(first, second);

   // A different pointer in between leaves no trace either.
   diagram.render(Some(Point::new(700.0, 20.0)));
   diagram.surface_mut().take_commands();
   diagram.render(pointer);
   assert_eq!(diagram.surface_mut().take_commands(), first);
}

#[test]
fn every_direction_draws_finite_geometry() {
   let mut diagram = diagram();
   for step in 0..720 {
      let angle = (step as f64 / 2.0).to_radians();
      let pointer = Point::new(SCALE + 250.0 * angle.cos(), SCALE - 250.0 * angle.sin());
      let reading = diagram.render(Some(pointer)).unwrap();
      assert!((0.0..360.0).contains(&reading.angle_degrees()));
      let commands = diagram.surface_mut().take_commands();
      assert!(commands.iter().all(Command::is_finite), "step {}", step);
   }
}

#[test]
fn custom_font_is_used_for_labels() {
   let mut diagram = Diagram::new(
      RecordingSurface::new(),
      Transform::centered(SCALE).unwrap(),
      Style::default().with_font("DejaVu Sans", 14.0),
   );
   diagram.render(Some(Point::new(500.0, 300.0)));
   let commands = diagram.into_surface().take_commands();
   assert!(commands.contains(&Command::SetFont(Font::new("DejaVu Sans", 14.0))));
   assert!(!commands.contains(&Command::SetFont(Font::new("Arial", 20.0))));
}

#[test]
fn smaller_scales_shrink_the_picture() {
   let mut diagram = Diagram::new(
      RecordingSurface::new(),
      Transform::centered(100.0).unwrap(),
      Style::default(),
   );
   diagram.render(Some(Point::new(200.0, 100.0)));
   let commands = diagram.into_surface().take_commands();
   assert_eq!(commands[0], Command::ClearRect(Rect::new(0.0, 0.0, 200.0, 200.0)));
   let arcs = arcs(&commands);
   assert_eq!(arcs[0].1, 100.0);
   assert_eq!(arcs[1].1, 12.5);
}

#[test]
fn zero_grid_step_draws_a_bounded_grid() {
   let mut diagram = Diagram::new(
      RecordingSurface::new(),
      Transform::centered(SCALE).unwrap(),
      Style {
         grid_step: 0.0,
         ..Style::default()
      },
   );
   diagram.render(None);
   let commands = diagram.into_surface().take_commands();
   let cells = commands.iter().filter(|c| matches!(c, Command::StrokeRect(_))).count();
   assert_eq!(cells, Style::MAX_GRID_CELLS * Style::MAX_GRID_CELLS);
   assert!(commands.iter().all(Command::is_finite));
}
