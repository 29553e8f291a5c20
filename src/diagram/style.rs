use unitcircle_renderer::{Color, Font};

/// Colors, strokes and measurements used to draw the diagram.
#[derive(Clone, Debug)]
pub struct Style {
   /// The background grid.
   pub grid: Color,
   /// The circle, axes, arrowheads, their labels and the radius.
   pub ink: Color,
   /// The sine, cosine and tangent constructions, the angle arc and their labels.
   pub overlay: Color,
   pub line_width: f64,
   pub dash: [f64; 2],
   pub font: Font,
   /// The size of a grid cell, in units.
   pub grid_step: f64,
   pub arrow_length: f64,
   pub arrow_half_width: f64,
   /// How many times smaller than the unit circle the angle arc is.
   pub angle_arc_divisor: f64,
}

impl Style {
   pub const LIGHT_GRAY: Color = Color {
      r: 211,
      g: 211,
      b: 211,
      a: 255,
   };
   pub const BLACK: Color = Color {
      r: 0,
      g: 0,
      b: 0,
      a: 255,
   };
   pub const RED: Color = Color {
      r: 255,
      g: 0,
      b: 0,
      a: 255,
   };

   pub const MAX_GRID_CELLS: usize = 200;

   pub fn with_font(mut self, family: &str, size: f64) -> Self {
      self.font = Font::new(family, size);
      self
   }

   /// The number of grid cells along each axis, covering `[-1, 1]`.
   ///
   /// Always between one and [`Style::MAX_GRID_CELLS`], whatever `grid_step` is set to.
   pub fn grid_cells(&self) -> usize {
      let cells = (2.0 / self.grid_step).round();
      if cells.is_nan() || cells < 1.0 {
         1
      } else {
         cells.min(Self::MAX_GRID_CELLS as f64) as usize
      }
   }
}

impl Default for Style {
   fn default() -> Self {
      Self {
         grid: Self::LIGHT_GRAY,
         ink: Self::BLACK,
         overlay: Self::RED,
         line_width: 1.0,
         dash: [5.0, 5.0],
         font: Font::new("Arial", 20.0),
         grid_step: 0.25,
         arrow_length: 10.0,
         arrow_half_width: 5.0,
         angle_arc_divisor: 8.0,
      }
   }
}
