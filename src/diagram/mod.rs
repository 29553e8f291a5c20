//! The unit circle diagram.
//!
//! A [`Diagram`] owns a drawing surface and redraws the whole picture from scratch on every
//! call to [`Diagram::render`]: first the static base (grid, circle, axes), then, if a pointer
//! position is known, the overlay showing the angle the pointer makes and its sine, cosine and
//! tangent.

mod base;
mod overlay;
mod style;

#[cfg(test)]
mod tests;

pub use style::*;

use unitcircle_renderer::{Rect, Surface};

use crate::geometry::{PixelPosition, Transform};
use crate::trig::TrigReading;

/// Whether the overlay is currently shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagramState {
   /// Only the base diagram is drawn.
   Idle,
   /// The overlay for a pointer is drawn on top of the base diagram.
   Tracking,
}

pub struct Diagram<S: Surface> {
   surface: S,
   transform: Transform,
   style: Style,
   state: DiagramState,
}

impl<S: Surface> Diagram<S> {
   pub fn new(surface: S, transform: Transform, style: Style) -> Self {
      Self {
         surface,
         transform,
         style,
         state: DiagramState::Idle,
      }
   }

   /// Redraws the diagram.
   ///
   /// With no pointer, or a pointer that doesn't define a direction from the origin, only the
   /// base diagram is drawn.
   pub fn render(&mut self, pointer: Option<PixelPosition>) -> Option<TrigReading> {
      let (width, height) = self.transform.surface_size();
      self.surface.clear_rect(Rect::new(0.0, 0.0, width, height));
      base::draw(&mut self.surface, &self.transform, &self.style);

      let reading =
         pointer.and_then(|pointer| TrigReading::from_pointer(&self.transform, pointer));
      match &reading {
         Some(reading) => {
            overlay::draw(&mut self.surface, &self.transform, &self.style, reading);
            self.state = DiagramState::Tracking;
         }
         None => {
            if pointer.is_some() {
               log::debug!("overlay suppressed for pointer {:?}", pointer);
            }
            self.state = DiagramState::Idle;
         }
      }
      reading
   }

   pub fn state(&self) -> DiagramState {
      self.state
   }

   pub fn surface(&self) -> &S {
      &self.surface
   }

   pub fn surface_mut(&mut self) -> &mut S {
      &mut self.surface
   }

   pub fn into_surface(self) -> S {
      self.surface
   }
}
