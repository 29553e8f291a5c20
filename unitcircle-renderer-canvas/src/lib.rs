//! A [`Surface`](unitcircle_renderer::Surface) drawing onto an HTML `<canvas>` through its 2D
//! rendering context.

use std::rc::Rc;

mod common;
mod rendering;

pub struct CanvasSurface {
   context: Rc<web_sys::CanvasRenderingContext2d>,
}

impl CanvasSurface {
   pub fn new(context: Rc<web_sys::CanvasRenderingContext2d>) -> Self {
      Self { context }
   }
}
