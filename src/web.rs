//! The browser entry point.

use std::cell::RefCell;
use std::rc::Rc;

use unitcircle_renderer_canvas::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::config::UserConfig;
use crate::diagram::Diagram;
use crate::geometry::PixelPosition;

fn to_js(error: crate::Error) -> JsValue {
   JsValue::from_str(&error.to_string())
}

/// Converts a mouse event's position into canvas pixels.
///
/// The canvas may be scaled by CSS, so the position within its on-screen box is scaled by the
/// ratio between the backing store and that box.
fn pointer_position(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Option<PixelPosition> {
   let bounds = canvas.get_bounding_client_rect();
   if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
      return None;
   }
   let scale_x = canvas.width() as f64 / bounds.width();
   let scale_y = canvas.height() as f64 / bounds.height();
   Some(PixelPosition::new(
      (event.client_x() as f64 - bounds.left()) * scale_x,
      (event.client_y() as f64 - bounds.top()) * scale_y,
   ))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
   console_error_panic_hook::set_once();
   let _ = console_log::init_with_level(log::Level::Info);

   let config = UserConfig::load_or_create().map_err(to_js)?;
   let transform = config.transform().map_err(to_js)?;
   let (width, height) = transform.surface_size();

   let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
   let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
   let canvas = document
      .create_element("canvas")?
      .dyn_into::<HtmlCanvasElement>()
      .map_err(|_| JsValue::from_str("cannot create canvas"))?;
   canvas.set_width(width as u32);
   canvas.set_height(height as u32);
   canvas.style().set_property("max-width", "100%")?;
   canvas.style().set_property("border", "1px solid black")?;

   match document.get_element_by_id("app") {
      Some(app) => app.append_child(&canvas)?,
      None => document
         .body()
         .ok_or_else(|| JsValue::from_str("no document body"))?
         .append_child(&canvas)?,
   };

   let context = canvas
      .get_context("2d")?
      .ok_or_else(|| JsValue::from_str("2D canvas context is not supported"))?
      .dyn_into::<CanvasRenderingContext2d>()
      .map_err(|_| JsValue::from_str("unexpected canvas context type"))?;

   let diagram = Rc::new(RefCell::new(Diagram::new(
      CanvasSurface::new(Rc::new(context)),
      transform,
      config.style(),
   )));
   diagram.borrow_mut().render(None);
   log::info!("unit circle ready ({}×{} px)", width, height);

   // Redraw on every pointer move.
   {
      let diagram = Rc::clone(&diagram);
      let target = canvas.clone();
      let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
         let pointer = pointer_position(&target, &event);
         diagram.borrow_mut().render(pointer);
      }) as Box<dyn FnMut(MouseEvent)>);

      canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;

      closure.forget();
   }

   Ok(())
}
