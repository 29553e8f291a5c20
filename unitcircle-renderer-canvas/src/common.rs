use unitcircle_renderer::paws;

use wasm_bindgen::JsValue;

pub fn color_to_jsvalue(color: paws::Color) -> JsValue {
   JsValue::from_str(&format!(
      "rgba({}, {}, {}, {})",
      color.r,
      color.g,
      color.b,
      color.a as f32 / 255.0
   ))
}

pub fn dash_to_array(segments: &[f64]) -> js_sys::Array {
   segments.iter().map(|&segment| JsValue::from_f64(segment)).collect()
}

/// Logs a failed Canvas API call. Drawing carries on, as there's nothing else we can do.
pub fn report(operation: &str, result: Result<(), JsValue>) {
   if let Err(error) = result {
      log::error!("canvas {} failed: {:?}", operation, error);
   }
}
