use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlElement
};

pub const ACTIVE_CLASS: &str = "active";

pub fn query_all(
  document: &Document,
  selector: &str
) -> Vec<Element> {
  let Ok(list) =
    document.query_selector_all(selector)
  else {
    tracing::warn!(
      selector,
      "invalid selector"
    );
    return vec![];
  };
  (0..list.length())
    .filter_map(|idx| list.get(idx))
    .filter_map(|node| {
      node.dyn_into::<Element>().ok()
    })
    .collect()
}

pub fn set_active(
  el: &Element,
  active: bool
) {
  let _ = el
    .class_list()
    .toggle_with_force(
      ACTIVE_CLASS,
      active
    );
}

pub fn set_text(
  el: Option<&Element>,
  text: &str
) {
  if let Some(el) = el {
    el.set_text_content(Some(text));
  }
}

pub fn set_styles(
  el: &HtmlElement,
  styles: &[(&str, &str)]
) {
  let style = el.style();
  for (name, value) in styles {
    let _ = style.set_property(name, value);
  }
}

/// Replaces the page body with `html` for a
/// browser test.
#[cfg(all(test, target_arch = "wasm32"))]
pub fn fixture(html: &str) -> Document {
  let document = web_sys::window()
    .and_then(|window| window.document())
    .expect("browser document");
  document
    .body()
    .expect("document body")
    .set_inner_html(html);
  document
}

/// Clicks the first element matching
/// `selector`.
#[cfg(all(test, target_arch = "wasm32"))]
pub fn click(document: &Document, selector: &str) {
  document
    .query_selector(selector)
    .expect("valid selector")
    .expect("element present")
    .dyn_into::<HtmlElement>()
    .expect("html element")
    .click();
}
