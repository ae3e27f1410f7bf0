use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use invite_core::lightbox::{
  Frame,
  Key,
  Lightbox,
  Transition
};
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlElement,
  HtmlImageElement,
  KeyboardEvent
};

use super::dom;

const LIGHTBOX_ID: &str = "lightbox";
const IMAGE_ID: &str = "lightbox-img";
const CURRENT_ID: &str = "lightbox-current";
const TOTAL_ID: &str = "lightbox-total";
const THUMB_SELECTOR: &str =
  ".gallery .thumb";
const CLOSE_SELECTOR: &str =
  ".lightbox-close";
const PREV_SELECTOR: &str = ".lightbox-prev";
const NEXT_SELECTOR: &str = ".lightbox-next";

/// Overlay elements touched on every
/// transition. Inner pieces are optional.
struct LightboxView {
  overlay: Element,
  image:   Option<HtmlImageElement>,
  current: Option<Element>,
  body:    Option<HtmlElement>
}

impl LightboxView {
  fn show(&self, frame: Frame<'_>) {
    if let Some(image) = self.image.as_ref()
    {
      image.set_src(frame.src);
    }
    dom::set_text(
      self.current.as_ref(),
      &frame.position.to_string()
    );
    dom::set_active(&self.overlay, true);
    let _ = self
      .overlay
      .set_attribute("aria-hidden", "false");
    if let Some(body) = self.body.as_ref() {
      let _ = body
        .style()
        .set_property("overflow", "hidden");
    }
  }

  /// Only the image and counter, for
  /// prev/next while already open.
  fn step(&self, frame: Frame<'_>) {
    if let Some(image) = self.image.as_ref()
    {
      image.set_src(frame.src);
    }
    dom::set_text(
      self.current.as_ref(),
      &frame.position.to_string()
    );
  }

  fn hide(&self) {
    dom::set_active(&self.overlay, false);
    let _ = self
      .overlay
      .set_attribute("aria-hidden", "true");
    if let Some(body) = self.body.as_ref() {
      let _ = body
        .style()
        .remove_property("overflow");
    }
  }
}

struct Bound {
  state: RefCell<Lightbox>,
  view:  LightboxView
}

impl Bound {
  fn open(&self, index: usize) {
    let mut state = self.state.borrow_mut();
    if let Some(frame) = state.open(index) {
      self.view.show(frame);
    }
  }

  fn close(&self) {
    if self.state.borrow_mut().close() {
      self.view.hide();
    }
  }

  fn prev(&self) {
    let mut state = self.state.borrow_mut();
    if let Some(frame) = state.prev() {
      self.view.step(frame);
    }
  }

  fn next(&self) {
    let mut state = self.state.borrow_mut();
    if let Some(frame) = state.next() {
      self.view.step(frame);
    }
  }

  fn key(&self, key: Key) {
    let mut state = self.state.borrow_mut();
    match state.handle_key(key) {
      | Some(Transition::Show(frame)) => {
        self.view.step(frame)
      }
      | Some(Transition::Hide) => {
        self.view.hide()
      }
      | None => {}
    }
  }
}

/// Wires the gallery lightbox. `false` when
/// the overlay or every image is missing.
pub fn bind(document: &Document) -> bool {
  let Some(overlay) =
    document.get_element_by_id(LIGHTBOX_ID)
  else {
    return false;
  };

  let thumbs: Vec<(Element, String)> =
    dom::query_all(document, THUMB_SELECTOR)
      .into_iter()
      .filter_map(|thumb| {
        let src =
          thumb.get_attribute("data-img");
        if src.is_none() {
          tracing::warn!(
            "gallery thumbnail without \
             data-img; skipping"
          );
        }
        src.map(|src| (thumb, src))
      })
      .collect();
  let Some(model) = Lightbox::new(
    thumbs
      .iter()
      .map(|(_, src)| src.clone())
      .collect()
  ) else {
    return false;
  };

  dom::set_text(
    document
      .get_element_by_id(TOTAL_ID)
      .as_ref(),
    &model.total().to_string()
  );

  let bound = Rc::new(Bound {
    state: RefCell::new(model),
    view:  LightboxView {
      overlay: overlay.clone(),
      image:   document
        .get_element_by_id(IMAGE_ID)
        .and_then(|el| {
          el.dyn_into::<HtmlImageElement>()
            .ok()
        }),
      current: document
        .get_element_by_id(CURRENT_ID),
      body:    document.body()
    }
  });

  for (index, (thumb, _)) in
    thumbs.iter().enumerate()
  {
    let bound = Rc::clone(&bound);
    EventListener::new(
      thumb,
      "click",
      move |_| bound.open(index)
    )
    .forget();
  }

  let controls: [(
    &str,
    fn(&Bound)
  ); 3] = [
    (CLOSE_SELECTOR, Bound::close),
    (PREV_SELECTOR, Bound::prev),
    (NEXT_SELECTOR, Bound::next)
  ];
  for (selector, action) in controls {
    let Ok(Some(control)) =
      overlay.query_selector(selector)
    else {
      tracing::debug!(
        selector,
        "lightbox control missing"
      );
      continue;
    };
    let bound = Rc::clone(&bound);
    EventListener::new(
      &control,
      "click",
      move |_| action(&bound)
    )
    .forget();
  }

  {
    let bound = Rc::clone(&bound);
    let backdrop = overlay.clone();
    EventListener::new(
      &overlay,
      "click",
      move |event| {
        let on_backdrop = event
          .target()
          .and_then(|target| {
            target.dyn_into::<Element>().ok()
          })
          .is_some_and(|target| {
            target == backdrop
          });
        if on_backdrop {
          bound.close();
        }
      }
    )
    .forget();
  }

  EventListener::new(
    document,
    "keydown",
    move |event| {
      let Some(key) = event
        .dyn_ref::<KeyboardEvent>()
        .and_then(|event| {
          Key::from_dom(&event.key())
        })
      else {
        return;
      };
      bound.key(key);
    }
  )
  .forget();

  tracing::info!(
    images = thumbs.len(),
    "lightbox ready"
  );
  true
}
