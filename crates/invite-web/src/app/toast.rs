use std::cell::RefCell;
use std::rc::{
  Rc,
  Weak
};
use std::time::Duration;

use gloo::render::{
  AnimationFrame,
  request_animation_frame
};
use gloo::timers::callback::Timeout;
use invite_core::platform::Notifier;
use invite_core::toast::{
  TimerHandle,
  Toast
};
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  HtmlElement
};

use super::dom;

const TOAST_ELEMENT_ID: &str = "toast";

const TOAST_STYLES: &[(&str, &str)] = &[
  ("position", "fixed"),
  ("left", "50%"),
  ("bottom", "18px"),
  ("transform", "translateX(-50%)"),
  ("padding", "10px 14px"),
  ("border-radius", "999px"),
  ("background", "rgba(17,24,39,.92)"),
  ("color", "#fff"),
  ("font-weight", "700"),
  ("font-size", "13px"),
  ("z-index", "9999"),
  ("box-shadow", "0 10px 20px rgba(0,0,0,.18)"),
  ("opacity", "0"),
  ("transition", "opacity .2s ease")
];

struct Dismissal(Timeout);

impl TimerHandle for Dismissal {
  fn cancel(self) {
    drop(self.0.cancel());
  }
}

struct ToastView {
  model:   Toast<Dismissal>,
  element: Option<HtmlElement>,
  frame:   Option<AnimationFrame>
}

/// The page's single toast. Clones share
/// the same element and timer slot.
#[derive(Clone)]
pub struct WebToast {
  document: Document,
  inner:    Rc<RefCell<ToastView>>
}

impl WebToast {
  pub fn new(
    document: Document,
    delay: Duration
  ) -> Self {
    Self {
      document,
      inner: Rc::new(RefCell::new(
        ToastView {
          model:   Toast::new(delay),
          element: None,
          frame:   None
        }
      ))
    }
  }

  pub fn show(&self, message: &str) {
    let Some(element) = self.element()
    else {
      tracing::warn!(
        message,
        "toast element unavailable"
      );
      return;
    };
    element.set_text_content(Some(message));

    let mut view = self.inner.borrow_mut();
    let delay_ms = u32::try_from(
      view.model.delay().as_millis()
    )
    .unwrap_or(u32::MAX);

    let weak = Rc::downgrade(&self.inner);
    view.model.show(message, |_| {
      Dismissal(Timeout::new(
        delay_ms,
        move || expire(&weak)
      ))
    });

    let weak = Rc::downgrade(&self.inner);
    view.frame = Some(
      request_animation_frame(move |_| {
        reveal(&weak)
      })
    );
    tracing::debug!(message, "toast shown");
  }

  /// Finds `#toast`, creating and styling it
  /// on first use.
  fn element(&self) -> Option<HtmlElement> {
    let cached =
      self.inner.borrow().element.clone();
    if let Some(el) = cached
      && el.is_connected()
    {
      return Some(el);
    }

    let el = match self
      .document
      .get_element_by_id(TOAST_ELEMENT_ID)
    {
      | Some(existing) => existing,
      | None => {
        let created = self
          .document
          .create_element("div")
          .ok()?;
        created.set_id(TOAST_ELEMENT_ID);
        if let Some(html) =
          created.dyn_ref::<HtmlElement>()
        {
          dom::set_styles(html, TOAST_STYLES);
        }
        self
          .document
          .body()?
          .append_child(&created)
          .ok()?;
        created
      }
    }
    .dyn_into::<HtmlElement>()
    .ok()?;

    self.inner.borrow_mut().element =
      Some(el.clone());
    Some(el)
  }
}

impl Notifier for WebToast {
  fn notify(&self, message: &str) {
    self.show(message);
  }
}

fn reveal(weak: &Weak<RefCell<ToastView>>) {
  let Some(inner) = weak.upgrade() else {
    return;
  };
  let mut view = inner.borrow_mut();
  view.model.reveal();
  if let Some(el) = view.element.as_ref() {
    let _ =
      el.style().set_property("opacity", "1");
  }
}

fn expire(weak: &Weak<RefCell<ToastView>>) {
  let Some(inner) = weak.upgrade() else {
    return;
  };
  let mut view = inner.borrow_mut();
  view.model.expire();
  if let Some(el) = view.element.as_ref() {
    let _ =
      el.style().set_property("opacity", "0");
  }
}
