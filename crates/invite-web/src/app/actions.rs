use std::rc::Rc;

use gloo::events::EventListener;
use invite_core::config::InviteConfig;
use invite_core::platform::{
  self,
  Clipboard,
  PlatformError,
  SharePayload,
  ShareSheet
};
use js_sys::{
  Function,
  Promise,
  Reflect
};
use wasm_bindgen::{
  JsCast,
  JsValue
};
use wasm_bindgen_futures::{
  JsFuture,
  spawn_local
};
use web_sys::{
  Document,
  HtmlDocument,
  HtmlTextAreaElement,
  Navigator
};

use super::dom;
use super::toast::WebToast;

const COPY_SELECTOR: &str = "[data-copy]";
const SHARE_SELECTOR: &str =
  "[data-action=\"share\"]";

pub struct Bound {
  pub copy_buttons:  usize,
  pub share_buttons: usize
}

/// `navigator.clipboard` with the
/// `execCommand("copy")` fallback.
struct WebClipboard {
  document:  Document,
  navigator: Option<Navigator>
}

impl Clipboard for WebClipboard {
  async fn write_text(
    &self,
    text: &str
  ) -> Result<(), PlatformError> {
    let clipboard = self
      .navigator
      .as_ref()
      .and_then(|nav| {
        Reflect::get(
          nav,
          &JsValue::from_str("clipboard")
        )
        .ok()
      })
      .filter(|value| value.is_object())
      .ok_or(PlatformError::Unavailable(
        "navigator.clipboard"
      ))?;

    let promise = call_method(
      &clipboard,
      "writeText",
      &JsValue::from_str(text)
    )?;
    JsFuture::from(promise)
      .await
      .map(|_| ())
      .map_err(rejected)
  }

  fn legacy_copy(
    &self,
    text: &str
  ) -> Result<(), PlatformError> {
    let body =
      self.document.body().ok_or(
        PlatformError::Unavailable(
          "document.body"
        )
      )?;
    let field = self
      .document
      .create_element("textarea")
      .map_err(rejected)?
      .dyn_into::<HtmlTextAreaElement>()
      .map_err(|_| {
        PlatformError::Unavailable(
          "textarea"
        )
      })?;
    field.set_value(text);
    let _ = field.set_attribute(
      "readonly",
      ""
    );
    dom::set_styles(
      &field,
      &[
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("opacity", "0")
      ]
    );

    body
      .append_child(&field)
      .map_err(rejected)?;
    field.select();
    let copied = self
      .document
      .dyn_ref::<HtmlDocument>()
      .ok_or(PlatformError::Unavailable(
        "execCommand"
      ))
      .and_then(|doc| {
        doc
          .exec_command("copy")
          .map_err(rejected)
      });
    field.remove();

    match copied? {
      | true => Ok(()),
      | false => {
        Err(PlatformError::Rejected(
          "execCommand(\"copy\") returned \
           false"
            .to_string()
        ))
      }
    }
  }
}

/// `navigator.share`, when the browser has
/// one.
struct WebShareSheet {
  navigator: Option<Navigator>
}

impl ShareSheet for WebShareSheet {
  fn is_available(&self) -> bool {
    self
      .navigator
      .as_ref()
      .and_then(|nav| {
        Reflect::get(
          nav,
          &JsValue::from_str("share")
        )
        .ok()
      })
      .is_some_and(|value| {
        value.is_function()
      })
  }

  async fn share(
    &self,
    payload: &SharePayload
  ) -> Result<(), PlatformError> {
    let navigator =
      self.navigator.as_ref().ok_or(
        PlatformError::Unavailable(
          "navigator"
        )
      )?;
    let data =
      serde_wasm_bindgen::to_value(payload)
        .map_err(|err| {
          PlatformError::Rejected(
            err.to_string()
          )
        })?;
    let promise =
      call_method(navigator, "share", &data)?;
    JsFuture::from(promise)
      .await
      .map(|_| ())
      .map_err(rejected)
  }
}

/// Calls `target[name](arg)` and expects a
/// promise back.
fn call_method(
  target: &JsValue,
  name: &'static str,
  arg: &JsValue
) -> Result<Promise, PlatformError> {
  let method =
    Reflect::get(target, &JsValue::from_str(name))
      .map_err(rejected)?
      .dyn_into::<Function>()
      .map_err(|_| {
        PlatformError::Unavailable(name)
      })?;
  method
    .call1(target, arg)
    .map_err(rejected)?
    .dyn_into::<Promise>()
    .map_err(|value| {
      PlatformError::Rejected(format!(
        "{name} returned {value:?}"
      ))
    })
}

fn rejected(value: JsValue) -> PlatformError {
  let detail = value
    .dyn_ref::<js_sys::Error>()
    .map(|err| String::from(err.message()))
    .or_else(|| value.as_string())
    .unwrap_or_else(|| format!("{value:?}"));
  PlatformError::Rejected(detail)
}

fn navigator() -> Option<Navigator> {
  web_sys::window()
    .map(|window| window.navigator())
}

fn share_payload(
  document: &Document,
  text: &str
) -> SharePayload {
  let url = document
    .location()
    .and_then(|location| location.href().ok())
    .unwrap_or_default();
  SharePayload {
    title: document.title(),
    text: text.to_string(),
    url
  }
}

/// Hooks `[data-copy]` and
/// `[data-action="share"]` elements.
pub fn bind(
  document: &Document,
  toast: &WebToast,
  config: &InviteConfig
) -> Bound {
  let messages =
    Rc::new(config.messages.clone());
  let share_text =
    Rc::new(config.share.text.clone());

  let copy_targets =
    dom::query_all(document, COPY_SELECTOR);
  for target in &copy_targets {
    let text = target
      .get_attribute("data-copy")
      .unwrap_or_default();
    let document = document.clone();
    let toast = toast.clone();
    let messages = Rc::clone(&messages);
    EventListener::new(
      target,
      "click",
      move |_| {
        let clipboard = WebClipboard {
          document:  document.clone(),
          navigator: navigator()
        };
        let toast = toast.clone();
        let messages = Rc::clone(&messages);
        let text = text.clone();
        spawn_local(async move {
          platform::copy_text(
            &clipboard,
            &toast,
            &messages,
            &text
          )
          .await;
        });
      }
    )
    .forget();
  }

  let share_targets =
    dom::query_all(document, SHARE_SELECTOR);
  for target in &share_targets {
    let document = document.clone();
    let toast = toast.clone();
    let messages = Rc::clone(&messages);
    let share_text = Rc::clone(&share_text);
    EventListener::new(
      target,
      "click",
      move |_| {
        let payload =
          share_payload(&document, &share_text);
        let sheet = WebShareSheet {
          navigator: navigator()
        };
        let clipboard = WebClipboard {
          document:  document.clone(),
          navigator: navigator()
        };
        let toast = toast.clone();
        let messages = Rc::clone(&messages);
        spawn_local(async move {
          let outcome = platform::share_page(
            &sheet,
            &clipboard,
            &toast,
            &messages,
            &payload
          )
          .await;
          tracing::debug!(?outcome, "share finished");
        });
      }
    )
    .forget();
  }

  Bound {
    copy_buttons:  copy_targets.len(),
    share_buttons: share_targets.len()
  }
}
