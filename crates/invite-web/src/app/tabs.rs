use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use invite_core::tabs::TabSet;
use web_sys::{
  Document,
  Element
};

use super::dom;

const TAB_BUTTON_SELECTOR: &str = ".tab-btn";
const TAB_CONTENT_SELECTOR: &str =
  ".tab-content";

struct MapTabs {
  document: Document,
  tabs:     RefCell<TabSet>,
  buttons:  Vec<Element>,
  panels:   Vec<Element>
}

impl MapTabs {
  fn select(&self, button: usize) {
    let Some(selection) =
      self.tabs.borrow_mut().select(button)
    else {
      return;
    };

    for (idx, el) in
      self.buttons.iter().enumerate()
    {
      dom::set_active(
        el,
        idx == selection.button
      );
    }
    for panel in &self.panels {
      dom::set_active(panel, false);
    }
    match self
      .document
      .get_element_by_id(&selection.panel_id)
    {
      | Some(panel) => {
        dom::set_active(&panel, true)
      }
      | None => {
        tracing::warn!(
          panel = %selection.panel_id,
          "no panel for selected map tab"
        );
      }
    }
  }
}

/// Kakao/Naver map switcher. `false` when
/// the page has no tab buttons.
pub fn bind(document: &Document) -> bool {
  let buttons =
    dom::query_all(document, TAB_BUTTON_SELECTOR);
  let keys = buttons
    .iter()
    .map(|btn| {
      btn
        .get_attribute("data-tab")
        .unwrap_or_default()
    })
    .collect();
  let Some(tabs) = TabSet::new(keys) else {
    return false;
  };

  let map_tabs = Rc::new(MapTabs {
    document: document.clone(),
    tabs:     RefCell::new(tabs),
    buttons,
    panels:   dom::query_all(
      document,
      TAB_CONTENT_SELECTOR
    )
  });

  for (idx, btn) in
    map_tabs.buttons.iter().enumerate()
  {
    let map_tabs = Rc::clone(&map_tabs);
    EventListener::new(
      btn,
      "click",
      move |_| map_tabs.select(idx)
    )
    .forget();
  }

  tracing::info!(
    tabs = ?map_tabs.tabs.borrow().keys(),
    "map tabs ready"
  );
  true
}
