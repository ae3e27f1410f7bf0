use tracing::{
  debug,
  warn
};

/// Prefix joining a tab key to its panel id,
/// `kakao` → `tab-kakao`.
pub const PANEL_ID_PREFIX: &str = "tab-";

#[must_use]
pub fn panel_id(key: &str) -> String {
  format!("{PANEL_ID_PREFIX}{key}")
}

/// Mutually exclusive tab buttons, each
/// addressed by the key its panel is
/// named after.
#[derive(Debug, Clone)]
pub struct TabSet {
  keys:   Vec<String>,
  active: Option<usize>
}

/// Which button and panel end up active
/// after a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
  pub button:   usize,
  pub panel_id: String
}

impl TabSet {
  /// `None` when the page has no tab
  /// buttons.
  #[must_use]
  pub fn new(
    keys: Vec<String>
  ) -> Option<Self> {
    if keys.is_empty() {
      return None;
    }
    Some(Self { keys, active: None })
  }

  #[must_use]
  pub fn keys(&self) -> &[String] {
    &self.keys
  }

  #[must_use]
  pub fn active_key(&self) -> Option<&str> {
    self
      .active
      .and_then(|idx| self.keys.get(idx))
      .map(String::as_str)
  }

  pub fn select(
    &mut self,
    button: usize
  ) -> Option<Selection> {
    let Some(key) = self.keys.get(button)
    else {
      warn!(
        button,
        "ignoring click on unknown tab \
         button"
      );
      return None;
    };
    let panel_id = panel_id(key);
    debug!(tab = %key, panel = %panel_id, "tab selected");
    self.active = Some(button);
    Some(Selection { button, panel_id })
  }

  #[must_use]
  pub fn is_active(
    &self,
    button: usize
  ) -> bool {
    self.active == Some(button)
  }
}
