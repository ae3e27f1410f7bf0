use chrono::Utc;
use invite_core::config::InviteConfig;
use invite_core::countdown::{
  self,
  DDay
};
use web_sys::Document;

const DDAY_ELEMENT_ID: &str = "dday-text";

/// Writes `<b>D-10</b>` (plus the caption on
/// the day itself) into `#dday-text`.
/// Returns whether the element was found.
pub fn render(
  document: &Document,
  config: &InviteConfig
) -> bool {
  let Some(target) =
    document.get_element_by_id(DDAY_ELEMENT_ID)
  else {
    tracing::debug!(
      "no countdown element on page"
    );
    return false;
  };

  let today = countdown::today_in(
    Utc::now(),
    config.timezone()
  );
  let dday =
    DDay::between(config.wedding.date, today);
  let rendered =
    dday.render(&config.messages.dday_today);

  target.set_text_content(None);
  match document.create_element("b") {
    | Ok(label) => {
      label.set_text_content(Some(
        &rendered.label
      ));
      let _ = target.append_child(&label);
    }
    | Err(error) => {
      tracing::warn!(?error, "failed creating countdown label");
      target.set_text_content(Some(
        &rendered.label
      ));
    }
  }
  if let Some(caption) = rendered.caption {
    let caption = document
      .create_text_node(&format!(
        ", {caption}"
      ));
    let _ = target.append_child(&caption);
  }

  tracing::info!(
    %today,
    days = dday.days_remaining(),
    "rendered countdown"
  );
  true
}
