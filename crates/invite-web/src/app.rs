pub mod config;

mod actions;
mod countdown;
mod dom;
mod lightbox;
mod tabs;
mod toast;

use invite_core::config::InviteConfig;
use web_sys::Document;

use self::toast::WebToast;

/// Wires every component that finds its
/// elements on the page; the rest stay
/// inert.
pub fn mount(
  document: &Document,
  config: &InviteConfig
) {
  let has_countdown =
    countdown::render(document, config);

  let toast = WebToast::new(
    document.clone(),
    config.toast_delay()
  );
  let actions = actions::bind(
    document, &toast, config
  );
  let lightbox = lightbox::bind(document);
  let tabs = tabs::bind(document);

  tracing::info!(
    countdown = has_countdown,
    copy_buttons = actions.copy_buttons,
    share_buttons = actions.share_buttons,
    lightbox,
    tabs,
    "invitation page mounted"
  );
}
