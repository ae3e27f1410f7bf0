use invite_core::config::InviteConfig;
use web_sys::Document;

const INVITE_CONFIG_TOML: &str =
  include_str!("../../assets/invite.toml");
const PAGE_CONFIG_ELEMENT_ID: &str =
  "invite-config";

/// Embedded config, replaced by the page's
/// `#invite-config` block when it parses.
pub fn load_invite_config(
  document: &Document
) -> InviteConfig {
  if let Some(raw) = document
    .get_element_by_id(
      PAGE_CONFIG_ELEMENT_ID
    )
    .and_then(|el| el.text_content())
    .filter(|raw| !raw.trim().is_empty())
  {
    match InviteConfig::from_toml_str(&raw)
    {
      | Ok(config) => {
        tracing::info!(
          wedding = %config.wedding.date,
          "loaded page config"
        );
        return config;
      }
      | Err(error) => {
        tracing::error!(error = %format!("{error:#}"), "failed parsing page config; using embedded config");
      }
    }
  }

  match InviteConfig::from_toml_str(
    INVITE_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        wedding = %config.wedding.date,
        timezone = ?config.wedding.timezone,
        "loaded embedded config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(error = %format!("{error:#}"), "failed parsing embedded config; using defaults");
      InviteConfig::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::INVITE_CONFIG_TOML;
  use invite_core::config::InviteConfig;

  #[test]
  fn embedded_config_is_valid() {
    let config = InviteConfig::from_toml_str(
      INVITE_CONFIG_TOML
    )
    .expect("embedded config parses");
    assert_eq!(
      config.wedding.date.to_string(),
      "2026-04-11"
    );
    assert!(config.timezone().is_some());
  }
}
