use std::time::Duration;

use anyhow::{
  Context,
  anyhow
};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  warn
};

pub const DEFAULT_WEDDING_DATE: NaiveDate =
  match NaiveDate::from_ymd_opt(
    2026, 4, 11
  ) {
    | Some(date) => date,
    | None => {
      panic!("invalid default wedding date")
    }
  };
pub const DEFAULT_TOAST_DELAY_MS: u64 =
  1_300;
pub const CONFIG_ENV_VAR: &str =
  "INVITE_CONFIG";
pub const CONFIG_FILE_NAME: &str =
  "invite.toml";

#[derive(
  Debug,
  Clone,
  PartialEq,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct InviteConfig {
  pub wedding:  WeddingSection,
  pub share:    ShareSection,
  pub toast:    ToastSection,
  pub messages: Messages
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct WeddingSection {
  pub date:     NaiveDate,
  /// IANA zone used to decide "today". The
  /// viewer's local date is used when unset.
  pub timezone: Option<String>
}

impl Default for WeddingSection {
  fn default() -> Self {
    Self {
      date:     DEFAULT_WEDDING_DATE,
      timezone: None
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct ShareSection {
  pub text: String
}

impl Default for ShareSection {
  fn default() -> Self {
    Self {
      text: "Mobile wedding invitation"
        .to_string()
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct ToastSection {
  pub dismiss_after_ms: u64
}

impl Default for ToastSection {
  fn default() -> Self {
    Self {
      dismiss_after_ms:
        DEFAULT_TOAST_DELAY_MS
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct Messages {
  pub copied:      String,
  pub link_copied: String,
  pub dday_today:  String
}

impl Default for Messages {
  fn default() -> Self {
    Self {
      copied:      "Copied".to_string(),
      link_copied: "Link copied"
        .to_string(),
      dday_today:  "today!".to_string()
    }
  }
}

impl InviteConfig {
  #[tracing::instrument(skip_all)]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut cfg =
      toml::from_str::<Self>(raw)
        .context(
          "failed to parse invitation \
           config"
        )?;
    cfg.sanitize();
    cfg.validate()?;
    debug!(
      wedding = %cfg.wedding.date,
      timezone = ?cfg.wedding.timezone,
      "parsed invitation config"
    );
    Ok(cfg)
  }

  pub fn to_toml_string(
    &self
  ) -> anyhow::Result<String> {
    toml::to_string_pretty(self).context(
      "failed to serialize invitation \
       config"
    )
  }

  #[must_use]
  pub fn timezone(&self) -> Option<Tz> {
    self
      .wedding
      .timezone
      .as_deref()
      .and_then(|raw| raw.parse().ok())
  }

  #[must_use]
  pub fn toast_delay(&self) -> Duration {
    Duration::from_millis(
      self.toast.dismiss_after_ms
    )
  }

  fn sanitize(&mut self) {
    if self.toast.dismiss_after_ms == 0 {
      warn!(
        "toast.dismiss_after_ms is 0; \
         using default"
      );
      self.toast.dismiss_after_ms =
        DEFAULT_TOAST_DELAY_MS;
    }

    self.wedding.timezone = self
      .wedding
      .timezone
      .take()
      .map(|raw| raw.trim().to_string())
      .filter(|raw| !raw.is_empty());

    let defaults = Messages::default();
    fill_blank(
      &mut self.messages.copied,
      defaults.copied
    );
    fill_blank(
      &mut self.messages.link_copied,
      defaults.link_copied
    );
    fill_blank(
      &mut self.messages.dday_today,
      defaults.dday_today
    );
    fill_blank(
      &mut self.share.text,
      ShareSection::default().text
    );
  }

  fn validate(&self) -> anyhow::Result<()> {
    if let Some(raw) =
      self.wedding.timezone.as_deref()
    {
      raw.parse::<Tz>().map_err(|err| {
        anyhow!(
          "invalid wedding.timezone \
           {raw:?}: {err}"
        )
      })?;
    }
    Ok(())
  }
}

fn fill_blank(
  slot: &mut String,
  fallback: String
) {
  if slot.trim().is_empty() {
    *slot = fallback;
  }
}

#[cfg(feature = "cli")]
mod load {
  use std::fs;
  use std::path::{
    Path,
    PathBuf
  };

  use anyhow::Context;
  use tracing::{
    info,
    warn
  };

  use super::{
    CONFIG_ENV_VAR,
    CONFIG_FILE_NAME,
    InviteConfig
  };

  impl InviteConfig {
    /// Loads from `path`, `$INVITE_CONFIG`
    /// or the per-user config directory, in
    /// that order. Missing default files
    /// yield the built-in configuration.
    #[tracing::instrument]
    pub fn load(
      path: Option<&Path>
    ) -> anyhow::Result<Self> {
      let Some(path) =
        resolve_config_path(path)
      else {
        warn!(
          "no invitation config found; \
           using defaults"
        );
        return Ok(Self::default());
      };

      info!(config = %path.display(), "loading invitation config");
      let text =
        fs::read_to_string(&path)
          .with_context(|| {
            format!(
              "failed to read {}",
              path.display()
            )
          })?;
      Self::from_toml_str(&text)
        .with_context(|| {
          format!(
            "invalid config in {}",
            path.display()
          )
        })
    }
  }

  fn resolve_config_path(
    explicit: Option<&Path>
  ) -> Option<PathBuf> {
    if let Some(path) = explicit {
      return Some(path.to_path_buf());
    }

    if let Some(raw) =
      std::env::var_os(CONFIG_ENV_VAR)
      && !raw.is_empty()
    {
      return Some(PathBuf::from(raw));
    }

    dirs::config_dir()
      .map(|dir| {
        dir
          .join("invite")
          .join(CONFIG_FILE_NAME)
      })
      .filter(|path| path.is_file())
  }
}
