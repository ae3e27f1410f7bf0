//! Copy and share orchestration over the
//! optional platform capabilities.
//!
//! Failures never reach the caller: a failed
//! clipboard write falls back to the legacy
//! copy, a failed or cancelled share is
//! dropped.

use serde::Serialize;
use thiserror::Error;
use tracing::{
  debug,
  info,
  warn
};

use crate::config::Messages;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
  #[error("{0} is not available")]
  Unavailable(&'static str),
  #[error("platform rejected the request: {0}")]
  Rejected(String)
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
)]
pub struct SharePayload {
  pub title: String,
  pub text:  String,
  pub url:   String
}

/// How a copy ended up being performed.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum CopyMethod {
  Clipboard,
  Legacy,
  /// Both paths failed; the user is still
  /// told the text was copied.
  Unconfirmed
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ShareOutcome {
  Shared,
  Dismissed,
  CopiedLink(CopyMethod)
}

#[allow(async_fn_in_trait)]
pub trait Clipboard {
  async fn write_text(
    &self,
    text: &str
  ) -> Result<(), PlatformError>;

  /// Selection-based copy through a
  /// throwaway text field.
  fn legacy_copy(
    &self,
    text: &str
  ) -> Result<(), PlatformError>;
}

#[allow(async_fn_in_trait)]
pub trait ShareSheet {
  fn is_available(&self) -> bool;

  async fn share(
    &self,
    payload: &SharePayload
  ) -> Result<(), PlatformError>;
}

pub trait Notifier {
  fn notify(&self, message: &str);
}

#[tracing::instrument(skip_all)]
pub async fn copy_text<C, N>(
  clipboard: &C,
  notifier: &N,
  messages: &Messages,
  text: &str
) -> CopyMethod
where
  C: Clipboard,
  N: Notifier
{
  let method = match clipboard
    .write_text(text)
    .await
  {
    | Ok(()) => CopyMethod::Clipboard,
    | Err(error) => {
      debug!(%error, "clipboard write failed; using legacy copy");
      match clipboard.legacy_copy(text) {
        | Ok(()) => CopyMethod::Legacy,
        | Err(error) => {
          warn!(%error, "legacy copy failed");
          CopyMethod::Unconfirmed
        }
      }
    }
  };
  info!(?method, chars = text.chars().count(), "copied text");
  notifier.notify(&messages.copied);
  method
}

#[tracing::instrument(skip_all, fields(url = %payload.url))]
pub async fn share_page<S, C, N>(
  sheet: &S,
  clipboard: &C,
  notifier: &N,
  messages: &Messages,
  payload: &SharePayload
) -> ShareOutcome
where
  S: ShareSheet,
  C: Clipboard,
  N: Notifier
{
  if sheet.is_available() {
    return match sheet.share(payload).await
    {
      | Ok(()) => {
        info!("shared via platform sheet");
        ShareOutcome::Shared
      }
      | Err(error) => {
        debug!(%error, "share dismissed");
        ShareOutcome::Dismissed
      }
    };
  }

  let method = copy_text(
    clipboard,
    notifier,
    messages,
    &payload.url
  )
  .await;
  notifier.notify(&messages.link_copied);
  ShareOutcome::CopiedLink(method)
}
