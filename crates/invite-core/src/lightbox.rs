//! Gallery lightbox: an ordered image set
//! plus a cursor that wraps at both ends.
//!
//! The model owns no DOM. Every transition
//! returns the [`Frame`] the view should show,
//! or `None` when nothing changed.

use tracing::{
  debug,
  warn
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Key {
  Escape,
  ArrowLeft,
  ArrowRight
}

impl Key {
  /// Maps a `KeyboardEvent.key` value.
  #[must_use]
  pub fn from_dom(key: &str) -> Option<Self> {
    match key {
      | "Escape" => Some(Self::Escape),
      | "ArrowLeft" => Some(Self::ArrowLeft),
      | "ArrowRight" => {
        Some(Self::ArrowRight)
      }
      | _ => None
    }
  }
}

/// What the view renders after a
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<'a> {
  Show(Frame<'a>),
  Hide
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct Frame<'a> {
  pub src:      &'a str,
  /// 1-based, for the position counter.
  pub position: usize,
  pub total:    usize
}

#[derive(Debug, Clone)]
pub struct Lightbox {
  images: Vec<String>,
  cursor: usize,
  open:   bool
}

impl Lightbox {
  /// `None` for an empty gallery: the
  /// component stays inert.
  #[must_use]
  pub fn new(
    images: Vec<String>
  ) -> Option<Self> {
    if images.is_empty() {
      debug!(
        "gallery has no images; lightbox \
         disabled"
      );
      return None;
    }
    Some(Self {
      images,
      cursor: 0,
      open: false
    })
  }

  /// Never zero: empty galleries are
  /// refused by [`Lightbox::new`].
  #[must_use]
  pub fn total(&self) -> usize {
    self.images.len()
  }

  #[must_use]
  pub fn is_open(&self) -> bool {
    self.open
  }

  #[must_use]
  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn open(
    &mut self,
    index: usize
  ) -> Option<Frame<'_>> {
    if index >= self.images.len() {
      warn!(
        index,
        total = self.images.len(),
        "ignoring lightbox open for \
         unknown thumbnail"
      );
      return None;
    }
    self.cursor = index;
    self.open = true;
    debug!(index, "lightbox opened");
    self.frame()
  }

  /// Idempotent; `false` when it was
  /// already closed.
  pub fn close(&mut self) -> bool {
    let was_open = self.open;
    self.open = false;
    if was_open {
      debug!("lightbox closed");
    }
    was_open
  }

  pub fn prev(
    &mut self
  ) -> Option<Frame<'_>> {
    self.step(-1)
  }

  pub fn next(
    &mut self
  ) -> Option<Frame<'_>> {
    self.step(1)
  }

  /// Keyboard handling; every key is a
  /// no-op while closed.
  pub fn handle_key(
    &mut self,
    key: Key
  ) -> Option<Transition<'_>> {
    if !self.open {
      return None;
    }
    match key {
      | Key::Escape => {
        self.close();
        Some(Transition::Hide)
      }
      | Key::ArrowLeft => {
        self.prev().map(Transition::Show)
      }
      | Key::ArrowRight => {
        self.next().map(Transition::Show)
      }
    }
  }

  fn step(
    &mut self,
    delta: isize
  ) -> Option<Frame<'_>> {
    let len = self.images.len();
    if len == 0 {
      return None;
    }
    self.cursor = if delta < 0 {
      (self.cursor + len - 1) % len
    } else {
      (self.cursor + 1) % len
    };
    self.frame()
  }

  fn frame(&self) -> Option<Frame<'_>> {
    self.images.get(self.cursor).map(
      |src| Frame {
        src,
        position: self.cursor + 1,
        total: self.images.len()
      }
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn gallery(len: usize) -> Lightbox {
    Lightbox::new(
      (1..=len)
        .map(|n| format!("img/{n}.jpg"))
        .collect()
    )
    .expect("non-empty gallery")
  }

  #[test]
  fn empty_gallery_is_inert() {
    assert!(Lightbox::new(vec![]).is_none());
    assert_eq!(gallery(2).total(), 2);
  }

  #[test]
  fn prev_wraps_to_last() {
    let mut lb = gallery(5);
    lb.open(0).expect("open first");
    let frame = lb.prev().expect("frame");
    assert_eq!(frame.src, "img/5.jpg");
    assert_eq!(frame.position, 5);
    assert_eq!(frame.total, 5);
    assert_eq!(lb.cursor(), 4);
  }

  #[test]
  fn next_wraps_to_first() {
    let mut lb = gallery(5);
    lb.open(4).expect("open last");
    let position =
      lb.next().expect("frame").position;
    assert_eq!(position, 1);
    assert_eq!(lb.cursor(), 0);
  }

  #[test]
  fn single_image_cycles_onto_itself() {
    let mut lb = gallery(1);
    lb.open(0).expect("open");
    assert_eq!(
      lb.next().map(|f| f.position),
      Some(1)
    );
    assert_eq!(
      lb.prev().map(|f| f.position),
      Some(1)
    );
  }

  #[test]
  fn open_rejects_out_of_range() {
    let mut lb = gallery(3);
    assert!(lb.open(3).is_none());
    assert!(!lb.is_open());
    assert_eq!(lb.cursor(), 0);
  }

  #[test]
  fn close_is_idempotent() {
    let mut lb = gallery(3);
    assert!(!lb.close());
    lb.open(1).expect("open");
    assert!(lb.close());
    assert!(!lb.close());
    assert!(!lb.is_open());
  }

  #[test]
  fn keys_ignored_while_closed() {
    let mut lb = gallery(3);
    assert!(
      lb.handle_key(Key::ArrowRight)
        .is_none()
    );
    assert_eq!(lb.cursor(), 0);
    assert!(
      lb.handle_key(Key::Escape).is_none()
    );
  }

  #[test]
  fn keys_navigate_and_dismiss_when_open() {
    let mut lb = gallery(3);
    lb.open(1).expect("open");

    match lb.handle_key(Key::ArrowRight) {
      | Some(Transition::Show(frame)) => {
        assert_eq!(frame.position, 3)
      }
      | other => {
        panic!("unexpected {other:?}")
      }
    }
    match lb.handle_key(Key::ArrowLeft) {
      | Some(Transition::Show(frame)) => {
        assert_eq!(frame.position, 2)
      }
      | other => {
        panic!("unexpected {other:?}")
      }
    }
    assert_eq!(
      lb.handle_key(Key::Escape),
      Some(Transition::Hide)
    );
    assert!(!lb.is_open());
  }

  #[test]
  fn maps_dom_key_names() {
    assert_eq!(
      Key::from_dom("Escape"),
      Some(Key::Escape)
    );
    assert_eq!(
      Key::from_dom("ArrowLeft"),
      Some(Key::ArrowLeft)
    );
    assert_eq!(Key::from_dom("Enter"), None);
  }
}
