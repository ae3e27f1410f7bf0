use std::time::Duration;

use tracing::debug;

/// A pending dismissal that can be
/// called off before it fires.
pub trait TimerHandle {
  fn cancel(self);
}

/// Single-slot toast: the latest message
/// wins and only its dismissal stays armed.
#[derive(Debug)]
pub struct Toast<H: TimerHandle> {
  delay:   Duration,
  message: Option<String>,
  visible: bool,
  pending: Option<H>,
  spent:   Option<H>
}

impl<H: TimerHandle> Toast<H> {
  #[must_use]
  pub fn new(delay: Duration) -> Self {
    Self {
      delay,
      message: None,
      visible: false,
      pending: None,
      spent: None
    }
  }

  #[must_use]
  pub fn delay(&self) -> Duration {
    self.delay
  }

  #[must_use]
  pub fn message(&self) -> Option<&str> {
    self.message.as_deref()
  }

  #[must_use]
  pub fn is_visible(&self) -> bool {
    self.visible
  }

  #[must_use]
  pub fn has_pending(&self) -> bool {
    self.pending.is_some()
  }

  /// Cancels any armed dismissal, stores the
  /// message and arms a fresh one through
  /// `arm`.
  pub fn show<F>(
    &mut self,
    message: impl Into<String>,
    arm: F
  ) where
    F: FnOnce(Duration) -> H
  {
    if let Some(previous) =
      self.pending.take()
    {
      debug!("superseding pending toast");
      previous.cancel();
    }
    drop(self.spent.take());
    self.message = Some(message.into());
    self.pending = Some(arm(self.delay));
  }

  /// Next paint frame after `show`.
  pub fn reveal(&mut self) {
    if self.message.is_some() {
      self.visible = true;
    }
  }

  /// The armed timer fired. Its handle moves
  /// to `spent` and is released by the next
  /// `show`, never from inside its own
  /// callback.
  pub fn expire(&mut self) {
    self.visible = false;
    if let Some(fired) = self.pending.take() {
      self.spent = Some(fired);
    }
  }
}

#[cfg(test)]
mod tests {
  use std::cell::{
    Cell,
    RefCell
  };
  use std::rc::Rc;
  use std::time::Duration;

  use super::*;

  /// Millisecond clock with a timer queue.
  #[derive(Default)]
  struct ManualClock {
    now:    Cell<u64>,
    timers: RefCell<Vec<Rc<FakeTimer>>>
  }

  struct FakeTimer {
    due:       u64,
    cancelled: Cell<bool>,
    fired:     Cell<bool>
  }

  struct Handle(Rc<FakeTimer>);

  impl TimerHandle for Handle {
    fn cancel(self) {
      self.0.cancelled.set(true);
    }
  }

  impl ManualClock {
    fn arm(
      &self,
      delay: Duration
    ) -> Handle {
      let due = self.now.get()
        + u64::try_from(delay.as_millis())
          .expect("delay fits");
      let timer = Rc::new(FakeTimer {
        due,
        cancelled: Cell::new(false),
        fired: Cell::new(false)
      });
      self
        .timers
        .borrow_mut()
        .push(Rc::clone(&timer));
      Handle(timer)
    }

    /// Advances to `to`, returning how many
    /// live timers fired.
    fn advance(&self, to: u64) -> usize {
      self.now.set(to);
      let mut fired = 0;
      for timer in
        self.timers.borrow().iter()
      {
        if !timer.cancelled.get()
          && !timer.fired.get()
          && timer.due <= to
        {
          timer.fired.set(true);
          fired += 1;
        }
      }
      fired
    }
  }

  #[test]
  fn show_reveal_then_expire() {
    let clock = ManualClock::default();
    let mut toast =
      Toast::new(Duration::from_millis(1_300));

    toast.show("Copied", |d| clock.arm(d));
    assert!(!toast.is_visible());
    toast.reveal();
    assert!(toast.is_visible());
    assert_eq!(toast.message(), Some("Copied"));

    assert_eq!(clock.advance(1_299), 0);
    assert_eq!(clock.advance(1_300), 1);
    toast.expire();
    assert!(!toast.is_visible());
    assert!(!toast.has_pending());

    toast.show("Again", |d| clock.arm(d));
    assert!(toast.has_pending());
    assert!(
      !clock.timers.borrow()[0].cancelled.get()
    );
  }

  #[test]
  fn latest_message_wins_and_resets_timer() {
    let clock = ManualClock::default();
    let mut toast =
      Toast::new(Duration::from_millis(1_300));

    toast.show("A", |d| clock.arm(d));
    toast.reveal();
    clock.advance(500);
    toast.show("B", |d| clock.arm(d));
    toast.reveal();

    assert_eq!(toast.message(), Some("B"));
    assert!(toast.has_pending());

    // A's dismissal would have landed here.
    assert_eq!(clock.advance(1_300), 0);
    assert!(toast.is_visible());

    assert_eq!(clock.advance(1_799), 0);
    assert_eq!(clock.advance(1_800), 1);
    toast.expire();
    assert!(!toast.is_visible());

    let timers = clock.timers.borrow();
    assert!(timers[0].cancelled.get());
    assert!(!timers[1].cancelled.get());
  }

  #[test]
  fn reveal_without_message_is_noop() {
    let mut toast: Toast<Handle> =
      Toast::new(Duration::from_millis(10));
    toast.reveal();
    assert!(!toast.is_visible());
  }
}
