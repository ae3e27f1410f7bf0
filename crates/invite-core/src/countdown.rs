use std::fmt;

use chrono::{
  DateTime,
  Local,
  NaiveDate,
  TimeZone,
  Utc
};
use chrono_tz::Tz;
use serde::Serialize;

/// Days left until (or elapsed since) the
/// wedding, at whole-day granularity.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
)]
#[serde(
  tag = "phase",
  content = "days",
  rename_all = "snake_case"
)]
pub enum DDay {
  Until(u32),
  Today,
  Since(u32)
}

impl DDay {
  /// Signed day difference `target - today`
  /// folded into the three display phases.
  #[must_use]
  pub fn between(
    target: NaiveDate,
    today: NaiveDate
  ) -> Self {
    let diff = target
      .signed_duration_since(today)
      .num_days();
    let magnitude =
      u32::try_from(diff.unsigned_abs())
        .unwrap_or(u32::MAX);
    match diff {
      | d if d > 0 => Self::Until(magnitude),
      | 0 => Self::Today,
      | _ => Self::Since(magnitude)
    }
  }

  #[must_use]
  pub fn days_remaining(self) -> i64 {
    match self {
      | Self::Until(days) => i64::from(days),
      | Self::Today => 0,
      | Self::Since(days) => {
        -i64::from(days)
      }
    }
  }

  /// The emphasised part: `D-10`, `D-Day`
  /// or `D+4`.
  #[must_use]
  pub fn label(self) -> String {
    match self {
      | Self::Until(days) => {
        format!("D-{days}")
      }
      | Self::Today => "D-Day".to_string(),
      | Self::Since(days) => {
        format!("D+{days}")
      }
    }
  }

  #[must_use]
  pub fn render<'a>(
    self,
    today_caption: &'a str
  ) -> Rendered<'a> {
    Rendered {
      label:   self.label(),
      caption: matches!(self, Self::Today)
        .then_some(today_caption)
    }
  }
}

impl fmt::Display for DDay {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.render("today!"))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<'a> {
  pub label:   String,
  pub caption: Option<&'a str>
}

impl fmt::Display for Rendered<'_> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self.caption {
      | Some(caption) => {
        write!(f, "{}, {caption}", self.label)
      }
      | None => f.write_str(&self.label)
    }
  }
}

/// Calendar date of `now` as seen in `tz`,
/// or in the host's local zone.
#[must_use]
pub fn today_in(
  now: DateTime<Utc>,
  tz: Option<Tz>
) -> NaiveDate {
  match tz {
    | Some(tz) => {
      tz.from_utc_datetime(&now.naive_utc())
        .date_naive()
    }
    | None => {
      now.with_timezone(&Local).date_naive()
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::{
    NaiveDate,
    TimeZone,
    Utc
  };

  use super::*;

  fn date(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  #[test]
  fn counts_down_before_the_wedding() {
    let dday = DDay::between(
      date(2026, 4, 11),
      date(2026, 4, 1)
    );
    assert_eq!(dday, DDay::Until(10));
    assert_eq!(dday.to_string(), "D-10");
  }

  #[test]
  fn wedding_day_has_caption() {
    let dday = DDay::between(
      date(2026, 4, 11),
      date(2026, 4, 11)
    );
    assert_eq!(dday, DDay::Today);
    assert_eq!(
      dday.to_string(),
      "D-Day, today!"
    );

    let rendered = dday.render("오늘이에요!");
    assert_eq!(rendered.label, "D-Day");
    assert_eq!(
      rendered.caption,
      Some("오늘이에요!")
    );
  }

  #[test]
  fn counts_up_after_the_wedding() {
    let dday = DDay::between(
      date(2026, 4, 11),
      date(2026, 4, 15)
    );
    assert_eq!(dday, DDay::Since(4));
    assert_eq!(dday.to_string(), "D+4");
    assert_eq!(dday.days_remaining(), -4);
  }

  #[test]
  fn spans_year_boundaries() {
    assert_eq!(
      DDay::between(
        date(2027, 1, 1),
        date(2026, 12, 31)
      ),
      DDay::Until(1)
    );
    assert_eq!(
      DDay::between(
        date(2026, 4, 11),
        date(2027, 4, 11)
      ),
      DDay::Since(365)
    );
  }

  #[test]
  fn today_follows_configured_zone() {
    let now = Utc
      .with_ymd_and_hms(
        2026, 4, 10, 16, 30, 0
      )
      .single()
      .expect("valid now");
    assert_eq!(
      today_in(
        now,
        Some(chrono_tz::Asia::Seoul)
      ),
      date(2026, 4, 11)
    );
    assert_eq!(
      today_in(now, Some(chrono_tz::UTC)),
      date(2026, 4, 10)
    );
  }

  #[test]
  fn serializes_phase_and_days() {
    let json =
      serde_json::to_string(&DDay::Until(3))
        .expect("serialize");
    assert_eq!(
      json,
      r#"{"phase":"until","days":3}"#
    );
  }
}
