// src/domain/calendar.rs

use chrono::{Datelike, Months, NaiveDate, Weekday};

/// Key format used by the vacancy document, e.g. `2025-08-21`.
pub const YMD_FORMAT: &str = "%Y-%m-%d";

const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

pub fn format_ymd(date: NaiveDate) -> String {
    date.format(YMD_FORMAT).to_string()
}

pub fn parse_ymd(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), YMD_FORMAT).ok()
}

/// Single-character Japanese weekday label, Sunday first.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

pub fn is_saturday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sat
}

pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// Last calendar day of the month `months_ahead` months after `date`'s month.
///
/// Works from the first of the month so that day-of-month overflow
/// (Jan 31 + 1 month) cannot push the boundary into the following month.
pub fn month_end_after(date: NaiveDate, months_ahead: u32) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);

    first
        .checked_add_months(Months::new(months_ahead.saturating_add(1)))
        .and_then(|next_first| next_first.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// A run of consecutive days in the same month, used for the month header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSpan {
    pub year: i32,
    pub month: u32,
    pub days: usize,
}

impl MonthSpan {
    pub fn label(&self) -> String {
        format!("{}/{}", self.year, self.month)
    }
}

/// Contiguous, strictly increasing run of calendar days from "today" through
/// the end of the configured month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    days: Vec<NaiveDate>,
}

impl DateRange {
    /// Builds the range from an already-normalized local date.
    pub fn build(today: NaiveDate, months_ahead: u32) -> Self {
        let end = month_end_after(today, months_ahead);
        let days = today.iter_days().take_while(|d| *d <= end).collect();

        Self { days }
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn first(&self) -> NaiveDate {
        // never empty: `build` always includes `today`
        self.days[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }

    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        if date < self.first() || date > self.last() {
            return None;
        }
        Some((date - self.first()).num_days() as usize)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.position(date).is_some()
    }

    /// The day `delta` positions away from `from`, if both are inside the range.
    pub fn step(&self, from: NaiveDate, delta: i64) -> Option<NaiveDate> {
        let idx = (self.position(from)? as i64).checked_add(delta)?;
        let idx = usize::try_from(idx).ok()?;
        self.days.get(idx).copied()
    }

    pub fn month_spans(&self) -> Vec<MonthSpan> {
        let mut spans: Vec<MonthSpan> = Vec::new();

        for d in &self.days {
            match spans.last_mut() {
                Some(span) if span.year == d.year() && span.month == d.month() => span.days += 1,
                _ => spans.push(MonthSpan {
                    year: d.year(),
                    month: d.month(),
                    days: 1,
                }),
            }
        }

        spans
    }
}
