use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";
const DATE_FORMAT: &str = "%Y%m%dT%H%M%S";

// First `H:MM` in the text, optionally followed by am/pm ("2:30 PM", "14:30", "9:00a.m.").
static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(?:([ap])\.?\s?m\.?)?")
        .expect("time pattern should compile")
});

/// Parses a free-text time of day into 24h time.
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let captures = TIME_PATTERN.captures(text)?;
    let hour: u32 = captures[1].parse().ok()?;
    let minute: u32 = captures[2].parse().ok()?;

    let hour = match captures.get(3).map(|m| m.as_str().to_ascii_lowercase()) {
        Some(meridiem) => {
            if hour == 0 || hour > 12 {
                return None;
            }
            match (meridiem.as_str(), hour) {
                ("a", 12) => 0,
                ("p", 12) => 12,
                ("p", h) => h + 12,
                (_, h) => h,
            }
        }
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// A one-hour slot starting at `time` on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl MeetingWindow {
    pub fn parse(date: NaiveDate, time: &str) -> Option<Self> {
        let start = date.and_time(parse_time(time)?);
        let end = start.checked_add_signed(Duration::hours(1))?;
        Some(Self { start, end })
    }
}

#[derive(Debug, Clone)]
pub struct CalendarEvent<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub date: NaiveDate,
    pub time: &'a str,
}

impl CalendarEvent<'_> {
    /// A Google Calendar "create event" link, or `None` if the time can't be read.
    pub fn google_calendar_link(&self) -> Option<String> {
        let window = MeetingWindow::parse(self.date, self.time)?;
        let dates = format!(
            "{}/{}",
            window.start.format(DATE_FORMAT),
            window.end.format(DATE_FORMAT)
        );

        Url::parse_with_params(
            GOOGLE_CALENDAR_URL,
            &[
                ("action", "TEMPLATE"),
                ("text", self.title),
                ("dates", dates.as_str()),
                ("details", self.description),
                ("location", self.location),
            ],
        )
        .ok()
        .map(String::from)
    }
}
