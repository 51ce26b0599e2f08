//! Header card rendering
//!
//! A header is a calendar card stamped with the time of rendering, next to a
//! title, an optional link icon and a keyword line. Rendering is pure string
//! assembly; showing hands the result to a [`Display`] sink.

mod template;

use chrono::{DateTime, Local, TimeZone};
use std::fmt;

use crate::display::{Display, DisplayError, EvcxrSink};
use crate::theme::Theme;

/// Date fields printed on the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub day: String,   // zero-padded, "05"
    pub month: String, // short name, "Mar"
    pub year: String,  // "2024"
    pub time: String,  // 12-hour clock, "02:07:09 PM"
}

impl Stamp {
    pub fn from_datetime<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            day: now.format("%d").to_string(),
            month: now.format("%b").to_string(),
            year: now.format("%Y").to_string(),
            time: now.format("%I:%M:%S %p").to_string(),
        }
    }

    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCard {
    title: String,
    keywords: Vec<String>,
    link: Option<String>,
}

impl HeaderCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            keywords: Vec::new(),
            link: None,
        }
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Link opened by the icon next to the title. An empty URL means no icon.
    pub fn link(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.link = if url.is_empty() { None } else { Some(url) };
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Keyword line: entries joined by "; " with a trailing ";".
    /// Any non-empty list counts, so `[""]` renders as ";".
    pub fn keyword_line(&self) -> String {
        if self.keywords.is_empty() {
            String::new()
        } else {
            format!("{};", self.keywords.join("; "))
        }
    }

    /// Anchor for the link icon, empty when there is no link
    pub fn link_html(&self) -> String {
        match &self.link {
            Some(url) => format!(r#"<a href="{}" target="_blank" class="hc-link">🔗</a>"#, url),
            None => String::new(),
        }
    }

    /// Render with the card stamped at `now`
    pub fn markup_at<Tz: TimeZone>(&self, theme: &Theme, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.markup_with_stamp(theme, &Stamp::from_datetime(now))
    }

    /// Render with the card stamped at the current local time
    pub fn markup(&self, theme: &Theme) -> String {
        self.markup_with_stamp(theme, &Stamp::now())
    }

    fn markup_with_stamp(&self, theme: &Theme, stamp: &Stamp) -> String {
        tracing::debug!(
            title = %self.title,
            keywords = self.keywords.len(),
            has_link = self.link.is_some(),
            "Rendering header card"
        );

        let keywords = self.keyword_line();
        let link_html = self.link_html();
        let fields = template::Fields {
            label: &theme.label,
            month: &stamp.month,
            year: &stamp.year,
            day: &stamp.day,
            time: &stamp.time,
            title: &self.title,
            link_html: &link_html,
            keywords: &keywords,
        };

        format!("{}\n\n{}", template::stylesheet(theme), template::body(&fields))
    }

    /// Render now and hand the markup to `sink`
    pub fn show(&self, theme: &Theme, sink: &mut dyn Display) -> Result<(), DisplayError> {
        sink.display(&self.markup(theme))
    }
}

/// Notebook shortcut: render a header with the default theme as evcxr rich output.
///
/// ```no_run
/// hcard::hc("Experiment Log", &["ml", "v2"], Some("http://example.com")).unwrap();
/// hcard::hc("Scratch", &[], None).unwrap();
/// ```
pub fn hc(title: &str, keywords: &[&str], link: Option<&str>) -> Result<(), DisplayError> {
    let mut card = HeaderCard::new(title).keywords(keywords.iter().copied());
    if let Some(url) = link {
        card = card.link(url);
    }

    let mut sink = EvcxrSink::new(std::io::stdout());
    card.show(&Theme::default(), &mut sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Capture;
    use chrono::FixedOffset;

    fn fixed(h: u32, m: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, h, m, s)
            .unwrap()
    }

    #[test]
    fn test_example_header() {
        let card = HeaderCard::new("Experiment Log")
            .keywords(["ml", "v2"])
            .link("http://example.com");
        let html = card.markup(&Theme::default());

        assert!(html.contains("Experiment Log"));
        assert!(html.contains("<p class=\"hc-keywords\">ml; v2;</p>"));
        assert!(html.contains(r#"<a href="http://example.com" target="_blank" class="hc-link">"#));
    }

    #[test]
    fn test_title_is_verbatim() {
        let title = "Results <em>draft</em> & notes";
        let html = HeaderCard::new(title).markup_at(&Theme::default(), &fixed(9, 0, 0));
        assert!(html.contains(&format!("<div class=\"hc-title\">{} </div>", title)));
    }

    #[test]
    fn test_keywords_omitted_or_empty() {
        let omitted = HeaderCard::new("T").markup_at(&Theme::default(), &fixed(9, 0, 0));
        assert!(omitted.contains("<p class=\"hc-keywords\"></p>"));

        let empty = HeaderCard::new("T")
            .keywords(Vec::<String>::new())
            .markup_at(&Theme::default(), &fixed(9, 0, 0));
        assert!(empty.contains("<p class=\"hc-keywords\"></p>"));
    }

    #[test]
    fn test_single_empty_keyword_still_counts() {
        let card = HeaderCard::new("T").keywords([""]);
        assert_eq!(card.keyword_line(), ";");

        let card = HeaderCard::new("T").keywords(["solo"]);
        assert_eq!(card.keyword_line(), "solo;");
    }

    #[test]
    fn test_link_presence() {
        let without = HeaderCard::new("T").markup_at(&Theme::default(), &fixed(9, 0, 0));
        assert!(!without.contains("<a "));

        let blank = HeaderCard::new("T").link("");
        assert!(blank.link_html().is_empty());

        let with = HeaderCard::new("T")
            .link("https://docs.rs/hcard")
            .markup_at(&Theme::default(), &fixed(9, 0, 0));
        assert_eq!(with.matches("<a ").count(), 1);
        assert!(with.contains(r#"href="https://docs.rs/hcard""#));
    }

    #[test]
    fn test_stamp_formatting() {
        let stamp = Stamp::from_datetime(&fixed(14, 7, 9));
        assert_eq!(stamp.day, "05");
        assert_eq!(stamp.month, "Mar");
        assert_eq!(stamp.year, "2024");
        assert_eq!(stamp.time, "02:07:09 PM");

        let morning = Stamp::from_datetime(&fixed(0, 30, 0));
        assert_eq!(morning.time, "12:30:00 AM");
    }

    #[test]
    fn test_card_fields_in_markup() {
        let html = HeaderCard::new("T").markup_at(&Theme::default(), &fixed(14, 7, 9));
        assert!(html.contains("<div class=\"hc-header\">Last modified</div>"));
        assert!(html.contains("<div class=\"hc-month\">Mar, 2024</div>"));
        assert!(html.contains("<div class=\"hc-day\">05</div>"));
        assert!(html.contains("<div class=\"hc-time\">02:07:09 PM</div>"));
    }

    #[test]
    fn test_markup_uses_current_time() {
        let before = Stamp::now();
        let html = HeaderCard::new("Now").markup(&Theme::default());
        let after = Stamp::now();

        let matches = |s: &Stamp| {
            html.contains(&format!("<div class=\"hc-time\">{}</div>", s.time))
                && html.contains(&format!("<div class=\"hc-day\">{}</div>", s.day))
                && html.contains(&format!("{}, {}", s.month, s.year))
        };
        assert!(matches(&before) || matches(&after), "Card should carry the render time");
    }

    #[test]
    fn test_markup_is_well_formed_fragment() {
        let html = HeaderCard::new("T")
            .keywords(["a"])
            .link("http://x")
            .markup_at(&Theme::default(), &fixed(9, 0, 0));

        assert!(html.starts_with("<style>"));
        assert!(html.trim_end().ends_with("</div>"));
        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
        assert_eq!(html.matches("<style>").count(), 1);
    }

    #[test]
    fn test_theme_colors_and_label_applied() {
        let theme = Theme {
            accent: "#4ade80".to_string(),
            ..Theme::default()
        }
        .with_label("Created");

        let html = HeaderCard::new("T").markup_at(&theme, &fixed(9, 0, 0));
        assert!(html.contains("background: #4ade80;"));
        assert!(!html.contains("#EF8C00"));
        assert!(html.contains(">Created</div>"));
    }

    #[test]
    fn test_show_hands_markup_to_sink() {
        let mut capture = Capture::new();
        HeaderCard::new("Shown")
            .show(&Theme::default(), &mut capture)
            .unwrap();

        assert_eq!(capture.fragments.len(), 1);
        assert!(capture.last().unwrap().contains("Shown"));
    }
}
