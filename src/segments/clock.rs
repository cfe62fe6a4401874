use crate::segments::{Segment, SegmentBuilder};
use chrono::NaiveDateTime;

/// Weekday, day of month, then `HH:MM:SS`, e.g. `Wed 5 14:10:43`.
pub const CLOCK_FORMAT: &str = "%a %-d %H:%M:%S";

impl SegmentBuilder<'_> {
    pub fn clock_segment(&self, now: NaiveDateTime) -> Segment {
        Segment::new(now.format(CLOCK_FORMAT).to_string(), self.theme.user)
    }
}

#[cfg(test)]
mod tests {
    use crate::segments::SegmentBuilder;
    use crate::themes::{Symbols, Theme};
    use chrono::NaiveDate;

    #[test]
    fn formats_weekday_day_and_time() {
        let theme = Theme::dark();
        let symbols = Symbols::test();
        let builder = SegmentBuilder::new(&theme, &symbols);

        let now = NaiveDate::from_ymd_opt(2013, 6, 5)
            .and_then(|d| d.and_hms_opt(14, 10, 43))
            .unwrap();
        let segment = builder.clock_segment(now);

        assert_eq!(segment.parts, vec!["Wed 5 14:10:43"]);
        assert_eq!(segment.bg, theme.user.bg);
    }
}
