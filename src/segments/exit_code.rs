use crate::segments::{Segment, SegmentBuilder};

impl SegmentBuilder<'_> {
    /// Shows the previous command's status unless it was `0` or not a number.
    pub fn exit_code_segment(&self, code: &str) -> Segment {
        match code.parse::<i64>() {
            Ok(0) | Err(_) => Segment::empty(),
            Ok(_) => Segment::new(code, self.theme.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::segments::SegmentBuilder;
    use crate::themes::{Symbols, Theme};

    #[test]
    fn zero_and_garbage_are_invisible() {
        let theme = Theme::dark();
        let symbols = Symbols::test();
        let builder = SegmentBuilder::new(&theme, &symbols);

        assert!(builder.exit_code_segment("0").is_empty());
        assert!(builder.exit_code_segment("abc").is_empty());
        assert!(builder.exit_code_segment("").is_empty());
    }

    #[test]
    fn failures_show_literal_code() {
        let theme = Theme::dark();
        let symbols = Symbols::test();
        let builder = SegmentBuilder::new(&theme, &symbols);

        let failed = builder.exit_code_segment("1");
        assert_eq!(failed.parts, vec!["1"]);
        assert_eq!((failed.bg, failed.fg), (theme.error.bg, theme.error.fg));

        assert_eq!(builder.exit_code_segment("-1").parts, vec!["-1"]);
        assert_eq!(builder.exit_code_segment("130").parts, vec!["130"]);
    }
}
