use crate::segments::{Segment, SegmentBuilder};

const ROOT_USER: &str = "root";

impl SegmentBuilder<'_> {
    pub fn user_segment(&self, username: &str) -> Segment {
        let colors = if username == ROOT_USER {
            self.theme.root
        } else {
            self.theme.user
        };
        Segment::new(username, colors)
    }

    /// `#` for root, `$` for everyone else.
    pub fn shell_segment(&self, username: &str) -> Segment {
        let marker = if username == ROOT_USER { "#" } else { "$" };
        Segment::new(marker, self.theme.path)
    }
}
