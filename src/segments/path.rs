use crate::config::{PathConfig, PathStyle};
use crate::segments::{Segment, SegmentBuilder};

/// Marker the cwd adapter puts in place of the home directory.
pub const HOME_MARKER: &str = "~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathOptions {
    pub style: PathStyle,
    /// Components kept before collapsing the middle into an ellipsis.
    pub max_depth: Option<usize>,
}

impl From<&PathConfig> for PathOptions {
    fn from(config: &PathConfig) -> Self {
        Self {
            style: config.style,
            max_depth: config.max_depth,
        }
    }
}

impl SegmentBuilder<'_> {
    pub fn path_segment(&self, components: &[String]) -> Segment {
        let Some(first) = components.first() else {
            return Segment::empty();
        };
        let colors = if first == HOME_MARKER {
            self.theme.home
        } else {
            self.theme.path
        };

        let components = self.truncate(components);
        match self.path.style {
            PathStyle::Plain => Segment::new(components.join("/"), colors),
            PathStyle::Split => {
                let mut parts = Vec::with_capacity(components.len());
                for (i, component) in components.iter().enumerate() {
                    if i == 0 && component.is_empty() {
                        parts.push("/".to_string());
                    } else if !component.is_empty() {
                        parts.push(component.clone());
                    }
                }
                Segment::with_parts(parts, colors, self.theme.path_separator)
            }
        }
    }

    /// Keep the first component and the last `max_depth - 1`, with an ellipsis between.
    fn truncate(&self, components: &[String]) -> Vec<String> {
        let Some(max_depth) = self.path.max_depth.map(|depth| depth.max(2)) else {
            return components.to_vec();
        };
        if components.len() <= max_depth {
            return components.to_vec();
        }

        let tail = &components[components.len() - (max_depth - 1)..];
        let mut kept = Vec::with_capacity(max_depth + 1);
        kept.push(components[0].clone());
        kept.push(self.symbols.ellipsis.clone());
        kept.extend(tail.iter().cloned());
        kept
    }

    /// Visible only when the current directory is read-only.
    pub fn lock_segment(&self, writable: bool) -> Segment {
        if writable {
            Segment::empty()
        } else {
            Segment::new(self.symbols.lock.clone(), self.theme.lock)
        }
    }
}
