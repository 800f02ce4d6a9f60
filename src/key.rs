//! Segmented shortcut keys.
//!
//! A key such as `labs/ai` addresses a node in the hierarchical store by
//! walking the segments `["labs", "ai"]` from the root. A plain name like
//! `docs` is simply a single-segment key.

use std::fmt;
use std::str::FromStr;

use crate::error::WaymarkError;

/// Separator between key segments in the textual form.
pub const SEPARATOR: char = '/';

/// A multi-segment key into the shortcut tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    segments: Vec<String>,
}

impl Key {
    /// Build a key from already-split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse `a/b/c` into segments. Empty segments (leading, trailing or
    /// doubled separators) are dropped, so `"/labs//ai/"` equals `"labs/ai"`.
    pub fn parse(text: &str) -> Self {
        Self::from_segments(
            text.split(SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Append one segment, returning the extended key.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for Key {
    type Err = WaymarkError;

    /// Like [`Key::parse`] but rejects input with no segments at all.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = Self::parse(s);
        if key.is_empty() {
            return Err(WaymarkError::EmptyKey);
        }
        Ok(key)
    }
}

/// Join raw segments the same way [`Key`] displays them.
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}
