//! # Node Paths
//!
//! A node in the value tree has no identity beyond its position, so it is
//! addressed by a path: an ordered sequence of object keys and array indices.
//!
//! ## Canonical form
//!
//! ```text
//! items[2].name      → Key("items"), Index(2), Key("name")
//! [0]                → Index(0)
//! matrix[1][0]       → Key("matrix"), Index(1), Index(0)
//! (empty string)     → root
//! ```
//!
//! Keys are joined with `.`, indices are appended as `[N]` with no separator.
//! There is no escaping: a key containing `.`, `[` or `]` does not survive a
//! round trip through the string form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// Object key traversal
    Key(String),
    /// Array index traversal
    Index(usize),
}

impl Segment {
    pub fn key(k: impl Into<String>) -> Self {
        Segment::Key(k.into())
    }

    pub fn index(i: usize) -> Self {
        Segment::Index(i)
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Key(_) => None,
            Segment::Index(i) => Some(*i),
        }
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Segment::Key(s.to_owned())
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Segment::Key(s)
    }
}

impl From<usize> for Segment {
    fn from(i: usize) -> Self {
        Segment::Index(i)
    }
}

/// Address of a node within a value tree. The empty path is the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    /// The root path.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse a path string.
    ///
    /// Never fails. Empty dot-separated parts are skipped, and a part whose
    /// bracket suffix is not a run of `[digits]` groups is kept whole as an
    /// object key, so a hand-edited path degrades to "not found" rather than
    /// an error.
    pub fn parse(input: &str) -> Self {
        let mut segments = Vec::new();

        for part in input.split('.') {
            if part.is_empty() {
                continue;
            }

            match split_indexed_part(part) {
                Some((prefix, indices)) => {
                    if !prefix.is_empty() {
                        segments.push(Segment::Key(prefix.to_string()));
                    }
                    segments.extend(indices.into_iter().map(Segment::Index));
                }
                None => segments.push(Segment::Key(part.to_string())),
            }
        }

        Self(segments)
    }

    /// Append a key segment (builder style).
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(Segment::Key(k.into()));
        self
    }

    /// Append an index segment (builder style).
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Segment::Index(i));
        self
    }

    /// Return a new path with `seg` appended.
    pub fn child(&self, seg: impl Into<Segment>) -> Path {
        let mut p = self.clone();
        p.0.push(seg.into());
        p
    }

    pub fn push(&mut self, seg: Segment) {
        self.0.push(seg);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.0.pop()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Segment> {
        self.0.last()
    }

    /// Split into parent path and final segment. `None` for the root.
    pub fn split_last(&self) -> Option<(Path, &Segment)> {
        let (last, rest) = self.0.split_last()?;
        Some((Path(rest.to_vec()), last))
    }

    /// True if every segment of `self` matches the start of `other`.
    /// A path is a prefix of itself.
    pub fn is_prefix_of(&self, other: &Path) -> bool {
        other.0.starts_with(&self.0)
    }

    /// The segments of `self` that follow `prefix`, if `prefix` is a prefix.
    pub fn strip_prefix(&self, prefix: &Path) -> Option<&[Segment]> {
        self.0.strip_prefix(prefix.0.as_slice())
    }

    /// Concatenate this path with trailing segments.
    pub fn join(&self, suffix: &[Segment]) -> Path {
        let mut p = self.clone();
        p.0.extend_from_slice(suffix);
        p
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.0.iter()
    }
}

/// Split `name[1][2]` into `("name", [1, 2])`.
///
/// Returns `None` when the part has no bracket suffix or the suffix is not
/// made entirely of `[digits]` groups.
fn split_indexed_part(part: &str) -> Option<(&str, Vec<usize>)> {
    let open = part.find('[')?;
    let (prefix, mut rest) = part.split_at(open);
    let mut indices = Vec::new();

    while !rest.is_empty() {
        let body = rest.strip_prefix('[')?;
        let close = body.find(']')?;
        let digits = &body[..close];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        indices.push(digits.parse().ok()?);
        rest = &body[close + 1..];
    }

    Some((prefix, indices))
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.0.iter().enumerate() {
            match seg {
                Segment::Key(k) if i == 0 => write!(f, "{}", k)?,
                Segment::Key(k) => write!(f, ".{}", k)?,
                Segment::Index(n) => write!(f, "[{}]", n)?,
            }
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Path::parse(&s))
    }
}

/// Canonical string of the child of `base` reached through `seg`.
///
/// Keys are joined with `.` unless `base` is empty; indices are always
/// appended as `[N]`.
pub fn child_path(base: &str, seg: impl Into<Segment>) -> String {
    match seg.into() {
        Segment::Key(k) if base.is_empty() => k,
        Segment::Key(k) => format!("{}.{}", base, k),
        Segment::Index(i) => format!("{}[{}]", base, i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_path() {
        let path = Path::parse("config.items[2].name");
        assert_eq!(
            path.segments(),
            &[
                Segment::key("config"),
                Segment::key("items"),
                Segment::index(2),
                Segment::key("name"),
            ]
        );
    }

    #[test]
    fn test_parse_root_index_and_nested_indices() {
        assert_eq!(Path::parse("[0]").segments(), &[Segment::index(0)]);
        assert_eq!(
            Path::parse("matrix[1][0]").segments(),
            &[Segment::key("matrix"), Segment::index(1), Segment::index(0)]
        );
        assert_eq!(
            Path::parse("[3][4].x").segments(),
            &[Segment::index(3), Segment::index(4), Segment::key("x")]
        );
    }

    #[test]
    fn test_parse_empty_is_root() {
        assert!(Path::parse("").is_root());
        assert_eq!(Path::root().to_string(), "");
    }

    #[test]
    fn test_parse_malformed_degrades_to_keys() {
        assert_eq!(Path::parse("a[x]").segments(), &[Segment::key("a[x]")]);
        assert_eq!(Path::parse("a[1]b").segments(), &[Segment::key("a[1]b")]);
        assert_eq!(Path::parse("a[-1]").segments(), &[Segment::key("a[-1]")]);
        assert_eq!(Path::parse("a[").segments(), &[Segment::key("a[")]);
        assert_eq!(
            Path::parse("a..b.").segments(),
            &[Segment::key("a"), Segment::key("b")]
        );
    }

    #[test]
    fn test_serialize_canonical() {
        let path = Path::root().key("items").index(2).key("name");
        assert_eq!(path.to_string(), "items[2].name");

        let path = Path::root().index(0).key("a").index(1).index(2);
        assert_eq!(path.to_string(), "[0].a[1][2]");
    }

    #[test]
    fn test_round_trip_through_child_path_chain() {
        let mut s = String::new();
        s = child_path(&s, "users");
        s = child_path(&s, 3usize);
        s = child_path(&s, "tags");
        s = child_path(&s, 0usize);
        s = child_path(&s, 1usize);
        assert_eq!(s, "users[3].tags[0][1]");

        let parsed = Path::parse(&s);
        assert_eq!(parsed.to_string(), s);
        assert_eq!(Path::parse(&parsed.to_string()), parsed);
    }

    #[test]
    fn test_child_path_at_root() {
        assert_eq!(child_path("", "name"), "name");
        assert_eq!(child_path("", 4usize), "[4]");
        assert_eq!(child_path("a", "b"), "a.b");
        assert_eq!(child_path("a", 4usize), "a[4]");
    }

    #[test]
    fn test_prefix_is_segment_aware() {
        let items1 = Path::parse("items[1]");
        assert!(items1.is_prefix_of(&Path::parse("items[1].name")));
        assert!(items1.is_prefix_of(&Path::parse("items[1][0]")));
        assert!(items1.is_prefix_of(&items1));
        // string-prefix but not path-prefix
        assert!(!items1.is_prefix_of(&Path::parse("items[10]")));
        assert!(!Path::parse("item").is_prefix_of(&Path::parse("items")));
    }

    #[test]
    fn test_split_last() {
        let path = Path::parse("a.b[3]");
        let (parent, last) = path.split_last().unwrap();
        assert_eq!(parent.to_string(), "a.b");
        assert_eq!(last, &Segment::index(3));
        assert!(Path::root().split_last().is_none());
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let path = Path::parse("a[0].b");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"a[0].b\"");
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
