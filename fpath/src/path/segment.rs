//! Splitting raw paths into a root descriptor and components.
//!
//! Segmentation never fails and never allocates per component: segments
//! borrow from the input.

use crate::path::{CURDIR, PARDIR, SEP};

/// How a path is rooted.
///
/// POSIX gives exactly two leading slashes an implementation-defined meaning,
/// so `//` is kept apart from `/`. One slash or three and more are the
/// ordinary root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Root {
    /// A relative path.
    #[default]
    None,
    /// `/`
    Single,
    /// `//`
    Double,
}

impl Root {
    /// Classify a path by its leading separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpath::path::segment::Root;
    ///
    /// assert_eq!(Root::of(b"a/b"), Root::None);
    /// assert_eq!(Root::of(b"/a"), Root::Single);
    /// assert_eq!(Root::of(b"//a"), Root::Double);
    /// assert_eq!(Root::of(b"///a"), Root::Single);
    /// ```
    #[must_use]
    pub fn of(raw: &[u8]) -> Self {
        match leading_separators(raw) {
            0 => Self::None,
            2 => Self::Double,
            _ => Self::Single,
        }
    }

    /// Check whether this root makes a path absolute.
    #[must_use]
    pub fn is_absolute(self) -> bool {
        !matches!(self, Self::None)
    }

    /// The rendered form of the root.
    #[must_use]
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::None => b"",
            Self::Single => b"/",
            Self::Double => b"//",
        }
    }
}

/// One path component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// `.`
    CurrentDir,
    /// `..`
    ParentDir,
    /// Any other non-empty component.
    Name(&'a [u8]),
}

impl<'a> Segment<'a> {
    /// Classify a single non-empty component.
    #[must_use]
    pub fn parse(component: &'a [u8]) -> Self {
        match component {
            c if c == CURDIR => Self::CurrentDir,
            c if c == PARDIR => Self::ParentDir,
            c => Self::Name(c),
        }
    }

    /// The literal bytes of the component.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        match self {
            Self::CurrentDir => CURDIR,
            Self::ParentDir => PARDIR,
            Self::Name(name) => name,
        }
    }
}

/// A path broken into root, components and trailing-separator flag.
///
/// The flag only affects rendering; two paths that differ only in it name
/// the same location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SegmentedPath<'a> {
    root: Root,
    segments: Vec<Segment<'a>>,
    trailing_separator: bool,
}

impl<'a> SegmentedPath<'a> {
    /// Assemble a segmented path from its parts.
    #[must_use]
    pub fn new(root: Root, segments: Vec<Segment<'a>>, trailing_separator: bool) -> Self {
        Self {
            root,
            segments,
            trailing_separator,
        }
    }

    /// Get the root descriptor.
    #[must_use]
    pub fn root(&self) -> Root {
        self.root
    }

    /// Get the components in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Check whether the input ended with a separator.
    #[must_use]
    pub fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// Check whether the path is rooted.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.root.is_absolute()
    }

    /// Render the path.
    ///
    /// The trailing separator is written only after a name or `..`; a lone
    /// `.` never gets one.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpath::path::segment::segment;
    ///
    /// assert_eq!(segment(b"//a///b/").to_bytes(), b"//a/b/");
    /// assert_eq!(segment(b"").to_bytes(), b"");
    /// ```
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.root.as_bytes().to_vec();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(SEP);
            }
            out.extend_from_slice(segment.as_bytes());
        }
        if self.trailing_separator
            && matches!(
                self.segments.last(),
                Some(Segment::Name(_) | Segment::ParentDir)
            )
        {
            out.push(SEP);
        }
        out
    }
}

/// Split a raw path into root, components and trailing-separator flag.
///
/// Empty components between separators are dropped; `.` and `..` become
/// [`Segment::CurrentDir`] and [`Segment::ParentDir`].
///
/// # Examples
///
/// ```
/// use fpath::path::segment::{segment, Root, Segment};
///
/// let parsed = segment(b"/usr//./lib/");
/// assert_eq!(parsed.root(), Root::Single);
/// assert_eq!(
///     parsed.segments(),
///     &[Segment::Name(b"usr"), Segment::CurrentDir, Segment::Name(b"lib")]
/// );
/// assert!(parsed.has_trailing_separator());
/// ```
#[must_use]
pub fn segment(raw: &[u8]) -> SegmentedPath<'_> {
    let leading = leading_separators(raw);
    let segments: Vec<Segment<'_>> = raw[leading..]
        .split(|&b| b == SEP)
        .filter(|component| !component.is_empty())
        .map(Segment::parse)
        .collect();
    let trailing_separator = !segments.is_empty() && raw.last() == Some(&SEP);

    SegmentedPath::new(Root::of(raw), segments, trailing_separator)
}

/// Check whether a raw path is absolute.
#[must_use]
pub fn is_absolute(raw: &[u8]) -> bool {
    raw.first() == Some(&SEP)
}

fn leading_separators(raw: &[u8]) -> usize {
    raw.iter().take_while(|&&b| b == SEP).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_empty_path() {
        let parsed = segment(b"");
        assert_eq!(parsed.root(), Root::None);
        assert!(parsed.segments().is_empty());
        assert!(!parsed.has_trailing_separator());
    }

    #[test]
    fn test_segment_root_only_has_no_trailing_flag() {
        for raw in [&b"/"[..], b"//", b"////"] {
            let parsed = segment(raw);
            assert!(parsed.segments().is_empty());
            assert!(!parsed.has_trailing_separator());
        }
        assert_eq!(segment(b"//").root(), Root::Double);
        assert_eq!(segment(b"///").root(), Root::Single);
    }

    #[test]
    fn test_segment_collapses_separators() {
        let parsed = segment(b"a//b///c");
        assert_eq!(
            parsed.segments(),
            &[Segment::Name(b"a"), Segment::Name(b"b"), Segment::Name(b"c")]
        );
        assert!(!parsed.is_absolute());
    }

    #[test]
    fn test_segment_keeps_dot_sentinels() {
        let parsed = segment(b"./../x/.");
        assert_eq!(
            parsed.segments(),
            &[
                Segment::CurrentDir,
                Segment::ParentDir,
                Segment::Name(b"x"),
                Segment::CurrentDir
            ]
        );
    }

    #[test]
    fn test_segment_dotted_names_are_names() {
        let parsed = segment(b"...//.hidden/..x");
        assert_eq!(
            parsed.segments(),
            &[
                Segment::Name(b"..."),
                Segment::Name(b".hidden"),
                Segment::Name(b"..x")
            ]
        );
    }

    #[test]
    fn test_segment_preserves_raw_bytes() {
        let parsed = segment(b"/\xff\xfe/caf\xc3\xa9");
        assert_eq!(
            parsed.segments(),
            &[Segment::Name(b"\xff\xfe"), Segment::Name("café".as_bytes())]
        );
    }

    #[test]
    fn test_render_trailing_separator_after_parent_dir() {
        assert_eq!(segment(b"../").to_bytes(), b"../");
        assert_eq!(segment(b"./").to_bytes(), b".");
    }
}
