//! Diff fragments, the input of the HTML renderer.
//!
//! A diff engine produces an ordered list of [`Fragment`]s: typed tokens for
//! unchanged spans, insertions, deletions, moved blocks and the structural
//! boundaries around them. The order is the reading order of the rendered
//! output.
//!
//! ## Wire tags
//!
//! Each [`FragmentKind`] has a short tag (`"="`, `"(<"`, `" )"`, ...). Tags are
//! what serialized fragment lists carry:
//!
//! ```
//! use wikeddiff::{Fragment, FragmentKind};
//!
//! let kind: FragmentKind = "(<".parse().unwrap();
//! assert_eq!(kind, FragmentKind::BlockStartLeft);
//! assert_eq!(kind.tag(), "(<");
//!
//! assert!("?".parse::<FragmentKind>().is_err());
//!
//! let moved = Fragment::new(FragmentKind::Same, "moved text", 3);
//! assert!(moved.is_in_block());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Fragment type, one variant per wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum FragmentKind {
    /// `{` - open the outer container.
    ContainerStart,
    /// `}` - close the outer container.
    ContainerEnd,
    /// `[` - open a group of text fragments.
    FragmentStart,
    /// `]` - close a group of text fragments.
    FragmentEnd,
    /// `,` - separator between fragment groups.
    Separator,
    /// `~` - elided context.
    Omission,
    /// ` ~` - elided context preceded by a space.
    OmissionSpaceBefore,
    /// `~ ` - elided context followed by a space.
    OmissionSpaceAfter,
    /// `=` - unchanged text, part of a moved block when the color is set.
    Same,
    /// `-` - deleted text.
    Delete,
    /// `+` - inserted text.
    Insert,
    /// `<` - original position of a block moved to the left.
    MarkLeft,
    /// `>` - original position of a block moved to the right.
    MarkRight,
    /// `(<` - start of a block that moved to the left.
    BlockStartLeft,
    /// `(>` - start of a block that moved to the right.
    BlockStartRight,
    /// ` )` - end of a moved block.
    BlockEnd,
}

impl FragmentKind {
    /// All kinds, in tag table order.
    pub const ALL: [FragmentKind; 16] = [
        FragmentKind::ContainerStart,
        FragmentKind::ContainerEnd,
        FragmentKind::FragmentStart,
        FragmentKind::FragmentEnd,
        FragmentKind::Separator,
        FragmentKind::Omission,
        FragmentKind::OmissionSpaceBefore,
        FragmentKind::OmissionSpaceAfter,
        FragmentKind::Same,
        FragmentKind::Delete,
        FragmentKind::Insert,
        FragmentKind::MarkLeft,
        FragmentKind::MarkRight,
        FragmentKind::BlockStartLeft,
        FragmentKind::BlockStartRight,
        FragmentKind::BlockEnd,
    ];

    /// The wire tag of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            FragmentKind::ContainerStart => "{",
            FragmentKind::ContainerEnd => "}",
            FragmentKind::FragmentStart => "[",
            FragmentKind::FragmentEnd => "]",
            FragmentKind::Separator => ",",
            FragmentKind::Omission => "~",
            FragmentKind::OmissionSpaceBefore => " ~",
            FragmentKind::OmissionSpaceAfter => "~ ",
            FragmentKind::Same => "=",
            FragmentKind::Delete => "-",
            FragmentKind::Insert => "+",
            FragmentKind::MarkLeft => "<",
            FragmentKind::MarkRight => ">",
            FragmentKind::BlockStartLeft => "(<",
            FragmentKind::BlockStartRight => "(>",
            FragmentKind::BlockEnd => " )",
        }
    }

    /// Whether this kind carries diff text (as opposed to fixed markup).
    pub fn has_text(self) -> bool {
        matches!(
            self,
            FragmentKind::Same
                | FragmentKind::Delete
                | FragmentKind::Insert
                | FragmentKind::MarkLeft
                | FragmentKind::MarkRight
        )
    }
}

impl FromStr for FragmentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FragmentKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| Error::UnknownFragmentType(s.to_string()))
    }
}

impl TryFrom<String> for FragmentKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<FragmentKind> for &'static str {
    fn from(kind: FragmentKind) -> Self {
        kind.tag()
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One typed token of a rendered diff.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment {
    /// Raw text, may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    /// Fragment type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: FragmentKind,
    /// Moved block number; 0 when the fragment is not tied to a block.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: u32,
}

impl Fragment {
    /// Create a fragment.
    pub fn new(kind: FragmentKind, text: impl Into<String>, color: u32) -> Self {
        Self {
            text: text.into(),
            kind,
            color,
        }
    }

    /// Create a fragment without text or block number (structural markers).
    pub fn marker(kind: FragmentKind) -> Self {
        Self::new(kind, String::new(), 0)
    }

    /// Whether the fragment belongs to a moved block.
    pub fn is_in_block(&self) -> bool {
        self.color != 0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}\t{}\t{}",
            self.kind.tag(),
            self.color,
            shorten_text(&self.text, 120, 40)
        )
    }
}

/// Dump a fragment list as a tab-separated table for debugging.
///
/// One header line (`i type color text`) followed by one line per fragment,
/// with long texts shortened around an ellipsis.
pub fn debug_fragments(fragments: &[Fragment]) -> String {
    let mut dump = String::from("i\ttype\tcolor\ttext\n");
    for (i, fragment) in fragments.iter().enumerate() {
        dump.push_str(&format!("{i}\t{fragment}\n"));
    }
    dump
}

/// Parse a JSON array of fragments (`[{"text": .., "type": .., "color": ..}]`).
#[cfg(feature = "serde")]
pub fn fragments_from_json(json: &str) -> Result<Vec<Fragment>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of fragments.
#[cfg(feature = "serde")]
pub fn read_fragments<R: std::io::Read>(reader: R) -> Result<Vec<Fragment>> {
    Ok(serde_json::from_reader(std::io::BufReader::new(reader))?)
}

/// Quote text for debug output, keeping its head and `end` trailing chars
/// when it is longer than `max`.
fn shorten_text(text: &str, max: usize, end: usize) -> String {
    let text = text.replace('\n', "\\n").replace('\t', "  ");
    let len = text.chars().count();
    if len <= max {
        return format!("\"{text}\"");
    }
    let head: String = text.chars().take(max - 1 - end).collect();
    let tail: String = text.chars().skip(len - end).collect();
    format!("\"{head}…{tail}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_parse() {
        for kind in FragmentKind::ALL {
            assert_eq!(kind.tag().parse::<FragmentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_padded_tags_are_distinct() {
        assert_eq!("~".parse::<FragmentKind>().unwrap(), FragmentKind::Omission);
        assert_eq!(
            " ~".parse::<FragmentKind>().unwrap(),
            FragmentKind::OmissionSpaceBefore
        );
        assert_eq!(
            "~ ".parse::<FragmentKind>().unwrap(),
            FragmentKind::OmissionSpaceAfter
        );
        assert_eq!(" )".parse::<FragmentKind>().unwrap(), FragmentKind::BlockEnd);
        assert!(")".parse::<FragmentKind>().is_err());
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        match "?".parse::<FragmentKind>() {
            Err(Error::UnknownFragmentType(tag)) => assert_eq!(tag, "?"),
            other => panic!("expected unknown fragment type, got {other:?}"),
        }
    }

    #[test]
    fn test_has_text() {
        assert!(FragmentKind::Same.has_text());
        assert!(FragmentKind::MarkRight.has_text());
        assert!(!FragmentKind::BlockStartLeft.has_text());
        assert!(!FragmentKind::Separator.has_text());
    }

    #[test]
    fn test_fragment_display() {
        let fragment = Fragment::new(FragmentKind::Insert, "a\tb\nc", 2);
        assert_eq!(fragment.to_string(), "\"+\"\t2\t\"a  b\\nc\"");
    }

    #[test]
    fn test_shorten_text_keeps_head_and_tail() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(shorten_text(text, 10, 3), "\"abcdef…xyz\"");
        assert_eq!(shorten_text("short", 10, 3), "\"short\"");
    }

    #[test]
    fn test_debug_fragments_table() {
        let fragments = vec![
            Fragment::marker(FragmentKind::ContainerStart),
            Fragment::new(FragmentKind::Same, "x", 0),
        ];
        assert_eq!(
            debug_fragments(&fragments),
            "i\ttype\tcolor\ttext\n0\t\"{\"\t0\t\"\"\n1\t\"=\"\t0\t\"x\"\n"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_fragment_json_uses_wire_tags() {
        let fragments: Vec<Fragment> =
            serde_json::from_str(r#"[{"type":"(<","color":4},{"text":"hi","type":"="}]"#)
                .unwrap();
        assert_eq!(
            fragments,
            vec![
                Fragment::new(FragmentKind::BlockStartLeft, "", 4),
                Fragment::new(FragmentKind::Same, "hi", 0),
            ]
        );

        let json = serde_json::to_string(&fragments[1]).unwrap();
        assert_eq!(json, r#"{"text":"hi","type":"=","color":0}"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_read_fragments_from_reader() {
        let json = br#"[{"type":"{"},{"text":"a\tb","type":"-"},{"type":"}"}]"#;
        let fragments = read_fragments(&json[..]).unwrap();
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[1], Fragment::new(FragmentKind::Delete, "a\tb", 0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_fragment_json_rejects_unknown_tag() {
        let err = fragments_from_json(r#"[{"type":"?"}]"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("Unknown fragment type"));
    }
}
