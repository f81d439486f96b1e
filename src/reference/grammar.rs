//! Parser for reference expressions.
//!
//! Examples:
//!   column(x)          => whole column
//!   column(x)[1]       => single element (negative counts from the end)
//!   column(x)[:-2]     => slice, either bound optional
//!
//! Strings that do not match are literals, never errors.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Capture:
// 1) name: anything but parens/brackets (trimmed)
// 2) start or index: signed integer
// 3) ':' marks the slice form
// 4) end: signed integer
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*column\(\s*([^()\[\]]*?)\s*\)(?:\[\s*(-?\d+)?\s*(:)?\s*(-?\d+)?\s*\])?\s*$",
    )
    .expect("reference grammar regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// No brackets: the column as stored.
    Whole,
    Index(i64),
    Slice { start: Option<i64>, end: Option<i64> },
}

/// A parsed `column(name)[selector]` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: String,
    pub selector: Selector,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>, selector: Selector) -> Self {
        Self {
            name: name.into(),
            selector,
        }
    }

    /// Parse a reference expression. Returns `None` for anything outside the
    /// grammar, including `[]` and integers that do not fit in an `i64`.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = REFERENCE_RE.captures(s)?;

        let name = caps.get(1)?.as_str();
        if name.is_empty() {
            return None;
        }

        let bracketed = caps.get(0)?.as_str().trim_end().ends_with(']');
        let first = parse_bound(caps.get(2).map(|m| m.as_str()))?;
        let second = parse_bound(caps.get(4).map(|m| m.as_str()))?;
        let colon = caps.get(3).is_some();

        let selector = match (bracketed, colon, first, second) {
            (false, _, _, _) => Selector::Whole,
            (true, true, start, end) => Selector::Slice { start, end },
            (true, false, Some(index), None) => Selector::Index(index),
            // `[]` or `[1 2]`
            (true, false, _, _) => return None,
        };

        Some(Self::new(name, selector))
    }
}

/// `None` means the bound overflowed; `Some(None)` means it was absent.
fn parse_bound(raw: Option<&str>) -> Option<Option<i64>> {
    match raw {
        None => Some(None),
        Some(digits) => digits.parse::<i64>().ok().map(Some),
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column({})", self.name)?;
        match self.selector {
            Selector::Whole => Ok(()),
            Selector::Index(i) => write!(f, "[{}]", i),
            Selector::Slice { start, end } => {
                f.write_str("[")?;
                if let Some(s) = start {
                    write!(f, "{}", s)?;
                }
                f.write_str(":")?;
                if let Some(e) = end {
                    write!(f, "{}", e)?;
                }
                f.write_str("]")
            }
        }
    }
}
