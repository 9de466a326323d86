//! Horizontal rules
//!
//! The simple renderer rules every row with `\hline`; the merged-header renderer
//! uses the three booktabs rules plus `\cmidrule` under grouped header columns.

use std::fmt;

/// A horizontal rule line inside a `tabular`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRule {
    HLine,
    Top,
    Mid,
    Bottom,
    /// `\cmidrule(lr)` under the 0-indexed half-open column range `start..end`
    CMid { start: usize, end: usize },
}

impl TableRule {
    /// Rule under the columns covered by a header span
    pub fn under_columns(start: usize, end: usize) -> Self {
        TableRule::CMid { start, end }
    }
}

impl fmt::Display for TableRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TableRule::HLine => f.write_str("\\hline"),
            TableRule::Top => f.write_str("\\toprule"),
            TableRule::Mid => f.write_str("\\midrule"),
            TableRule::Bottom => f.write_str("\\bottomrule"),
            // 1-indexed, inclusive
            TableRule::CMid { start, end } => write!(f, "\\cmidrule(lr){{{}-{}}}", start + 1, end),
        }
    }
}
