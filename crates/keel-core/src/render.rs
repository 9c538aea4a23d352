//! Human-readable dump of a sequence, one element per line.

use std::fmt::{Display, Write};

use crate::traits::Sequence;

const RULE: &str = "-------------------------------------------------";

/// Render every element of `seq` on its own line between two rule lines.
///
/// ```
/// use keel_core::render;
///
/// let out = render(&vec![1, 2][..]);
/// assert_eq!(out.lines().nth(1), Some("1"));
/// ```
pub fn render<S>(seq: &S) -> String
where
    S: Sequence + ?Sized,
    S::Item: Display,
{
    let mut out = String::with_capacity((seq.size() + 2) * (RULE.len() / 4));
    out.push_str(RULE);
    out.push('\n');
    for item in seq.as_slice() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{item}");
    }
    out.push_str(RULE);
    out.push('\n');
    out
}
