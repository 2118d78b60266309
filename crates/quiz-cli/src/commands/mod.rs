pub mod chat;
pub mod input;
pub mod inspect;
pub mod test;

use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

/// Prints a title between two horizontal rules.
pub(crate) fn banner(out: &mut dyn Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}
