//! Pure string-formatting helpers shared by the emitters.

/// A heading underlined with the given symbol, one symbol per character.
pub(crate) fn underlined(content: &str, symbol: char) -> String {
    let line: String = std::iter::repeat(symbol).take(content.chars().count()).collect();
    format!("{}\n{}\n", content, line)
}

/// An ATX heading (`### content`).
pub(crate) fn atx(level: usize, content: &str) -> String {
    format!("{} {}\n", "#".repeat(level), content)
}

/// Bold markup, shared by RST and Markdown.
pub(crate) fn bold(content: &str) -> String {
    format!("**{}**", content)
}

/// Italic markup, shared by RST and Markdown.
pub(crate) fn italic(content: &str) -> String {
    format!("*{}*", content)
}

/// RST inline literal (double backticks).
pub(crate) fn rst_code(content: &str) -> String {
    format!("``{}``", content)
}

/// Markdown inline code span (single backticks).
pub(crate) fn md_code(content: &str) -> String {
    format!("`{}`", content)
}

/// A free-standing block with surrounding blank lines.
pub(crate) fn block(content: &str) -> String {
    format!("\n{}\n\n", content)
}

/// Horizontal rule between statement fragments.
pub(crate) const SEPARATOR: &str = "\n\n-----\n\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underlined_matches_content_width() {
        assert_eq!(underlined("Types", '='), "Types\n=====\n");
        assert_eq!(underlined("ab", '#'), "ab\n##\n");
    }

    #[test]
    fn test_underlined_counts_chars_not_bytes() {
        // Multibyte characters get one underline symbol each.
        assert_eq!(underlined("héllo", '-'), "héllo\n-----\n");
    }

    #[test]
    fn test_atx() {
        assert_eq!(atx(4, "/interfaces"), "#### /interfaces\n");
    }

    #[test]
    fn test_inline_markup() {
        assert_eq!(bold("type"), "**type**");
        assert_eq!(italic("base"), "*base*");
        assert_eq!(rst_code("uint8"), "``uint8``");
        assert_eq!(md_code("uint8"), "`uint8`");
    }

    #[test]
    fn test_block() {
        assert_eq!(block("text"), "\ntext\n\n");
    }
}
