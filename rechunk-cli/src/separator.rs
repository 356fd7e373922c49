//! Separator escaping for command-line arguments

/// Parse a separator argument, resolving `\n`, `\r`, `\t` and `\\`
///
/// The empty string is kept as-is and selects raw character slicing.
pub fn parse_separator(arg: &str) -> Result<String, String> {
    let mut out = String::with_capacity(arg.len());
    let mut chars = arg.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => return Err(format!("unknown escape sequence: \\{other}")),
            None => return Err("trailing backslash in separator".to_string()),
        }
    }

    Ok(out)
}

/// Render a separator for display
pub fn escape_separator(separator: &str) -> String {
    if separator.is_empty() {
        return "\"\" (characters)".to_string();
    }

    let mut out = String::from("\"");
    for c in separator.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
