//! Text formatting of values for parameter and data files.

/// Format a real value so that parsing the text back with
/// `str::parse::<f64>` yields the identical bit pattern.
///
/// Moderate magnitudes use plain decimal notation (`0.1`, `256`); very
/// small or very large magnitudes switch to exponent notation
/// (`1.05457148e-34`). Both forms are the shortest round-trip
/// representation.
pub fn format_real(v: f64) -> String {
    let mag = v.abs();
    if v == 0.0 || !v.is_finite() || (1e-4..1e16).contains(&mag) {
        format!("{v}")
    } else {
        format!("{v:e}")
    }
}

/// Escape a string value so it fits on one `key = value` line and
/// survives the whitespace trim on re-read.
///
/// Backslash, newline, carriage return and tab become `\\`, `\n`, `\r`
/// and `\t`. Spaces at either end become `\s`; interior spaces are kept.
/// Any other whitespace character is written as `\u{hex}`.
pub fn escape_text(v: &str) -> String {
    let count = v.chars().count();
    let lead = v.chars().take_while(|c| *c == ' ').count();
    let trail = if lead == count {
        0
    } else {
        v.chars().rev().take_while(|c| *c == ' ').count()
    };
    let mut out = String::with_capacity(v.len());
    for (n, c) in v.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ' ' if n < lead || n >= count - trail => out.push_str("\\s"),
            ' ' => out.push(' '),
            c if c.is_whitespace() => out.push_str(&format!("\\u{{{:x}}}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}

/// Reverse [`escape_text`]. Returns `None` on an unknown or truncated
/// escape sequence.
pub fn unescape_text(v: &str) -> Option<String> {
    let mut out = String::with_capacity(v.len());
    let mut chars = v.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            's' => out.push(' '),
            'u' => {
                let rest = chars.as_str().strip_prefix('{')?;
                let end = rest.find('}')?;
                let code = u32::from_str_radix(&rest[..end], 16).ok()?;
                out.push(char::from_u32(code)?);
                chars = rest[end + 1..].chars();
            }
            _ => return None,
        }
    }
    Some(out)
}
