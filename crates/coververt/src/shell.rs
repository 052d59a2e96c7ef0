use std::borrow::Cow;
use std::ffi::OsStr;

/// Escape a path so that it can be pasted into a shell.
///
/// Invalid unicode is replaced with the replacement character.
pub(crate) fn escape(s: &OsStr) -> Cow<'_, str> {
    match s.to_string_lossy() {
        Cow::Borrowed(s) => escape_str(s),
        Cow::Owned(s) => Cow::Owned(escape_str(&s).into_owned()),
    }
}

fn escape_str(s: &str) -> Cow<'_, str> {
    let mut o = String::new();

    let s = 'escape: {
        for (n, c) in s.char_indices() {
            if escape_in_bash(c).is_some() {
                o.push_str(&s[..n]);
                break 'escape &s[n..];
            }
        }

        return Cow::Borrowed(s);
    };

    for c in s.chars() {
        if let Some(s) = escape_in_bash(c) {
            o.push_str(s);
        } else {
            o.push(c);
        }
    }

    Cow::Owned(o)
}

fn escape_in_bash(c: char) -> Option<&'static str> {
    match c {
        ' ' => Some("\\ "),
        '"' => Some("\\\""),
        '\'' => Some("\\'"),
        '\\' => Some("\\\\"),
        '$' => Some("\\$"),
        '`' => Some("\\`"),
        '&' => Some("\\&"),
        '|' => Some("\\|"),
        ';' => Some("\\;"),
        '<' => Some("\\<"),
        '>' => Some("\\>"),
        '!' => Some("\\!"),
        '(' => Some("\\("),
        ')' => Some("\\)"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        _ => None,
    }
}
