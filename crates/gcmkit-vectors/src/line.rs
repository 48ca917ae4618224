/// One input line, classified after trailing whitespace has been stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    /// Starts with `#`.
    Comment,
    /// `[ Name = value ]`, both sides word characters.
    Header { key: &'a str, value: &'a str },
    /// `Name = value`, value may be empty.
    Field { key: &'a str, value: &'a str },
    /// Anything else. Vendor files carry stray annotations; these are skipped.
    Other,
}

impl<'a> Line<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.trim_end();

        if line.is_empty() {
            return Line::Blank;
        }
        if line.starts_with('#') {
            return Line::Comment;
        }

        if let Some(inner) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            return match split_assignment(inner) {
                Some((key, value)) if !value.is_empty() => Line::Header { key, value },
                _ => Line::Other,
            };
        }

        match split_assignment(line) {
            Some((key, value)) => Line::Field { key, value },
            None => Line::Other,
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits `key = value` where key is one or more word chars and value zero or more.
fn split_assignment(s: &str) -> Option<(&str, &str)> {
    let (key, value) = s.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || !key.chars().all(is_word_char) {
        return None;
    }
    if !value.chars().all(is_word_char) {
        return None;
    }
    Some((key, value))
}
