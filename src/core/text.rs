use crate::utils::error::{HelperError, Result};

pub const SOFT_BREAK: &str = "<span></span>";
pub const DEFAULT_BREAK_AFTER: usize = 10;

const ELLIPSIS: &str = "...";

/// Cuts `text` to at most `length` characters, ending in `...` when shortened.
pub fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    if length < ELLIPSIS.len() {
        return text.chars().take(length).collect();
    }
    let mut result: String = text.chars().take(length - ELLIPSIS.len()).collect();
    result.push_str(ELLIPSIS);
    result
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes `text` and inserts an empty `<span>` every `break_after` characters
/// so long tokens (hashes, URLs) can wrap.
pub fn soft_wrap(text: &str, break_after: usize) -> Result<String> {
    if break_after == 0 {
        return Err(HelperError::InvalidArgument {
            field: "break_after".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let chars: Vec<char> = text.chars().collect();
    let chunks: Vec<String> = chars
        .chunks(break_after)
        .map(|chunk| escape_html(&chunk.iter().collect::<String>()))
        .collect();
    Ok(chunks.join(SOFT_BREAK))
}

pub fn percent(value: u64, total: u64) -> u64 {
    if value == 0 || total == 0 {
        return 0;
    }
    (value as f64 / total as f64 * 100.0).floor() as u64
}

pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Percent-encodes `value` for a URL, leaving the characters in `safe` as-is.
pub fn url_quote(value: &str, safe: &str) -> String {
    let mut quoted = String::with_capacity(value.len());
    let mut pending = String::new();
    for c in value.chars() {
        if safe.contains(c) {
            if !pending.is_empty() {
                quoted.push_str(&urlencoding::encode(&pending));
                pending.clear();
            }
            quoted.push(c);
        } else {
            pending.push(c);
        }
    }
    if !pending.is_empty() {
        quoted.push_str(&urlencoding::encode(&pending));
    }
    quoted
}

pub fn is_url(value: &str) -> bool {
    (value.starts_with("http://") || value.starts_with("https://")) && !value.contains(' ')
}

pub fn trim_schema(value: &str) -> &str {
    value.split_once("//").map_or(value, |(_, rest)| rest)
}

/// `"first_seen"` → `"First Seen"`
pub fn titlize(value: &str) -> String {
    value
        .replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn split<'a>(value: &'a str, delim: &str) -> Vec<&'a str> {
    if delim.is_empty() {
        value.split_whitespace().collect()
    } else {
        value.split(delim).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello world", 8).chars().count(), 8);
        assert_eq!(truncate("héllo wörld", 6), "hél...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_soft_wrap() {
        let wrapped = soft_wrap("abcdefghijkl", 5).unwrap();
        assert_eq!(wrapped, "abcde<span></span>fghij<span></span>kl");
        assert_eq!(wrapped.split(SOFT_BREAK).count(), 3);
    }

    #[test]
    fn test_soft_wrap_escapes_each_chunk() {
        let wrapped = soft_wrap("<a>&<b>", 3).unwrap();
        assert_eq!(wrapped, "&lt;a&gt;<span></span>&amp;&lt;b<span></span>&gt;");
        assert_eq!(soft_wrap("", DEFAULT_BREAK_AFTER).unwrap(), "");
        assert!(soft_wrap("abc", 0).is_err());
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 100), 0);
        assert_eq!(percent(50, 200), 25);
        assert_eq!(percent(5, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(3, 2), 150);
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("/usr/lib/python/app.py"), "app.py");
        assert_eq!(basename("C:\\code\\main.rs"), "main.rs");
        assert_eq!(basename("plain"), "plain");
        assert_eq!(basename("dir/"), "");
    }

    #[test]
    fn test_url_quote() {
        assert_eq!(url_quote("a b/c", ""), "a%20b%2Fc");
        assert_eq!(url_quote("a b/c", "/"), "a%20b/c");
        assert_eq!(url_quote("ünï", ""), "%C3%BCn%C3%AF");
        assert_eq!(url_quote("safe-_.~", ""), "safe-_.~");
    }

    #[test]
    fn test_url_helpers() {
        assert!(is_url("https://example.com/path"));
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url("http://exa mple.com"));
        assert_eq!(trim_schema("https://example.com/a//b"), "example.com/a//b");
        assert_eq!(trim_schema("example.com"), "example.com");
    }

    #[test]
    fn test_titlize_and_split() {
        assert_eq!(titlize("first_seen"), "First Seen");
        assert_eq!(titlize("server_NAME"), "Server Name");
        assert_eq!(split("a,b,c", ","), vec!["a", "b", "c"]);
        assert_eq!(split("a  b c", ""), vec!["a", "b", "c"]);
    }
}
