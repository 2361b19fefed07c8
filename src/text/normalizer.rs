//! Text normalization for preprocessing.
//!
//! Normalization removes URLs, turns separator punctuation into spaces and
//! keeps only an allow-list of code points. It does not depend on the
//! fragment's language, and applying it twice is the same as applying it
//! once.

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::Ipv4Addr;

/// URL pattern: optional protocol and credentials, then an IPv4 address or
/// a host with at least one dot-separated label and an alphabetic TLD,
/// followed by an optional port and path.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:(?:https?|ftp)://)?",
        r"(?:\S+(?::\S*)?@)?",
        r"(?:",
        r"(?:[1-9]\d?|1\d\d|2[01]\d|22[0-3])",
        r"(?:\.(?:1?\d{1,2}|2[0-4]\d|25[0-5])){2}",
        r"(?:\.(?:[1-9]\d?|1\d\d|2[0-4]\d|25[0-4]))",
        r"|",
        r"(?:(?:[a-z\x{00a1}-\x{ffff}0-9]-*)*[a-z\x{00a1}-\x{ffff}0-9]+)",
        r"(?:\.(?:[a-z\x{00a1}-\x{ffff}0-9]-*)*[a-z\x{00a1}-\x{ffff}0-9]+)*",
        r"(?:\.(?:[a-z\x{00a1}-\x{ffff}]{2,}))",
        r")",
        r"(?::\d{2,5})?",
        r"(?:/\S*)?",
    ))
    .unwrap()
});

/// Characters that separate words in posts and become a space.
const SEPARATORS: [char; 7] = ['-', '_', '+', '>', '<', '*', '/'];

/// Line break code points that survive normalization.
const LINE_BREAKS: [char; 6] = ['\n', '\u{000C}', '\r', '\u{0085}', '\u{2028}', '\u{2029}'];

/// Returns true if `c` survives normalization.
///
/// Allowed: space, [`LINE_BREAKS`], ASCII digits and letters, and the Latin-1
/// and Latin Extended letters U+00C0..=U+02AF except × (U+00D7) and
/// ÷ (U+00F7).
#[inline]
pub fn is_allowed_char(c: char) -> bool {
    match c {
        ' ' => true,
        '0'..='9' | 'A'..='Z' | 'a'..='z' => true,
        '\u{00C0}'..='\u{00D6}' | '\u{00D8}'..='\u{00F6}' | '\u{00F8}'..='\u{02AF}' => true,
        _ => LINE_BREAKS.contains(&c),
    }
}

/// Text normalizer applied to every fragment before tokenization.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Creates a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalizes a fragment.
    pub fn normalize(&self, text: &str) -> String {
        let without_urls = strip_urls(text);

        without_urls
            .chars()
            .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
            .filter(|&c| is_allowed_char(c))
            .collect()
    }
}

/// Removes URL-shaped substrings.
///
/// Matches whose host is a private, loopback or link-local IPv4 address are
/// left untouched.
fn strip_urls(text: &str) -> String {
    URL_PATTERN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let matched = &caps[0];
            if is_internal_address(matched) {
                matched.to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

fn is_internal_address(url: &str) -> bool {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let rest = rest.rsplit_once('@').map_or(rest, |(_, host)| host);
    let host = rest.split(['/', ':']).next().unwrap_or(rest);

    match host.parse::<Ipv4Addr>() {
        Ok(addr) => addr.is_private() || addr.is_loopback() || addr.is_link_local(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_url() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("look https://example.com/a?b=c here"),
            "look  here"
        );
        assert_eq!(normalizer.normalize("visit www.example.org now"), "visit  now");
    }

    #[test]
    fn test_private_ip_kept_as_text() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("router 192.168.1.1"), "router 19216811");
        assert_eq!(normalizer.normalize("server 8.8.8.8 down"), "server  down");
    }

    #[test]
    fn test_separators_become_spaces() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("rock-n-roll a_b c+d"), "rock n roll a b c d");
    }

    #[test]
    fn test_disallowed_dropped() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("Hello, World! 😀 #tag @user"), "Hello World  tag user");
        assert_eq!(normalizer.normalize("Grüße aus Köln"), "Grüße aus Köln");
        assert_eq!(normalizer.normalize("3×4÷2"), "342");
        assert_eq!(normalizer.normalize("tab\there"), "tabhere");
    }

    #[test]
    fn test_line_breaks_kept() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("one\ntwo\r\nthree"), "one\ntwo\r\nthree");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = Normalizer::new();
        let inputs = [
            "Check http://foo.bar/baz and mail me@host.com!!",
            "Straße -- Übermut * <3 ... 2019",
            "i'm so happy :) #blessed www.site.io/path",
            "ǅemal ʃ ɐ the end.",
        ];
        for input in inputs {
            let once = normalizer.normalize(input);
            assert_eq!(normalizer.normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_allowed_char_bounds() {
        assert!(is_allowed_char('\u{00C0}'));
        assert!(!is_allowed_char('\u{00D7}'));
        assert!(!is_allowed_char('\u{00F7}'));
        assert!(is_allowed_char('\u{02AF}'));
        assert!(!is_allowed_char('\u{02B0}'));
        assert!(!is_allowed_char('\''));
    }
}
