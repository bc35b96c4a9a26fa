//! Markup stripping for outgoing text

use std::sync::LazyLock;

use regex::Regex;

// A `<` followed by whitespace is literal text, not a tag. An unterminated
// tag runs to the end of the input.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--[\s\S]*?(?:-->|$)|<[^\s<>][^>]*(?:>|$)|<>").expect("tag pattern is valid")
});

/// Remove HTML/XML tags and comments, keeping the text between them
pub fn strip_markup(input: &str) -> String {
    if !input.contains('<') {
        return input.to_string();
    }
    TAG.replace_all(input, "").into_owned()
}
