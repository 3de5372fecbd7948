//! Contributor-name extraction from embed content.
//!
//! Feed messages carry the contributor either as an explicit embed author or
//! as the leading word of the embed's title/description. The fallback chain
//! is an ordered decision rule; the first rule that produces a name wins.

/// The fields of one embed that extraction looks at, detached from any wire
/// format. Empty strings are treated the same as absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedContent {
    pub author_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Derives a contributor name from one embed, if possible.
///
/// Rules, in order:
/// 1. An explicit author name is used verbatim.
/// 2. Otherwise the candidate text is the title, or failing that the first
///    line of the description trimmed of surrounding whitespace. No usable
///    text means no name.
/// 3. The candidate name is the first space-separated token.
/// 4. If that token does not start with an ASCII letter it is assumed to be a
///    symbol or emoji prefix, and the second token is used when one exists;
///    a lone non-alphabetic token is still kept.
///
/// Best-effort by design: it assumes structured feed posts lead with the
/// contributor name. Names are returned exactly as found, with no case
/// folding.
#[must_use]
pub fn extract_contributor(embed: &EmbedContent) -> Option<String> {
    if let Some(author) = non_empty(embed.author_name.as_deref()) {
        return Some(author.to_owned());
    }

    let text = candidate_text(embed)?;
    let tokens: Vec<&str> = text.split(' ').collect();
    let first = tokens.first().copied().unwrap_or_default();

    let name = if starts_with_ascii_letter(first) {
        first
    } else {
        match tokens.get(1).copied() {
            Some(second) if !second.is_empty() => second,
            _ => first,
        }
    };

    non_empty(Some(name)).map(str::to_owned)
}

fn candidate_text(embed: &EmbedContent) -> Option<&str> {
    if let Some(title) = non_empty(embed.title.as_deref()) {
        return Some(title);
    }
    let first_line = embed.description.as_deref()?.lines().next()?.trim();
    non_empty(Some(first_line))
}

fn starts_with_ascii_letter(s: &str) -> bool {
    s.as_bytes().first().is_some_and(u8::is_ascii_alphabetic)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
