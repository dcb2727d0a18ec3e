//! Plain-text rendering of the trusted rich-text fragments used in question content.

const BREAKING_TAGS: [&str; 5] = ["br", "p", "div", "li", "pre"];

/// Remove markup from a rich-text fragment.
///
/// Line-breaking tags (`br`, `p`, `div`, `li`, `pre`) become newlines, other
/// tags are dropped, an unterminated `<` swallows the rest of the input, and
/// the common character entities are decoded.
#[must_use]
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    let mut tag_buf = String::new();

    for ch in input.chars() {
        if in_tag {
            if ch == '>' {
                in_tag = false;
                if is_breaking(&tag_buf) && !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                tag_buf.clear();
            } else {
                tag_buf.push(ch);
            }
            continue;
        }

        if ch == '<' {
            in_tag = true;
            tag_buf.clear();
            continue;
        }

        out.push(ch);
    }

    out.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

fn is_breaking(tag: &str) -> bool {
    let name = tag
        .trim()
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    BREAKING_TAGS.contains(&name.as_str())
}
