use ammonia;

/// Clean HTML content using the ammonia library.
///
/// Question statements are authored in a rich-text form and may carry
/// markup. The allow-list keeps formatting tags (<b>, <p>, <code>, <pre>)
/// and strips scripts, iframes and event-handler attributes.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}

/// Plain-text rendering for the terminal: sanitize, then drop every tag.
pub fn to_plain_text(input: &str) -> String {
    let cleaned = ammonia::Builder::empty().clean(input).to_string();
    let text = cleaned
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_but_keeps_formatting() {
        let out = clean_html("<p>Sum <b>two</b> numbers</p><script>alert(1)</script>");
        assert_eq!(out, "<p>Sum <b>two</b> numbers</p>");
    }

    #[test]
    fn plain_text_drops_all_tags() {
        assert_eq!(
            to_plain_text("<p>Print <code>a &lt; b</code></p>"),
            "Print a < b"
        );
    }
}
