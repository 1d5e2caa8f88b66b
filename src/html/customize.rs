//! Placeholder substitution for block and mark templates.

use std::borrow::Cow;

use super::escape::escape_html;

/// Block/mark number placeholder.
pub const NUMBER_PLACEHOLDER: &str = "{number}";
/// Popup title placeholder.
pub const TITLE_PLACEHOLDER: &str = "{title}";
/// ASCII fallback class placeholder.
pub const NOUNICODE_PLACEHOLDER: &str = "{nounicode}";

/// Class added to move marks when Unicode symbols are disabled.
pub const NOUNICODE_CLASS: &str = " wikEdDiffNoUnicode";

/// Maximum popup title length, in characters.
pub const TITLE_MAX: usize = 512;
/// Characters kept from the end of a shortened title.
pub const TITLE_TAIL: usize = 128;
/// Marker joining the head and tail of a shortened title.
pub const TITLE_GAP_MARK: &str = " [...] ";

/// Fill the placeholders of a template.
///
/// `{number}` becomes `number`, `{nounicode}` the fallback class (or nothing),
/// and `{title}` the shortened, escaped title when one is given. Without a
/// title the `{title}` placeholder is left in place.
///
/// # Examples
///
/// ```
/// use wikeddiff::html::customize;
///
/// let html = customize("<span id=\"m{number}\" title=\"{title}\">", 7, Some("a  b"), false);
/// assert_eq!(html, "<span id=\"m7\" title=\"a&nbsp;&nbsp;b\">");
/// ```
pub fn customize(
    template: &str,
    number: u32,
    title: Option<&str>,
    no_unicode_symbols: bool,
) -> String {
    let number = number.to_string();
    let nounicode = if no_unicode_symbols { NOUNICODE_CLASS } else { "" };
    let title = title.map(title_html);

    let mut replacements: Vec<(&str, &str)> = vec![
        (NUMBER_PLACEHOLDER, number.as_str()),
        (NOUNICODE_PLACEHOLDER, nounicode),
    ];
    if let Some(title) = &title {
        replacements.push((TITLE_PLACEHOLDER, title.as_str()));
    }

    replacements
        .into_iter()
        .fold(template.to_string(), |html, (key, value)| html.replace(key, value))
}

/// Shorten a title to at most [`TITLE_MAX`] characters.
///
/// Long titles keep their head and their last [`TITLE_TAIL`] characters
/// around [`TITLE_GAP_MARK`], for a total of exactly [`TITLE_MAX`].
pub fn shorten_title(title: &str) -> Cow<'_, str> {
    let len = title.chars().count();
    if len <= TITLE_MAX {
        return title.into();
    }

    let head_len = TITLE_MAX - TITLE_GAP_MARK.len() - TITLE_TAIL;
    let mut shortened = String::with_capacity(TITLE_MAX * 4);
    shortened.extend(title.chars().take(head_len));
    shortened.push_str(TITLE_GAP_MARK);
    shortened.extend(title.chars().skip(len - TITLE_TAIL));
    shortened.into()
}

/// Title text as it appears inside the `title` attribute.
fn title_html(title: &str) -> String {
    let title = shorten_title(title);
    escape_html(&title)
        .replace('\t', "&nbsp;&nbsp;")
        .replace("  ", "&nbsp;&nbsp;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEMPLATE: &str =
        "<span class=\"mark{nounicode} mark{number}\" title=\"{title}\" id=\"mark{number}\">";

    #[test]
    fn test_number_replaced_everywhere() {
        assert_eq!(
            customize(TEMPLATE, 12, None, false),
            "<span class=\"mark mark12\" title=\"{title}\" id=\"mark12\">"
        );
    }

    #[test]
    fn test_nounicode_class() {
        assert_eq!(
            customize(TEMPLATE, 1, Some("x"), true),
            "<span class=\"mark wikEdDiffNoUnicode mark1\" title=\"x\" id=\"mark1\">"
        );
    }

    #[test]
    fn test_title_is_escaped() {
        let html = customize("{title}", 0, Some("<b>\"&\"</b>"), false);
        assert_eq!(html, "&lt;b&gt;&quot;&amp;&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_title_tabs_and_double_spaces() {
        assert_eq!(customize("{title}", 0, Some("a\tb"), false), "a&nbsp;&nbsp;b");
        assert_eq!(customize("{title}", 0, Some("a   b"), false), "a&nbsp;&nbsp; b");
        assert_eq!(customize("{title}", 0, Some("a b"), false), "a b");
    }

    #[test]
    fn test_title_inserted_text_is_not_rescanned() {
        assert_eq!(customize("{title}", 5, Some("{number}"), false), "{number}");
    }

    #[test]
    fn test_short_title_unchanged() {
        let title = "x".repeat(TITLE_MAX);
        assert_eq!(shorten_title(&title), title);
    }

    #[test]
    fn test_long_title_keeps_head_and_tail() {
        let title = format!("{}{}", "a".repeat(600), "b".repeat(TITLE_TAIL));
        let shortened = shorten_title(&title);
        assert_eq!(shortened.chars().count(), TITLE_MAX);
        assert!(shortened.starts_with(&"a".repeat(377)));
        assert!(shortened.ends_with(&format!("{TITLE_GAP_MARK}{}", "b".repeat(TITLE_TAIL))));
    }

    #[test]
    fn test_long_title_counts_characters() {
        let title = "ä".repeat(1000);
        assert_eq!(shorten_title(&title).chars().count(), TITLE_MAX);
    }

    proptest! {
        #[test]
        fn prop_shortened_title_is_bounded(s in "[a-z]{0,2000}") {
            let shortened = shorten_title(&s);
            prop_assert!(shortened.chars().count() <= TITLE_MAX);
            let marks = shortened.matches(TITLE_GAP_MARK).count();
            if s.len() > TITLE_MAX {
                prop_assert_eq!(marks, 1);
            } else {
                prop_assert_eq!(marks, 0);
                prop_assert_eq!(&*shortened, s.as_str());
            }
        }
    }
}
