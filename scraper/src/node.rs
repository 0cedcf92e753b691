use scraper::ElementRef;

/// Read-only view of one parsed markup node, as the row parser needs it.
///
/// Lookups that may not find anything return `Option` so callers never have
/// to probe for presence before reading.
pub trait CellNode: Sized {
    /// All text below this node, concatenated and trimmed.
    fn text_content(&self) -> String;

    /// Value of the attribute `name`, if the node carries it.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// First `<a>` element below this node in document order.
    fn first_anchor(&self) -> Option<Self>;
}

impl<'a> CellNode for ElementRef<'a> {
    fn text_content(&self) -> String {
        self.text().collect::<String>().trim().to_string()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn first_anchor(&self) -> Option<Self> {
        child_elements(*self, "a").next()
    }
}

/// Descendant elements of `parent` named `name`, excluding `parent` itself.
pub fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_td(html: &Html) -> ElementRef<'_> {
        child_elements(html.root_element(), "td").next().unwrap()
    }

    #[test]
    fn test_text_content_joins_and_trims() {
        let html = Html::parse_fragment(
            "<table><tr><td>  <a>Artist</a> - <b>Song</b>\n </td></tr></table>",
        );
        assert_eq!(first_td(&html).text_content(), "Artist - Song");
    }

    #[test]
    fn test_missing_attribute_is_none() {
        let html = Html::parse_fragment(
            r#"<table><tr><td><a class="x">No link</a></td></tr></table>"#,
        );
        let anchor = first_td(&html).first_anchor().unwrap();
        assert_eq!(anchor.attribute("class"), Some("x"));
        assert_eq!(anchor.attribute("href"), None);
    }

    #[test]
    fn test_first_anchor_takes_document_order() {
        let html = Html::parse_fragment(
            r#"<table><tr><td><div><a href="one.html">1</a></div><a href="two.html">2</a></td></tr></table>"#,
        );
        let anchor = first_td(&html).first_anchor().unwrap();
        assert_eq!(anchor.attribute("href"), Some("one.html"));
    }

    #[test]
    fn test_no_anchor() {
        let html = Html::parse_fragment("<table><tr><td>plain</td></tr></table>");
        assert!(first_td(&html).first_anchor().is_none());
    }
}
