use crate::node::child_elements;
use scraper::{ElementRef, Html};

/// First `<table>` in the document, if there is one.
pub fn locate_table(document: &Html) -> Option<ElementRef<'_>> {
    child_elements(document.root_element(), "table").next()
}

/// Cells of every row below the header. The first `<tr>` is always treated as
/// the header, and only `<td>` cells are collected.
pub fn data_rows<'a>(table: ElementRef<'a>) -> Vec<Vec<ElementRef<'a>>> {
    child_elements(table, "tr")
        .skip(1)
        .map(|tr| child_elements(tr, "td").collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::CellNode;

    #[test]
    fn test_no_table() {
        let document = Html::parse_document("<html><body><p>Nothing here</p></body></html>");
        assert!(locate_table(&document).is_none());
    }

    #[test]
    fn test_first_table_wins() {
        let document = Html::parse_document(
            r#"<body>
                <table id="first"><tr><th>h</th></tr></table>
                <table id="second"><tr><th>h</th></tr></table>
            </body>"#,
        );
        let table = locate_table(&document).unwrap();
        assert_eq!(table.attribute("id"), Some("first"));
    }

    #[test]
    fn test_header_row_is_dropped() {
        let document = Html::parse_document(
            r#"<table>
                <thead><tr><th>Pos</th><th>P+</th></tr></thead>
                <tbody>
                    <tr><td>1</td><td>=</td></tr>
                    <tr><td>2</td><td>+1</td></tr>
                </tbody>
            </table>"#,
        );
        let rows = data_rows(locate_table(&document).unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].text_content(), "1");
        assert_eq!(rows[1][1].text_content(), "+1");
    }

    #[test]
    fn test_header_cells_are_not_data() {
        let document = Html::parse_document(
            "<table><tr><td>header as td</td></tr><tr><th>only th</th></tr></table>",
        );
        let rows = data_rows(locate_table(&document).unwrap());
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_empty());
    }

    #[test]
    fn test_empty_table() {
        let document = Html::parse_document("<table></table>");
        let table = locate_table(&document).unwrap();
        assert!(data_rows(table).is_empty());
    }
}
