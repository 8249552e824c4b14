//! Search-result page traversal (sync, uses scraper).
//!
//! The portal marks each application's address line with an
//! `h4.non_table_headers` heading; the details follow as sibling
//! `div.rowDataOnly` rows, each holding a `span.key` label and a
//! `span.inputField` value. This module walks that structure into plain
//! `Notice` values so the field-mapping layer never sees the document
//! object model.

use crate::extraction::address;
use scraper::{ElementRef, Html, Selector};

/// One label/value row from an application's detail block.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

/// One application notice: the heading's full text plus its detail rows,
/// in document order.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Heading text, whitespace-collapsed.
    pub heading: String,
    pub rows: Vec<DetailRow>,
}

const HEADING_CLASS: &str = "non_table_headers";
const ROW_CLASS: &str = "rowDataOnly";

/// Parse a result page into its notices, in document order.
///
/// Rows are gathered from the sibling elements following each heading,
/// stopping at the next heading, so one application's rows can never bleed
/// into another's. Rows may appear either as direct siblings or nested in a
/// sibling container; both layouts are handled. Rows without a label span
/// are dropped.
pub fn parse_notices(html: &str) -> Vec<Notice> {
    let document = Html::parse_document(html);

    let Ok(heading_sel) = Selector::parse("h4.non_table_headers") else {
        return Vec::new();
    };
    let Ok(row_sel) = Selector::parse("div.rowDataOnly") else {
        return Vec::new();
    };
    let Ok(key_sel) = Selector::parse("span.key") else {
        return Vec::new();
    };
    let Ok(value_sel) = Selector::parse("span.inputField") else {
        return Vec::new();
    };

    let mut notices = Vec::new();

    for heading in document.select(&heading_sel) {
        let mut rows = Vec::new();

        for sibling in heading.next_siblings() {
            let Some(el) = ElementRef::wrap(sibling) else {
                continue;
            };
            if has_class(&el, HEADING_CLASS) {
                break;
            }
            if has_class(&el, ROW_CLASS) {
                if let Some(row) = read_row(&el, &key_sel, &value_sel) {
                    rows.push(row);
                }
            } else {
                for row_el in el.select(&row_sel) {
                    if let Some(row) = read_row(&row_el, &key_sel, &value_sel) {
                        rows.push(row);
                    }
                }
            }
        }

        notices.push(Notice {
            heading: text_of(&heading),
            rows,
        });
    }

    notices
}

fn has_class(el: &ElementRef, class: &str) -> bool {
    el.value()
        .attr("class")
        .map(|attr| attr.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Read one `span.key` / `span.inputField` pair out of a row element.
fn read_row(row: &ElementRef, key_sel: &Selector, value_sel: &Selector) -> Option<DetailRow> {
    let label = text_of(&row.select(key_sel).next()?);
    if label.is_empty() {
        return None;
    }
    let value = row
        .select(value_sel)
        .next()
        .map(|el| text_of(&el))
        .unwrap_or_default();
    Some(DetailRow { label, value })
}

/// Collect an element's text, whitespace-collapsed.
fn text_of(el: &ElementRef) -> String {
    address::normalize(&el.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, value: &str) -> String {
        format!(
            r#"<div class="rowDataOnly"><span class="key">{label}</span><span class="inputField">{value}</span></div>"#
        )
    }

    #[test]
    fn test_rows_as_direct_siblings() {
        let html = format!(
            r#"<html><body>
            <h4 class="non_table_headers">10  Park  Lane SA 5091 - Land Division</h4>
            {}{}
            </body></html>"#,
            row("Application No.", "123/2019"),
            row("Type of Work", "Fence"),
        );

        let notices = parse_notices(&html);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].heading, "10 Park Lane SA 5091 - Land Division");
        assert_eq!(
            notices[0].rows,
            vec![
                DetailRow {
                    label: "Application No.".into(),
                    value: "123/2019".into()
                },
                DetailRow {
                    label: "Type of Work".into(),
                    value: "Fence".into()
                },
            ]
        );
    }

    #[test]
    fn test_rows_nested_in_container() {
        let html = format!(
            r#"<h4 class="non_table_headers">1 Smith St SA 5000</h4>
            <div class="detailBlock">{}</div>"#,
            row("Application No.", "9/2019"),
        );

        let notices = parse_notices(&html);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].rows.len(), 1);
        assert_eq!(notices[0].rows[0].value, "9/2019");
    }

    #[test]
    fn test_rows_do_not_bleed_across_headings() {
        let html = format!(
            r#"<h4 class="non_table_headers">First SA 5000</h4>
            {}
            <h4 class="non_table_headers">Second SA 5001</h4>
            {}"#,
            row("Application No.", "1/2019"),
            row("Application No.", "2/2019"),
        );

        let notices = parse_notices(&html);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].rows.len(), 1);
        assert_eq!(notices[0].rows[0].value, "1/2019");
        assert_eq!(notices[1].rows.len(), 1);
        assert_eq!(notices[1].rows[0].value, "2/2019");
    }

    #[test]
    fn test_heading_without_rows() {
        let html = r#"<h4 class="non_table_headers">Lonely SA 5000</h4>"#;
        let notices = parse_notices(html);
        assert_eq!(notices.len(), 1);
        assert!(notices[0].rows.is_empty());
    }

    #[test]
    fn test_row_without_label_is_dropped() {
        let html = r#"<h4 class="non_table_headers">X SA 5000</h4>
            <div class="rowDataOnly"><span class="inputField">orphan</span></div>"#;
        let notices = parse_notices(html);
        assert!(notices[0].rows.is_empty());
    }
}
