//! Label/value row helpers.
//!
//! Card pages lay every field out as a row `div` whose id carries a marker
//! such as `nameRow` or `ptRow`. A row has four child nodes: the label, the
//! whitespace separating it from the value, the value cell's leading
//! whitespace, and the value cell itself. All row-based extractors go through
//! [`value_cell`], so a template change only needs adjusting here.

use scraper::{ElementRef, Selector};

use crate::scraper::error::ScrapeError;

/// Index of the value cell among a row's child nodes
const VALUE_CELL_INDEX: usize = 3;

/// Parse a built-in CSS selector. Only for literals held in statics.
pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// First `div` under `fragment` whose id contains `marker`.
pub fn find_row<'a>(fragment: ElementRef<'a>, marker: &str) -> Option<ElementRef<'a>> {
    fragment.descendants().skip(1).filter_map(ElementRef::wrap).find(|el| {
        el.value().name() == "div" && el.value().id().is_some_and(|id| id.contains(marker))
    })
}

/// Like [`find_row`], but a missing row is an error.
pub fn require_row<'a>(
    fragment: ElementRef<'a>,
    marker: &str,
) -> Result<ElementRef<'a>, ScrapeError> {
    find_row(fragment, marker)
        .ok_or_else(|| ScrapeError::malformed(format!("missing {} element", marker)))
}

/// The value cell of a row.
pub fn value_cell(row: ElementRef<'_>) -> Result<ElementRef<'_>, ScrapeError> {
    row.children()
        .nth(VALUE_CELL_INDEX)
        .and_then(ElementRef::wrap)
        .ok_or_else(|| {
            ScrapeError::malformed(format!(
                "row '{}' has no value cell at child {}",
                row.value().id().unwrap_or_default(),
                VALUE_CELL_INDEX
            ))
        })
}

/// Trimmed text of a row's value cell
pub fn value_text(row: ElementRef<'_>) -> Result<String, ScrapeError> {
    Ok(element_text(value_cell(row)?))
}

/// All text under `element`, trimmed.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_div(document: &Html) -> ElementRef<'_> {
        document.select(&Selector::parse("div").unwrap()).next().unwrap()
    }

    #[test]
    fn test_value_cell_of_well_formed_row() {
        let document = Html::parse_fragment(
            "<div id=\"x_nameRow\" class=\"row\">\n  <div class=\"label\">Card Name:</div>\n  <div class=\"value\">\n    Gravecrawler</div>\n</div>",
        );
        let row = first_div(&document);

        assert_eq!(value_text(row).unwrap(), "Gravecrawler");
        assert_eq!(value_cell(row).unwrap().value().attr("class"), Some("value"));
    }

    #[test]
    fn test_value_cell_missing_is_malformed() {
        let document = Html::parse_fragment(
            "<div id=\"x_nameRow\"><div class=\"label\">Card Name:</div><div class=\"value\">Gravecrawler</div></div>",
        );
        let row = first_div(&document);

        let err = value_cell(row).unwrap_err();
        assert!(matches!(err, ScrapeError::MalformedPage(ref m) if m.contains("x_nameRow")));
    }

    #[test]
    fn test_find_row_by_marker() {
        let document = Html::parse_fragment(
            "<div id=\"root\"><div id=\"ctl00_ptRow\">P/T</div><div id=\"ctl00_typeRow\">T</div></div>",
        );
        let root = first_div(&document);

        let row = find_row(root, "typeRow").unwrap();
        assert_eq!(row.value().id(), Some("ctl00_typeRow"));
        assert!(find_row(root, "manaRow").is_none());
        assert!(matches!(
            require_row(root, "manaRow"),
            Err(ScrapeError::MalformedPage(_))
        ));
    }
}
