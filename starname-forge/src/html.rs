//! Minimal HTML table reading
//!
//! Only what the proper-names page needs: find `table.wikitable.sortable`
//! blocks, split them into rows of `<td>` cells, and flatten each cell to
//! plain text. Header cells (`<th>`) are not cells here.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref TABLE: Regex = Regex::new(r"(?is)<table\b([^>]*)>(.*?)</table>").unwrap();
    static ref CLASS_ATTR: Regex = Regex::new(r#"(?i)\bclass\s*=\s*["']([^"']*)["']"#).unwrap();
    static ref ROW: Regex = Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr>").unwrap();
    static ref CELL: Regex = Regex::new(r"(?is)<td\b[^>]*>(.*?)</td>").unwrap();
    static ref TAG: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
    static ref ENTITY: Regex = Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Does a `class` attribute carry every one of `classes`?
fn has_classes(attrs: &str, classes: &[&str]) -> bool {
    CLASS_ATTR
        .captures(attrs)
        .map(|c| {
            let present: Vec<&str> = c[1].split_whitespace().collect();
            classes.iter().all(|want| present.contains(want))
        })
        .unwrap_or(false)
}

/// Rows of every table carrying all of `classes`, as plain-text cells.
///
/// Rows without `<td>` cells (header rows) come back empty.
pub fn table_rows(html: &str, classes: &[&str]) -> Vec<Vec<String>> {
    TABLE
        .captures_iter(html)
        .filter(|t| has_classes(&t[1], classes))
        .flat_map(|t| {
            let body = t.get(2).map_or("", |m| m.as_str());
            ROW.captures_iter(body)
                .map(|r| CELL.captures_iter(&r[1]).map(|c| cell_text(&c[1])).collect())
                .collect::<Vec<Vec<String>>>()
        })
        .collect()
}

/// Flatten a cell's inner HTML to text: drop tags, decode entities,
/// collapse whitespace.
pub fn cell_text(inner: &str) -> String {
    let stripped = TAG.replace_all(inner, "");
    let decoded = decode_entities(&stripped);
    WHITESPACE.replace_all(decoded.trim(), " ").into_owned()
}

/// Decode the named entities Wikipedia emits plus numeric references
pub fn decode_entities(s: &str) -> String {
    ENTITY
        .replace_all(s, |caps: &Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match body {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some(' '),
                    "dagger" => Some('†'),
                    "ndash" => Some('–'),
                    "mdash" => Some('—'),
                    _ => None,
                }
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_strips_markup() {
        let inner = r#"<a href="/wiki/Vega" title="Vega">Vega</a><sup class="reference">[1]</sup>"#;
        assert_eq!(cell_text(inner), "Vega[1]");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("Barnard&#39;s&nbsp;Star"), "Barnard's Star");
        assert_eq!(decode_entities("Bo&#xF6;tes &amp; co"), "Boötes & co");
        assert_eq!(decode_entities("&unknown;"), "&unknown;");
    }

    #[test]
    fn test_table_rows_filters_by_class() {
        let html = r#"
            <table class="wikitable"><tr><td>skip</td></tr></table>
            <table class="wikitable sortable jquery-tablesorter">
              <tbody>
                <tr><th>Constellation</th><th>Name</th></tr>
                <tr><td>Lyra</td><td>Vega</td></tr>
              </tbody>
            </table>"#;
        let rows = table_rows(html, &["wikitable", "sortable"]);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1], vec!["Lyra", "Vega"]);
    }
}
