//! Export formatting for generated variant lists.

use serde::Deserialize;

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One address per line.
    #[default]
    Text,
    /// `email` header followed by one address per row.
    Csv,
}

impl ExportFormat {
    /// MIME type of the rendered body.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Csv => "text/csv; charset=utf-8",
        }
    }

    /// File extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
        }
    }

    /// Render `variants` in this format.
    #[must_use]
    pub fn render(self, variants: &[String]) -> String {
        match self {
            Self::Text => render_text(variants),
            Self::Csv => render_csv(variants),
        }
    }
}

fn render_text(variants: &[String]) -> String {
    let mut out = String::with_capacity(variants.iter().map(|v| v.len() + 1).sum());
    for variant in variants {
        out.push_str(variant);
        out.push('\n');
    }
    out
}

fn render_csv(variants: &[String]) -> String {
    let mut out = String::from("email\r\n");
    for variant in variants {
        out.push_str(&csv_field(variant));
        out.push_str("\r\n");
    }
    out
}

/// Quote a field when it holds a delimiter, quote or line break (RFC 4180).
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_text_export() {
        let body = ExportFormat::Text.render(&list(&["ab@gmail.com", "a.b@gmail.com"]));
        assert_eq!(body, "ab@gmail.com\na.b@gmail.com\n");
    }

    #[test]
    fn test_csv_export() {
        let body = ExportFormat::Csv.render(&list(&["john+1@biz.com", "john+2@biz.com"]));
        assert_eq!(body, "email\r\njohn+1@biz.com\r\njohn+2@biz.com\r\n");
    }

    #[test]
    fn test_csv_quoting() {
        assert_eq!(csv_field("plain@x.io"), "plain@x.io");
        assert_eq!(csv_field("a,b@x.io"), "\"a,b@x.io\"");
        assert_eq!(csv_field("a\"b@x.io"), "\"a\"\"b@x.io\"");
    }

    #[test]
    fn test_empty_export() {
        assert_eq!(ExportFormat::Text.render(&[]), "");
        assert_eq!(ExportFormat::Csv.render(&[]), "email\r\n");
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert!(ExportFormat::Text.content_type().starts_with("text/plain"));
        let format: ExportFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(format, ExportFormat::Csv);
    }
}
