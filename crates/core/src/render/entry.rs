//! Single-entry renderers.

use std::fmt::Write;

use super::{Format, display_date};
use crate::changelog::ChangelogEntry;
use crate::frontmatter::unquote;

/// Render one entry in the given format.
pub fn render_entry(entry: &ChangelogEntry, format: Format) -> String {
    match format {
        Format::Original => original(entry),
        Format::Markdown => markdown(entry),
        Format::Yaml => serde_yaml::to_string(entry).unwrap_or_default(),
        Format::Json => serde_json::to_string_pretty(entry).unwrap_or_default(),
    }
}

/// Render several entries. Structured formats serialize the whole list.
pub fn render_entries(entries: &[ChangelogEntry], format: Format) -> String {
    match format {
        Format::Yaml => serde_yaml::to_string(entries).unwrap_or_default(),
        Format::Json => serde_json::to_string_pretty(entries).unwrap_or_default(),
        Format::Original | Format::Markdown => entries
            .iter()
            .map(|e| render_entry(e, format))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Rebuild the fragment: a `key: value` block the frontmatter parser reads
/// back unchanged, then the body.
fn original(entry: &ChangelogEntry) -> String {
    let mut out = String::from("---\n");
    write_field(&mut out, "date", &entry.date);
    write_field(&mut out, "title", &entry.title);

    let optional = [
        ("issue", &entry.issue),
        ("author", &entry.author),
        ("author_email", &entry.author_email),
        ("author_github", &entry.author_github),
    ];
    for (key, value) in optional {
        if let Some(value) = non_empty(value) {
            write_field(&mut out, key, value);
        }
    }

    out.push_str("---\n\n");
    out.push_str(&entry.content);
    out
}

/// Values the parser would trim or unquote are wrapped in double quotes.
/// The parser strips exactly one layer, so inner quotes need no escaping.
fn write_field(out: &mut String, key: &str, value: &str) {
    if value.trim() == value && unquote(value) == value {
        let _ = writeln!(out, "{key}: {value}");
    } else {
        let _ = writeln!(out, "{key}: \"{value}\"");
    }
}

pub(super) fn markdown(entry: &ChangelogEntry) -> String {
    let mut parts = vec![format!("# {}", entry.title)];
    parts.push(format!("\nDate: {}", display_date(&entry.date)));
    if let Some(issue) = non_empty(&entry.issue) {
        parts.push(format!("\nIssue: {issue}"));
    }
    if let Some(author) = non_empty(&entry.author) {
        parts.push(format!("\nAuthor: {author}"));
    }
    parts.push(format!("\n{}", entry.content));
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::normalize;
    use crate::frontmatter::parse_str;
    use rstest::rstest;
    use std::path::Path;

    const FILE: &str = "changelog/release-6-4-21-0/2023-02-10-fix-search.md";

    fn full_entry() -> ChangelogEntry {
        ChangelogEntry {
            date: "2023-02-10".into(),
            title: "Improve search".into(),
            version: "6.4.21.0".into(),
            file: FILE.into(),
            content: "Search is faster.\n\n* ranking tweaks".into(),
            issue: Some("NEXT-42".into()),
            author: Some("jdoe".into()),
            author_email: Some("jdoe@example.com".into()),
            author_github: Some("jdoe".into()),
        }
    }

    #[test]
    fn markdown_lists_metadata_then_content() {
        let text = render_entry(&full_entry(), Format::Markdown);
        insta::assert_snapshot!(text, @r"
        # Improve search

        Date: 2023-02-10

        Issue: NEXT-42

        Author: jdoe

        Search is faster.

        * ranking tweaks
        ");
    }

    #[test]
    fn markdown_skips_missing_fields() {
        let mut entry = full_entry();
        entry.issue = None;
        entry.author = Some(String::new());
        entry.content = "Body".into();

        assert_eq!(
            render_entry(&entry, Format::Markdown),
            "# Improve search\n\nDate: 2023-02-10\n\nBody"
        );
    }

    #[test]
    fn markdown_passes_malformed_dates_through() {
        let mut entry = full_entry();
        entry.date = "2023-13-45".into();
        assert!(render_entry(&entry, Format::Markdown).contains("Date: 2023-13-45"));
    }

    #[test]
    fn original_round_trips_every_field() {
        let entry = full_entry();
        let text = render_entry(&entry, Format::Original);
        assert!(text.starts_with("---\n"));

        let parsed = parse_str(&text);
        let back = normalize(Path::new(FILE), &parsed.metadata, parsed.content).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn original_round_trips_values_with_colons() {
        let mut entry = full_entry();
        entry.title = "Fix: cart totals".into();
        entry.issue = None;
        entry.author_email = None;

        let text = render_entry(&entry, Format::Original);
        let parsed = parse_str(&text);
        let back = normalize(Path::new(FILE), &parsed.metadata, parsed.content).unwrap();
        assert_eq!(back.title, entry.title);
        assert_eq!(back.issue, None);
        assert_eq!(back.author_email, None);
    }

    #[rstest]
    #[case("Don't break: cart totals")]
    #[case("'single quoted'")]
    #[case("\"double quoted\"")]
    #[case("\"mixed 'quotes'\"")]
    #[case("\"")]
    #[case("ends with a quote'")]
    fn original_round_trips_quote_characters(#[case] title: &str) {
        let fragment = format!("---\ntitle: \"{title}\"\n---\nBody");
        let parsed = parse_str(&fragment);
        let entry = normalize(Path::new(FILE), &parsed.metadata, parsed.content).unwrap();
        assert_eq!(entry.title, title);

        let text = render_entry(&entry, Format::Original);
        let reparsed = parse_str(&text);
        let back = normalize(Path::new(FILE), &reparsed.metadata, reparsed.content).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn original_writes_plain_values_unquoted() {
        let mut entry = full_entry();
        entry.title = "Don't break: cart totals".into();
        entry.content = "Body".into();

        insta::assert_snapshot!(render_entry(&entry, Format::Original), @r#"
        ---
        date: 2023-02-10
        title: Don't break: cart totals
        issue: NEXT-42
        author: jdoe
        author_email: jdoe@example.com
        author_github: jdoe
        ---

        Body
        "#);
    }

    #[test]
    fn original_omits_empty_optional_fields() {
        let mut entry = full_entry();
        entry.issue = Some(String::new());
        entry.author = None;
        entry.author_email = None;
        entry.author_github = None;

        let text = render_entry(&entry, Format::Original);
        let parsed = parse_str(&text);
        assert_eq!(parsed.metadata.len(), 2);
        assert!(parsed.metadata.contains_key("date"));
        assert!(parsed.metadata.contains_key("title"));
    }

    #[test]
    fn json_dumps_every_field() {
        let mut entry = full_entry();
        entry.author_email = None;
        entry.content = "Body".into();

        let text = render_entry(&entry, Format::Json);
        insta::assert_snapshot!(text, @r#"
        {
          "date": "2023-02-10",
          "title": "Improve search",
          "version": "6.4.21.0",
          "file": "changelog/release-6-4-21-0/2023-02-10-fix-search.md",
          "content": "Body",
          "issue": "NEXT-42",
          "author": "jdoe",
          "author_email": null,
          "author_github": "jdoe"
        }
        "#);
    }

    #[test]
    fn yaml_dumps_every_field() {
        let entry = full_entry();
        let text = render_entry(&entry, Format::Yaml);
        let back: ChangelogEntry = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn entry_lists_serialize_as_one_document() {
        let mut second = full_entry();
        second.title = "Fix cart".into();
        let entries = vec![full_entry(), second];

        let json: serde_json::Value =
            serde_json::from_str(&render_entries(&entries, Format::Json)).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
        assert_eq!(json[1]["title"], "Fix cart");

        let markdown = render_entries(&entries, Format::Markdown);
        assert!(markdown.starts_with("# Improve search"));
        assert!(markdown.contains("\n\n# Fix cart"));
    }
}
