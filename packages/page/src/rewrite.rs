use crate::fields::{Field, FieldSet};
use crate::markers;
use lpedit_literal::{serialize_records, AppRecord};
use regex::Regex;

/// Substitute the current field values and record list back into the page.
///
/// Only the captured value span of each marker changes; the surrounding
/// markup is carried through byte for byte. A field whose marker is absent
/// is silently dropped — rewrite never inserts new structure, the page's
/// shape is fixed at authoring time.
pub fn rewrite(html: &str, fields: &FieldSet, records: &[AppRecord]) -> String {
    let mut out = html.to_string();

    // These four are always written, even when empty
    for field in [
        Field::LogoSrc,
        Field::H1Title,
        Field::Tagline,
        Field::MetaTitle,
    ] {
        if let Some(marker) = markers::for_field(field) {
            out = replace_value(&out, &marker, fields.get(field));
        }
    }

    // Social/meta tags keep their page value when the new one is empty
    for field in [
        Field::MetaDesc,
        Field::MetaKeywords,
        Field::OgImage,
        Field::TwitterImage,
    ] {
        let value = fields.get(field);
        if value.is_empty() {
            continue;
        }
        if let Some(marker) = markers::for_field(field) {
            out = replace_value(&out, &marker, value);
        }
    }

    // The settings object is always re-emitted in normalized form,
    // whatever syntax the page used
    out = replace_value(&out, &markers::settings(), &normalized_settings(fields));

    // The APPS declaration is always replaced wholesale by a fresh encoding
    if let Some(found) = markers::apps().find(&out) {
        let mut next = String::with_capacity(out.len());
        next.push_str(&out[..found.start()]);
        next.push_str(&serialize_records(records));
        next.push_str(&out[found.end()..]);
        out = next;
    }

    out
}

/// Replace group 1 of the first match, keeping everything around it
fn replace_value(html: &str, marker: &Regex, value: &str) -> String {
    if let Some(group) = marker.captures(html).and_then(|caps| caps.get(1)) {
        let mut out = String::with_capacity(html.len());
        out.push_str(&html[..group.start()]);
        out.push_str(value);
        out.push_str(&html[group.end()..]);
        out
    } else {
        html.to_string()
    }
}

/// `{"it": <int>, "key": "<str>"}` — `it` coerced to an integer, 0 when
/// absent or non-numeric
fn normalized_settings(fields: &FieldSet) -> String {
    let it = fields
        .settings_iteration
        .trim()
        .parse::<i64>()
        .unwrap_or(0);
    let key = serde_json::Value::String(fields.settings_key.clone());
    format!("{{\"it\": {}, \"key\": {}}}", it, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;

    const PAGE: &str = r#"<html>
<head>
  <title>Old Title</title>
  <meta name="description" content="Old desc">
</head>
<body>
  <img class="logo" src="old.png">
  <h1>Old Heading</h1>
  <p class="tagline">Old tagline</p>
  <script>
    var CPABUILDSETTINGS = {it: "7", key: "abc"};
    const APPS = [
      { name: "Foo", platforms: ["android"] },
    ];
  </script>
</body>
</html>
"#;

    #[test]
    fn test_values_are_substituted_in_place() {
        let mut extraction = extract(PAGE);
        extraction.fields.h1_title = "New Heading".to_string();
        extraction.fields.logo_src = "new.png".to_string();

        let out = rewrite(PAGE, &extraction.fields, &extraction.records);

        assert!(out.contains("<h1>New Heading</h1>"));
        assert!(out.contains(r#"<img class="logo" src="new.png">"#));
        assert!(out.contains("<p class=\"tagline\">Old tagline</p>"));
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let extraction = extract(PAGE);
        let once = rewrite(PAGE, &extraction.fields, &extraction.records);
        let twice = rewrite(&once, &extraction.fields, &extraction.records);
        assert_eq!(once, twice);
    }

    /// Blank out the two spans rewrite always re-emits, leaving everything
    /// that must survive byte for byte
    fn without_normalized_spans(html: &str) -> String {
        let html = markers::settings().replace(html, "<SETTINGS>");
        markers::apps().replace(&html, "<APPS>").into_owned()
    }

    #[test]
    fn test_round_trip_touches_nothing_outside_markers() {
        let extraction = extract(PAGE);
        let out = rewrite(PAGE, &extraction.fields, &extraction.records);

        assert_eq!(without_normalized_spans(&out), without_normalized_spans(PAGE));
    }

    #[test]
    fn test_settings_are_normalized() {
        let extraction = extract(PAGE);
        let out = rewrite(PAGE, &extraction.fields, &extraction.records);
        assert!(out.contains(r#"var CPABUILDSETTINGS = {"it": 7, "key": "abc"};"#));
    }

    #[test]
    fn test_non_numeric_iteration_coerces_to_zero() {
        let mut extraction = extract(PAGE);
        extraction.fields.settings_iteration = "lots".to_string();
        let out = rewrite(PAGE, &extraction.fields, &extraction.records);
        assert!(out.contains(r#"{"it": 0, "key": "abc"}"#));
    }

    #[test]
    fn test_absent_marker_drops_value() {
        let extraction = extract(PAGE);
        let mut fields = extraction.fields.clone();
        fields.twitter_image = "https://cdn.example.com/tw.png".to_string();

        // No twitter:image marker in PAGE, so the value has nowhere to go
        let out = rewrite(PAGE, &fields, &extraction.records);
        assert!(!out.contains("tw.png"));
    }

    #[test]
    fn test_empty_meta_value_keeps_page_value() {
        let mut extraction = extract(PAGE);
        extraction.fields.meta_desc = String::new();
        let out = rewrite(PAGE, &extraction.fields, &extraction.records);
        assert!(out.contains(r#"content="Old desc""#));
    }

    #[test]
    fn test_apps_span_is_replaced_wholesale() {
        let extraction = extract(PAGE);
        let out = rewrite(PAGE, &extraction.fields, &extraction.records);

        assert!(out.contains("const APPS = [\n  {\n    name: \"Foo\","));
        assert!(out.contains("    platforms: [\"android\"],"));
        // The loose source form is gone
        assert!(!out.contains(r#"{ name: "Foo", platforms: ["android"] },"#));
    }

    #[test]
    fn test_extracted_values_survive_rewrite() {
        let extraction = extract(PAGE);
        let out = rewrite(PAGE, &extraction.fields, &extraction.records);
        let again = extract(&out);

        assert_eq!(again.fields, extraction.fields);
        assert_eq!(again.records, extraction.records);
    }
}
