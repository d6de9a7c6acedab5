use crate::fields::{Field, FieldSet};
use crate::markers;
use lpedit_literal::{parse_records, AppRecord, LiteralError};

/// Everything pulled out of one page source.
///
/// Extraction never fails: a missing marker yields that field's default.
/// The one degradable failure — an APPS literal no strategy could decode —
/// leaves `records` empty and carries the cause in `literal_error` so the
/// boundary can surface it instead of swallowing it.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub fields: FieldSet,
    pub records: Vec<AppRecord>,
    pub literal_error: Option<LiteralError>,
}

/// Locate every catalog field in the document text.
///
/// The first occurrence of each marker wins; duplicates later in the
/// document are ignored.
pub fn extract(html: &str) -> Extraction {
    let mut fields = FieldSet::default();

    for field in [
        Field::LogoSrc,
        Field::H1Title,
        Field::Tagline,
        Field::MetaTitle,
        Field::MetaDesc,
        Field::MetaKeywords,
        Field::OgImage,
        Field::TwitterImage,
    ] {
        if let Some(caps) = markers::for_field(field).and_then(|m| m.captures(html)) {
            fields.set(field, caps[1].to_string());
        }
    }

    if let Some(caps) = markers::settings().captures(html) {
        extract_settings(&caps[1], &mut fields);
    }

    let mut records = Vec::new();
    let mut literal_error = None;
    if let Some(caps) = markers::apps().captures(html) {
        match parse_records(&format!("[{}]", &caps[1])) {
            Ok(parsed) => records = parsed,
            Err(err) => literal_error = Some(err),
        }
    }

    Extraction {
        fields,
        records,
        literal_error,
    }
}

/// Strict JSON parse first; pages written by hand fall back to matching
/// the `it` and `key` sub-fields independently.
fn extract_settings(captured: &str, fields: &mut FieldSet) {
    match serde_json::from_str::<serde_json::Value>(captured) {
        Ok(value) => {
            match value.get("it") {
                Some(serde_json::Value::Number(n)) => {
                    fields.settings_iteration = n.to_string();
                }
                Some(serde_json::Value::String(s)) => {
                    fields.settings_iteration = s.clone();
                }
                _ => {}
            }
            if let Some(key) = value.get("key").and_then(|k| k.as_str()) {
                fields.settings_key = key.to_string();
            }
        }
        Err(_) => {
            if let Some(caps) = markers::settings_iteration().captures(captured) {
                fields.settings_iteration = caps[1].to_string();
            }
            if let Some(caps) = markers::settings_key().captures(captured) {
                fields.settings_key = caps[1].to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Belko Games</title>
  <meta name="description" content="Top mobile games">
  <meta name="keywords" content="games, mobile">
  <meta property="og:image" content="https://cdn.example.com/og.png">
  <meta name="twitter:image" content="https://cdn.example.com/tw.png">
</head>
<body>
  <img class="logo" src="logo.png">
  <h1>Belko Games</h1>
  <p class="tagline">Play the best, skip the rest</p>
  <script>
    var CPABUILDSETTINGS = {"it": 3, "key": "abc123"};
    const APPS = [
      {
        name: "Foo",
        icon: "i.png",
        locker_id: "L1",
        platforms: ["android", "ios"],
        trending: true,
        featured: false
      },
    ];
  </script>
</body>
</html>
"#;

    #[test]
    fn test_extract_all_fields() {
        let extraction = extract(PAGE);
        let fields = &extraction.fields;

        assert_eq!(fields.logo_src, "logo.png");
        assert_eq!(fields.h1_title, "Belko Games");
        assert_eq!(fields.tagline, "Play the best, skip the rest");
        assert_eq!(fields.meta_title, "Belko Games");
        assert_eq!(fields.meta_desc, "Top mobile games");
        assert_eq!(fields.meta_keywords, "games, mobile");
        assert_eq!(fields.og_image, "https://cdn.example.com/og.png");
        assert_eq!(fields.twitter_image, "https://cdn.example.com/tw.png");
        assert_eq!(fields.settings_iteration, "3");
        assert_eq!(fields.settings_key, "abc123");

        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].name, "Foo");
        assert!(extraction.literal_error.is_none());
    }

    #[test]
    fn test_missing_marker_yields_empty_string() {
        let page = PAGE.replace(r#"  <meta name="twitter:image" content="https://cdn.example.com/tw.png">"#, "");
        let extraction = extract(&page);
        assert_eq!(extraction.fields.twitter_image, "");
    }

    #[test]
    fn test_first_marker_wins() {
        let page = format!("{}\n<h1>Second heading</h1>", PAGE);
        let extraction = extract(&page);
        assert_eq!(extraction.fields.h1_title, "Belko Games");
    }

    #[test]
    fn test_settings_fallback_on_loose_syntax() {
        let page = PAGE.replace(
            r#"var CPABUILDSETTINGS = {"it": 3, "key": "abc123"};"#,
            r#"var CPABUILDSETTINGS = {it: "7", key: "abc"};"#,
        );
        let extraction = extract(&page);
        assert_eq!(extraction.fields.settings_iteration, "7");
        assert_eq!(extraction.fields.settings_key, "abc");
    }

    #[test]
    fn test_missing_apps_is_empty_list() {
        let extraction = extract("<html><title>t</title></html>");
        assert!(extraction.records.is_empty());
        assert!(extraction.literal_error.is_none());
    }

    #[test]
    fn test_malformed_apps_degrades_with_cause() {
        let page = PAGE.replace("name: \"Foo\",", "name: \"Foo\" @@,");
        let extraction = extract(&page);
        assert!(extraction.records.is_empty());
        assert!(extraction.literal_error.is_some());
    }
}
