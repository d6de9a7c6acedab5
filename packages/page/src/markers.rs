//! Marker patterns locating each catalog field inside the page source.
//!
//! The patterns are deliberately literal: they match the fixed surrounding
//! markup the pages are authored with, nothing more. Group 1 is always the
//! value span. Patterns are compiled from string literals and cannot fail.

use crate::fields::Field;
use regex::Regex;

/// The two settings fields live inside the settings object and have no
/// direct marker of their own, hence the `Option`.
pub(crate) fn for_field(field: Field) -> Option<Regex> {
    let pattern = match field {
        Field::LogoSrc => r#"<img\s+class="logo"\s+src="([^"]+)""#,
        Field::H1Title => r"(?s)<h1>(.*?)</h1>",
        Field::Tagline => r#"(?s)<p\s+class="tagline">(.*?)</p>"#,
        Field::MetaTitle => r"(?s)<title>(.*?)</title>",
        Field::MetaDesc => r#"<meta\s+name="description"\s+content="(.*?)""#,
        Field::MetaKeywords => r#"<meta\s+name="keywords"\s+content="(.*?)""#,
        Field::OgImage => r#"<meta\s+property="og:image"\s+content="(.*?)""#,
        Field::TwitterImage => r#"<meta\s+name="twitter:image"\s+content="(.*?)""#,
        Field::SettingsIteration | Field::SettingsKey => return None,
    };
    Some(Regex::new(pattern).unwrap())
}

/// `var CPABUILDSETTINGS = {...};` — group 1 is the brace-delimited object
pub(crate) fn settings() -> Regex {
    Regex::new(r"(?s)var\s+CPABUILDSETTINGS\s*=\s*(\{.*?\})\s*;").unwrap()
}

/// Sub-field fallbacks for a settings object that is not strict JSON
pub(crate) fn settings_iteration() -> Regex {
    Regex::new(r#""?it"?\s*:\s*"?([0-9]+)"?"#).unwrap()
}

pub(crate) fn settings_key() -> Regex {
    Regex::new(r#""?key"?\s*:\s*"([^"]+)""#).unwrap()
}

/// `const APPS = [...];` up to the first closing `];` — group 1 is the
/// array interior without its brackets
pub(crate) fn apps() -> Regex {
    Regex::new(r"(?s)const\s+APPS\s*=\s*\[(.*?)\];").unwrap()
}
