use serde::{Deserialize, Serialize};

/// The fixed catalog of single-value fields a landing page exposes.
///
/// Every field is always present in a [`FieldSet`]; a marker missing from
/// the source document just means its value is the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    LogoSrc,
    H1Title,
    Tagline,
    MetaTitle,
    MetaDesc,
    MetaKeywords,
    OgImage,
    TwitterImage,
    SettingsIteration,
    SettingsKey,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::LogoSrc,
        Field::H1Title,
        Field::Tagline,
        Field::MetaTitle,
        Field::MetaDesc,
        Field::MetaKeywords,
        Field::OgImage,
        Field::TwitterImage,
        Field::SettingsIteration,
        Field::SettingsKey,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::LogoSrc => "logo_src",
            Field::H1Title => "h1_title",
            Field::Tagline => "tagline",
            Field::MetaTitle => "meta_title",
            Field::MetaDesc => "meta_desc",
            Field::MetaKeywords => "meta_keywords",
            Field::OgImage => "og_image",
            Field::TwitterImage => "twitter_image",
            Field::SettingsIteration => "settings_iteration",
            Field::SettingsKey => "settings_key",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Current values for every catalog field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSet {
    pub logo_src: String,
    pub h1_title: String,
    pub tagline: String,
    pub meta_title: String,
    pub meta_desc: String,
    pub meta_keywords: String,
    pub og_image: String,
    pub twitter_image: String,
    /// Integer-valued, kept as text until save coerces it (default 0)
    pub settings_iteration: String,
    pub settings_key: String,
}

impl FieldSet {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::LogoSrc => &self.logo_src,
            Field::H1Title => &self.h1_title,
            Field::Tagline => &self.tagline,
            Field::MetaTitle => &self.meta_title,
            Field::MetaDesc => &self.meta_desc,
            Field::MetaKeywords => &self.meta_keywords,
            Field::OgImage => &self.og_image,
            Field::TwitterImage => &self.twitter_image,
            Field::SettingsIteration => &self.settings_iteration,
            Field::SettingsKey => &self.settings_key,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::LogoSrc => self.logo_src = value,
            Field::H1Title => self.h1_title = value,
            Field::Tagline => self.tagline = value,
            Field::MetaTitle => self.meta_title = value,
            Field::MetaDesc => self.meta_desc = value,
            Field::MetaKeywords => self.meta_keywords = value,
            Field::OgImage => self.og_image = value,
            Field::TwitterImage => self.twitter_image = value,
            Field::SettingsIteration => self.settings_iteration = value,
            Field::SettingsKey => self.settings_key = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_unknown_field_name() {
        assert_eq!(Field::from_name("favicon"), None);
    }

    #[test]
    fn test_get_set() {
        let mut fields = FieldSet::default();
        fields.set(Field::Tagline, "Play anywhere".to_string());
        assert_eq!(fields.get(Field::Tagline), "Play anywhere");
        assert_eq!(fields.get(Field::LogoSrc), "");
    }
}
