//! Internationalization (i18n) support for UI labels

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Language used when a key or language is missing
pub const DEFAULT_LANGUAGE: &str = "ja";

const BUILTIN: &[(&str, &str)] = &[
    ("ja", include_str!("languages/ja.yml")),
    ("en", include_str!("languages/en.yml")),
];

type Translations = HashMap<String, serde_yaml::Value>;

/// Internationalization handler
pub struct I18n {
    /// Current language
    language: String,
    /// Language data: lang -> key -> translation
    translations: HashMap<String, Translations>,
}

impl I18n {
    /// Create a handler with the built-in label tables
    pub fn new(language: &str) -> Result<Self> {
        let mut translations = HashMap::new();
        for (lang, source) in BUILTIN {
            let data: Translations = serde_yaml::from_str(source)?;
            translations.insert(lang.to_string(), data);
        }

        Ok(Self {
            language: language.to_string(),
            translations,
        })
    }

    /// Load `<lang>.yml` files from a directory, overriding built-in labels
    pub fn load_languages<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let ext = path.extension().and_then(|e| e.to_str());
            if !path.is_file() || !matches!(ext, Some("yml") | Some("yaml")) {
                continue;
            }
            let Some(lang) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let lang = lang.to_string();

            let content = fs::read_to_string(&path)?;
            match serde_yaml::from_str::<Translations>(&content) {
                Ok(data) => {
                    let existing = self.translations.entry(lang).or_default();
                    for (key, value) in data {
                        match existing.get_mut(&key) {
                            Some(current) => merge_values(current, value),
                            None => {
                                existing.insert(key, value);
                            }
                        }
                    }
                    tracing::debug!("Loaded language file: {:?}", path);
                }
                Err(e) => {
                    tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                }
            }
        }

        Ok(())
    }

    /// Get the current language
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get a translation by key. Key can be nested like "article.back"
    pub fn get(&self, key: &str) -> String {
        for lang in [self.language.as_str(), DEFAULT_LANGUAGE] {
            if let Some(value) = self
                .translations
                .get(lang)
                .and_then(|data| get_nested_value(data, key))
            {
                return yaml_value_to_string(value);
            }
        }

        key.to_string()
    }

    /// All translations for the current language as a flat map with
    /// dot-notation keys, missing keys filled from the default language
    pub fn get_all_translations(&self) -> HashMap<String, String> {
        let mut result = HashMap::new();

        if let Some(lang_data) = self.translations.get(&self.language) {
            flatten_translations(lang_data, "", &mut result);
        }

        if self.language != DEFAULT_LANGUAGE {
            if let Some(default_data) = self.translations.get(DEFAULT_LANGUAGE) {
                let mut fallback = HashMap::new();
                flatten_translations(default_data, "", &mut fallback);
                for (k, v) in fallback {
                    result.entry(k).or_insert(v);
                }
            }
        }

        result
    }
}

/// Get a nested value from a YAML map using dot notation
fn get_nested_value<'a>(data: &'a Translations, key: &str) -> Option<&'a serde_yaml::Value> {
    let mut parts = key.split('.');
    let mut current = data.get(parts.next()?);

    for part in parts {
        match current {
            Some(serde_yaml::Value::Mapping(map)) => {
                current = map.get(serde_yaml::Value::String(part.to_string()));
            }
            _ => return None,
        }
    }

    current
}

/// Merge `overlay` into `base`; mappings merge key by key, anything else
/// replaces the old value
fn merge_values(base: &mut serde_yaml::Value, overlay: serde_yaml::Value) {
    match (base, overlay) {
        (serde_yaml::Value::Mapping(base), serde_yaml::Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(current) => merge_values(current, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Convert a YAML value to a string
fn yaml_value_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => String::new(),
        _ => format!("{:?}", value),
    }
}

/// Flatten translations into a HashMap with dot-notation keys
fn flatten_translations(data: &Translations, prefix: &str, result: &mut HashMap<String, String>) {
    for (key, value) in data {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            serde_yaml::Value::Mapping(map) => {
                let nested: Translations = map
                    .iter()
                    .filter_map(|(k, v)| Some((k.as_str()?.to_string(), v.clone())))
                    .collect();
                flatten_translations(&nested, &full_key, result);
            }
            serde_yaml::Value::Sequence(_) | serde_yaml::Value::Tagged(_) => {}
            other => {
                result.insert(full_key, yaml_value_to_string(other));
            }
        }
    }
}
