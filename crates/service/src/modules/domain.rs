use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ServiceError;

/// The module store as persisted and returned over HTTP: slug -> raw module JSON.
///
/// Values stay untyped so whatever was submitted is stored and returned verbatim.
pub type ModuleMap = BTreeMap<String, Value>;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chapter {
    pub name: String,
    pub slug: String,
}

/// A content unit: title, description, URL slug, cover image and ordered chapters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Module {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub image: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Module {
    /// Every rule the admin form enforces, as user-facing messages, in form order.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.title.is_empty() {
            errors.push("Title is required".to_string());
        }
        if self.description.is_empty() {
            errors.push("Description is required".to_string());
        }
        if self.slug.is_empty() {
            errors.push("Slug is required".to_string());
        } else if !is_valid_slug(&self.slug) {
            errors.push("Slug can only contain lowercase letters, numbers, and hyphens".to_string());
        }
        if self.image.is_empty() {
            errors.push("Image URL is required".to_string());
        } else if !is_https_url(&self.image) {
            errors.push("Image URL must start with https://".to_string());
        }
        if self.chapters.is_empty() {
            errors.push("At least one chapter is required".to_string());
        }
        for (index, chapter) in self.chapters.iter().enumerate() {
            if chapter.name.is_empty() || chapter.slug.is_empty() {
                errors.push(format!("Chapter {}: Chapter name and Chapter slug are required", index + 1));
            }
        }

        errors
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(errors.join("; ")))
        }
    }

    /// The single-entry `{slug: module}` payload the form posts.
    pub fn to_entry(&self) -> Result<ModuleMap, ServiceError> {
        let value = serde_json::to_value(self).map_err(|e| ServiceError::Parse(e.to_string()))?;
        Ok(BTreeMap::from([(self.slug.clone(), value)]))
    }
}

/// Lowercase letters, digits and hyphens, at least one character.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Normalise free text into slug characters as the user types:
/// lowercase, then every character outside `[a-z0-9-]` becomes `-`, one per
/// UTF-16 code unit so astral characters (emoji) yield two hyphens like the browser form.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for c in input.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        } else {
            slug.extend(std::iter::repeat('-').take(c.len_utf16()));
        }
    }
    slug
}

/// `https://` followed by at least one character on the same line.
fn is_https_url(url: &str) -> bool {
    url.strip_prefix("https://")
        .and_then(|rest| rest.chars().next())
        .map_or(false, |c| !matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
}

/// Typed view of a module map; fails on the first entry that is not a `Module`.
pub fn decode_modules(map: &ModuleMap) -> Result<BTreeMap<String, Module>, ServiceError> {
    map.iter()
        .map(|(slug, value)| {
            Module::deserialize(value)
                .map(|module| (slug.clone(), module))
                .map_err(|e| ServiceError::Validation(format!("{slug}: {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::module_json;

    fn valid_module() -> Module {
        Module {
            title: "Intro".into(),
            description: "d".into(),
            slug: "intro".into(),
            image: "https://x/y.png".into(),
            chapters: vec![Chapter { name: "Ch1".into(), slug: "ch1".into() }],
        }
    }

    #[test]
    fn valid_module_has_no_errors() {
        assert!(valid_module().validation_errors().is_empty());
        assert!(valid_module().validate().is_ok());
    }

    #[test]
    fn empty_module_reports_every_required_field() {
        let module = Module {
            title: String::new(),
            description: String::new(),
            slug: String::new(),
            image: String::new(),
            chapters: vec![],
        };
        assert_eq!(
            module.validation_errors(),
            vec![
                "Title is required",
                "Description is required",
                "Slug is required",
                "Image URL is required",
                "At least one chapter is required",
            ]
        );
    }

    #[test]
    fn slug_and_image_format_rules() {
        let mut module = valid_module();
        module.slug = "Intro Module".into();
        module.image = "http://x/y.png".into();
        assert_eq!(
            module.validation_errors(),
            vec![
                "Slug can only contain lowercase letters, numbers, and hyphens",
                "Image URL must start with https://",
            ]
        );

        module.slug = "intro-2".into();
        module.image = "https://".into();
        assert_eq!(module.validation_errors(), vec!["Image URL must start with https://"]);
    }

    #[test]
    fn incomplete_chapters_are_reported_by_position() {
        let mut module = valid_module();
        module.chapters.push(Chapter { name: "Ch2".into(), slug: String::new() });
        match module.validate() {
            Err(ServiceError::Validation(msg)) => {
                assert_eq!(msg, "Chapter 2: Chapter name and Chapter slug are required")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn slugify_matches_form_normalisation() {
        assert_eq!(slugify("Intro To Rust!"), "intro-to-rust-");
        assert_eq!(slugify("already-ok-42"), "already-ok-42");
        assert_eq!(slugify("Ünïcode"), "-n-code");
        assert!(is_valid_slug(&slugify("Any Text At All")));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("under_score"));
    }

    #[test]
    fn slugify_counts_astral_characters_as_two_units() {
        assert_eq!(slugify("🦀"), "--");
        assert_eq!(slugify("rust 🦀 book"), "rust----book");
        assert_eq!(slugify("𝔸b"), "--b");
    }

    #[test]
    fn slug_rules() {
        assert!(is_valid_slug("intro-2"));
        assert!(!is_valid_slug("Intro"));
    }

    #[test]
    fn to_entry_is_keyed_by_slug() {
        let entry = valid_module().to_entry().unwrap();
        assert_eq!(entry.len(), 1);
        assert_eq!(
            entry["intro"],
            serde_json::json!({
                "title": "Intro",
                "description": "d",
                "slug": "intro",
                "image": "https://x/y.png",
                "chapters": [{"name": "Ch1", "slug": "ch1"}]
            })
        );
    }

    #[test]
    fn decode_modules_reads_form_shaped_json() {
        let map: ModuleMap = [("rust-basics".to_string(), module_json("rust-basics", "Rust Basics"))].into();
        let decoded = decode_modules(&map).unwrap();
        assert_eq!(decoded["rust-basics"].chapters.len(), 2);

        let bad: ModuleMap = [("x".to_string(), serde_json::json!({"title": 1}))].into();
        assert!(matches!(decode_modules(&bad), Err(ServiceError::Validation(_))));
    }
}
