#![cfg(test)]
use std::path::PathBuf;

use serde_json::{json, Value};

/// A fresh, not-yet-existing path under the system temp dir.
pub fn temp_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}", uuid::Uuid::new_v4()))
}

/// A module record shaped the way the admin form submits it.
pub fn module_json(slug: &str, title: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{title} description"),
        "slug": slug,
        "image": format!("https://cdn.example.com/{slug}.png"),
        "chapters": [
            { "name": "Getting started", "slug": "getting-started" },
            { "name": "Next steps", "slug": "next-steps" }
        ]
    })
}
