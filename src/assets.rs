//! Metadata tags and the static presentation files every dictionary carries.

use std::io;

use crate::store::Store;

/// Key prefix of bundled assets; article markup refers to them as `~/css/...`.
pub const ASSET_PREFIX: &str = "~/";

pub struct Asset {
    pub path: &'static str,
    pub content_type: &'static str,
    pub content: &'static str,
}

pub const ASSETS: &[Asset] = &[
    Asset {
        path: "css/default.css",
        content_type: "text/css",
        content: include_str!("../assets/css/default.css"),
    },
    Asset {
        path: "css/night.css",
        content_type: "text/css",
        content: include_str!("../assets/css/night.css"),
    },
    Asset {
        path: "js/styleswitcher.js",
        content_type: "application/javascript",
        content: include_str!("../assets/js/styleswitcher.js"),
    },
];

/// Source attribution tags, in the order they are written.
pub fn tags(created_by: &str) -> [(&'static str, &str); 7] {
    [
        ("label", "WordNet"),
        ("license.name", "WordNet License"),
        (
            "license.url",
            "http://wordnet.princeton.edu/wordnet/license/",
        ),
        ("source", "http://wordnet.princeton.edu"),
        ("uri", "http://wordnet.princeton.edu"),
        ("copyright", "2011 Princeton University"),
        ("created.by", created_by),
    ]
}

pub fn write_tags<S: Store>(store: &mut S, created_by: &str) -> io::Result<()> {
    for (name, value) in tags(created_by) {
        store.tag(name, value)?;
    }
    Ok(())
}

pub fn add_assets<S: Store>(store: &mut S) -> io::Result<()> {
    for asset in ASSETS {
        let key = format!("{ASSET_PREFIX}{}", asset.path);
        store.add(asset.content.as_bytes(), &key, asset.content_type)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn assets_land_under_prefix() {
        let mut store = MemoryStore::new();
        add_assets(&mut store).unwrap();
        let keys: Vec<&str> = store.items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["~/css/default.css", "~/css/night.css", "~/js/styleswitcher.js"]
        );
        assert!(!store.items[0].content.is_empty());
    }

    #[test]
    fn created_by_tag_is_last() {
        let mut store = MemoryStore::new();
        write_tags(&mut store, "me@example.org").unwrap();
        assert_eq!(store.tags.len(), 7);
        assert_eq!(store.tag_value("label"), Some("WordNet"));
        assert_eq!(store.tags[6], ("created.by".into(), "me@example.org".into()));
    }
}
