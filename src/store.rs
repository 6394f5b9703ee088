//! Output boundary. A store receives metadata tags and keyed content items;
//! compression, deduplication and the container format are its business.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

pub trait Store {
    /// Record a metadata tag. Called before any content is added.
    fn tag(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// Add one content item under `key`.
    fn add(&mut self, content: &[u8], key: &str, content_type: &str) -> io::Result<()>;
}

/// A content item held by [`MemoryStore`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    pub key: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// Keeps everything in memory, in call order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub tags: Vec<(String, String)>,
    pub items: Vec<Item>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag_value(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn item(&self, key: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.key == key)
    }
}

impl Store for MemoryStore {
    fn tag(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.tags.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn add(&mut self, content: &[u8], key: &str, content_type: &str) -> io::Result<()> {
        self.items.push(Item {
            key: key.to_string(),
            content_type: content_type.to_string(),
            content: content.to_vec(),
        });
        Ok(())
    }
}

/// One line of a [`JsonlStore`] file.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Tag {
        name: String,
        value: String,
    },
    Entry {
        key: String,
        content_type: String,
        content: String,
    },
}

/// Writes tags and items as JSON lines, one object per call.
pub struct JsonlStore<W: Write> {
    out: W,
    written: usize,
}

impl JsonlStore<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonlStore<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_record(&mut self, record: &Record) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }
}

impl<W: Write> Store for JsonlStore<W> {
    fn tag(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.write_record(&Record::Tag {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    fn add(&mut self, content: &[u8], key: &str, content_type: &str) -> io::Result<()> {
        self.write_record(&Record::Entry {
            key: key.to_string(),
            content_type: content_type.to_string(),
            content: String::from_utf8_lossy(content).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_json_object_per_line() {
        let mut store = JsonlStore::new(Vec::new());
        store.tag("label", "WordNet").unwrap();
        store
            .add(b"<h1>cat</h1>", "cat", "text/html;charset=utf-8")
            .unwrap();
        assert_eq!(store.written(), 2);

        let bytes = store.finish().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let records: Vec<Record> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(
            records,
            vec![
                Record::Tag {
                    name: "label".into(),
                    value: "WordNet".into()
                },
                Record::Entry {
                    key: "cat".into(),
                    content_type: "text/html;charset=utf-8".into(),
                    content: "<h1>cat</h1>".into()
                },
            ]
        );
        assert!(text.starts_with(r#"{"kind":"tag","name":"label","value":"WordNet"}"#));
    }
}
