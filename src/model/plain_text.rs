//! Plain text constant tables
//!
//! Generated templates keep their static text in constants. Identical text
//! runs share one constant group and every group is split into chunks no
//! larger than the generator's limit, named `PLAIN_TEXT_<text>_<chunk>`.

use indexmap::IndexMap;
use tracing::debug;

use super::unit::TemplateUnit;

/// Distinct text -> (constant name -> chunk), both in first-occurrence order
pub type PlainTextMap = IndexMap<String, IndexMap<String, String>>;

/// How chunk size is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkMeasure {
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-8 encoded bytes; chunks end on character boundaries
    Utf8Bytes,
}

/// Builds a [`PlainTextMap`] from a unit sequence
#[derive(Debug, Clone, Copy)]
pub struct PlainTextChunker {
    chunk_size: usize,
    measure: ChunkMeasure,
}

impl PlainTextChunker {
    /// `chunk_size` of 0 keeps every text in a single chunk
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            measure: ChunkMeasure::default(),
        }
    }

    pub fn measure(
        mut self,
        measure: ChunkMeasure,
    ) -> Self {
        self.measure = measure;
        self
    }

    pub fn chunk<'a>(
        &self,
        units: impl IntoIterator<Item = &'a TemplateUnit>,
    ) -> PlainTextMap {
        let mut map = PlainTextMap::new();

        for unit in units {
            let TemplateUnit::PlainText(plain) = unit else {
                continue;
            };
            if map.contains_key(&plain.text) {
                continue;
            }

            let text_index = map.len();
            let chunks = self
                .split(&plain.text)
                .into_iter()
                .enumerate()
                .map(|(chunk_index, chunk)| {
                    (
                        format!("PLAIN_TEXT_{}_{}", text_index, chunk_index),
                        chunk.to_string(),
                    )
                })
                .collect();
            map.insert(plain.text.clone(), chunks);
        }

        debug!(
            "plain text map: {} distinct texts, chunk size {} ({:?})",
            map.len(),
            self.chunk_size,
            self.measure
        );
        map
    }

    /// Split into ordered pieces that concatenate back to `text`
    pub fn split<'t>(
        &self,
        text: &'t str,
    ) -> Vec<&'t str> {
        if text.is_empty() {
            return Vec::new();
        }
        if self.chunk_size == 0 {
            return vec![text];
        }

        let mut chunks = Vec::new();
        let mut start = 0;
        let mut used = 0;
        for (offset, ch) in text.char_indices() {
            let cost = match self.measure {
                ChunkMeasure::Chars => 1,
                ChunkMeasure::Utf8Bytes => ch.len_utf8(),
            };
            if used > 0 && used + cost > self.chunk_size {
                chunks.push(&text[start..offset]);
                start = offset;
                used = 0;
            }
            used += cost;
        }
        chunks.push(&text[start..]);
        chunks
    }
}
