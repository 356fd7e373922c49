//! Recursive separator-descent splitter
//!
//! The text is split at the first separator and the pieces are packed
//! greedily into chunks of at most `chunk_size` characters. When a chunk
//! closes, its last `chunk_overlap` characters seed the next one. If a single
//! piece cannot fit into an empty chunk, the whole text is split again with
//! the next, finer separator. Once no separators remain the text is returned
//! as one chunk, whatever its length.
//!
//! Separators stay inside the chunks: the separator at a chunk boundary is
//! placed right after the overlap seed of the following chunk. Dropping each
//! chunk's overlap prefix and concatenating therefore yields the input.
//!
//! All lengths are counted in `char`s and every cut lands on a `char`
//! boundary.

use crate::config::ChunkConfig;

/// A produced chunk together with the length of its overlap prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Chunk text
    pub text: String,
    /// Leading characters copied from the end of the previous chunk
    pub overlap: usize,
}

/// Split `text` into overlapping chunks
///
/// The configuration is assumed valid; see [`ChunkConfig::validate`].
/// Empty input yields a single empty chunk.
pub fn split(text: &str, config: &ChunkConfig) -> Vec<String> {
    split_segments(text, config)
        .into_iter()
        .map(|segment| segment.text)
        .collect()
}

/// Like [`split`], but keeps the overlap length of each chunk
pub fn split_segments(text: &str, config: &ChunkConfig) -> Vec<Segment> {
    split_with(text, config, &config.separators)
}

/// Number of `char`s in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn split_with(text: &str, config: &ChunkConfig, separators: &[String]) -> Vec<Segment> {
    let Some((separator, finer)) = separators.split_first() else {
        return vec![Segment::whole(text)];
    };

    if char_len(text) <= config.chunk_size {
        return vec![Segment::whole(text)];
    }

    let sep_len = char_len(separator);
    let mut segments = Vec::new();
    let mut current: Option<Accumulator> = None;

    for piece in pieces(text, separator) {
        let piece_len = char_len(piece);
        let current_len = current.as_ref().map_or(0, |acc| acc.len);

        if current_len + sep_len + piece_len > config.chunk_size {
            match current.take().filter(|acc| acc.len > 0) {
                Some(closed) => {
                    let seed = tail(&closed.text, config.chunk_overlap);
                    let mut next = Accumulator::seeded(seed, config.chunk_overlap.min(closed.len));
                    next.push(separator, sep_len);
                    next.push(piece, piece_len);

                    segments.push(closed.finish());
                    current = Some(next);
                }
                None => {
                    log::debug!(
                        "piece of {} chars does not fit {} with separator {:?}; trying {} finer separator(s)",
                        piece_len,
                        config.chunk_size,
                        separator,
                        finer.len()
                    );
                    return split_with(text, config, finer);
                }
            }
        } else {
            match current.as_mut() {
                Some(acc) => {
                    acc.push(separator, sep_len);
                    acc.push(piece, piece_len);
                }
                None => current = Some(Accumulator::seeded(piece, 0)),
            }
        }
    }

    if let Some(last) = current {
        segments.push(last.finish());
    }

    segments
}

/// Split at every occurrence of `separator`; the empty separator yields
/// single characters.
fn pieces<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        text.char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect()
    } else {
        text.split(separator).collect()
    }
}

/// The last `n` chars of `text`, or all of it when shorter
fn tail(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }

    match text.char_indices().rev().nth(n - 1) {
        Some((start, _)) => &text[start..],
        None => text,
    }
}

struct Accumulator {
    text: String,
    len: usize,
    overlap: usize,
}

impl Accumulator {
    fn seeded(seed: &str, overlap: usize) -> Self {
        Self {
            text: seed.to_string(),
            len: char_len(seed),
            overlap,
        }
    }

    fn push(&mut self, s: &str, len: usize) {
        self.text.push_str(s);
        self.len += len;
    }

    fn finish(self) -> Segment {
        Segment {
            text: self.text,
            overlap: self.overlap,
        }
    }
}

impl Segment {
    fn whole(text: &str) -> Self {
        Self {
            text: text.to_string(),
            overlap: 0,
        }
    }
}
