//! Incremental UTF-8 decoding for response byte streams
//!
//! The backend sends raw UTF-8 text with no framing, so a multi-byte
//! character may span two reads. The decoder keeps the trailing partial
//! sequence of each chunk and prepends it to the next one instead of
//! decoding chunks independently.

/// Streaming UTF-8 decoder
///
/// Invalid bytes decode to U+FFFD rather than failing the stream.
#[derive(Debug, Default)]
pub struct ChunkDecoder {
    /// Trailing bytes of the previous chunk that did not form a complete
    /// character (at most 3)
    pending: Vec<u8>,
}

impl ChunkDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next chunk, returning all text completed by it
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        let mut input = std::mem::take(&mut self.pending);
        input.extend_from_slice(chunk);

        let mut out = String::with_capacity(input.len());
        let mut rest: &[u8] = &input;
        loop {
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    out.push_str(text);
                    break;
                }
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    if let Ok(text) = std::str::from_utf8(valid) {
                        out.push_str(text);
                    }
                    match err.error_len() {
                        // Truly invalid sequence, substitute and move on
                        Some(len) => {
                            out.push('\u{FFFD}');
                            rest = &after[len..];
                        }
                        // Incomplete trailing sequence, keep for next chunk
                        None => {
                            self.pending = after.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    /// Flush the decoder at end of stream
    ///
    /// A dangling partial sequence decodes to a single U+FFFD, matching
    /// what a flushing text decoder produces.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            String::new()
        } else {
            self.pending.clear();
            "\u{FFFD}".to_string()
        }
    }
}
