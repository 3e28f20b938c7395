/*!
 * Size-bounded chunking of a clean document.
 *
 * Lines are packed greedily in order. A line is never split, so a line that
 * is longer than the limit on its own becomes a single oversized chunk.
 */

use log::{debug, info};

use super::model::{Chunk, CleanDocument};

/// Default maximum chunk size in characters
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 3000;

/// Split a document into ordered chunks of at most `max_size` characters.
///
/// Joining the returned chunk texts with `\n` reproduces the document text.
pub fn split(document: &CleanDocument, max_size: usize) -> Vec<Chunk> {
    let max_size = max_size.max(1);

    let mut chunks: Vec<Chunk> = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0usize;

    for line in document.lines() {
        let line_len = line.chars().count();

        if !buffer.is_empty() && buffer_len + line_len + 1 > max_size {
            push_chunk(&mut chunks, &buffer, max_size);
            buffer.clear();
            buffer.push_str(line);
            buffer_len = line_len;
        } else {
            if !buffer.is_empty() {
                buffer.push('\n');
                buffer_len += 1;
            }
            buffer.push_str(line);
            buffer_len += line_len;
        }
    }

    if !buffer.is_empty() {
        push_chunk(&mut chunks, &buffer, max_size);
    }

    info!("Split text into {} chunks", chunks.len());
    chunks
}

fn push_chunk(chunks: &mut Vec<Chunk>, buffer: &str, max_size: usize) {
    let chunk = Chunk::new(chunks.len(), buffer.trim());
    if chunk.len() > max_size {
        debug!(
            "Chunk {} is oversized ({} chars), a single line exceeds the limit",
            chunk.index,
            chunk.len()
        );
    }
    chunks.push(chunk);
}
