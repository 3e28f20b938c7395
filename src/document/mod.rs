/*!
 * Document handling for book translation.
 *
 * - `model`: the value types passed between pipeline stages
 * - `normalizer`: Project Gutenberg boilerplate removal
 * - `chunker`: line-respecting, size-bounded splitting
 */

pub mod chunker;
pub mod model;
pub mod normalizer;

pub use chunker::{split, DEFAULT_MAX_CHUNK_CHARS};
pub use model::{
    Chunk, ChunkOutcome, CleanDocument, RawDocument, TranslatedDocument, TranslationResult,
    CHUNK_SEPARATOR,
};
pub use normalizer::{BoilerplateMarkers, Normalizer};
