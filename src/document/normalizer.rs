/*!
 * Removal of Project Gutenberg boilerplate.
 *
 * Gutenberg texts wrap the book between a start and an end marker line, with
 * a licence preamble before and a long licence after. Only the lines between
 * the two markers are kept.
 */

use log::{debug, info, warn};

use super::model::{CleanDocument, RawDocument};

/// Marker configuration for the normalizer.
///
/// Markers are matched case-insensitively anywhere within a trimmed line.
/// Lines starting with the reserved prefix are dropped.
#[derive(Debug, Clone)]
pub struct BoilerplateMarkers {
    pub start: String,
    pub end: String,
    pub reserved_prefix: String,
}

impl Default for BoilerplateMarkers {
    fn default() -> Self {
        Self {
            start: "START OF THE PROJECT GUTENBERG".to_string(),
            end: "END OF THE PROJECT GUTENBERG".to_string(),
            reserved_prefix: "***".to_string(),
        }
    }
}

/// Extracts the book content from a raw Gutenberg download
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    markers: BoilerplateMarkers,
}

impl Normalizer {
    pub fn new(markers: BoilerplateMarkers) -> Self {
        let markers = BoilerplateMarkers {
            start: markers.start.to_uppercase(),
            end: markers.end.to_uppercase(),
            reserved_prefix: markers.reserved_prefix,
        };
        Self { markers }
    }

    /// Strip everything outside the start/end markers, blank lines and reserved lines.
    ///
    /// A document without a start marker yields an empty `CleanDocument`.
    pub fn clean(&self, raw: &RawDocument) -> CleanDocument {
        let start = &self.markers.start;
        let end = &self.markers.end;

        let mut lines = Vec::new();
        let mut start_found = false;
        let mut end_found = false;

        for line in raw.text().lines() {
            let line = line.trim();

            if !start_found {
                if line.to_uppercase().contains(start.as_str()) {
                    start_found = true;
                }
                continue;
            }

            if line.to_uppercase().contains(end.as_str()) {
                end_found = true;
                break;
            }

            if !line.is_empty() && !line.starts_with(self.markers.reserved_prefix.as_str()) {
                lines.push(line.to_string());
            }
        }

        if !start_found {
            warn!("No start marker found in source document, nothing to translate");
        } else if !end_found {
            debug!("No end marker found, keeping content up to end of document");
        }

        let clean = CleanDocument::from_lines(lines);
        info!("Cleaned text ({} characters)", clean.len());
        clean
    }
}

/// Clean a document with the default Gutenberg markers
pub fn clean(raw: &RawDocument) -> CleanDocument {
    Normalizer::default().clean(raw)
}
