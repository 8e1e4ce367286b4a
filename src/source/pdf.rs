//! Concrete [`DocumentSource`] backed by `lopdf`.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{content::Content, Dictionary, Document as LopdfDocument, Object, ObjectId};

use crate::error::{Error, Result};
use crate::model::OutlineEntry;
use crate::source::{DocumentSource, TextSpan};

/// A PDF document opened through `lopdf`.
pub struct PdfSource {
    doc: LopdfDocument,
    /// Page object ids in page order; index is the 0-indexed page number.
    pages: Vec<ObjectId>,
    name: String,
}

impl PdfSource {
    /// Open a PDF from a file path. The file stem becomes the source name.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let name = path
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let doc = LopdfDocument::load(path.as_ref())?;
        Self::from_doc(doc, name)
    }

    /// Open a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8], name: impl Into<String>) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Self::from_doc(doc, name.into())
    }

    fn from_doc(doc: LopdfDocument, name: String) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        // get_pages is keyed by 1-indexed page number, so values come out
        // already ordered.
        let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
        Ok(Self { doc, pages, name })
    }

    fn page_id(&self, page: usize) -> Result<ObjectId> {
        self.pages.get(page).copied().ok_or_else(|| {
            Error::MalformedDocument(format!(
                "page {} out of range (document has {} pages)",
                page,
                self.pages.len()
            ))
        })
    }

    /// Decode a show-text byte string using the current font's encoding,
    /// falling back to simple decoding when the encoding is unavailable.
    fn decode_with_font(
        &self,
        fonts: &BTreeMap<Vec<u8>, &Dictionary>,
        font_name: &[u8],
        bytes: &[u8],
    ) -> String {
        if let Some(font_dict) = fonts.get(font_name) {
            if let Ok(enc) = font_dict.get_font_encoding(&self.doc) {
                if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                    return text;
                }
            }
        }
        decode_text_simple(bytes)
    }

    /// Walk an outline level, depth-first, appending entries in document
    /// order. Only entries with a resolvable destination page are kept.
    fn collect_outline_items(&self, first: ObjectId, level: u32, out: &mut Vec<OutlineEntry>) {
        let mut current = Some(first);
        // Malformed documents can carry cyclic Next chains.
        let mut remaining = 4096;
        while let Some(item_ref) = current {
            remaining -= 1;
            if remaining == 0 {
                log::warn!("outline sibling chain too long, truncating");
                break;
            }

            let Ok(item_dict) = self.doc.get_dictionary(item_ref) else {
                break;
            };

            let title = string_from_dict(item_dict, b"Title").unwrap_or_default();
            match self.destination_page(item_dict) {
                Some(page) => out.push(OutlineEntry::new(title, level, page)),
                None => log::debug!("skipping outline entry without target page: {:?}", title),
            }

            if let Ok(child) = item_dict.get(b"First") {
                if let Ok(child_ref) = child.as_reference() {
                    self.collect_outline_items(child_ref, level + 1, out);
                }
            }

            current = item_dict
                .get(b"Next")
                .ok()
                .and_then(|n| n.as_reference().ok());
        }
    }

    /// Resolve an outline item's destination to a 0-indexed page.
    fn destination_page(&self, item_dict: &Dictionary) -> Option<usize> {
        if let Ok(dest) = item_dict.get(b"Dest") {
            return self.resolve_destination(dest);
        }

        // GoTo action dictionary, either inline or referenced.
        if let Ok(action) = item_dict.get(b"A") {
            let action_dict = match action {
                Object::Dictionary(d) => Some(d),
                Object::Reference(r) => self.doc.get_dictionary(*r).ok(),
                _ => None,
            }?;
            if let Ok(dest) = action_dict.get(b"D") {
                return self.resolve_destination(dest);
            }
        }

        None
    }

    fn resolve_destination(&self, dest: &Object) -> Option<usize> {
        let dest = match dest {
            Object::Reference(r) => self.doc.get_object(*r).ok()?,
            other => other,
        };

        let page_ref = dest.as_array().ok()?.first()?.as_reference().ok()?;
        self.pages.iter().position(|id| *id == page_ref)
    }
}

impl DocumentSource for PdfSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, page: usize) -> Result<String> {
        self.page_id(page)?;
        self.doc
            .extract_text(&[page as u32 + 1])
            .map_err(|e| Error::MalformedDocument(format!("page {}: {}", page, e)))
    }

    fn page_spans(&self, page: usize) -> Result<Vec<TextSpan>> {
        let page_id = self.page_id(page)?;

        let data = self
            .doc
            .get_page_content(page_id)
            .map_err(|e| Error::MalformedDocument(format!("page {}: {}", page, e)))?;
        let content = Content::decode(&data)
            .map_err(|e| Error::MalformedDocument(format!("page {}: {}", page, e)))?;

        let fonts = self.doc.get_page_fonts(page_id).unwrap_or_default();

        let mut spans = Vec::new();
        let mut current_font: Vec<u8> = Vec::new();
        let mut current_size: f32 = 12.0;

        let push = |text: String, size: f32, spans: &mut Vec<TextSpan>| {
            if !text.trim().is_empty() {
                spans.push(TextSpan {
                    page,
                    font_size: size,
                    text,
                });
            }
        };

        for op in content.operations {
            match op.operator.as_str() {
                "Tf" => {
                    if op.operands.len() >= 2 {
                        if let Object::Name(name) = &op.operands[0] {
                            current_font = name.clone();
                        }
                        current_size = get_number(&op.operands[1]).unwrap_or(12.0);
                    }
                }
                "Tj" | "'" => {
                    if let Some(Object::String(bytes, _)) = op.operands.first() {
                        let text = self.decode_with_font(&fonts, &current_font, bytes);
                        push(text, current_size, &mut spans);
                    }
                }
                // " takes word spacing, char spacing, then the string.
                "\"" => {
                    if let Some(Object::String(bytes, _)) = op.operands.get(2) {
                        let text = self.decode_with_font(&fonts, &current_font, bytes);
                        push(text, current_size, &mut spans);
                    }
                }
                "TJ" => {
                    if let Some(Object::Array(arr)) = op.operands.first() {
                        let mut combined = String::new();
                        for item in arr {
                            if let Object::String(bytes, _) = item {
                                combined.push_str(&self.decode_with_font(
                                    &fonts,
                                    &current_font,
                                    bytes,
                                ));
                            }
                        }
                        push(combined, current_size, &mut spans);
                    }
                }
                _ => {}
            }
        }

        Ok(spans)
    }

    fn outline(&self) -> Vec<OutlineEntry> {
        let mut entries = Vec::new();

        if let Ok(catalog) = self.doc.catalog() {
            if let Ok(outlines) = catalog.get(b"Outlines") {
                if let Ok(outlines_ref) = outlines.as_reference() {
                    if let Ok(outlines_dict) = self.doc.get_dictionary(outlines_ref) {
                        if let Ok(first) = outlines_dict.get(b"First") {
                            if let Ok(first_ref) = first.as_reference() {
                                self.collect_outline_items(first_ref, 0, &mut entries);
                            }
                        }
                    }
                }
            }
        }

        entries
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Extract a number from a content stream operand.
fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Read a text string from a PDF dictionary.
fn string_from_dict(dict: &Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| match obj {
        Object::String(bytes, _) => Some(decode_text_simple(bytes)),
        Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    })
}

/// Simple text decoding fallback when no font encoding is available.
fn decode_text_simple(bytes: &[u8]) -> String {
    // UTF-16BE with BOM (the PDF standard for Unicode strings)
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    if let Ok(s) = String::from_utf8(bytes.to_vec()) {
        return s;
    }

    // Latin-1
    bytes.iter().map(|&b| b as char).collect()
}
