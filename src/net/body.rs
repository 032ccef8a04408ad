use encoding_rs::Encoding;
use http::header::CONTENT_TYPE;
use http::HeaderMap;

/// Collects a streamed response body, chunk by chunk, in arrival order.
///
/// Decoding to text is deferred until the stream has ended so that a
/// multi-byte character split over two chunks comes out whole.
#[derive(Debug, Default, Clone)]
pub struct BodyAccumulator {
    buf: Vec<u8>,
    chunks: usize,
}

impl BodyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk to the end of the body
    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
        self.chunks += 1;
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of chunks pushed so far (empty chunks included)
    pub fn chunk_count(&self) -> usize {
        self.chunks
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Full body as text, see [`decode_body`]
    pub fn text(&self, headers: &HeaderMap) -> String {
        decode_body(headers, &self.buf)
    }

    /// First `max_chars` characters of the decoded body
    pub fn snippet(&self, headers: &HeaderMap, max_chars: usize) -> String {
        truncate_chars(&self.text(headers), max_chars).to_string()
    }
}

/// Returns the longest prefix of `s` holding at most `max_chars` characters.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Charset parameter of the `Content-Type` header, if any (unquoted, as sent).
fn charset(headers: &HeaderMap) -> Option<String> {
    let ct = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    ct.split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
}

/// Decodes a body to text using the `Content-Type` charset (WHATWG labels,
/// so `latin1` means windows-1252). Without a charset, or with a label that
/// is not recognised, the body is decoded as lossy UTF-8. A leading BOM is
/// kept as body content rather than used to pick the encoding.
pub fn decode_body(headers: &HeaderMap, body: &[u8]) -> String {
    let Some(label) = charset(headers) else {
        return String::from_utf8_lossy(body).into_owned();
    };

    match Encoding::for_label(label.as_bytes()) {
        Some(encoding) => {
            let (text, had_errors) = encoding.decode_without_bom_handling(body);
            if had_errors {
                log::debug!("malformed {} body, invalid sequences replaced", encoding.name());
            }
            text.into_owned()
        }
        None => {
            log::debug!("unknown charset {label:?}, decoding body as UTF-8");
            String::from_utf8_lossy(body).into_owned()
        }
    }
}
