use crate::error::Result;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Reads a saved listing page. Invalid UTF-8 is replaced, not rejected.
pub fn read_html_file(path: &Path) -> Result<String> {
    let is_html = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| HTML_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
    if !is_html {
        warn!("{:?} does not look like an .html/.htm file, parsing anyway", path);
    }

    let bytes = std::fs::read(path)?;
    info!("Read {} bytes from {:?}", bytes.len(), path);
    Ok(decode_lossy(bytes))
}

/// Reads markup pasted on `reader` (normally stdin) up to EOF.
pub fn read_pasted_html<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    info!("Read {} bytes of pasted markup", bytes.len());
    Ok(decode_lossy(bytes))
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("Input is not valid UTF-8 ({}), replacing invalid bytes", e.utf8_error());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
