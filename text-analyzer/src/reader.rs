use std::fs;

/// Failure to load analyzer input from disk.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read a text file with an optional explicit encoding and normalize CRLF.
/// Supported encodings: "utf-8" (default), "shift_jis" (aliases: "sjis",
/// "cp932", "windows-31j"), "windows-1252", "utf-16le", "utf-16be".
/// Unknown values fall back to UTF-8 (lossy).
pub fn read_text_file(path: &str, encoding: Option<&str>) -> Result<String, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Io { path: path.to_string(), source })?;
    Ok(decode_bytes(&bytes, encoding))
}

/// Decode raw bytes per the encoding hint; CRLF is normalized to LF.
pub fn decode_bytes(bytes: &[u8], encoding: Option<&str>) -> String {
    let lower = encoding.unwrap_or("").to_ascii_lowercase();
    let text: String = match lower.as_str() {
        "utf-8" | "utf8" | "" => String::from_utf8_lossy(bytes).to_string(),
        "shift_jis" | "sjis" | "cp932" | "windows-31j" => {
            let (cow, _enc_used, _had_errors) = encoding_rs::SHIFT_JIS.decode(bytes);
            cow.into_owned()
        }
        "windows-1252" | "cp1252" => {
            let (cow, _enc_used, _had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
            cow.into_owned()
        }
        "utf-16le" | "utf16le" => decode_utf16(bytes, true),
        "utf-16be" | "utf16be" => decode_utf16(bytes, false),
        _ => String::from_utf8_lossy(bytes).to_string(),
    };
    text.replace('\r', "")
}

fn decode_utf16(bytes: &[u8], little_endian: bool) -> String {
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len() / 2);
    let mut i = 0usize;
    // Skip BOM if present
    if bytes.len() >= 2 {
        let bom = [bytes[0], bytes[1]];
        if (little_endian && bom == [0xFF, 0xFE]) || (!little_endian && bom == [0xFE, 0xFF]) {
            i = 2;
        }
    }
    while i + 1 < bytes.len() {
        let pair = [bytes[i], bytes[i + 1]];
        units.push(if little_endian {
            u16::from_le_bytes(pair)
        } else {
            u16::from_be_bytes(pair)
        });
        i += 2;
    }
    String::from_utf16_lossy(&units)
}
