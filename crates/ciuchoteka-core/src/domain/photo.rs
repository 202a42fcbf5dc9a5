//! Helpers for the encoded photo payloads stored on records.

/// Approximate decoded size in bytes of a base64 payload.
///
/// A `data:` URL prefix is stripped first. Padding characters are subtracted.
pub fn encoded_payload_size(photo: &str) -> usize {
    let data = match photo.split_once(',') {
        Some((_, data)) if !data.is_empty() => data,
        _ => photo,
    };
    let padding = data.bytes().filter(|b| *b == b'=').count();
    (data.len() * 3 / 4).saturating_sub(padding)
}

/// Human-readable byte count, base 1024: `0 Bytes`, `512 Bytes`, `1.5 KB`.
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}
