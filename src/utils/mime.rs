//! MIME type detection utilities

/// Guess MIME by inspecting bytes (magic numbers)
pub fn guess_mime_from_bytes(bytes: &[u8]) -> Option<String> {
    infer::get(bytes).map(|kind| kind.mime_type().to_string())
}

/// Guess MIME by file path or URL (extension-based)
pub fn guess_mime_from_path_or_url(path_or_url: &str) -> Option<String> {
    mime_guess::from_path(path_or_url)
        .first_raw()
        .map(|mime| mime.to_string())
}

/// Combined guess: prefer bytes, fall back to extension, otherwise octet-stream
pub fn guess_mime(bytes: Option<&[u8]>, path_or_url: Option<&str>) -> String {
    if let Some(bytes) = bytes
        && let Some(mime) = guess_mime_from_bytes(bytes)
    {
        return mime;
    }
    if let Some(path) = path_or_url
        && let Some(mime) = guess_mime_from_path_or_url(path)
    {
        return mime;
    }
    "application/octet-stream".to_string()
}
