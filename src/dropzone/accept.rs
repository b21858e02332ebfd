//! Accept-pattern matching for file selections.
//!
//! An [`Accept`] maps MIME-type patterns (exact, wildcard-subtype, or `*/*`)
//! to optional lists of permitted file extensions. Files are judged by name:
//! the MIME type is derived from the extension, so the rules work the same on
//! every platform the surface renders on.

/// One MIME pattern plus the extensions it admits.
///
/// An empty extension list admits any extension for the pattern. A non-empty
/// list also vouches for files whose MIME type cannot be derived, so callers
/// can admit unregistered extensions explicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct AcceptPattern {
    mime: String,
    extensions: Vec<String>,
}

impl AcceptPattern {
    fn matches(&self, name: &str) -> bool {
        let ext = file_extension(name);
        let ext_ok = self.extensions.is_empty()
            || ext
                .as_deref()
                .is_some_and(|e| self.extensions.iter().any(|allowed| allowed == e));
        match ext.as_deref().and_then(mime_for_extension) {
            Some(mime) => ext_ok && mime_matches(&self.mime, mime),
            // Unknown MIME type: only an explicit extension list can vouch.
            None => ext_ok && !self.extensions.is_empty(),
        }
    }
}

/// Accepted MIME patterns for an upload surface.
///
/// The default accepts images only, matching the surface's default
/// configuration. An `Accept` built with [`Accept::new`] and no patterns
/// imposes no restriction at all.
#[derive(Clone, Debug, PartialEq)]
pub struct Accept {
    patterns: Vec<AcceptPattern>,
}

impl Default for Accept {
    fn default() -> Self {
        Self::images()
    }
}

impl Accept {
    /// An empty set of patterns; matches everything.
    pub fn new() -> Self {
        Self { patterns: Vec::new() }
    }

    /// Images of any format, any extension.
    pub fn images() -> Self {
        Self::new().mime("image/*", &[])
    }

    /// Add a MIME pattern with an optional extension list.
    ///
    /// Extensions are normalized to lowercase with a leading dot, so
    /// `"png"` and `".PNG"` both become `".png"`.
    pub fn mime(mut self, pattern: &str, extensions: &[&str]) -> Self {
        self.patterns.push(AcceptPattern {
            mime: pattern.to_ascii_lowercase(),
            extensions: extensions.iter().map(|e| normalize_extension(e)).collect(),
        });
        self
    }

    /// Whether a file with this name passes any pattern.
    pub fn allows(&self, name: &str) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(name))
    }

    /// Render the `accept` attribute value for a file input.
    pub fn to_attr(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for pattern in &self.patterns {
            parts.push(&pattern.mime);
            for ext in &pattern.extensions {
                parts.push(ext);
            }
        }
        parts.join(",")
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_ascii_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

/// Lowercased extension of a file name, with the leading dot. Dotfiles and
/// extensionless names yield `None`.
fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_ascii_lowercase()))
}

fn mime_matches(pattern: &str, mime: &str) -> bool {
    if pattern == "*/*" || pattern == mime {
        return true;
    }
    match pattern.strip_suffix("/*") {
        Some(kind) => mime.split_once('/').is_some_and(|(k, _)| k == kind),
        None => false,
    }
}

/// MIME type for a normalized (lowercase, leading-dot) extension.
fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext {
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".gif" => "image/gif",
        ".webp" => "image/webp",
        ".bmp" => "image/bmp",
        ".svg" => "image/svg+xml",
        ".ico" => "image/x-icon",
        ".avif" => "image/avif",
        ".tif" | ".tiff" => "image/tiff",
        ".pdf" => "application/pdf",
        ".json" => "application/json",
        ".zip" => "application/zip",
        ".gz" => "application/gzip",
        ".txt" => "text/plain",
        ".md" => "text/markdown",
        ".csv" => "text/csv",
        ".html" | ".htm" => "text/html",
        ".css" => "text/css",
        ".js" => "text/javascript",
        ".xml" => "text/xml",
        ".mp3" => "audio/mpeg",
        ".wav" => "audio/wav",
        ".ogg" => "audio/ogg",
        ".mp4" => "video/mp4",
        ".webm" => "video/webm",
        ".mov" => "video/quicktime",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_accept_common_formats() {
        let accept = Accept::images();
        assert!(accept.allows("photo.png"));
        assert!(accept.allows("photo.jpeg"));
        assert!(accept.allows("PHOTO.PNG"));
        assert!(accept.allows("animation.webp"));
    }

    #[test]
    fn images_reject_other_types() {
        let accept = Accept::images();
        assert!(!accept.allows("doc.pdf"));
        assert!(!accept.allows("track.mp3"));
        assert!(!accept.allows("notes.txt"));
    }

    #[test]
    fn exact_mime_pattern() {
        let accept = Accept::new().mime("application/pdf", &[]);
        assert!(accept.allows("doc.pdf"));
        assert!(!accept.allows("photo.png"));
    }

    #[test]
    fn wildcard_subtype_pattern() {
        let accept = Accept::new().mime("audio/*", &[]);
        assert!(accept.allows("track.mp3"));
        assert!(accept.allows("take.wav"));
        assert!(!accept.allows("clip.mp4"));
    }

    #[test]
    fn extension_list_narrows_the_pattern() {
        let accept = Accept::new().mime("image/*", &[".png"]);
        assert!(accept.allows("photo.png"));
        assert!(!accept.allows("photo.jpg"));
    }

    #[test]
    fn extension_list_vouches_for_unknown_mime() {
        let accept = Accept::new().mime("application/octet-stream", &["bin"]);
        assert!(accept.allows("firmware.bin"));
        assert!(!accept.allows("firmware.hex"));
    }

    #[test]
    fn star_star_accepts_any_known_type() {
        let accept = Accept::new().mime("*/*", &[]);
        assert!(accept.allows("photo.png"));
        assert!(accept.allows("doc.pdf"));
        // Still nothing to go on for an unknown extension.
        assert!(!accept.allows("mystery.xyz"));
    }

    #[test]
    fn empty_accept_is_unrestricted() {
        let accept = Accept::new();
        assert!(accept.allows("anything.xyz"));
        assert!(accept.allows("no-extension"));
    }

    #[test]
    fn extensionless_and_dotfiles_do_not_match_patterns() {
        let accept = Accept::images();
        assert!(!accept.allows("README"));
        assert!(!accept.allows(".gitignore"));
    }

    #[test]
    fn attr_lists_patterns_and_extensions() {
        assert_eq!(Accept::images().to_attr(), "image/*");
        let accept = Accept::new().mime("image/*", &["png", ".JPG"]);
        assert_eq!(accept.to_attr(), "image/*,.png,.jpg");
    }
}
