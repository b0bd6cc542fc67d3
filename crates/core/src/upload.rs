//! Upload destination and naming rules.
//!
//! Every multipart field name maps to a fixed folder under the upload root.
//! Stored file names are the sanitized original stem plus a millisecond
//! timestamp, so repeated uploads of `logo.png` never collide.

/// Multipart field name → folder under the upload root.
pub const UPLOAD_FOLDERS: &[(&str, &str)] = &[
    ("branch_image", "branches"),
    ("court_image", "courts"),
    ("facility_icon", "facilities"),
    ("program_image", "programs"),
    ("trainer_image", "trainers"),
    ("testimonial_image", "testimonials"),
    ("event_image", "events"),
    ("collaboration_logo", "collaborations"),
    ("menu_icon", "menus"),
];

/// Accepted image MIME types.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/gif",
    "image/svg+xml",
];

/// Stem used when sanitizing leaves nothing.
const FALLBACK_STEM: &str = "file";

/// Longest stem kept from the original name.
const MAX_STEM_LEN: usize = 80;

/// Folder for a multipart field, or `None` if the field is not an upload slot.
pub fn folder_for_field(field: &str) -> Option<&'static str> {
    UPLOAD_FOLDERS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, folder)| *folder)
}

/// Whether `content_type` is an accepted image type (parameters ignored).
pub fn is_allowed_image(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    ALLOWED_IMAGE_TYPES.contains(&essence.as_str())
}

/// Split `name` into a sanitized stem and a lowercased extension.
///
/// Directory components are discarded. The stem keeps lowercase ASCII
/// alphanumerics; every other run of characters collapses to a single `-`.
pub fn sanitize_file_name(name: &str) -> (String, Option<String>) {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let (stem, ext) = match base.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        _ => (base, None),
    };

    let mut out = String::with_capacity(stem.len());
    let mut pending_dash = false;
    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out.truncate(MAX_STEM_LEN);
    let out = out.trim_end_matches('-').to_string();
    let stem = if out.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        out
    };

    let ext = ext
        .map(|e| {
            e.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .filter(|e| !e.is_empty());

    (stem, ext)
}

/// Final on-disk name: `{stem}-{timestamp_millis}.{ext}`.
pub fn stored_file_name(original: &str, timestamp_millis: i64) -> String {
    let (stem, ext) = sanitize_file_name(original);
    match ext {
        Some(ext) => format!("{stem}-{timestamp_millis}.{ext}"),
        None => format!("{stem}-{timestamp_millis}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fields_map_to_folders() {
        assert_eq!(folder_for_field("branch_image"), Some("branches"));
        assert_eq!(folder_for_field("collaboration_logo"), Some("collaborations"));
        assert_eq!(folder_for_field("avatar"), None);
    }

    #[test]
    fn image_mime_filter() {
        assert!(is_allowed_image("image/png"));
        assert!(is_allowed_image("IMAGE/JPEG"));
        assert!(is_allowed_image("image/svg+xml; charset=utf-8"));
        assert!(!is_allowed_image("application/pdf"));
        assert!(!is_allowed_image("text/html"));
        assert!(!is_allowed_image(""));
    }

    #[test]
    fn sanitizes_stem_and_extension() {
        assert_eq!(
            sanitize_file_name("My Court Photo (1).JPG"),
            ("my-court-photo-1".to_string(), Some("jpg".to_string()))
        );
    }

    #[test]
    fn strips_directories() {
        assert_eq!(
            sanitize_file_name("../../etc/passwd"),
            ("passwd".to_string(), None)
        );
        assert_eq!(
            sanitize_file_name(r"C:\Users\me\logo.png"),
            ("logo".to_string(), Some("png".to_string()))
        );
    }

    #[test]
    fn empty_stem_falls_back() {
        assert_eq!(sanitize_file_name("???.png").0, "file");
        assert_eq!(sanitize_file_name("").0, "file");
        // A leading dot is a hidden file, not an extension.
        assert_eq!(
            sanitize_file_name(".png"),
            ("png".to_string(), None)
        );
    }

    #[test]
    fn stored_name_appends_timestamp() {
        assert_eq!(
            stored_file_name("Pool Side.webp", 1_700_000_000_123),
            "pool-side-1700000000123.webp"
        );
        assert_eq!(stored_file_name("README", 5), "readme-5");
    }

    #[test]
    fn long_stems_are_truncated() {
        let long = format!("{}.png", "a".repeat(200));
        let (stem, _) = sanitize_file_name(&long);
        assert_eq!(stem.len(), MAX_STEM_LEN);
    }
}
