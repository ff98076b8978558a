//! Local preview of reference files chosen in the studio. Nothing is uploaded.

pub const NO_FILES: &str = "No files selected.";

/// What the host knows about a chosen file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size_bytes: u64,
    pub mime: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRow {
    pub name: String,
    pub size_label: String,
    /// Show a thumbnail from a temporary object URL.
    pub thumbnail: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPreview {
    pub rows: Vec<UploadRow>,
    pub empty_message: Option<&'static str>,
}

/// Size in kilobytes, rounded to the nearest whole number.
pub fn size_label(bytes: u64) -> String {
    format!("{} KB", (bytes as f64 / 1024.0).round() as u64)
}

pub fn preview(files: &[FileInfo]) -> UploadPreview {
    UploadPreview {
        rows: files
            .iter()
            .map(|f| UploadRow {
                name: f.name.clone(),
                size_label: size_label(f.size_bytes),
                thumbnail: f.mime.starts_with("image/"),
            })
            .collect(),
        empty_message: files.is_empty().then_some(NO_FILES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_get_thumbnails() {
        let files = vec![
            FileInfo {
                name: "sketch.png".into(),
                size_bytes: 1536,
                mime: "image/png".into(),
            },
            FileInfo {
                name: "brief.pdf".into(),
                size_bytes: 300,
                mime: "application/pdf".into(),
            },
        ];
        let view = preview(&files);
        assert_eq!(view.rows[0].size_label, "2 KB");
        assert!(view.rows[0].thumbnail);
        assert_eq!(view.rows[1].size_label, "0 KB");
        assert!(!view.rows[1].thumbnail);
        assert_eq!(view.empty_message, None);
    }

    #[test]
    fn nothing_selected() {
        assert_eq!(preview(&[]).empty_message, Some(NO_FILES));
    }
}
