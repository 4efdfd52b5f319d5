use crate::PipelineError;

/// MIME types accepted for upload, matched exactly.
pub const SUPPORTED_MIME_TYPES: [&str; 10] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "image/jpeg",
    "image/jpg",
    "image/png",
];

const FALLBACK_MIME: &str = "application/octet-stream";

const EXTENSION_MIME: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
];

/// A file as reported by a picker or drop target, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// A file that passed the MIME allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    name: String,
    size_bytes: u64,
    mime_type: String,
}

impl InputFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

pub fn is_supported_mime(mime_type: &str) -> bool {
    SUPPORTED_MIME_TYPES.contains(&mime_type)
}

/// Checks a descriptor against the allow-list.
pub fn validate_file(descriptor: FileDescriptor) -> Result<InputFile, PipelineError> {
    if !is_supported_mime(&descriptor.mime_type) {
        return Err(PipelineError::UnsupportedType {
            mime: descriptor.mime_type,
        });
    }
    Ok(InputFile {
        name: descriptor.name,
        size_bytes: descriptor.size_bytes,
        mime_type: descriptor.mime_type,
    })
}

/// Best-effort MIME type from a file name's last extension.
pub fn guess_mime_type(name: &str) -> &'static str {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return FALLBACK_MIME;
    };
    EXTENSION_MIME
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map_or(FALLBACK_MIME, |(_, mime)| *mime)
}

/// Formats a byte count as e.g. `"1.5 KB"`, using 1024-based units up to GB.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
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
