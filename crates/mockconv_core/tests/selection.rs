use mockconv_core::{
    format_file_size, generate_artifact, validate_file, FileDescriptor, PipelineError, Tool,
    ARTIFACT_MIME_HINT, SUPPORTED_MIME_TYPES,
};

fn descriptor(name: &str, mime: &str) -> FileDescriptor {
    FileDescriptor {
        name: name.to_string(),
        size_bytes: 2048,
        mime_type: mime.to_string(),
    }
}

#[test]
fn every_allow_listed_type_is_accepted() {
    for mime in SUPPORTED_MIME_TYPES {
        let input = validate_file(descriptor("file", mime)).expect("accepted");
        assert_eq!(input.mime_type(), mime);
        assert_eq!(input.size_bytes(), 2048);
    }
}

#[test]
fn other_types_are_rejected_with_user_message() {
    for mime in ["text/plain", "application/zip", "", "APPLICATION/PDF", "image/gif"] {
        let err = validate_file(descriptor("file", mime)).unwrap_err();
        assert_eq!(
            err,
            PipelineError::UnsupportedType {
                mime: mime.to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Please select a supported file type (PDF, Word, PowerPoint, Excel, or image)."
        );
    }
}

#[test]
fn file_sizes_are_human_readable() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(1_048_576), "1 MB");
    assert_eq!(format_file_size(1_288_490_189), "1.2 GB");
    assert_eq!(format_file_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
}

#[test]
fn artifact_is_a_labelled_placeholder() {
    let input = validate_file(descriptor("report.pdf", "application/pdf")).unwrap();
    let artifact = generate_artifact(&Tool::Compress, &input, "2026-10-14 09:30:00");

    assert_eq!(artifact.filename, "report_compressed.pdf");
    assert_eq!(artifact.mime_hint, ARTIFACT_MIME_HINT);
    let text = String::from_utf8(artifact.content).unwrap();
    assert!(text.starts_with("This is a mock file representing the processed output.\n\n"));
    assert!(text.contains("Original file: report.pdf\n"));
    assert!(text.contains("Tool used: compress\n"));
    assert!(text.contains("Processing completed at: 2026-10-14 09:30:00\n"));
    assert!(text.ends_with("this would be the actual processed PDF content."));
}
