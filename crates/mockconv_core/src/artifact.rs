use crate::{derive_output_name, InputFile, Tool};

/// Generic content type; the payload is never a real file of the target format.
pub const ARTIFACT_MIME_HINT: &str = "application/octet-stream";

/// Placeholder output offered for download once a run completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub filename: String,
    pub content: Vec<u8>,
    pub mime_hint: String,
}

/// Builds the mock output for `input` processed with `tool`.
///
/// `completed_at` is a human-readable timestamp supplied by the caller's clock.
pub fn generate_artifact(tool: &Tool, input: &InputFile, completed_at: &str) -> OutputArtifact {
    let content = format!(
        "This is a mock file representing the processed output.\n\n\
         Original file: {name}\n\
         Tool used: {tool}\n\
         Processing completed at: {completed_at}\n\n\
         In a real application, this would be the actual processed PDF content.",
        name = input.name(),
        tool = tool.id(),
    );

    OutputArtifact {
        filename: derive_output_name(tool, input.name()),
        content: content.into_bytes(),
        mime_hint: ARTIFACT_MIME_HINT.to_string(),
    }
}
