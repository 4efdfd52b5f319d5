use std::fmt;

/// File-picker filter for tools that take office documents or images.
const ACCEPT_ANY_DOCUMENT: &str = ".pdf,.doc,.docx,.ppt,.pptx,.xls,.xlsx,.jpg,.jpeg,.png";
const ACCEPT_PDF_ONLY: &str = ".pdf";

/// The mock operation chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tool {
    Compress,
    Merge,
    Split,
    PdfToWord,
    PdfToPpt,
    PdfToExcel,
    PdfToJpg,
    /// Any identifier outside the known set.
    Other(String),
}

/// Every tool with a dedicated naming rule, in menu order.
pub const KNOWN_TOOLS: [Tool; 7] = [
    Tool::Compress,
    Tool::Merge,
    Tool::Split,
    Tool::PdfToWord,
    Tool::PdfToPpt,
    Tool::PdfToExcel,
    Tool::PdfToJpg,
];

impl Tool {
    /// Maps a tool identifier to a tool. Unknown identifiers become `Tool::Other`.
    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        KNOWN_TOOLS
            .iter()
            .find(|tool| tool.id() == id)
            .cloned()
            .unwrap_or_else(|| Tool::Other(id.to_string()))
    }

    pub fn id(&self) -> &str {
        match self {
            Tool::Compress => "compress",
            Tool::Merge => "merge",
            Tool::Split => "split",
            Tool::PdfToWord => "pdf-to-word",
            Tool::PdfToPpt => "pdf-to-ppt",
            Tool::PdfToExcel => "pdf-to-excel",
            Tool::PdfToJpg => "pdf-to-jpg",
            Tool::Other(id) => id,
        }
    }

    /// Human-readable name shown in titles and completion messages.
    pub fn display_name(&self) -> &str {
        match self {
            Tool::Compress => "Compress PDF",
            Tool::Merge => "Merge PDF",
            Tool::Split => "Split PDF",
            Tool::PdfToWord => "PDF to Word",
            Tool::PdfToPpt => "PDF to PowerPoint",
            Tool::PdfToExcel => "PDF to Excel",
            Tool::PdfToJpg => "PDF to JPG",
            Tool::Other(id) => id,
        }
    }

    /// Extensions a file picker should offer for this tool.
    ///
    /// This is only a hint for the picker; selection is validated by MIME type.
    pub fn accept_filter(&self) -> &'static str {
        let id = self.id();
        if id.contains("pdf-to-") || id.contains("to-pdf") {
            ACCEPT_ANY_DOCUMENT
        } else {
            ACCEPT_PDF_ONLY
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy)]
enum NamingRule {
    /// `{base}{suffix}.{extension}`
    Derived {
        suffix: &'static str,
        extension: &'static str,
    },
    /// Same name whatever the input was.
    Fixed(&'static str),
}

const NAMING_RULES: &[(&str, NamingRule)] = &[
    (
        "compress",
        NamingRule::Derived {
            suffix: "_compressed",
            extension: "pdf",
        },
    ),
    ("merge", NamingRule::Fixed("merged_document.pdf")),
    (
        "split",
        NamingRule::Derived {
            suffix: "_part1",
            extension: "pdf",
        },
    ),
    (
        "pdf-to-word",
        NamingRule::Derived {
            suffix: "",
            extension: "docx",
        },
    ),
    (
        "pdf-to-ppt",
        NamingRule::Derived {
            suffix: "",
            extension: "pptx",
        },
    ),
    (
        "pdf-to-excel",
        NamingRule::Derived {
            suffix: "",
            extension: "xlsx",
        },
    ),
    (
        "pdf-to-jpg",
        NamingRule::Derived {
            suffix: "_page1",
            extension: "jpg",
        },
    ),
];

/// Output filename for `tool` applied to a file called `original_name`.
///
/// The base name is everything before the first `.` of the original name.
pub fn derive_output_name(tool: &Tool, original_name: &str) -> String {
    let base = original_name
        .split_once('.')
        .map_or(original_name, |(base, _)| base);

    let rule = NAMING_RULES
        .iter()
        .find(|(id, _)| *id == tool.id())
        .map(|(_, rule)| *rule);

    match rule {
        Some(NamingRule::Fixed(name)) => name.to_string(),
        Some(NamingRule::Derived { suffix, extension }) => format!("{base}{suffix}.{extension}"),
        None => format!("{base}_{}.pdf", tool.id()),
    }
}
