use crate::accept::AcceptSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Jpg,
    Png,
    Word,
    Excel,
    Ppt,
    Html,
    Text,
    Epub,
}

impl Format {
    pub const ALL: [Format; 8] = [
        Format::Jpg,
        Format::Png,
        Format::Word,
        Format::Excel,
        Format::Ppt,
        Format::Html,
        Format::Text,
        Format::Epub,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Jpg => "jpg",
            Format::Png => "png",
            Format::Word => "word",
            Format::Excel => "excel",
            Format::Ppt => "ppt",
            Format::Html => "html",
            Format::Text => "text",
            Format::Epub => "epub",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            Format::Jpg => "jpg",
            Format::Png => "png",
            Format::Word => "docx",
            Format::Excel => "xlsx",
            Format::Ppt => "pptx",
            Format::Html => "html",
            Format::Text => "txt",
            Format::Epub => "epub",
        }
    }

    /// Extensions accepted when converting this format into a pdf
    pub fn source_accept(&self) -> &'static str {
        match self {
            Format::Jpg => ".jpg,.jpeg",
            Format::Png => ".png",
            Format::Word => ".doc,.docx",
            Format::Excel => ".xls,.xlsx",
            Format::Ppt => ".ppt,.pptx",
            Format::Html => ".html,.htm",
            Format::Text => ".txt",
            Format::Epub => ".epub",
        }
    }
}

impl std::str::FromStr for Format {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Jpg => write!(f, "JPG"),
            Format::Png => write!(f, "PNG"),
            Format::Word => write!(f, "Word"),
            Format::Excel => write!(f, "Excel"),
            Format::Ppt => write!(f, "PowerPoint"),
            Format::Html => write!(f, "HTML"),
            Format::Text => write!(f, "Text"),
            Format::Epub => write!(f, "EPUB"),
        }
    }
}

/// Upload tools, each backed by one endpoint of the processing api
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Merge,
    Split,
    Compress,
    Convert(Format),
    ConvertToPdf(Format),
    Secure,
    Watermark,
    Rotate,
    RemovePages,
    PageNumbers,
    Unlock,
    Repair,
    PdfA,
}

impl Tool {
    pub fn endpoint(&self) -> String {
        match self {
            Tool::Merge => String::from("/api/merge"),
            Tool::Split => String::from("/api/split"),
            Tool::Compress => String::from("/compress"),
            Tool::Convert(format) => format!("/api/convert-{}", format.as_str()),
            Tool::ConvertToPdf(format) => format!("/api/convert-{}-to-pdf", format.as_str()),
            Tool::Secure => String::from("/api/protect"),
            Tool::Watermark => String::from("/api/pdf-add-watermark"),
            Tool::Rotate => String::from("/pdf-rotate-pages"),
            Tool::RemovePages => String::from("/api/pdf-remove-pages"),
            Tool::PageNumbers => String::from("/pdf-add-page-numbers"),
            Tool::Unlock => String::from("/pdf-unlock"),
            Tool::Repair => String::from("/api/pdf-repair"),
            Tool::PdfA => String::from("/convert-pdf-to-pdfa"),
        }
    }

    pub fn accept(&self) -> AcceptSpec {
        match self {
            Tool::ConvertToPdf(format) => AcceptSpec::parse(format.source_accept()),
            _ => AcceptSpec::parse(".pdf"),
        }
    }

    pub fn multiple(&self) -> bool {
        matches!(
            self,
            Tool::Merge
                | Tool::ConvertToPdf(_)
                | Tool::Watermark
                | Tool::Rotate
                | Tool::RemovePages
                | Tool::PageNumbers
                | Tool::Unlock
                | Tool::Repair
        )
    }

    /// Least amount of files needed before processing makes sense
    pub fn min_files(&self) -> usize {
        match self {
            Tool::Merge => 2,
            _ => 1,
        }
    }

    pub fn file_field(&self, file_count: usize) -> &'static str {
        match self {
            Tool::Merge
            | Tool::Watermark
            | Tool::Rotate
            | Tool::RemovePages
            | Tool::PageNumbers
            | Tool::Unlock
            | Tool::Repair => "files",
            Tool::ConvertToPdf(_) if file_count > 1 => "files[]",
            _ => "file",
        }
    }

    pub fn extra_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Tool::Compress => vec![("compression_level", String::from("medium"))],
            Tool::Convert(format) => vec![("output_format", format.as_str().to_string())],
            Tool::ConvertToPdf(format) => vec![("input_format", format.as_str().to_string())],
            _ => Vec::new(),
        }
    }

    pub fn download_name(&self, first_file: Option<&str>, file_count: usize) -> String {
        match self {
            Tool::Merge => String::from("merged.pdf"),
            Tool::Split => String::from("split_pages.zip"),
            Tool::Compress => String::from("compressed.pdf"),
            Tool::Convert(format) => format!("converted.{}", format.file_extension()),
            Tool::ConvertToPdf(_) => String::from("converted.pdf"),
            Tool::Secure => String::from("protected.pdf"),
            Tool::Watermark => per_file("watermarked", first_file, file_count),
            Tool::Rotate => per_file("rotated", first_file, file_count),
            Tool::RemovePages => per_file("pages_removed", first_file, file_count),
            Tool::PageNumbers => per_file("numbered", first_file, file_count),
            Tool::Unlock => per_file("unlocked", first_file, file_count),
            Tool::Repair => per_file("repaired", first_file, file_count),
            Tool::PdfA => format!("pdfa_{}", first_file.unwrap_or("document.pdf")),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Tool::Merge => String::from("Merge PDF"),
            Tool::Split => String::from("Split PDF"),
            Tool::Compress => String::from("Compress PDF"),
            Tool::Convert(format) => format!("PDF to {format}"),
            Tool::ConvertToPdf(format) => format!("{format} to PDF"),
            Tool::Secure => String::from("Protect PDF"),
            Tool::Watermark => String::from("Add watermark"),
            Tool::Rotate => String::from("Rotate PDF"),
            Tool::RemovePages => String::from("Remove pages"),
            Tool::PageNumbers => String::from("Add page numbers"),
            Tool::Unlock => String::from("Unlock PDF"),
            Tool::Repair => String::from("Repair PDF"),
            Tool::PdfA => String::from("PDF to PDF/A"),
        }
    }

    pub fn catalogue() -> Vec<Tool> {
        let mut tools = vec![Tool::Merge, Tool::Split, Tool::Compress];
        tools.extend(
            [Format::Jpg, Format::Png, Format::Word, Format::Excel, Format::Ppt, Format::Html]
                .into_iter()
                .map(Tool::Convert),
        );
        tools.extend(
            [Format::Jpg, Format::Png, Format::Word, Format::Excel, Format::Ppt, Format::Html]
                .into_iter()
                .map(Tool::ConvertToPdf),
        );
        tools.extend([
            Tool::Secure,
            Tool::Watermark,
            Tool::Rotate,
            Tool::RemovePages,
            Tool::PageNumbers,
            Tool::Unlock,
            Tool::Repair,
            Tool::PdfA,
        ]);
        tools
    }
}

/// One file comes back under its own name, several come back zipped
fn per_file(prefix: &str, first_file: Option<&str>, file_count: usize) -> String {
    match (file_count, first_file) {
        (1, Some(name)) => format!("{prefix}_{name}"),
        _ => format!("{prefix}_pdfs.zip"),
    }
}
