//! Human friendly urls and the pages they land on
//!
//! The server uses this to know which paths must serve the app,
//! the app uses it to render the right tool under an alias.

use crate::tool::{Format, Tool};

/// Pages the app renders by itself
pub const PAGES: &[&str] = &[
    "/",
    "/tools",
    "/features",
    "/faq",
    "/privacy_policy",
    "/security",
    "/cookies",
    "/pricing",
    "/success",
    "/dashboard",
    "/login",
    "/tools/merge",
    "/tools/split",
    "/tools/compress",
    "/tools/convert",
    "/tools/convert_to_pdf",
    "/tools/secure",
    "/pdf_add_watermark",
    "/rotate_pdf",
    "/remove_pages",
    "/pdf_add_page_numbers",
    "/unlock_pdf",
    "/repair_pdf",
    "/pdf_to_pdfa",
];

/// (alias, destination)
#[rustfmt::skip]
pub const REWRITES: &[(&str, &str)] = &[
    // Organize
    ("/split_pdf", "/tools/split"),
    ("/merge_pdf", "/tools/merge"),
    ("/pdf_split", "/tools/split"),
    ("/pdf_split_pages", "/tools/split"),
    ("/pdf_cutter", "/tools/split"),
    ("/pdf_splitter_online", "/tools/split"),
    ("/pdf_page_extractor", "/tools/split"),
    ("/pdf_extract", "/tools/split"),
    ("/pdf_combiner", "/tools/merge"),
    ("/pdf_joiner", "/tools/merge"),
    ("/pdf_merge_online", "/tools/merge"),
    ("/pdf_join", "/tools/merge"),
    ("/combine_pdf", "/tools/merge"),

    // Optimize
    ("/compress_pdf", "/tools/compress"),
    ("/pdf_file_compressor", "/tools/compress"),
    ("/pdf_reduce_size", "/tools/compress"),
    ("/pdf_resize", "/tools/compress"),
    ("/pdf_compressor_online", "/tools/compress"),
    ("/pdf_size_reducer_online", "/tools/compress"),

    // Convert from pdf
    ("/convert_pdf", "/tools/convert"),
    ("/pdf_converter", "/tools/convert"),
    ("/pdf_to_jpg", "/tools/convert?format=jpg"),
    ("/pdf_to_png", "/tools/convert?format=png"),
    ("/pdf_to_ppt", "/tools/convert?format=ppt"),
    ("/pdf_to_excel", "/tools/convert?format=excel"),
    ("/pdf_to_word", "/tools/convert?format=word"),
    ("/pdf_to_html", "/tools/convert?format=html"),
    ("/pdf_to_docx", "/tools/convert?format=word"),
    ("/pdf_to_powerpoint", "/tools/convert?format=ppt"),
    ("/pdf_to_text_converter", "/tools/convert?format=text"),
    ("/pdf_to_epub", "/tools/convert?format=epub"),

    // Convert to pdf
    ("/convert_to_pdf", "/tools/convert_to_pdf"),
    ("/jpg_to_pdf", "/tools/convert_to_pdf?format=jpg"),
    ("/png_to_pdf", "/tools/convert_to_pdf?format=png"),
    ("/word_to_pdf", "/tools/convert_to_pdf?format=word"),
    ("/excel_to_pdf", "/tools/convert_to_pdf?format=excel"),
    ("/ppt_to_pdf", "/tools/convert_to_pdf?format=ppt"),
    ("/html_to_pdf", "/tools/convert_to_pdf?format=html"),
    ("/docx_to_pdf", "/tools/convert_to_pdf?format=word"),
    ("/picture_to_pdf", "/tools/convert_to_pdf?format=jpg"),
    ("/epub_into_pdf", "/tools/convert_to_pdf?format=epub"),

    // Secure
    ("/pdf_secure", "/tools/secure"),
    ("/pdf_password_protector", "/tools/secure"),
    ("/pdf_lock", "/tools/secure"),
    ("/protect_pdf", "/tools/secure"),

    // Unlock
    ("/pdf_to_unlock", "/unlock_pdf"),
    ("/pdf_file_unlocked", "/unlock_pdf"),
    ("/pdf_password_unlock", "/unlock_pdf"),
    ("/pdf_unlock_without_password", "/unlock_pdf"),
    ("/pdf_unlocker_free", "/unlock_pdf"),
    ("/unlock_a_pdf", "/unlock_pdf"),
    ("/pdf_lock_remover", "/unlock_pdf"),

    // Pages
    ("/pdf_pages_remover", "/remove_pages"),
    ("/pdf_remove_pages", "/remove_pages"),
    ("/pdf_page_remover_online", "/remove_pages"),
    ("/remove_pages_pdf", "/remove_pages"),
    ("/remove_page_from_pdf_document", "/remove_pages"),
    ("/pdf_remover", "/remove_pages"),
    ("/pdf_rotate_online", "/rotate_pdf"),
    ("/pdf_page_add", "/pdf_add_page_numbers"),

    // Archive
    ("/pdf_to_pdf", "/pdf_to_pdfa"),

    // Watermark
    ("/pdf_watermark_remover", "/pdf_add_watermark"),

    // Generic
    ("/pdf_viewer", "/"),
    ("/pdf_online", "/"),
    ("/i_love_pdf", "/"),
];

/// Destination of an alias, the path itself if it's already a page
pub fn resolve(path: &str) -> Option<&'static str> {
    let path = normalize(path);

    if let Some(page) = PAGES.iter().find(|page| **page == path) {
        return Some(*page);
    }

    REWRITES
        .iter()
        .find(|(alias, _)| *alias == path)
        .map(|(_, destination)| *destination)
}

pub fn is_page(path: &str) -> bool {
    resolve(path).is_some()
}

/// Reads a destination (or any app url) as a tool
pub fn tool_at(destination: &str) -> Option<Tool> {
    let (path, query) = destination
        .split_once('?')
        .unwrap_or((destination, ""));

    let format = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "format")
        .and_then(|(_, value)| value.parse::<Format>().ok());

    let tool = match normalize(path).as_str() {
        "/tools/merge" => Tool::Merge,
        "/tools/split" => Tool::Split,
        "/tools/compress" => Tool::Compress,
        "/tools/convert" => Tool::Convert(format.unwrap_or(Format::Word)),
        "/tools/convert_to_pdf" => Tool::ConvertToPdf(format.unwrap_or(Format::Jpg)),
        "/tools/secure" => Tool::Secure,
        "/pdf_add_watermark" => Tool::Watermark,
        "/rotate_pdf" => Tool::Rotate,
        "/remove_pages" => Tool::RemovePages,
        "/pdf_add_page_numbers" => Tool::PageNumbers,
        "/unlock_pdf" => Tool::Unlock,
        "/repair_pdf" => Tool::Repair,
        "/pdf_to_pdfa" => Tool::PdfA,
        _ => return None,
    };

    Some(tool)
}

/// Canonical url of a tool page
pub fn tool_path(tool: &Tool) -> String {
    match tool {
        Tool::Merge => String::from("/tools/merge"),
        Tool::Split => String::from("/tools/split"),
        Tool::Compress => String::from("/tools/compress"),
        Tool::Convert(format) => format!("/tools/convert?format={}", format.as_str()),
        Tool::ConvertToPdf(format) => format!("/tools/convert_to_pdf?format={}", format.as_str()),
        Tool::Secure => String::from("/tools/secure"),
        Tool::Watermark => String::from("/pdf_add_watermark"),
        Tool::Rotate => String::from("/rotate_pdf"),
        Tool::RemovePages => String::from("/remove_pages"),
        Tool::PageNumbers => String::from("/pdf_add_page_numbers"),
        Tool::Unlock => String::from("/unlock_pdf"),
        Tool::Repair => String::from("/repair_pdf"),
        Tool::PdfA => String::from("/pdf_to_pdfa"),
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return String::from("/");
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
