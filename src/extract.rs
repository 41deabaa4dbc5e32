use std::path::Path;

use anyhow::Context;

/// Text recovered from a slide file, with a flag telling whether extraction
/// actually succeeded or the placeholder was substituted.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub content: String,
    pub is_placeholder: bool,
}

/// Extracts slide text from a PDF or plain-text file. Extraction trouble is
/// never fatal: the caller gets a templated placeholder derived from the
/// filename instead.
pub fn extract_slide_text(path: &Path) -> ExtractedText {
    match try_extract(path) {
        Ok(content) if !content.trim().is_empty() => ExtractedText {
            content,
            is_placeholder: false,
        },
        Ok(_) => {
            tracing::warn!(path = %path.display(), "extracted text was empty, using placeholder");
            placeholder(path)
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "extraction failed, using placeholder");
            placeholder(path)
        }
    }
}

fn try_extract(path: &Path) -> anyhow::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => {
            let pages = pdf_extract::extract_text_by_pages(path)
                .context("failed to read PDF content")?;
            Ok(join_pages(&pages))
        }
        "txt" | "md" => std::fs::read_to_string(path).context("failed to read text file"),
        other => anyhow::bail!("unsupported slide format: {other:?}"),
    }
}

/// Rebuilds the document with a Thai marker ahead of each page, so page
/// boundaries stay visible in previews and reports.
fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for (index, page) in pages.iter().enumerate() {
        text.push_str(&format!("\n--- หน้า {} ---\n", index + 1));
        text.push_str(page);
    }
    text
}

/// Templated Thai placeholder built from the file stem, so an unreadable
/// file still produces something the keyword scorer can chew on.
pub fn placeholder(path: &Path) -> ExtractedText {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("ไม่ทราบชื่อไฟล์");
    ExtractedText {
        content: format!(
            "เอกสารประกอบการสอน: {stem}\n(ไม่สามารถอ่านเนื้อหาไฟล์ได้ ใช้ชื่อไฟล์ในการประเมินเบื้องต้น)"
        ),
        is_placeholder: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn unreadable_file_degrades_to_placeholder() {
        let extracted = extract_slide_text(&PathBuf::from("/nonexistent/การจัดการน้ำ.pdf"));
        assert!(extracted.is_placeholder);
        assert!(extracted.content.contains("การจัดการน้ำ"));
    }

    #[test]
    fn unsupported_extension_degrades_to_placeholder() {
        let extracted = extract_slide_text(&PathBuf::from("slides.pptx"));
        assert!(extracted.is_placeholder);
        assert!(extracted.content.contains("slides"));
    }

    #[test]
    fn page_markers_precede_each_page_in_order() {
        let pages = vec!["เนื้อหาหน้าแรก".to_string(), "เนื้อหาหน้าสอง".to_string()];
        let joined = join_pages(&pages);
        let first = joined.find("--- หน้า 1 ---").unwrap();
        let second = joined.find("--- หน้า 2 ---").unwrap();
        assert!(first < second);
        assert!(joined.find("เนื้อหาหน้าแรก").unwrap() > first);
        assert!(joined.find("เนื้อหาหน้าแรก").unwrap() < second);
        assert!(join_pages(&[]).is_empty());
    }

    #[test]
    fn plain_text_file_is_read_verbatim() {
        let dir = std::env::temp_dir();
        let path = dir.join("slide-outcome-extract-test.txt");
        std::fs::write(&path, "ทรัพยากรน้ำ สถานการณ์ ปัญหา").unwrap();
        let extracted = extract_slide_text(&path);
        assert!(!extracted.is_placeholder);
        assert!(extracted.content.contains("ทรัพยากรน้ำ"));
        let _ = std::fs::remove_file(&path);
    }
}
