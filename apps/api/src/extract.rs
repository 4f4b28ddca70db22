//! Text extraction boundary — turns an uploaded resume file into plain text
//! before the scorer runs. Unsupported types and empty extractions are
//! rejected here; the evaluator itself never sees a file.

use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::errors::AppError;

/// File types callers may declare via the upload filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFileType {
    Pdf,
    Docx,
}

impl ResumeFileType {
    /// Resolves the declared type from the uploaded filename extension.
    pub fn from_file_name(file_name: &str) -> Result<Self, AppError> {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(ResumeFileType::Pdf),
            "docx" => Ok(ResumeFileType::Docx),
            _ => Err(AppError::UnsupportedFileType(
                "Unsupported file type. Use PDF or DOCX.".to_string(),
            )),
        }
    }
}

/// Extracts plain text from the uploaded bytes.
pub fn extract_text(file_type: ResumeFileType, bytes: &[u8]) -> Result<String, AppError> {
    let text = match file_type {
        ResumeFileType::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Extraction(format!("Could not read PDF: {e}")))?,
        ResumeFileType::Docx => extract_docx_text(bytes)?,
    };

    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "No text could be extracted from the file.".to_string(),
        ));
    }

    Ok(text)
}

/// Pulls the text runs out of every top-level paragraph, one line per
/// paragraph. Table and header/footer content is ignored, matching how the
/// upstream pipeline treats DOCX resumes.
fn extract_docx_text(bytes: &[u8]) -> Result<String, AppError> {
    let docx =
        read_docx(bytes).map_err(|e| AppError::Extraction(format!("Could not read DOCX: {e}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Run};
    use std::io::Cursor;

    fn docx_bytes(lines: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for line in lines {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_file_type_from_pdf_extension() {
        assert_eq!(
            ResumeFileType::from_file_name("resume.pdf").unwrap(),
            ResumeFileType::Pdf
        );
        assert_eq!(
            ResumeFileType::from_file_name("My Resume.PDF").unwrap(),
            ResumeFileType::Pdf
        );
    }

    #[test]
    fn test_file_type_from_docx_extension() {
        assert_eq!(
            ResumeFileType::from_file_name("resume.docx").unwrap(),
            ResumeFileType::Docx
        );
    }

    #[test]
    fn test_unknown_extension_rejected() {
        assert!(ResumeFileType::from_file_name("resume.txt").is_err());
        assert!(ResumeFileType::from_file_name("resume").is_err());
    }

    #[test]
    fn test_docx_extraction_joins_paragraphs_with_newlines() {
        let bytes = docx_bytes(&["Experience", "- Built 3 services in Rust"]);
        let text = extract_text(ResumeFileType::Docx, &bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Experience", "- Built 3 services in Rust"]);
    }

    #[test]
    fn test_docx_extracted_text_feeds_the_evaluator() {
        let bytes = docx_bytes(&[
            "Experience",
            "- Reduced costs by 30%",
            "Skills",
            "Rust, Docker",
        ]);
        let text = extract_text(ResumeFileType::Docx, &bytes).unwrap();
        let report = crate::scoring::evaluate_resume(&text);
        assert!(report.impact_score >= 32); // one quantified bullet
    }

    #[test]
    fn test_docx_with_no_text_rejected() {
        let bytes = docx_bytes(&[]);
        let err = extract_text(ResumeFileType::Docx, &bytes).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_invalid_docx_bytes_fail_extraction() {
        let err = extract_text(ResumeFileType::Docx, b"not a docx").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_invalid_pdf_bytes_fail_extraction() {
        let err = extract_text(ResumeFileType::Pdf, b"not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
