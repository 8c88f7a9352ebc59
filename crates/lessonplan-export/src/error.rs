use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("layout produced no pages")]
    EmptyLayout,

    #[error("invalid layout styles: {0}")]
    InvalidStyles(String),
}

impl From<lopdf::Error> for ExportError {
    fn from(e: lopdf::Error) -> Self {
        ExportError::Pdf(e.to_string())
    }
}
