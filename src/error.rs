// Error taxonomy for the digitization pipeline
use thiserror::Error;

/// Errors raised by the digitization pipeline. All of them are terminal for
/// the current request; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum DigitizerError {
    /// The remote chart layout is only consistent for a two-day span (or a
    /// slice of a single rendered day); anything else cannot be calibrated.
    #[error("unsupported time window: {0}")]
    UnsupportedWindow(String),

    /// The response body did not decode to a bitmap, or the bitmap is too
    /// small for the fixed plot-area margins.
    #[error("chart image format error: {0}")]
    ImageFormat(String),

    /// The external curve tracer exited non-zero or timed out. Carries the
    /// tracer's diagnostic output verbatim.
    #[error("curve extraction failed: {0}")]
    ExtractionFailed(String),

    /// A row of the tracer's output file was not two whitespace-separated
    /// floats.
    #[error("malformed extractor output at row {row}: {content:?}")]
    MalformedExtractorOutput { row: usize, content: String },
}
