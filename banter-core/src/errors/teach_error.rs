/// Teach-input errors. Always local: a rejected teach is a no-op,
/// never a fatal abort.
#[derive(Debug, thiserror::Error)]
pub enum TeachError {
    #[error("teach input missing '=' separator")]
    MissingSeparator,

    #[error("teach input has an empty topic or response")]
    EmptyField,

    #[error("bulk row {line} rejected: {reason}")]
    MalformedRow { line: usize, reason: String },
}
