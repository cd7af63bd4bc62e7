use crate::errors::BanterResult;

/// Narrow data-access surface for persisted token vectors.
///
/// The single place SQL meets vectors: every other component goes
/// through this interface, never through the storage engine directly.
pub trait IVectorTable: Send + Sync {
    /// Look up the persisted vector for a token or phrase.
    fn get(&self, token: &str) -> BanterResult<Option<Vec<f32>>>;

    /// Upsert a vector. Last write wins.
    fn put(&self, token: &str, vector: &[f32]) -> BanterResult<()>;

    /// Every (token, vector) row, for similarity generation and export.
    fn all(&self) -> BanterResult<Vec<(String, Vec<f32>)>>;

    /// Whether the table holds any rows. Model import is skipped when
    /// it does.
    fn is_empty(&self) -> BanterResult<bool>;
}
