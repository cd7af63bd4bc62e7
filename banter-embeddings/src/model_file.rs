//! Line-oriented model interchange format.
//!
//! One entry per line: `<token-or-phrase> <v1> <v2> ... <vN>`. The
//! vector is the trailing run of float-parseable fields; everything
//! before it is the key, so phrase keys containing spaces round-trip.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use banter_core::errors::{BanterError, BanterResult};

use crate::store::EmbeddingStore;

/// Parse one model line into (key, vector). Returns `None` for blank
/// lines and lines with no parseable trailing floats.
pub fn parse_line(line: &str) -> Option<(String, Vec<f32>)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.is_empty() {
        return None;
    }

    // Walk backwards over the trailing float run.
    let mut split = fields.len();
    while split > 1 && fields[split - 1].parse::<f32>().is_ok() {
        split -= 1;
    }
    if split == fields.len() {
        return None;
    }

    let key = fields[..split].join(" ");
    let vector = fields[split..]
        .iter()
        .filter_map(|f| f.parse::<f32>().ok())
        .collect();
    Some((key, vector))
}

/// Import pre-seeded embeddings into the store.
///
/// Load-once initialization: skipped entirely (returning 0) when the
/// persistent table already holds vectors. Unparseable lines are
/// skipped, contributing nothing.
pub fn import(store: &EmbeddingStore, path: &Path) -> BanterResult<usize> {
    if !store.is_empty()? {
        info!(path = %path.display(), "vector table not empty, skipping model import");
        return Ok(0);
    }

    let file = File::open(path).map_err(|e| BanterError::ModelFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut imported = 0usize;
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| BanterError::ModelFile {
            path: path.display().to_string(),
            reason: format!("line {}: {e}", number + 1),
        })?;
        match parse_line(&line) {
            Some((key, vector)) => {
                store.put(&key, &vector)?;
                imported += 1;
            }
            None if line.trim().is_empty() => {}
            None => warn!(line = number + 1, "skipping unparseable model line"),
        }
    }

    info!(path = %path.display(), imported, "model import complete");
    Ok(imported)
}

/// Export every stored vector, one line per entry.
pub fn export(store: &EmbeddingStore, path: &Path) -> BanterResult<usize> {
    let file = File::create(path).map_err(|e| BanterError::ModelFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut writer = BufWriter::new(file);

    let rows = store.all()?;
    for (key, vector) in &rows {
        let fields: Vec<String> = vector.iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{key} {}", fields.join(" ")).map_err(|e| BanterError::ModelFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    writer.flush().map_err(|e| BanterError::ModelFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    info!(path = %path.display(), exported = rows.len(), "model export complete");
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testutil::MemoryTable;

    fn store() -> EmbeddingStore {
        EmbeddingStore::new(Arc::new(MemoryTable::default()), 3, 64)
    }

    #[test]
    fn parses_single_token_lines() {
        let (key, vector) = parse_line("hello 0.1 0.2 0.3").unwrap();
        assert_eq!(key, "hello");
        assert_eq!(vector, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn parses_phrase_keys() {
        let (key, vector) = parse_line("Hi there! 0.5 0.5 0.5").unwrap();
        assert_eq!(key, "Hi there!");
        assert_eq!(vector, vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn rejects_lines_without_floats() {
        assert!(parse_line("").is_none());
        assert!(parse_line("justwords here").is_none());
    }

    #[test]
    fn import_skips_when_table_not_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.txt");
        std::fs::write(&path, "hello 0.1 0.2 0.3\n").unwrap();

        let store = store();
        store.put("existing", &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(import(&store, &path).unwrap(), 0);
        assert_eq!(store.get("hello"), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn import_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.txt");
        std::fs::write(&path, "hello 0.1 0.2 0.3\nHi there! -0.5 0.25 1\nnoise\n").unwrap();

        let store = store();
        assert_eq!(import(&store, &path).unwrap(), 2);
        assert_eq!(store.get("hello"), vec![0.1, 0.2, 0.3]);
        assert_eq!(store.get("Hi there!"), vec![-0.5, 0.25, 1.0]);

        let out = dir.path().join("out.txt");
        assert_eq!(export(&store, &out).unwrap(), 2);

        let copy = self::store();
        assert_eq!(import(&copy, &out).unwrap(), 2);
        assert_eq!(copy.get("hello"), store.get("hello"));
        assert_eq!(copy.get("Hi there!"), store.get("Hi there!"));
    }

    #[test]
    fn missing_file_is_a_model_error() {
        let store = store();
        assert!(import(&store, Path::new("/nonexistent/model.txt")).is_err());
    }
}
