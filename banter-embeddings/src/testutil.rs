//! Shared unit-test support.

use std::collections::HashMap;
use std::sync::Mutex;

use banter_core::errors::BanterResult;
use banter_core::traits::IVectorTable;

/// In-memory IVectorTable standing in for the SQLite table.
#[derive(Default)]
pub(crate) struct MemoryTable {
    rows: Mutex<HashMap<String, Vec<f32>>>,
}

impl IVectorTable for MemoryTable {
    fn get(&self, token: &str) -> BanterResult<Option<Vec<f32>>> {
        Ok(self.rows.lock().unwrap().get(token).cloned())
    }

    fn put(&self, token: &str, vector: &[f32]) -> BanterResult<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(token.to_string(), vector.to_vec());
        Ok(())
    }

    fn all(&self) -> BanterResult<Vec<(String, Vec<f32>)>> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(rows)
    }

    fn is_empty(&self) -> BanterResult<bool> {
        Ok(self.rows.lock().unwrap().is_empty())
    }
}
