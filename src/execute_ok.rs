use crate::protocol::notice::Warning;

/// Outcome of one statement execution, built from the notices the server sent
///
/// A field the server never reported keeps its default: 0 rows, no insert id, no ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteOk {
    rows_affected: u64,
    last_insert_id: Option<u64>,
    generated_ids: Vec<String>,
    warnings: Vec<Warning>,
}

impl ExecuteOk {
    pub(crate) fn new(
        rows_affected: u64,
        last_insert_id: Option<u64>,
        generated_ids: Vec<String>,
        warnings: Vec<Warning>,
    ) -> Self {
        Self {
            rows_affected,
            last_insert_id,
            generated_ids,
            warnings,
        }
    }

    /// Get the number of affected rows
    pub fn rows_affected(&self) -> u64 {
        self.rows_affected
    }

    /// Get the auto-increment id generated by the statement, if any
    pub fn last_insert_id(&self) -> Option<u64> {
        self.last_insert_id
    }

    /// Get the document ids generated by a collection insert, in server order
    pub fn generated_ids(&self) -> &[String] {
        &self.generated_ids
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}
