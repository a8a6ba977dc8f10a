use crate::constant::SessionStateParam;
use crate::diagnostic::{Diagnostic, DiagnosticSink, TracingSink};
use crate::execute_ok::ExecuteOk;
use crate::opts::{Opts, Utf8Policy};
use crate::protocol::notice::{Notice, NoticeFrameBytes, Scalar, SessionStateChange, Warning};

/// Folds the notices of one statement execution into an [`ExecuteOk`]
///
/// Create one per execution, feed every notice in arrival order with [`observe`](Self::observe),
/// then call [`finalize`](Self::finalize) once the statement completes.
/// Unexpected notices are reported to the [`DiagnosticSink`] and never fail the statement.
///
/// ```rs
/// let mut acc = NoticeAccumulator::<TracingSink>::default();
/// for frame in frames {
///     acc.observe_frame(frame);
/// }
/// let ok = acc.finalize();
/// ```
#[derive(Debug)]
pub struct NoticeAccumulator<S = TracingSink> {
    opts: Opts,
    sink: S,
    rows_affected: u64,
    last_insert_id: Option<u64>,
    generated_ids: Vec<String>,
    warnings: Vec<Warning>,
}

impl<S: DiagnosticSink + Default> Default for NoticeAccumulator<S> {
    fn default() -> Self {
        Self::with_sink(Opts::default(), S::default())
    }
}

impl<S: DiagnosticSink> NoticeAccumulator<S> {
    pub fn with_sink(opts: Opts, sink: S) -> Self {
        Self {
            opts,
            sink,
            rows_affected: 0,
            last_insert_id: None,
            generated_ids: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn observe(&mut self, notice: Notice) {
        match notice {
            Notice::Warning(warning) => self.warnings.push(warning),
            Notice::SessionStateChanged(change) => self.session_state_changed(change),
            Notice::Other { frame_type, .. } => {
                self.sink.report(Diagnostic::UnknownNoticeType { frame_type });
            }
        }
    }

    /// Decode a `Mysqlx.Notice.Frame` body and observe it
    pub fn observe_frame(&mut self, frame: &[u8]) {
        match Notice::try_from(NoticeFrameBytes(frame)) {
            Ok(notice) => self.observe(notice),
            Err(err) => self.sink.report(Diagnostic::MalformedFrame {
                reason: err.to_string(),
            }),
        }
    }

    pub fn finalize(self) -> ExecuteOk {
        tracing::trace!(
            rows_affected = self.rows_affected,
            last_insert_id = ?self.last_insert_id,
            generated_ids = self.generated_ids.len(),
            warnings = self.warnings.len(),
            "statement result finalized"
        );
        ExecuteOk::new(
            self.rows_affected,
            self.last_insert_id,
            self.generated_ids,
            self.warnings,
        )
    }

    fn session_state_changed(&mut self, change: SessionStateChange) {
        let param = change.param;
        match param {
            SessionStateParam::GeneratedInsertId => {
                if let Some(id) = self.unsigned_value(&change) {
                    self.last_insert_id = Some(id);
                }
            }
            SessionStateParam::RowsAffected => {
                if let Some(rows) = self.unsigned_value(&change) {
                    self.rows_affected = rows;
                }
            }
            SessionStateParam::ProducedMessage => {
                if let Some(message) = change.value().and_then(Scalar::as_bytes) {
                    tracing::debug!(text = %String::from_utf8_lossy(message), "server message");
                }
            }
            SessionStateParam::GeneratedDocumentIds => {
                if let Some(ids) = self.document_ids(change) {
                    self.generated_ids = ids;
                }
            }
            SessionStateParam::CurrentSchema
            | SessionStateParam::AccountExpired
            | SessionStateParam::RowsFound
            | SessionStateParam::RowsMatched
            | SessionStateParam::TrxCommitted
            | SessionStateParam::TrxRolledback
            | SessionStateParam::ClientIdAssigned
            | SessionStateParam::Unknown(_) => {
                self.sink
                    .report(Diagnostic::UnhandledSessionStateParam { param });
            }
        }
    }

    /// First value as a full-width `u64`
    fn unsigned_value(&mut self, change: &SessionStateChange) -> Option<u64> {
        let value = match change.value() {
            Some(Scalar::UnsignedInt(v)) => Ok(*v),
            Some(Scalar::SignedInt(v)) if self.opts.accept_signed_counts => {
                u64::try_from(*v).or(Err("negative signed integer"))
            }
            Some(Scalar::SignedInt(_)) => Err("signed integer"),
            Some(_) => Err("not an integer"),
            None => Err("missing value"),
        };

        match value {
            Ok(v) => Some(v),
            Err(reason) => {
                self.sink.report(Diagnostic::UnexpectedValue {
                    param: change.param,
                    reason,
                });
                None
            }
        }
    }

    /// Every value as a UTF-8 string; `None` rejects the whole list
    fn document_ids(&mut self, change: SessionStateChange) -> Option<Vec<String>> {
        let param = change.param;
        let mut ids = Vec::with_capacity(change.values.len());

        for value in change.values {
            let Some(bytes) = value.into_bytes() else {
                self.sink.report(Diagnostic::UnexpectedValue {
                    param,
                    reason: "document id is not a byte string",
                });
                return None;
            };

            match String::from_utf8(bytes) {
                Ok(id) => ids.push(id),
                Err(err) => match self.opts.utf8_policy {
                    Utf8Policy::Lossy => {
                        ids.push(String::from_utf8_lossy(err.as_bytes()).into_owned());
                    }
                    Utf8Policy::Strict => {
                        self.sink.report(Diagnostic::UnexpectedValue {
                            param,
                            reason: "document id is not valid UTF-8",
                        });
                        return None;
                    }
                },
            }
        }

        Some(ids)
    }
}
