//! Non-fatal anomalies found while accumulating notices.
//!
//! A diagnostic never changes the statement result. It only makes protocol drift (a server
//! sending notices this crate does not model yet) visible to operators.

use auto_impl::auto_impl;
use smart_default::SmartDefault;
use thiserror::Error;
use tracing::Level;

use crate::constant::{FrameType, SessionStateParam};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("Unknown notice type: {frame_type:?}")]
    UnknownNoticeType { frame_type: FrameType },

    #[error("Unhandled SessionStateChanged parameter: {param:?}")]
    UnhandledSessionStateParam { param: SessionStateParam },

    #[error("Unexpected value for SessionStateChanged parameter {param:?}: {reason}")]
    UnexpectedValue {
        param: SessionStateParam,
        reason: &'static str,
    },

    #[error("Malformed notice frame: {reason}")]
    MalformedFrame { reason: String },
}

/// Receiver of [`Diagnostic`]s
#[auto_impl(&mut, Box)]
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Emits every diagnostic as a `tracing` event
#[derive(Debug, Clone, Copy, SmartDefault)]
pub struct TracingSink {
    #[default(Level::WARN)]
    pub level: Level,
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        // `tracing::event!` needs a level known at compile time
        match self.level {
            Level::ERROR => tracing::error!(%diagnostic, "notice diagnostic"),
            Level::WARN => tracing::warn!(%diagnostic, "notice diagnostic"),
            Level::INFO => tracing::info!(%diagnostic, "notice diagnostic"),
            Level::DEBUG => tracing::debug!(%diagnostic, "notice diagnostic"),
            _ => tracing::trace!(%diagnostic, "notice diagnostic"),
        }
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_sink_defaults_to_warn() {
        assert_eq!(TracingSink::default().level, Level::WARN);
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink = Vec::new();
        sink.report(Diagnostic::UnknownNoticeType {
            frame_type: FrameType::ServerHello,
        });
        sink.report(Diagnostic::UnhandledSessionStateParam {
            param: SessionStateParam::TrxCommitted,
        });
        assert_eq!(sink.len(), 2);
        assert!(matches!(sink[0], Diagnostic::UnknownNoticeType { .. }));
    }

    #[test]
    fn test_display() {
        let diagnostic = Diagnostic::UnhandledSessionStateParam {
            param: SessionStateParam::Unknown(99),
        };
        assert_eq!(
            diagnostic.to_string(),
            "Unhandled SessionStateChanged parameter: Unknown(99)"
        );

        let diagnostic = Diagnostic::UnexpectedValue {
            param: SessionStateParam::RowsAffected,
            reason: "missing value",
        };
        assert_eq!(
            diagnostic.to_string(),
            "Unexpected value for SessionStateChanged parameter RowsAffected: missing value"
        );
    }
}
