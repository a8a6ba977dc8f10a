use smart_default::SmartDefault;

/// How generated document ids that are not valid UTF-8 are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Utf8Policy {
    /// Replace invalid sequences with U+FFFD
    #[default]
    Lossy,
    /// Reject the whole id list and report a diagnostic
    Strict,
}

/// A configuration for [`crate::NoticeAccumulator`]
///
/// ```rs
/// let mut opts = Opts::default();
/// opts.utf8_policy = Utf8Policy::Strict;
/// ```
#[derive(Debug, Clone, SmartDefault)]
pub struct Opts {
    pub utf8_policy: Utf8Policy,

    /// Accept a non-negative `V_SINT` scalar for `ROWS_AFFECTED` and `GENERATED_INSERT_ID`.
    /// Servers send `V_UINT`; negative values are always rejected.
    #[default(true)]
    pub accept_signed_counts: bool,
}
