use auto_impl::auto_impl;

use crate::accumulator::NoticeAccumulator;
use crate::diagnostic::DiagnosticSink;
use crate::protocol::notice::Notice;

/// Callback through which a transport delivers decoded notices, one at a time and in the
/// order the server emitted them
#[auto_impl(&mut, Box)]
pub trait NoticeHandler {
    fn notice(&mut self, notice: Notice);
}

impl<S: DiagnosticSink> NoticeHandler for NoticeAccumulator<S> {
    fn notice(&mut self, notice: Notice) {
        self.observe(notice);
    }
}

/// Keeps every notice as-is
impl NoticeHandler for Vec<Notice> {
    fn notice(&mut self, notice: Notice) {
        self.push(notice);
    }
}
