use tracing::Span;

use super::TraceId;

/// Root span for one batch run; every log line inside the run inherits
/// the trace_id field.
pub fn batch_span(trace_id: &TraceId) -> Span {
    tracing::info_span!("batch", trace_id = %trace_id)
}
