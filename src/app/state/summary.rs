use crate::backend::SummaryResult;

/// Lifecycle of the summarization phase. `Ready` owns the entire result, so
/// a partially populated summary is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryLifecycle {
    Idle,
    InFlight { request_id: u64 },
    Ready(SummaryResult),
}

pub struct SummaryState {
    pub(in crate::app) lifecycle: SummaryLifecycle,
    pub(in crate::app) request_id: u64,
}

impl SummaryState {
    pub(in crate::app) fn new() -> Self {
        SummaryState {
            lifecycle: SummaryLifecycle::Idle,
            request_id: 0,
        }
    }

    pub(in crate::app) fn is_in_flight(&self) -> bool {
        matches!(self.lifecycle, SummaryLifecycle::InFlight { .. })
    }

    pub(in crate::app) fn in_flight_request(&self) -> Option<u64> {
        match self.lifecycle {
            SummaryLifecycle::InFlight { request_id } => Some(request_id),
            _ => None,
        }
    }

    pub(in crate::app) fn result(&self) -> Option<&SummaryResult> {
        match &self.lifecycle {
            SummaryLifecycle::Ready(result) => Some(result),
            _ => None,
        }
    }

    /// Translated text, if a result exists and the text is non-empty.
    pub(in crate::app) fn translated_summary(&self) -> Option<&str> {
        self.result()
            .map(|result| result.translated_summary.as_str())
            .filter(|text| !text.trim().is_empty())
    }

    /// Discard any prior result and enter the in-flight state under a fresh
    /// request id. Completions bearing older ids are stale by definition.
    pub(in crate::app) fn begin(&mut self) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.lifecycle = SummaryLifecycle::InFlight {
            request_id: self.request_id,
        };
        self.request_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> SummaryResult {
        SummaryResult {
            original_summary: "original".to_string(),
            translated_summary: "translated".to_string(),
            metrics: None,
        }
    }

    #[test]
    fn begin_clears_prior_result_and_bumps_id() {
        let mut state = SummaryState::new();
        state.lifecycle = SummaryLifecycle::Ready(sample_result());

        let first = state.begin();
        assert!(state.is_in_flight());
        assert!(state.result().is_none());

        state.lifecycle = SummaryLifecycle::Idle;
        let second = state.begin();
        assert!(second > first);
    }

    #[test]
    fn translated_summary_requires_nonempty_text() {
        let mut state = SummaryState::new();
        assert!(state.translated_summary().is_none());

        state.lifecycle = SummaryLifecycle::Ready(SummaryResult {
            translated_summary: "   ".to_string(),
            ..sample_result()
        });
        assert!(state.translated_summary().is_none());

        state.lifecycle = SummaryLifecycle::Ready(sample_result());
        assert_eq!(state.translated_summary(), Some("translated"));
    }
}
