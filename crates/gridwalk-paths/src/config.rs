use std::fmt;

/// Per-call search limits.
///
/// The default imposes no limit and never cancels.
#[derive(Clone, Copy, Default)]
pub struct SearchConfig<'a> {
    /// Upper bound on accumulated cost. Breadth-first searches measure it in
    /// edges; weighted searches skip any relaxation that would exceed it.
    pub max_cost: Option<i32>,
    /// Polled once per dequeue. Returning `true` aborts the search with
    /// [`SearchError::Cancelled`](crate::SearchError::Cancelled).
    pub cancel: Option<&'a dyn Fn() -> bool>,
}

impl<'a> SearchConfig<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_cost(mut self, max_cost: i32) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    pub fn with_cancel(mut self, cancel: &'a dyn Fn() -> bool) -> Self {
        self.cancel = Some(cancel);
        self
    }

    #[inline]
    pub(crate) fn cancelled(&self) -> bool {
        self.cancel.is_some_and(|c| c())
    }

    #[inline]
    pub(crate) fn within(&self, cost: i32) -> bool {
        self.max_cost.is_none_or(|m| cost <= m)
    }
}

impl fmt::Debug for SearchConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("max_cost", &self.max_cost)
            .field("cancel", &self.cancel.is_some())
            .finish()
    }
}
