use std::ops::AddAssign;

/// Search statistic collector.
/// It collects data during the dual A* search; collectors only observe and
/// cannot influence the search.
pub trait SearchStatsCollector {
    /// Called for each node popped from a frontier and expanded.
    #[inline(always)] fn expanded(&mut self) { }
    /// Called for each node pushed into a frontier.
    #[inline(always)] fn enqueued(&mut self) { }
}

/// Search statistic collector that ignores all events.
impl SearchStatsCollector for () {}

/// Counts expanded nodes only.
impl SearchStatsCollector for u64 {
    #[inline(always)] fn expanded(&mut self) { *self += 1; }
}

#[derive(Default, Copy, Clone)]
pub struct SearchAllStats {
    pub expanded: u64,
    pub enqueued: u64
}

impl SearchAllStats {
    /// Total frontier traffic across both search trees.
    pub fn visits(&self) -> u64 { self.expanded + self.enqueued }
}

impl AddAssign for SearchAllStats {
    fn add_assign(&mut self, rhs: Self) {
        self.expanded += rhs.expanded;
        self.enqueued += rhs.enqueued;
    }
}

impl SearchStatsCollector for SearchAllStats {
    #[inline(always)] fn expanded(&mut self) { self.expanded += 1; }
    #[inline(always)] fn enqueued(&mut self) { self.enqueued += 1; }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(stats: &mut impl SearchStatsCollector) {
        stats.enqueued();
        stats.enqueued();
        stats.expanded();
    }

    #[test]
    fn test_u64_counts_expansions() {
        let mut count = 0u64;
        feed(&mut count);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_all_stats() {
        let mut stats = SearchAllStats::default();
        feed(&mut stats);
        assert_eq!(stats.expanded, 1);
        assert_eq!(stats.enqueued, 2);
        assert_eq!(stats.visits(), 3);
        let mut total = SearchAllStats::default();
        total += stats;
        total += stats;
        assert_eq!(total.enqueued, 4);
    }
}
