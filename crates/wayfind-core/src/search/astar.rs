use std::time::Instant;

use serde::Serialize;

use crate::error::SearchError;
use crate::graph::{Cost, GraphProvider, Heuristic, NodeId};
use crate::search::evaluate::PathEvaluator;
use crate::search::state::{SearchState, SearchStats};

/// A found path with its recomputed cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub path: Vec<NodeId>,
    /// Cost re-derived edge by edge from the graph (first-match weights)
    pub cost: Cost,
    /// The engine's g-score for the goal
    pub search_cost: Cost,
    pub stats: SearchStats,
}

impl Route {
    fn trivial(node: NodeId) -> Self {
        Route {
            path: vec![node],
            cost: Cost::ZERO,
            search_cost: Cost::ZERO,
            stats: SearchStats::default(),
        }
    }

    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A* search over a read-only graph.
///
/// Each call to `find` builds its own `SearchState`, so one engine (and one
/// loaded graph) can serve any number of searches.
pub struct AStar<'a> {
    graph: &'a dyn GraphProvider,
    heuristic: &'a dyn Heuristic,
    max_steps: Option<usize>,
}

impl<'a> AStar<'a> {
    pub fn new(graph: &'a dyn GraphProvider, heuristic: &'a dyn Heuristic) -> Self {
        Self {
            graph,
            heuristic,
            max_steps: None,
        }
    }

    /// Abort with `SearchError::Aborted` after this many expansions
    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Find a minimum-cost path from `start` to `goal`
    #[tracing::instrument(skip(self), fields(start = %start, goal = %goal))]
    pub fn find(&self, start: NodeId, goal: NodeId) -> Result<Route, SearchError> {
        let started = Instant::now();
        if start == goal {
            return Ok(Route::trivial(start));
        }

        let mut state = SearchState::default();
        let outcome = self.run(&mut state, start, goal);
        let stats = state.stats();
        tracing::debug!(
            expanded = stats.expanded,
            relaxed = stats.relaxed,
            stale_skipped = stats.stale_skipped,
            max_open = stats.max_open,
            elapsed = ?started.elapsed(),
            found = outcome.is_ok(),
            "search_finished"
        );
        let path = outcome?;

        let cost = PathEvaluator::new(self.graph).total_cost(&path)?;
        let search_cost = state.g_score(goal);
        if cost != search_cost {
            tracing::warn!(
                cost = %cost,
                search_cost = %search_cost,
                "path cost differs from search cost (parallel edges)"
            );
        }

        Ok(Route {
            path,
            cost,
            search_cost,
            stats,
        })
    }

    /// Drive the best-first loop on `state` until the goal is popped, the
    /// frontier empties, or the step limit is hit.
    pub(crate) fn run(
        &self,
        state: &mut SearchState,
        start: NodeId,
        goal: NodeId,
    ) -> Result<Vec<NodeId>, SearchError> {
        let estimate = self.heuristic.estimate(start, goal)?;
        state.seed(start, estimate);

        let mut steps = 0;
        while let Some(current) = state.pop_best() {
            if current == goal {
                return Ok(state.reconstruct_path(goal));
            }
            if let Some(limit) = self.max_steps {
                if steps >= limit {
                    return Err(SearchError::Aborted { steps, limit });
                }
            }
            steps += 1;
            self.expand(state, current, goal)?;
        }

        Err(SearchError::NoPathFound { start, goal })
    }

    fn expand(
        &self,
        state: &mut SearchState,
        current: NodeId,
        goal: NodeId,
    ) -> Result<(), SearchError> {
        state.close(current);
        let current_g = state.g_score(current);
        tracing::trace!(node = %current, g = %current_g, "expand");

        for edge in self.graph.neighbors(current) {
            if state.is_closed(edge.to) {
                continue;
            }
            let overflow = SearchError::CostOverflow {
                from: current,
                to: edge.to,
            };
            let tentative_g = current_g + edge.weight;
            if !tentative_g.is_finite() {
                return Err(overflow);
            }
            if tentative_g.total_cmp(&state.g_score(edge.to)).is_lt() {
                let f_score = tentative_g + self.heuristic.estimate(edge.to, goal)?;
                if !f_score.is_finite() {
                    return Err(overflow);
                }
                state.relax(edge.to, current, tentative_g, f_score);
            }
        }
        Ok(())
    }
}

/// Find a path with the default engine settings
pub fn find_path(
    graph: &dyn GraphProvider,
    heuristic: &dyn Heuristic,
    start: NodeId,
    goal: NodeId,
) -> Result<Route, SearchError> {
    AStar::new(graph, heuristic).find(start, goal)
}
