#[cfg(test)]
#[path = "../../tests/unit/search/state_test.rs"]
mod state_test;

use crate::models::{Location, Problem};
use crate::search::f_score;
use crate::utils::Float;
use std::rc::Rc;

/// A node of persistent visited path: siblings share their common prefix.
struct VisitedNode {
    location: Location,
    parent: Option<Rc<VisitedNode>>,
}

/// Represents a partial tour in the search tree. A state is never modified once created:
/// expansion produces new states.
pub struct SearchState {
    visited: Rc<VisitedNode>,
    depth: usize,
    unvisited: Vec<Location>,
    g_score: Float,
    f_score: Float,
}

impl SearchState {
    /// Creates an initial state: the tour consists of the origin only.
    pub fn new_initial(problem: &Problem) -> Self {
        let origin = problem.origin;
        let unvisited = problem.locations().filter(|&location| location != origin).collect::<Vec<_>>();
        let f_score = f_score(0., origin, &unvisited, &problem.costs, origin);

        let visited = Rc::new(VisitedNode { location: origin, parent: None });

        Self { visited, depth: 1, unvisited, g_score: 0., f_score }
    }

    /// Returns the last visited location.
    pub fn current(&self) -> Location {
        self.visited.location
    }

    /// Returns visited locations in visiting order, starting from the origin.
    pub fn visited(&self) -> Vec<Location> {
        let mut path = Vec::with_capacity(self.depth);
        let mut node = Some(&self.visited);

        while let Some(current) = node {
            path.push(current.location);
            node = current.parent.as_ref();
        }

        path.reverse();

        path
    }

    /// Returns locations which are not visited yet, in the order of the problem definition.
    pub fn unvisited(&self) -> &[Location] {
        self.unvisited.as_slice()
    }

    /// Returns the realized cost of the visited path.
    pub fn g_score(&self) -> Float {
        self.g_score
    }

    /// Returns the state priority. For complete states, it is the cost of the open path.
    pub fn f_score(&self) -> Float {
        self.f_score
    }

    /// Returns true if all locations are visited.
    pub fn is_complete(&self) -> bool {
        self.unvisited.is_empty()
    }

    /// Returns child states: one for each unvisited location, in the order of unvisited locations.
    pub fn expand<'a>(&'a self, problem: &'a Problem) -> impl Iterator<Item = SearchState> + 'a {
        self.unvisited.iter().map(move |&next| self.visit(next, problem))
    }

    fn visit(&self, next: Location, problem: &Problem) -> SearchState {
        let costs = &problem.costs;
        let unvisited = self.unvisited.iter().copied().filter(|&location| location != next).collect::<Vec<_>>();
        let g_score = self.g_score + costs.cost(self.current(), next);
        let f_score = f_score(g_score, next, &unvisited, costs, problem.origin);

        SearchState {
            visited: Rc::new(VisitedNode { location: next, parent: Some(self.visited.clone()) }),
            depth: self.depth + 1,
            unvisited,
            g_score,
            f_score,
        }
    }
}
