//! The control loop shared by every solver: pop a candidate, finalize it, check for success and
//! push its admissible successors. The frontier type alone decides whether this behaves as
//! breadth-first, depth-first, Dijkstra or A* search.
use fxhash::{FxBuildHasher, FxHashMap};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::collections::hash_map::Entry::{Occupied, Vacant};
use std::hash::Hash;

use crate::frontier::{Admission, Candidate, Frontier};
use crate::path::reverse_path;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Outcome of a single search. `visited` lists the finalized nodes in the order in which they
/// were taken off the frontier, the goal included if it was reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exploration<N, C> {
    pub path: Option<Vec<N>>,
    pub cost: C,
    pub visited: Vec<N>,
}

impl<N, C> Exploration<N, C> {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

pub fn best_first<N, C, F, FN, IN, FH, FS>(
    start: &N,
    mut frontier: F,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Exploration<N, C>
where
    N: Eq + Hash + Copy,
    C: Zero + Ord + Copy,
    F: Frontier<N, C>,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    // Finalized nodes mapped to the index of their predecessor.
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    // Best known cost of every node that has been pushed.
    let mut discovered: FxHashMap<N, C> = FxHashMap::default();
    discovered.insert(*start, Zero::zero());
    frontier.push(Candidate {
        node: *start,
        parent: usize::MAX,
        cost: Zero::zero(),
        estimated_cost: heuristic(start),
    });
    while let Some(Candidate {
        node, parent, cost, ..
    }) = frontier.pop()
    {
        // A node may sit on the frontier several times; only its first pop counts.
        if parents.contains_key(&node) {
            continue;
        }
        let (index, _) = parents.insert_full(node, parent);
        if success(&node) {
            let path = reverse_path(&parents, index);
            debug_assert!(path.first() == Some(start), "predecessor chain does not reach start");
            debug!(
                "Reached goal at cost {} after finalizing {} nodes",
                path.len() - 1,
                parents.len()
            );
            return Exploration {
                path: Some(path),
                cost,
                visited: parents.keys().copied().collect(),
            };
        }
        for (successor, move_cost) in successors(&node) {
            if parents.contains_key(&successor) {
                continue;
            }
            let new_cost = cost + move_cost;
            let admitted = match F::ADMISSION {
                Admission::Unvisited => true,
                Admission::FirstDiscovery => match discovered.entry(successor) {
                    Vacant(e) => {
                        e.insert(new_cost);
                        true
                    }
                    Occupied(_) => false,
                },
                Admission::ImprovedCost => match discovered.entry(successor) {
                    Vacant(e) => {
                        e.insert(new_cost);
                        true
                    }
                    Occupied(mut e) => {
                        if new_cost < *e.get() {
                            e.insert(new_cost);
                            true
                        } else {
                            false
                        }
                    }
                },
            };
            if admitted {
                frontier.push(Candidate {
                    node: successor,
                    parent: index,
                    cost: new_cost,
                    estimated_cost: new_cost + heuristic(&successor),
                });
            }
        }
    }
    debug!("Frontier exhausted after finalizing {} nodes", parents.len());
    Exploration {
        path: None,
        cost: Zero::zero(),
        visited: parents.keys().copied().collect(),
    }
}
