//! Frontier disciplines shared by the grid solvers. The search loop in [crate::search] is the
//! same for every algorithm; what differs is the order in which a [Frontier] hands back its
//! candidates and which candidates it is willing to accept, see [Admission].
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Decides whether a newly generated successor is pushed onto the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Each node is pushed at most once, the first discoverer is its predecessor.
    FirstDiscovery,
    /// Every node that is not yet finalized is pushed, duplicates included.
    Unvisited,
    /// A node is pushed whenever its accumulated cost strictly improves on the best known one.
    ImprovedCost,
}

/// A node waiting on the frontier. `parent` is the index of the finalized predecessor in the
/// predecessor map, or [usize::MAX] for the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate<N, C> {
    pub node: N,
    pub parent: usize,
    pub cost: C,
    pub estimated_cost: C,
}

pub trait Frontier<N, C> {
    const ADMISSION: Admission;

    fn push(&mut self, candidate: Candidate<N, C>);
    fn pop(&mut self) -> Option<Candidate<N, C>>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in-first-out queue, breadth-first order.
#[derive(Clone, Debug)]
pub struct FifoFrontier<N, C>(VecDeque<Candidate<N, C>>);

impl<N, C> Default for FifoFrontier<N, C> {
    fn default() -> Self {
        FifoFrontier(VecDeque::new())
    }
}

impl<N, C> Frontier<N, C> for FifoFrontier<N, C> {
    const ADMISSION: Admission = Admission::FirstDiscovery;

    fn push(&mut self, candidate: Candidate<N, C>) {
        self.0.push_back(candidate);
    }
    fn pop(&mut self) -> Option<Candidate<N, C>> {
        self.0.pop_front()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last-in-first-out stack, depth-first order.
#[derive(Clone, Debug)]
pub struct LifoFrontier<N, C>(Vec<Candidate<N, C>>);

impl<N, C> Default for LifoFrontier<N, C> {
    fn default() -> Self {
        LifoFrontier(Vec::new())
    }
}

impl<N, C> Frontier<N, C> for LifoFrontier<N, C> {
    const ADMISSION: Admission = Admission::Unvisited;

    fn push(&mut self, candidate: Candidate<N, C>) {
        self.0.push(candidate);
    }
    fn pop(&mut self) -> Option<Candidate<N, C>> {
        self.0.pop()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

struct SmallestCostHolder<N, C> {
    candidate: Candidate<N, C>,
    sequence: usize,
}

impl<N, C: Ord> Eq for SmallestCostHolder<N, C> {}

impl<N, C: Ord> PartialEq for SmallestCostHolder<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, C: Ord> PartialOrd for SmallestCostHolder<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, C: Ord> Ord for SmallestCostHolder<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favors the node with the largest cost (deepest)
        // and finally the earliest pushed.
        other
            .candidate
            .estimated_cost
            .cmp(&self.candidate.estimated_cost)
            .then_with(|| self.candidate.cost.cmp(&other.candidate.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue on estimated cost, used by Dijkstra and A*.
pub struct PriorityFrontier<N, C> {
    heap: BinaryHeap<SmallestCostHolder<N, C>>,
    pushed: usize,
}

impl<N, C: Ord> Default for PriorityFrontier<N, C> {
    fn default() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<N, C: Ord> Frontier<N, C> for PriorityFrontier<N, C> {
    const ADMISSION: Admission = Admission::ImprovedCost;

    fn push(&mut self, candidate: Candidate<N, C>) {
        self.heap.push(SmallestCostHolder {
            candidate,
            sequence: self.pushed,
        });
        self.pushed += 1;
    }
    fn pop(&mut self) -> Option<Candidate<N, C>> {
        self.heap.pop().map(|holder| holder.candidate)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}
