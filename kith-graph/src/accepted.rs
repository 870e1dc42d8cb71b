//! AcceptedGraph — indexed undirected graph over accepted connections.

use std::collections::{BTreeSet, HashMap};

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Undirected;

use kith_core::errors::KithResult;
use kith_core::models::MemberId;
use kith_core::traits::IConnectionLedger;

/// Undirected member graph with an id → node index map for O(1) lookup.
///
/// Symmetric by construction: adding the edge A–B makes each a neighbor of
/// the other. Self-loops and duplicate edges are ignored on insert.
pub struct AcceptedGraph {
    graph: StableGraph<MemberId, (), Undirected>,
    nodes: HashMap<MemberId, NodeIndex>,
}

impl AcceptedGraph {
    /// An empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::default(),
            nodes: HashMap::new(),
        }
    }

    /// Build from an edge list of accepted pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (MemberId, MemberId)>,
    {
        let mut graph = Self::new();
        for (a, b) in pairs {
            graph.add_edge(a, b);
        }
        graph
    }

    /// Build from the ledger's current accepted edges.
    pub fn from_ledger(ledger: &dyn IConnectionLedger) -> KithResult<Self> {
        Ok(Self::from_pairs(ledger.accepted_pairs()?))
    }

    fn ensure_node(&mut self, id: MemberId) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id.clone());
        self.nodes.insert(id, idx);
        idx
    }

    /// Add an accepted edge. Self-loops are ignored; re-adding an existing
    /// edge is a no-op.
    pub fn add_edge(&mut self, a: MemberId, b: MemberId) {
        if a == b {
            return;
        }
        let ia = self.ensure_node(a);
        let ib = self.ensure_node(b);
        self.graph.update_edge(ia, ib, ());
    }

    /// Whether the member appears in the graph (has at least one edge or was
    /// added explicitly).
    pub fn contains(&self, id: &MemberId) -> bool {
        self.nodes.contains_key(id)
    }

    /// The member's neighbors, sorted for deterministic output.
    pub fn neighbors(&self, id: &MemberId) -> BTreeSet<MemberId> {
        let Some(&idx) = self.nodes.get(id) else {
            return BTreeSet::new();
        };
        self.graph
            .neighbors(idx)
            .filter_map(|n| self.graph.node_weight(n).cloned())
            .collect()
    }

    /// Number of accepted edges incident to the member.
    pub fn degree(&self, id: &MemberId) -> usize {
        self.nodes
            .get(id)
            .map(|&idx| self.graph.neighbors(idx).count())
            .unwrap_or(0)
    }

    /// The mutual connections of two members: every third member with an
    /// accepted edge to both. The endpoints themselves are excluded even
    /// when they are directly connected to each other.
    pub fn mutuals(&self, a: &MemberId, b: &MemberId) -> BTreeSet<MemberId> {
        let mut shared: BTreeSet<MemberId> = self
            .neighbors(a)
            .intersection(&self.neighbors(b))
            .cloned()
            .collect();
        shared.remove(a);
        shared.remove(b);
        shared
    }

    /// `|neighbors(a) ∩ neighbors(b)|`, endpoints excluded. Symmetric.
    pub fn mutual_count(&self, a: &MemberId, b: &MemberId) -> usize {
        self.mutuals(a, b).len()
    }

    /// Number of members in the graph.
    pub fn member_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of accepted edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for AcceptedGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> MemberId {
        MemberId::from(s)
    }

    #[test]
    fn empty_graph_has_no_neighbors() {
        let graph = AcceptedGraph::new();
        assert!(graph.neighbors(&id("amara")).is_empty());
        assert_eq!(graph.mutual_count(&id("amara"), &id("bennett")), 0);
    }

    #[test]
    fn edge_is_symmetric() {
        let graph = AcceptedGraph::from_pairs([(id("amara"), id("bennett"))]);
        assert!(graph.neighbors(&id("amara")).contains(&id("bennett")));
        assert!(graph.neighbors(&id("bennett")).contains(&id("amara")));
    }

    #[test]
    fn mutual_excludes_endpoints() {
        // amara–bennett are directly connected and share chioma.
        let graph = AcceptedGraph::from_pairs([
            (id("amara"), id("bennett")),
            (id("amara"), id("chioma")),
            (id("bennett"), id("chioma")),
        ]);
        assert_eq!(graph.mutual_count(&id("amara"), &id("bennett")), 1);
        assert!(graph.mutuals(&id("amara"), &id("bennett")).contains(&id("chioma")));
    }

    #[test]
    fn duplicate_and_self_edges_ignored() {
        let mut graph = AcceptedGraph::new();
        graph.add_edge(id("amara"), id("bennett"));
        graph.add_edge(id("bennett"), id("amara"));
        graph.add_edge(id("amara"), id("amara"));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.member_count(), 2);
    }
}
