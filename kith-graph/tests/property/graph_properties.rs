//! Property tests: mutual-count symmetry, endpoint exclusion, neighbor
//! symmetry over arbitrary edge lists.

use proptest::prelude::*;

use kith_core::models::MemberId;
use kith_graph::AcceptedGraph;

fn member_id() -> impl Strategy<Value = MemberId> {
    // A small id universe so random edge lists actually overlap.
    (0u8..12).prop_map(|n| MemberId(format!("member-{n}")))
}

fn edge_list() -> impl Strategy<Value = Vec<(MemberId, MemberId)>> {
    prop::collection::vec((member_id(), member_id()), 0..40)
}

proptest! {
    #[test]
    fn mutual_count_is_symmetric(edges in edge_list(), a in member_id(), b in member_id()) {
        let graph = AcceptedGraph::from_pairs(edges);
        prop_assert_eq!(graph.mutual_count(&a, &b), graph.mutual_count(&b, &a));
    }

    #[test]
    fn mutuals_never_contain_the_endpoints(
        edges in edge_list(),
        a in member_id(),
        b in member_id(),
    ) {
        let graph = AcceptedGraph::from_pairs(edges);
        let mutuals = graph.mutuals(&a, &b);
        prop_assert!(!mutuals.contains(&a));
        prop_assert!(!mutuals.contains(&b));
    }

    #[test]
    fn neighbor_relation_is_symmetric(edges in edge_list()) {
        let graph = AcceptedGraph::from_pairs(edges.clone());
        let members: std::collections::BTreeSet<MemberId> = edges
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .collect();
        for member in &members {
            for neighbor in graph.neighbors(member) {
                prop_assert!(graph.neighbors(&neighbor).contains(member));
            }
        }
    }

    #[test]
    fn mutual_count_never_exceeds_smaller_degree(
        edges in edge_list(),
        a in member_id(),
        b in member_id(),
    ) {
        let graph = AcceptedGraph::from_pairs(edges);
        let bound = graph.degree(&a).min(graph.degree(&b));
        prop_assert!(graph.mutual_count(&a, &b) <= bound);
    }
}
