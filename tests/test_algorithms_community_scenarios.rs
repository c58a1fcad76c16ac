#[cfg(test)]
mod tests {

    use assert_approx_eq::assert_approx_eq;
    use commstatus::algorithms::community::{
        best_partition, compare_partitions, induced_graph, modularity, partition_at_level, renumber, Model,
    };
    use commstatus::generators::ring_with_chords;
    use commstatus::{Edge, Graph, GraphSpecs, Node};
    use std::collections::HashMap;

    fn complete_bipartite_k33() -> Graph<i32, ()> {
        let mut edges = Vec::new();
        for u in 0..3 {
            for v in 3..6 {
                edges.push(Edge::new(u, v));
            }
        }
        Graph::new_from_nodes_and_edges(vec![], edges, GraphSpecs::undirected()).unwrap()
    }

    #[test]
    fn complete_bipartite_dcppm_collapses_to_one_community() {
        let graph = complete_bipartite_k33();
        let partition = best_partition(&graph, Model::Dcppm { gamma: 1.0 }, false, None).unwrap();
        let distinct: std::collections::HashSet<usize> = partition.values().copied().collect();
        assert_eq!(distinct.len(), 1);
        assert_approx_eq!(modularity(&graph, &partition, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn complete_bipartite_ppm_also_collapses_to_one_community() {
        let graph = complete_bipartite_k33();
        let partition = best_partition(&graph, Model::Ppm { gamma: 1.0 }, false, None).unwrap();
        let distinct: std::collections::HashSet<usize> = partition.values().copied().collect();
        assert_eq!(distinct.len(), 1);
    }

    #[test]
    fn ring_with_chords_finds_multiple_communities_and_is_stable() {
        let graph = ring_with_chords(10, 2);

        let first = best_partition(&graph, Model::Dcppm { gamma: 1.0 }, false, None).unwrap();
        let distinct: std::collections::HashSet<usize> = first.values().copied().collect();
        assert!(distinct.len() >= 2);

        let second = best_partition(&graph, Model::Dcppm { gamma: 1.0 }, false, None).unwrap();
        let mut first_labels: Vec<usize> = (0..10).map(|v| first[&v]).collect();
        let mut second_labels: Vec<usize> = (0..10).map(|v| second[&v]).collect();
        first_labels = renumber(&first_labels);
        second_labels = renumber(&second_labels);
        assert_eq!(first_labels, second_labels);
    }

    #[test]
    fn induced_graph_sanity_example() {
        // 4 nodes, edges {(0,1,1),(1,2,1),(2,3,1),(0,2,1)}, partition {0,1 -> A; 2,3 -> B}.
        let edges = vec![
            Edge::with_weight(0, 1, 1.0),
            Edge::with_weight(1, 2, 1.0),
            Edge::with_weight(2, 3, 1.0),
            Edge::with_weight(0, 2, 1.0),
        ];
        let graph: Graph<i32, ()> =
            Graph::new_from_nodes_and_edges(vec![], edges, GraphSpecs::undirected()).unwrap();

        let partition = vec![0, 0, 1, 1]; // node index -> community (A=0, B=1)
        let contracted = induced_graph(&partition, &graph);

        assert_eq!(contracted.number_of_nodes(), 2);
        assert_approx_eq!(contracted.self_loop_weight_by_index(0), 1.0);
        assert_approx_eq!(contracted.self_loop_weight_by_index(1), 1.0);
        assert_approx_eq!(contracted.get_edge_weight(&0, &1).unwrap().unwrap(), 2.0);
    }

    #[test]
    fn dendrogram_lifting_worked_example() {
        // P0 = {a:0, b:0, c:1}, P1 = {0:0, 1:0}.
        let p0 = vec![0usize, 0, 1];
        let p1 = vec![0usize, 0];
        let dendrogram = vec![p0, p1];
        let lifted = partition_at_level(&dendrogram, 1);
        assert_eq!(lifted, vec![0, 0, 0]);
    }

    #[test]
    fn compare_worked_example() {
        let mut p1: HashMap<&str, usize> = HashMap::new();
        p1.insert("a", 0);
        p1.insert("b", 0);
        p1.insert("c", 1);
        p1.insert("d", 1);
        let mut p2: HashMap<&str, usize> = HashMap::new();
        p2.insert("a", 0);
        p2.insert("b", 1);
        p2.insert("c", 0);
        p2.insert("d", 1);

        let result = compare_partitions(&p1, &p2).unwrap();
        assert_approx_eq!(result.rand, 1.0 / 3.0);
        assert_approx_eq!(result.jaccard, 0.0);
        assert_approx_eq!(result.nmi, 0.0);
    }

    #[test]
    fn edgeless_graph_returns_identity_dendrogram() {
        let graph = Graph::<i32, ()>::new_from_nodes_and_edges(
            vec![Node::from_name(0), Node::from_name(1), Node::from_name(2)],
            vec![],
            GraphSpecs::undirected(),
        )
        .unwrap();
        let partition = best_partition(&graph, Model::Dcppm { gamma: 1.0 }, false, None).unwrap();
        let distinct: std::collections::HashSet<usize> = partition.values().copied().collect();
        assert_eq!(distinct.len(), 3);
    }
}
