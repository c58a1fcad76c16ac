use crate::{Edge, Error, ErrorKind, EdgeDedupeStrategy, Graph, GraphSpecs, Node};

fn read_u32_le(bytes: &[u8], offset: usize) -> Result<u32, Error> {
    bytes
        .get(offset..offset + 4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .ok_or_else(|| Error {
            kind: ErrorKind::MalformedBinaryGraph,
            message: format!("truncated binary graph: expected a u32 at byte offset {}", offset),
        })
}

/**
Parses the legacy little-endian binary adjacency format: a `u32 N`, followed by `N` `u32`
cumulative-degree words (`cumdeg[i]` is the prefix sum of degrees through vertex `i`, with
`cumdeg[N-1]` doubling as the total link count `M` — there is no separate word for `M`), followed
by `M` `u32` neighbor-index words.

Each undirected edge `(i, j)` appears twice in the link stream, once from each endpoint's
adjacency run; duplicates are kept-first rather than summed so the resulting edge weights stay
`1.0`.
*/
pub fn read_binary_graph(bytes: &[u8]) -> Result<Graph<usize, ()>, Error> {
    let num_nodes = read_u32_le(bytes, 0)? as usize;

    let mut cum_deg = Vec::with_capacity(num_nodes);
    for i in 0..num_nodes {
        cum_deg.push(read_u32_le(bytes, 4 + 4 * i)? as usize);
    }
    let num_links = *cum_deg.last().unwrap_or(&0);

    let links_offset = 4 + 4 * num_nodes;
    let mut links = Vec::with_capacity(num_links);
    for k in 0..num_links {
        links.push(read_u32_le(bytes, links_offset + 4 * k)? as usize);
    }

    let nodes = (0..num_nodes).map(Node::from_name).collect();
    let mut graph = Graph::new_from_nodes_and_edges(
        nodes,
        vec![],
        GraphSpecs {
            edge_dedupe_strategy: EdgeDedupeStrategy::KeepFirst,
            multi_edges: false,
            self_loops: true,
            ..GraphSpecs::undirected()
        },
    )?;

    let mut previous_cum_deg = 0;
    for (index, &last_deg) in cum_deg.iter().enumerate() {
        for &neighbor in &links[previous_cum_deg..last_deg] {
            if neighbor >= num_nodes {
                return Err(Error {
                    kind: ErrorKind::MalformedBinaryGraph,
                    message: format!("neighbor index {} is out of range for {} nodes", neighbor, num_nodes),
                });
            }
            graph.add_edge(Edge::new(index, neighbor))?;
        }
        previous_cum_deg = last_deg;
    }

    Ok(graph)
}

/**
Serializes `graph` back to the binary layout [`read_binary_graph`] reads: for each node index in
order, every neighbor index (including a self-loop's own index, once) in ascending order, so a
freshly-loaded graph re-serializes to the same bytes it was read from.
*/
pub fn write_binary_graph<A: Clone>(graph: &Graph<usize, A>) -> Vec<u8> {
    let num_nodes = graph.number_of_nodes();

    let mut adjacency_lists: Vec<Vec<usize>> = Vec::with_capacity(num_nodes);
    for index in 0..num_nodes {
        let mut neighbors: Vec<usize> = graph.neighbor_weights_by_index(index).map(|(n, _)| n).collect();
        if graph.self_loop_weight_by_index(index) > 0.0 {
            neighbors.push(index);
        }
        neighbors.sort_unstable();
        adjacency_lists.push(neighbors);
    }

    let mut cum_deg = Vec::with_capacity(num_nodes);
    let mut running = 0usize;
    for neighbors in &adjacency_lists {
        running += neighbors.len();
        cum_deg.push(running as u32);
    }

    let mut out = Vec::with_capacity(4 + 4 * num_nodes + 4 * running);
    out.extend_from_slice(&(num_nodes as u32).to_le_bytes());
    for &d in &cum_deg {
        out.extend_from_slice(&d.to_le_bytes());
    }
    for neighbors in &adjacency_lists {
        for &n in neighbors {
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bytes() -> Vec<u8> {
        // A 3-node path 0-1-2: node 0 -> [1], node 1 -> [0, 2], node 2 -> [1].
        let num_nodes: u32 = 3;
        let cum_deg: [u32; 3] = [1, 3, 4];
        let links: [u32; 4] = [1, 0, 2, 1];

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&num_nodes.to_le_bytes());
        for d in cum_deg {
            bytes.extend_from_slice(&d.to_le_bytes());
        }
        for l in links {
            bytes.extend_from_slice(&l.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn reads_a_path_graph() {
        let graph = read_binary_graph(&sample_bytes()).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.get_edge_weight(&0, &1).unwrap(), Some(1.0));
        assert_eq!(graph.get_edge_weight(&1, &2).unwrap(), Some(1.0));
        assert_eq!(graph.get_edge_weight(&0, &2).unwrap(), None);
    }

    #[test]
    fn round_trips_byte_for_byte() {
        let bytes = sample_bytes();
        let graph = read_binary_graph(&bytes).unwrap();
        let rewritten = write_binary_graph(&graph);
        assert_eq!(rewritten, bytes);
    }

    #[test]
    fn rejects_truncated_input() {
        let err = read_binary_graph(&[1, 0, 0]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedBinaryGraph);
    }
}
