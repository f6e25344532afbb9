use crate::entry::Entry;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapNode {
    pub id: String,
    pub start_minutes: i32,
    pub end_minutes: i32,
}

/// Interval graph over the regular entries of one collection: an edge joins
/// every pair of entries whose `[start, end)` spans intersect. General rows
/// are not part of the graph.
pub struct OverlapGraph {
    pub graph: UnGraph<OverlapNode, ()>,
    pub id_to_index: HashMap<String, NodeIndex>,
}

impl OverlapGraph {
    pub fn build(entries: &[Entry]) -> Self {
        let mut graph: UnGraph<OverlapNode, ()> = UnGraph::new_undirected();
        let mut id_to_index: HashMap<String, NodeIndex> = HashMap::new();

        for entry in entries.iter().filter(|entry| !entry.is_general) {
            let node_ix = graph.add_node(OverlapNode {
                id: entry.id.clone(),
                start_minutes: entry.start_minutes,
                end_minutes: entry.end_minutes,
            });
            id_to_index.insert(entry.id.clone(), node_ix);
        }

        // Sweep by start time; only nodes starting before `a` ends can overlap it.
        let mut order: Vec<NodeIndex> = graph.node_indices().collect();
        order.sort_by_key(|&ix| graph[ix].start_minutes);
        let mut edges = Vec::new();
        for (pos, &a) in order.iter().enumerate() {
            let a_end = graph[a].end_minutes;
            for &b in &order[pos + 1..] {
                if graph[b].start_minutes >= a_end {
                    break;
                }
                edges.push((a, b));
            }
        }
        for (a, b) in edges {
            graph.add_edge(a, b, ());
        }

        Self { graph, id_to_index }
    }

    /// Ids of the regular entries overlapping `id`, sorted. `None` when `id`
    /// is unknown or a general row.
    pub fn conflicts_of(&self, id: &str) -> Option<Vec<&str>> {
        let node_ix = *self.id_to_index.get(id)?;
        let mut ids: Vec<&str> = self
            .graph
            .neighbors(node_ix)
            .map(|ix| self.graph[ix].id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Some(ids)
    }

    /// Connected groups of transitively overlapping entries. Each group is
    /// sorted, groups are ordered by their first id.
    pub fn clusters(&self) -> Vec<Vec<&str>> {
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut clusters = Vec::new();
        for start in self.graph.node_indices() {
            if visited.contains(&start) {
                continue;
            }
            let mut cluster = Vec::new();
            let mut bfs = Bfs::new(&self.graph, start);
            while let Some(ix) = bfs.next(&self.graph) {
                visited.insert(ix);
                cluster.push(self.graph[ix].id.as_str());
            }
            cluster.sort_unstable();
            clusters.push(cluster);
        }
        clusters.sort();
        clusters
    }

    /// Largest number of regular entries running at the same instant, which
    /// is also the fewest regular lanes any packing can use.
    pub fn max_concurrent(&self) -> usize {
        let mut events: Vec<(i32, i32)> = self
            .graph
            .node_weights()
            .flat_map(|node| [(node.start_minutes, 1), (node.end_minutes, -1)])
            .collect();
        // Ends sort before starts at the same minute: spans are half-open.
        events.sort_unstable();
        let mut running = 0i32;
        let mut peak = 0i32;
        for (_, delta) in events {
            running += delta;
            peak = peak.max(running);
        }
        peak as usize
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
