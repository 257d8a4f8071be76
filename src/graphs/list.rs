use std::collections::{hash_map, hash_set};
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Flatten;
use std::option;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::graphs::{
    edge::Edge,
    edges::{InsertEdge, ReadEdges, RemoveEdge},
    graph::Graph,
    undirected::Undirected,
    vertex::Vertex,
    vertices::{InsertVertex, ReadVertices, RemoveVertex, Vertices},
};

/// Adjacency-list graph.
///
/// Each vertex owns the set of edges incident on it, and a separate set holds
/// every edge once. Incident queries cost `O(degree)` and vertex removal only
/// touches the removed vertex's neighbourhood.
///
/// Keys of `adjacency` are the vertex set: a vertex is present exactly when
/// it has an entry, possibly empty.
#[derive(Debug, Clone)]
pub struct ListGraph<V = Vertex> {
    adjacency: FxHashMap<V, FxHashSet<Edge<V>>>,
    edges: FxHashSet<Edge<V>>,
}

impl<V> Default for ListGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            edges: FxHashSet::default(),
        }
    }
}

impl<V> ListGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that both copies of every edge agree.
    ///
    /// Every stored edge appears in the incident set of both endpoints, and
    /// incident sets hold nothing else.
    pub fn is_consistent(&self) -> bool {
        let edges_listed = self.edges.iter().all(|edge| {
            let (a, b) = edge.endpoints();
            [a, b].into_iter().all(|endpoint| {
                self.adjacency
                    .get(endpoint)
                    .is_some_and(|incident| incident.contains(edge))
            })
        });

        let incident_known = self.adjacency.iter().all(|(vertex, incident)| {
            incident
                .iter()
                .all(|edge| edge.is_incident(vertex) && self.edges.contains(edge))
        });

        let incident_total: usize = self.adjacency.values().map(FxHashSet::len).sum();

        edges_listed && incident_known && incident_total == 2 * self.edges.len()
    }
}

impl<V> Vertices for ListGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Vertex = V;
}

impl<V> ReadVertices for ListGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Vertices<'a>
        = hash_map::Keys<'a, V, FxHashSet<Edge<V>>>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.adjacency.keys()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl<V> InsertVertex for ListGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn insert_vertex(&mut self, vertex: V) -> bool {
        match self.adjacency.entry(vertex) {
            hash_map::Entry::Occupied(entry) => {
                trace!(vertex = ?entry.key(), "rejected duplicate vertex");
                false
            }
            hash_map::Entry::Vacant(entry) => {
                entry.insert(FxHashSet::default());
                true
            }
        }
    }
}

impl<V> RemoveVertex for ListGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let incident: Vec<Edge<V>> = match self.adjacency.get(vertex) {
            Some(incident) => incident.iter().cloned().collect(),
            None => return false,
        };

        for edge in &incident {
            self.remove_edge(edge);
        }
        self.adjacency.remove(vertex);

        debug_assert!(self.is_consistent());
        true
    }
}

impl<V> ReadEdges for ListGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Edges<'a>
        = hash_set::Iter<'a, Edge<V>>
    where
        Self: 'a;

    fn edges(&self) -> Self::Edges<'_> {
        self.edges.iter()
    }

    fn has_edge(&self, edge: &Edge<V>) -> bool {
        self.edge_between(edge.v1(), edge.v2()).is_some()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V> InsertEdge for ListGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn insert_edge(&mut self, edge: Edge<V>) -> bool {
        if !self.has_vertex(edge.v1()) || !self.has_vertex(edge.v2()) {
            trace!(?edge, "rejected edge with a missing endpoint");
            return false;
        }
        if self.edges.contains(&edge) {
            trace!(?edge, "rejected duplicate edge");
            return false;
        }

        for endpoint in [edge.v1(), edge.v2()] {
            if let Some(incident) = self.adjacency.get_mut(endpoint) {
                incident.insert(edge.clone());
            }
        }
        self.edges.insert(edge);
        true
    }
}

impl<V> RemoveEdge for ListGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn remove_edge(&mut self, edge: &Edge<V>) -> bool {
        let Some(stored) = self.edges.take(edge) else {
            return false;
        };

        for endpoint in [stored.v1(), stored.v2()] {
            if let Some(incident) = self.adjacency.get_mut(endpoint) {
                incident.remove(&stored);
            }
        }
        true
    }
}

impl<V> Undirected for ListGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Incident<'a>
        = Flatten<option::IntoIter<&'a FxHashSet<Edge<V>>>>
    where
        Self: 'a;

    fn incident_edges(&self, vertex: &V) -> Self::Incident<'_> {
        self.adjacency.get(vertex).into_iter().flatten()
    }

    fn edge_between(&self, a: &V, b: &V) -> Option<&Edge<V>> {
        self.adjacency
            .get(a)?
            .iter()
            .find(|edge| edge.connects(a, b))
    }

    fn degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map_or(0, FxHashSet::len)
    }
}

impl<V> Graph for ListGraph<V> where V: Clone + Eq + Hash + Debug {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::undirected::NO_EDGE;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn v(id: i64) -> Vertex {
        Vertex::new(id, format!("v{id}"))
    }

    fn e(a: i64, b: i64, length: i64) -> Edge {
        Edge::new(v(a), v(b), length).unwrap()
    }

    fn triangle() -> ListGraph {
        let mut graph: ListGraph = ListGraph::new();
        for id in 1..=3 {
            graph.insert_vertex(v(id));
        }
        graph.insert_edge(e(1, 2, 5));
        graph.insert_edge(e(2, 3, 3));
        graph.insert_edge(e(1, 3, 10));
        graph
    }

    #[test]
    fn default_is_empty_and_consistent() {
        let graph = ListGraph::<Vertex>::default();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.total_edge_length(), 0);
        assert!(graph.is_consistent());
        assert_eq!(graph.incident_edges(&v(1)).count(), 0);
    }

    #[test]
    fn duplicate_vertices_are_rejected() {
        let mut graph: ListGraph = ListGraph::new();
        assert!(graph.insert_vertex(v(1)));
        assert!(!graph.insert_vertex(v(1)));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn edges_need_both_endpoints() {
        let mut graph: ListGraph = ListGraph::new();
        graph.insert_vertex(v(1));

        assert!(!graph.insert_edge(e(1, 2, 4)));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(&v(1)), 0);
    }

    #[test]
    fn duplicate_edges_are_rejected_in_either_direction() {
        let mut graph = triangle();

        assert!(!graph.insert_edge(e(2, 1, 99)));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_length(&v(1), &v(2)), 5, "length is not updated");
    }

    #[test]
    fn queries_are_symmetric() {
        let graph = triangle();

        for (a, b) in [(1, 2), (2, 3), (1, 3)] {
            assert!(graph.is_connected(&v(a), &v(b)));
            assert!(graph.is_connected(&v(b), &v(a)));
            assert_eq!(
                graph.edge_length(&v(a), &v(b)),
                graph.edge_length(&v(b), &v(a))
            );
            assert_eq!(graph.edge_between(&v(a), &v(b)), Some(&e(a, b, 0)));
        }

        assert!(graph.has_edge(&e(3, 1, 0)));
        assert!(!graph.is_connected(&v(1), &v(4)));
        assert_eq!(graph.edge_length(&v(1), &v(4)), NO_EDGE);
    }

    #[test]
    fn neighbors_map_to_joining_edges() {
        let graph = triangle();
        let neighbors = graph.neighbors(&v(2));

        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[&v(1)].length(), 5);
        assert_eq!(neighbors[&v(3)].length(), 3);
        assert!(graph.neighbors(&v(9)).is_empty());
    }

    #[test]
    fn returned_sets_are_copies() {
        let mut graph = triangle();

        let mut vertices = graph.vertex_set();
        vertices.insert(v(42));
        assert!(!graph.has_vertex(&v(42)));

        let edges = graph.edge_set();
        let incident = graph.incident_edge_set(&v(1));
        graph.remove_vertex(&v(1));

        assert_eq!(edges.len(), 3);
        assert_eq!(incident.len(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn removing_a_vertex_drops_incident_edges() {
        let mut graph = triangle();

        assert!(graph.remove_vertex(&v(2)));
        assert!(!graph.remove_vertex(&v(2)));

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.total_edge_length(), 10);
        assert_eq!(graph.degree(&v(1)), 1);
        assert!(graph.incident_edge_set(&v(2)).is_empty());
        assert!(graph.neighbors(&v(2)).is_empty());
        assert!(!graph.neighbors(&v(1)).contains_key(&v(2)));
        assert!(graph.is_consistent());
    }

    #[test]
    fn insert_then_remove_restores_previous_state() {
        let mut graph = triangle();
        let before = (graph.vertex_set(), graph.edge_set(), graph.total_edge_length());

        graph.insert_vertex(v(4));
        graph.insert_edge(e(4, 1, 2));
        graph.insert_edge(e(4, 3, 7));
        assert!(graph.remove_vertex(&v(4)));

        assert_eq!(
            (graph.vertex_set(), graph.edge_set(), graph.total_edge_length()),
            before
        );
    }

    #[test]
    fn removing_an_edge_ignores_length() {
        let mut graph = triangle();

        assert!(graph.remove_edge(&e(3, 2, 1000)));
        assert!(!graph.remove_edge(&e(2, 3, 3)));
        assert!(!graph.is_connected(&v(2), &v(3)));
        assert_eq!(graph.total_edge_length(), 15);
        assert!(graph.is_consistent());
    }

    prop_compose! {
        fn small_ops()
            (ops in proptest::collection::vec((0u8..4, 0i64..8, 0i64..8, 0i64..20), 0..120))
            -> Vec<(u8, i64, i64, i64)>
        {
            ops
        }
    }

    proptest! {
        #[test]
        fn prop_random_mutations_stay_consistent(ops in small_ops()) {
            let mut graph: ListGraph = ListGraph::new();
            for (op, a, b, length) in ops {
                match op {
                    0 => { graph.insert_vertex(v(a)); }
                    1 => { graph.remove_vertex(&v(a)); }
                    2 => {
                        if let Ok(edge) = Edge::new(v(a), v(b), length) {
                            graph.insert_edge(edge);
                        }
                    }
                    _ => {
                        if let Ok(edge) = Edge::new(v(a), v(b), 0) {
                            graph.remove_edge(&edge);
                        }
                    }
                }
                prop_assert!(graph.is_consistent());
            }

            let degree_sum: usize = graph.vertices().map(|u| graph.degree(u)).sum();
            prop_assert_eq!(degree_sum, 2 * graph.edge_count());
        }
    }

    #[test]
    fn random_stress_matches_reference_model() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_4C49_5354_4752_4150);

        for _case in 0..50 {
            let mut graph: ListGraph = ListGraph::new();
            let mut vertices = FxHashSet::default();
            let mut edges: FxHashMap<(i64, i64), i64> = FxHashMap::default();

            for _ in 0..300 {
                let a = rng.random_range(0..12);
                let b = rng.random_range(0..12);
                let key = (a.min(b), a.max(b));
                match rng.random_range(0..4) {
                    0 => assert_eq!(graph.insert_vertex(v(a)), vertices.insert(a)),
                    1 => {
                        assert_eq!(graph.remove_vertex(&v(a)), vertices.remove(&a));
                        edges.retain(|&(x, y), _| x != a && y != a);
                    }
                    2 if a != b => {
                        let length = rng.random_range(0..50);
                        let expected = vertices.contains(&a)
                            && vertices.contains(&b)
                            && !edges.contains_key(&key);
                        assert_eq!(graph.insert_edge(e(a, b, length)), expected);
                        if expected {
                            edges.insert(key, length);
                        }
                    }
                    3 if a != b => {
                        assert_eq!(
                            graph.remove_edge(&e(a, b, 0)),
                            edges.remove(&key).is_some()
                        );
                    }
                    _ => {}
                }
            }

            assert_eq!(graph.vertex_count(), vertices.len());
            assert_eq!(graph.edge_count(), edges.len());
            assert_eq!(graph.total_edge_length(), edges.values().sum::<i64>());
            for (&(a, b), &length) in &edges {
                assert_eq!(graph.edge_length(&v(a), &v(b)), length);
            }
        }
    }
}
