//! Homology network: vertex arena, mirrored adjacency, and the pruning loop
//!
//! The network keeps two synchronized views of the same edge set. Each vertex
//! holds its incident edge records for traversal, and a global [`EdgeIndex`]
//! orders every edge by weight for removal. Removal is logical: both mirrored
//! records flip to inactive and traversal skips them, so the index entry and
//! the adjacency records always agree on which edges remain.

use std::collections::HashMap;

use crate::cluster::Family;
use crate::error::NetworkError;
use crate::graph::edge_index::EdgeIndex;

/// Dense vertex identifier: an index into the network's vertex arena.
pub type VertexId = u32;

/// One incident edge as seen from a single vertex. A logical edge between A
/// and B exists as this record on A, the mirrored record on B, and one entry
/// in the edge index.
#[derive(Debug, Clone, Copy)]
struct EdgeRecord {
    neighbor: VertexId,
    weight: f64,
    active: bool,
}

/// A named genome in the network.
#[derive(Debug)]
pub struct Vertex {
    name: String,
    edges: Vec<EdgeRecord>,
    /// Transient marker for component counting, false between calls.
    visited: bool,
    /// Permanent marker set when the vertex lands in a family.
    assigned: bool,
}

impl Vertex {
    fn new(name: String) -> Self {
        Self {
            name,
            edges: Vec::new(),
            visited: false,
            assigned: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deactivate the first active record for `neighbor` with this weight.
    /// Parallel edges are distinct records, so one removal retires exactly
    /// one of them.
    fn deactivate_edge_to(&mut self, neighbor: VertexId, weight: f64) {
        for record in &mut self.edges {
            if record.active && record.neighbor == neighbor && record.weight == weight {
                record.active = false;
                return;
            }
        }
    }
}

/// The genome homology network.
///
/// Vertices are interned by name on first mention and live in a single owned
/// arena; identifiers are indexes into it. All edge liveness changes go
/// through this type so the mirrored records and the index never drift.
#[derive(Debug, Default)]
pub struct Network {
    vertices: Vec<Vertex>,
    names: HashMap<String, VertexId>,
    index: EdgeIndex,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct genomes seen so far.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of entries remaining in the edge index.
    pub fn indexed_edge_count(&self) -> usize {
        self.index.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.names.get(name).copied()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id as usize)
    }

    fn get_or_create_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.names.get(name) {
            return id;
        }
        let id = self.vertices.len() as VertexId;
        self.names.insert(name.to_string(), id);
        self.vertices.push(Vertex::new(name.to_string()));
        id
    }

    /// Connect two genomes with the given homology weight, creating either
    /// vertex on first mention. Pushes the mirrored pair of active records;
    /// the index entry is added separately by [`Network::index_edge`].
    pub fn add_pair(&mut self, name_a: &str, name_b: &str, weight: f64) {
        let a = self.get_or_create_vertex(name_a);
        let b = self.get_or_create_vertex(name_b);
        self.vertices[a as usize].edges.push(EdgeRecord {
            neighbor: b,
            weight,
            active: true,
        });
        self.vertices[b as usize].edges.push(EdgeRecord {
            neighbor: a,
            weight,
            active: true,
        });
    }

    /// Register an edge in the weight-ordered index. Both genomes must
    /// already exist, which [`Network::add_pair`] on the same pair
    /// guarantees.
    pub fn index_edge(&mut self, weight: f64, name_a: &str, name_b: &str) -> Result<(), NetworkError> {
        let a = self.vertex_id(name_a).ok_or_else(|| NetworkError::UnknownVertex {
            name: name_a.to_string(),
        })?;
        let b = self.vertex_id(name_b).ok_or_else(|| NetworkError::UnknownVertex {
            name: name_b.to_string(),
        })?;
        self.index.insert(weight, a, b);
        Ok(())
    }

    /// Count connected components over active edges.
    ///
    /// Idempotent: `visited` markers are cleared on entry and again before
    /// returning, and the permanent `assigned` markers are never touched, so
    /// back-to-back calls on an unchanged network agree.
    pub fn component_count(&mut self) -> usize {
        for vertex in &mut self.vertices {
            vertex.visited = false;
        }

        let mut count = 0;
        for id in 0..self.vertices.len() {
            if !self.vertices[id].visited {
                count += 1;
                self.mark_component(id as VertexId);
            }
        }

        for vertex in &mut self.vertices {
            vertex.visited = false;
        }
        count
    }

    /// Depth-first marking walk from `start` over active edges. Visit order
    /// does not matter here, only coverage.
    fn mark_component(&mut self, start: VertexId) {
        let mut stack = vec![start];
        self.vertices[start as usize].visited = true;
        while let Some(v) = stack.pop() {
            for i in 0..self.vertices[v as usize].edges.len() {
                let record = self.vertices[v as usize].edges[i];
                if record.active && !self.vertices[record.neighbor as usize].visited {
                    self.vertices[record.neighbor as usize].visited = true;
                    stack.push(record.neighbor);
                }
            }
        }
    }

    /// Prune the globally weakest edges until the network falls apart into
    /// `target` connected components, then extract every component as a
    /// [`Family`].
    ///
    /// Each round removes the minimum-weight index entry and deactivates its
    /// mirrored records, so only the strongest links survive at the requested
    /// granularity. A network already split into more than `target` pieces
    /// removes nothing and reports the components as they stand.
    ///
    /// Family membership markers are permanent, so a network supports one
    /// clustering pass.
    pub fn cluster(&mut self, target: usize) -> Result<Vec<Family>, NetworkError> {
        if target == 0 || target > self.vertices.len() {
            return Err(NetworkError::InvalidClusterCount {
                requested: target,
                vertices: self.vertices.len(),
            });
        }

        let mut removed = 0usize;
        while self.component_count() < target {
            let edge = match self.index.pop_min() {
                Some(edge) => edge,
                None => {
                    // A fully indexed network splits into singletons before
                    // the index empties, so this only fires when edges were
                    // added without index entries.
                    let reached = self.component_count();
                    return Err(NetworkError::ExhaustedEdges { target, reached });
                }
            };
            self.deactivate_pair(edge.a, edge.b, edge.weight);
            removed += 1;
        }
        log::debug!("Removed {} edges to reach {} components", removed, target);

        Ok(self.extract_families())
    }

    /// Flip both mirrored records of one edge to inactive.
    fn deactivate_pair(&mut self, a: VertexId, b: VertexId, weight: f64) {
        self.vertices[a as usize].deactivate_edge_to(b, weight);
        self.vertices[b as usize].deactivate_edge_to(a, weight);
    }

    /// Partition the network into families, scanning vertices in insertion
    /// order and numbering components as they are discovered. Every vertex
    /// lands in exactly one family.
    fn extract_families(&mut self) -> Vec<Family> {
        let mut families = Vec::new();
        for id in 0..self.vertices.len() {
            if self.vertices[id].assigned {
                continue;
            }
            let members = self.collect_family(id as VertexId);
            let names = members
                .iter()
                .map(|&member| self.vertices[member as usize].name.clone())
                .collect();
            families.push(Family {
                id: families.len(),
                members: names,
            });
        }
        families
    }

    /// Gather every vertex reachable from `start` over active edges, marking
    /// members as assigned. Members come out in depth-first preorder over
    /// the incidence lists: each vertex is appended when first reached, and
    /// its list is resumed where it left off once a branch is exhausted.
    fn collect_family(&mut self, start: VertexId) -> Vec<VertexId> {
        self.vertices[start as usize].assigned = true;
        let mut members = vec![start];
        // Frames hold (vertex, next incidence record to examine).
        let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let (v, mut cursor) = *frame;
            let mut next = None;
            while cursor < self.vertices[v as usize].edges.len() {
                let record = self.vertices[v as usize].edges[cursor];
                cursor += 1;
                if record.active && !self.vertices[record.neighbor as usize].assigned {
                    next = Some(record.neighbor);
                    break;
                }
            }
            frame.1 = cursor;

            match next {
                Some(n) => {
                    self.vertices[n as usize].assigned = true;
                    members.push(n);
                    stack.push((n, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }
        members
    }
}
