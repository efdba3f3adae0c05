#![deny(missing_docs)]

//! Component analysis, induced subgraphs and degree-preserving rewiring over
//! the `topo-core` graph contract.
//!
//! Every routine is generic over [`topo_core::UndirectedGraph`];
//! [`AdjacencyGraph`] is the bundled adjacency-list backend.

mod adjacency;
mod components;
mod config;
mod degree;
mod edges;
mod filters;
mod generators;
mod ids;
mod rewire;
mod subgraph;

pub use adjacency::AdjacencyGraph;
pub use components::{connected_components, ComponentLabels};
pub use config::RewireConfig;
pub use degree::{degree_bounds, degree_sequence};
pub use edges::{install_edges, is_adjacent, list_edges, remove_self_loops};
pub use filters::{filter_components, largest_component, largest_component_indices};
pub use generators::{gen_cycle, gen_disjoint_cliques, gen_gnm};
pub use rewire::{randomize_endpoints, randomize_endpoints_with_entropy, RewireOutcome};
pub use subgraph::{subgraph, subgraph_with_map, VertexIndexMap};
