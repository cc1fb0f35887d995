//! Random weighted grid graphs and shortest paths over them.
//!
//! - **Graph generation** ([`generate_graph`]): a 4-connected grid graph whose
//!   edges carry random integer lengths in `1..=5`.
//! - **A\*** shortest-path search ([`find_path`]) with a pluggable
//!   [`Heuristic`].
//! - **Dijkstra** single-source distances ([`dijkstra_costs`],
//!   [`shortest_cost`]), used as an independent reference.
//!
//! ```
//! use gridpath_paths::{chebyshev, find_path, generate_graph};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let graph = generate_graph(10, &mut rng);
//! let (start, goal) = (graph.start().unwrap(), graph.goal().unwrap());
//! let path = find_path(&graph, start, goal, &chebyshev).unwrap();
//! assert_eq!(path.first(), Some(&start));
//! assert_eq!(path.last(), Some(&goal));
//! ```

mod astar;
mod dijkstra;
mod distance;
mod graph;
mod queue;
mod traits;

pub use astar::find_path;
pub use dijkstra::{dijkstra_costs, shortest_cost};
pub use distance::{chebyshev, manhattan};
pub use graph::{Edge, Graph, GraphError, MAX_EDGE_LENGTH, MIN_EDGE_LENGTH, generate_graph};
pub use queue::UNREACHABLE;
pub use traits::Heuristic;
