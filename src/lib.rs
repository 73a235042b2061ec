//! A two-dimensional [Barnes-Hut](https://en.wikipedia.org/wiki/Barnes%E2%80%93Hut_simulation) quadtree.
//!
//! Bodies are inserted one at a time into a square universe of fixed half-width
//! centered at the origin. Every inner node keeps the total mass and the center
//! of mass of the bodies beneath it, which lets the force on a body be
//! approximated by treating distant subtrees as single point masses.
//!
//! ```
//! use barnes_hut_quadtree::{Body, Quadtree};
//! use nalgebra::Vector2;
//!
//! let mut tree = Quadtree::new(10.).unwrap();
//! tree.insert(Body::at(0., 0., 1.)).unwrap();
//! tree.insert(Body::at(1., 0., 1.)).unwrap();
//! tree.insert(Body::at(0., 1., 1.)).unwrap();
//!
//! assert_eq!(tree.total_mass(), 3.);
//! assert_eq!(tree.mass_at(&Vector2::new(1., 0.)), Some(1.));
//! let force = tree.force_on(&Vector2::new(1., 0.), 0.5);
//! assert!(force.x < 0.);
//! ```

mod body;
mod config;
#[cfg(feature = "randomization")]
pub mod creator;
pub mod direct_summation;
pub mod dump;
mod error;
mod geometry;
pub mod gravity;
mod quadtree;

pub use body::Body;
pub use config::Config;
pub use dump::{Notation, TreeDump};
pub use error::QuadtreeError;
pub use geometry::{Geometry, Quadrant};
pub use quadtree::{
    ForceEvaluation, NodeKind, NodeRef, Nodes, Quadtree, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT,
};

/// How forces on many bodies are calculated.
///
/// Queries only borrow the tree, so any number of threads can walk it at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    #[default]
    SingleThreaded,
    /// Split the bodies into chunks, one scoped thread per chunk.
    Multithreaded { num_threads: usize },
    /// Use Rayon's parallel iterators.
    #[cfg(feature = "rayon")]
    RayonIter,
}
