use std::{panic, thread};

use log::debug;
use nalgebra::Vector2;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::{Node, Quadtree};
use crate::{gravity, Body, Execution, Geometry};

/// Result of a single Barnes-Hut force walk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceEvaluation {
    pub force: Vector2<f64>,
    /// Number of point forces evaluated, i.e. bodies and approximated subtrees.
    pub interactions: usize,
}

impl ForceEvaluation {
    fn zero() -> Self {
        Self {
            force: Vector2::zeros(),
            interactions: 0,
        }
    }

    fn add(&mut self, probe: &Body, source: &Body) {
        self.force += gravity::force(probe, source);
        self.interactions += 1;
    }
}

impl Quadtree {
    /// Force on the body stored at `position`, approximated with opening angle `theta`.
    ///
    /// The mass of the probe is taken from the tree, a position that holds no
    /// body feels no force. `theta = 0` sums over every other body exactly.
    ///
    /// An inner node whose center of mass coincides with the probe is opened
    /// rather than skipped, so only then does the result differ from a walk
    /// that skips every node at the probe's position.
    #[must_use]
    pub fn force_on(&self, position: &Vector2<f64>, theta: f64) -> Vector2<f64> {
        self.evaluate(position, theta).force
    }

    /// Same as [`force_on`](Self::force_on), also counting the interactions.
    #[must_use]
    pub fn evaluate(&self, position: &Vector2<f64>, theta: f64) -> ForceEvaluation {
        match self.mass_at(position) {
            Some(mass) => self.evaluate_body(&Body::new(mass, *position), theta),
            None => ForceEvaluation::zero(),
        }
    }

    /// Force walk for an arbitrary probe.
    ///
    /// A body stored at the probe's position is treated as the probe itself
    /// and skipped.
    #[must_use]
    pub fn evaluate_body(&self, probe: &Body, theta: f64) -> ForceEvaluation {
        let mut evaluation = ForceEvaluation::zero();
        if let Some(root) = &self.root {
            root.accumulate_force(probe, theta, &self.geometry, 0, &mut evaluation);
        }
        evaluation
    }

    /// Force on every stored body, in the order of [`bodies`](Self::bodies).
    pub fn forces(&self, theta: f64, execution: Execution) -> Vec<(Body, Vector2<f64>)> {
        let bodies: Vec<_> = self.bodies().collect();
        debug!(
            "calculating forces on {} bodies with theta = {theta} ({execution:?})",
            bodies.len()
        );

        let force = |body: &Body| self.evaluate_body(body, theta).force;

        let forces: Vec<_> = match execution {
            Execution::SingleThreaded => bodies.iter().map(force).collect(),
            Execution::Multithreaded { num_threads } => {
                let chunk_size = bodies.len().div_ceil(num_threads.max(1)).max(1);
                thread::scope(|s| {
                    let handles: Vec<_> = bodies
                        .chunks(chunk_size)
                        .map(|chunk| s.spawn(move || chunk.iter().map(force).collect::<Vec<_>>()))
                        .collect();

                    handles
                        .into_iter()
                        .flat_map(|handle| {
                            handle
                                .join()
                                .unwrap_or_else(|err| panic::resume_unwind(err))
                        })
                        .collect()
                })
            }
            #[cfg(feature = "rayon")]
            Execution::RayonIter => bodies.par_iter().map(force).collect(),
        };

        bodies.into_iter().zip(forces).collect()
    }
}

impl Node {
    fn accumulate_force(
        &self,
        probe: &Body,
        theta: f64,
        geometry: &Geometry,
        level: u32,
        evaluation: &mut ForceEvaluation,
    ) {
        if self.is_placeholder() {
            return;
        }

        match self.subnodes.as_deref() {
            // skip the probe itself
            None if self.body.position == probe.position => {}
            None => evaluation.add(probe, &self.body),
            Some(subnodes) => {
                // an inner node at d = 0 has an infinite ratio and is always opened
                let d = (self.body.position - probe.position).norm();
                if geometry.half_width(level) / d < theta {
                    evaluation.add(probe, &self.body);
                } else {
                    for node in subnodes.iter() {
                        node.accumulate_force(probe, theta, geometry, level + 1, evaluation);
                    }
                }
            }
        }
    }
}
