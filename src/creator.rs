//! Random bodies for tests, benchmarks and demos.

use nalgebra::Vector2;
use rand::{rngs::ThreadRng, Rng};
use rand_distr::Distribution;

use crate::{Body, Quadtree};

pub trait BodyCreator {
    fn create_body(&mut self) -> Body;

    fn create_bodies(&mut self, n: usize) -> Vec<Body> {
        (0..n).map(|_| self.create_body()).collect()
    }

    /// Insert `n` bodies into `tree`, drawing again whenever a body is rejected.
    ///
    /// Gives up after `n` rejections in a row and returns the number of bodies inserted.
    fn fill(&mut self, tree: &mut Quadtree, n: usize) -> usize {
        let mut inserted = 0;
        let mut rejected = 0;
        while inserted < n && rejected < n.max(1) {
            match tree.insert(self.create_body()) {
                Ok(()) => {
                    inserted += 1;
                    rejected = 0;
                }
                Err(_) => rejected += 1,
            }
        }
        inserted
    }
}

/// Samples the mass and both coordinates independently.
pub struct DistrBodyCreator<R, MD, PD>
where
    R: Rng,
    MD: Distribution<f64>,
    PD: Distribution<f64>,
{
    rng: R,
    mass_distr: MD,
    position_distr: PD,
}

impl<MD, PD> DistrBodyCreator<ThreadRng, MD, PD>
where
    MD: Distribution<f64>,
    PD: Distribution<f64>,
{
    pub fn new(mass_distr: MD, position_distr: PD) -> Self {
        Self::rng(mass_distr, position_distr, rand::thread_rng())
    }
}

impl<R, MD, PD> DistrBodyCreator<R, MD, PD>
where
    R: Rng,
    MD: Distribution<f64>,
    PD: Distribution<f64>,
{
    pub fn rng(mass_distr: MD, position_distr: PD, rng: R) -> Self {
        Self {
            rng,
            mass_distr,
            position_distr,
        }
    }
}

impl<R, MD, PD> BodyCreator for DistrBodyCreator<R, MD, PD>
where
    R: Rng,
    MD: Distribution<f64>,
    PD: Distribution<f64>,
{
    fn create_body(&mut self) -> Body {
        let rng = &mut self.rng;

        let m = self.mass_distr.sample(rng);
        let pos = Vector2::new(
            self.position_distr.sample(rng),
            self.position_distr.sample(rng),
        );

        Body::new(m, pos)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use rand_distr::{Normal, Uniform};

    use super::*;

    #[test]
    fn within_distribution() {
        let mut creator = DistrBodyCreator::rng(
            Uniform::new(1., 2.),
            Uniform::new(-5., 5.),
            StdRng::seed_from_u64(0),
        );

        for body in creator.create_bodies(100) {
            assert!((1. ..2.).contains(&body.mass));
            assert!(body.position.iter().all(|p| (-5. ..5.).contains(p)));
        }
    }

    #[test]
    fn seeded_is_reproducible() {
        let create = || {
            DistrBodyCreator::rng(
                Uniform::new(1., 2.),
                Uniform::new(-5., 5.),
                StdRng::seed_from_u64(42),
            )
            .create_bodies(10)
        };
        assert_eq!(create(), create());
    }

    #[test]
    fn fill_skips_out_of_bounds() {
        // a wide normal distribution regularly leaves the universe
        let mut creator = DistrBodyCreator::rng(
            Uniform::new(1., 2.),
            Normal::new(0., 8.).unwrap(),
            StdRng::seed_from_u64(1),
        );
        let mut tree = Quadtree::new(10.).unwrap();

        assert_eq!(creator.fill(&mut tree, 200), 200);
        assert_eq!(tree.len(), 200);
    }
}
