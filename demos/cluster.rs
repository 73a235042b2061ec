use barnes_hut_quadtree::{
    creator::{BodyCreator, DistrBodyCreator},
    direct_summation, Execution, Quadtree,
};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Normal, Uniform};

fn main() {
    // A normally distributed cluster of bodies in a universe of half-width 1000.
    let uniform_mass = Uniform::new(1e20, 1e24);
    let normal_pos = Normal::new(0., 200.).unwrap();
    let mut creator = DistrBodyCreator::rng(uniform_mass, normal_pos, StdRng::seed_from_u64(0));

    let num_bodies = 2_000;
    let mut tree = Quadtree::new(1000.).unwrap();
    let inserted = creator.fill(&mut tree, num_bodies);
    println!(
        "{inserted} bodies, total mass {:e}, depth {}",
        tree.total_mass(),
        tree.depth().unwrap_or(0)
    );

    let bodies: Vec<_> = tree.bodies().collect();
    let exact = direct_summation::forces(&bodies);

    for theta in [0., 0.25, 0.5, 1., 1.5] {
        let mut max_error: f64 = 0.;
        let mut interactions = 0;
        for (body, exact) in bodies.iter().zip(&exact) {
            let evaluation = tree.evaluate(&body.position, theta);
            max_error = max_error.max((evaluation.force - exact).norm() / exact.norm());
            interactions += evaluation.interactions;
        }
        println!(
            "theta = {theta:.2}: {:.1} interactions per body, max relative error {max_error:.2e}",
            interactions as f64 / bodies.len() as f64
        );
    }

    let forces = tree.forces(0.5, Execution::Multithreaded { num_threads: 4 });
    let net = forces.iter().fold(nalgebra::Vector2::zeros(), |acc, (_, f)| acc + f);
    println!("net force at theta = 0.50: ({:e}, {:e})", net.x, net.y);
}
