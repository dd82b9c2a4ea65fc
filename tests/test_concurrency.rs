use elastoplast::prelude::*;
use russell_lab::approx_eq;
use std::thread;

// Independent material points integrated in parallel
//
// TEST GOAL
//
// Verifies that the laws share read-only properties and can be moved across threads.

#[test]
fn test_material_points_in_parallel() -> Result<(), Error> {
    let ideal = Idealization::new(3);
    let param = ParamLaw::small_strain(YieldSurfaceKind::VonMises, PlasticPotentialKind::VonMises);
    let props = SampleProperties::steel();
    let npoint = 8;
    let mut laws = Vec::new();
    for _ in 0..npoint {
        let mut law = allocate_law(&ideal, &param, &props, Settings::new())?;
        law.initialize_material(1.0)?;
        laws.push(law);
    }

    // each point gets a different strain magnitude
    let results: Vec<(f64, f64)> = thread::scope(|scope| {
        let handles: Vec<_> = laws
            .iter_mut()
            .enumerate()
            .map(|(p, law)| {
                scope.spawn(move || {
                    let mut values = LawParameters::new(6);
                    values.compute_constitutive_tensor = false;
                    let e = 0.0005 * (p + 1) as f64;
                    values.set_strain(&[e, -0.3 * e, -0.3 * e, 0.0, 0.0, 0.0]).unwrap();
                    law.calculate_material_response(&mut values, StressMeasure::Cauchy).unwrap();
                    law.finalize_solution_step();
                    let uniaxial = law.calculate_value(Output::UniaxialStress).unwrap().scalar().unwrap();
                    (values.stress[0], uniaxial)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // the first two points are elastic (σ = E ε); the others are on the yield surface
    approx_eq(results[0].0 / 105e6, 1.0, 1e-12);
    approx_eq(results[1].0 / 210e6, 1.0, 1e-12);
    for p in 2..npoint {
        approx_eq(results[p].1 / 250e6, 1.0, 1e-4);
    }

    // the committed states are independent
    for p in 0..npoint {
        let kappa = laws[p].state().committed.plastic_dissipation;
        if p < 2 {
            assert_eq!(kappa, 0.0);
        } else {
            assert!(kappa > 0.0);
        }
    }
    Ok(())
}
