//! Fixed-step time integrator for the MD system
//!
//! Provides a velocity-Verlet step driven by `ForceSet` and `Parameters`

use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{System, NVec3};

/// Advance the system by one step using velocity-Verlet
/// Uses two force evaluations per step and updates positions, velocities,
/// and `sys.t` in-place with fixed step `dt = params.dt`
pub fn verlet_step(sys: &mut System, forces: &ForceSet, params: &Parameters) {
    let n = sys.atoms.len();
    if n == 0 { // no atoms, return
        return;
    }

    let dt = params.dt; // time step dt
    let half_dt = 0.5 * dt; // half step dt/2

    // a_n from x_n at time t_n
    let mut a_old = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_old);

    // Kick: v_n+1/2 = v_n + (1/2 * dt) * a_n
    for (atom, a) in sys.atoms.iter_mut().zip(a_old.iter()) {
        atom.v += half_dt * *a;
    }

    // Drift: full-step position: x_n+1 = x_n + dt v_n+1/2
    for atom in sys.atoms.iter_mut() {
        atom.x += dt * atom.v;
    }

    // advance time: t_n+1 = t_n + dt
    sys.t += dt;

    // a_n+1 from x_n+1 at time t_n+1
    let mut a_new = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_new);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (atom, a) in sys.atoms.iter_mut().zip(a_new.iter()) {
        atom.v += half_dt * *a;
    }
}
