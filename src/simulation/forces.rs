//! Force / acceleration contributors for the MD oracle
//!
//! Defines the acceleration trait and the Lennard-Jones 12-6 pair
//! interaction used by the built-in stepper

use crate::simulation::states::{System, NVec3};

/// Collection of acceleration terms (pair potentials, external fields, etc)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per atom
pub struct ForceSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all atoms in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each atom
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Lennard-Jones 12-6 pair interaction with a hard distance cutoff
///
/// V(r) = 4 eps [ (sigma/r)^12 - (sigma/r)^6 ]
///
/// Forces on a pair are equal and opposite; accelerations divide by each
/// atom's own mass. Pairs beyond `cutoff` contribute nothing.
pub struct LennardJones {
    pub epsilon: f64, // well depth
    pub sigma: f64, // zero-crossing distance
    pub cutoff: f64, // pair cutoff distance
}

impl Acceleration for LennardJones {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let n = sys.atoms.len();
        if n == 0 { // No atoms, return
            return;
        }

        let cutoff2 = self.cutoff * self.cutoff;
        let sigma2 = self.sigma * self.sigma;

        // Floor on r^2 so overlapping atoms do not produce infinite forces
        let r2_min = 1e-12;

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = sys.atoms[i].x; // position of atom i
            let mi = sys.atoms[i].m; // mass of atom i

            for j in (i + 1)..n {
                let xj = sys.atoms[j].x; // position of atom j
                let mj = sys.atoms[j].m; // mass of atom j

                // r is the displacement vector from i to j
                let r = xj - xi;
                let r2 = r.dot(&r).max(r2_min);

                if r2 > cutoff2 {
                    continue;
                }

                // (sigma/r)^6 and (sigma/r)^12 via the squared ratio
                let s2 = sigma2 / r2;
                let s6 = s2 * s2 * s2;
                let s12 = s6 * s6;

                // Magnitude-over-r of the pair force:
                //   F(r)/r = 24 eps (2 (sigma/r)^12 - (sigma/r)^6) / r^2
                // Positive coef -> repulsion (force on j along +r)
                let coef = 24.0 * self.epsilon * (2.0 * s12 - s6) / r2;

                // f is the force on atom j; atom i feels -f (Newton's third law)
                let f = coef * r;

                out[i] -= f / mi;
                out[j] += f / mj;
            }
        }
    }
}
