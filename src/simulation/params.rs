//! Numerical parameters for the built-in MD oracle
//!
//! `Parameters` holds runtime settings:
//! - integration step size `dt`,
//! - Lennard-Jones constants (`epsilon`, `sigma`),
//! - pair interaction cutoff distance

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub epsilon: f64, // LJ well depth
    pub sigma: f64, // LJ zero-crossing distance
    pub cutoff: f64, // pair cutoff distance
}
