//! Core state types for the built-in MD oracle.
//!
//! Defines the atom/system structs:
//! - `Atom` using `NVec3` for position and velocity
//! - `System` holding the list of atoms and the current simulation time `t`
//!
//! Atom ids are assigned at load time and never change during a run; no
//! atoms are created or removed while the visualizer is stepping.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Atom {
    pub id: u32, // stable positive id
    pub type_tag: u32, // stable atom type, drives appearance lookup
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
}

#[derive(Debug, Clone)]
pub struct System {
    pub atoms: Vec<Atom>, // collection of atoms
    pub t: f64, // time
}
