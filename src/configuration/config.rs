//! Configuration types for loading visualizer scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`DisplayConfig`]    – visualizer options (step period, trace file)
//! - [`ParametersConfig`] – numerical parameters for the built-in MD oracle
//! - [`AtomConfig`]       – initial state for each atom
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! display:
//!   delay_time: 1.0       # seconds per simulation step on screen
//!   trace_path: "trace.txt"
//!
//! parameters:
//!   dt: 0.005             # integration step size
//!   epsilon: 1.0          # Lennard-Jones well depth
//!   sigma: 1.0            # Lennard-Jones zero-crossing distance
//!   cutoff: 2.5           # pair interaction cutoff distance
//!
//! atoms:
//!   - id: 1
//!     type: 1
//!     x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.1, 0.0, 0.0 ]
//!     m: 1.0
//!   - id: 2
//!     type: 2
//!     x: [ 1.1, 0.0, 0.0 ]
//!     v: [ -0.1, 0.0, 0.0 ]
//!     m: 1.0
//! ```
//!
//! The oracle then maps this configuration into its internal runtime
//! representation, which may use different structs optimized for stepping.

use serde::Deserialize;

/// Visualizer-level options
#[derive(Deserialize, Debug, Clone)]
pub struct DisplayConfig {
    pub delay_time: f64, // nominal seconds between simulation steps; also tween duration
    pub trace_path: Option<String>, // per-step position trace file; `None` disables tracing
}

/// Global numerical parameters for the built-in MD oracle
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,      // integration step size
    pub epsilon: f64, // LJ well depth
    pub sigma: f64,   // LJ zero-crossing distance
    pub cutoff: f64,  // pair cutoff distance
}

/// Configuration for a single atom's initial state
#[derive(Deserialize, Debug)]
pub struct AtomConfig {
    pub id: u32, // Positive atom id, unique within the scenario
    #[serde(rename = "type")]
    pub type_tag: u32, // Atom type, drives the appearance lookup
    pub x: Vec<f64>, // Initial position vector in simulation units
    pub v: Vec<f64>, // Initial velocity vector in simulation units per time unit
    pub m: f64, // Mass of the atom
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub display: DisplayConfig, // Visualizer options (step period, trace file)
    pub parameters: ParametersConfig, // Numerical parameters for the oracle
    pub atoms: Vec<AtomConfig>, // List of atoms that define the initial state
}
