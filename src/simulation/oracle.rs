//! The stepping oracle behind the visualizer
//!
//! [`SimulationOracle`] is the seam between the Sync Loop and whatever owns
//! the physical state: "advance by one step" plus read-only access to the
//! current ids, types, and positions. [`MdOracle`] is the built-in
//! implementation, a Lennard-Jones system advanced by velocity-Verlet.
//!
//! Reads are pure: two consecutive reads with no intervening advance return
//! identical data. Any failure inside `advance_one_step` is fatal to the
//! caller; there is no retry or partial-progress path.

use std::collections::HashMap;

use anyhow::{bail, Result};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::forces::{ForceSet, LennardJones};
use crate::simulation::integrator::verlet_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Atom, NVec3, System};

/// Opaque stepping oracle: owns physical state, advances it one discrete
/// timestep at a time, and exposes consistent id/type/position reads.
///
/// `read_ids`, `read_type_tags`, and `read_positions` are indexed
/// consistently with each other and keep a stable order across calls.
pub trait SimulationOracle {
    /// Number of atoms in the simulation
    fn particle_count(&self) -> usize;

    /// Atom ids, in the oracle's internal order
    fn read_ids(&self) -> &[u32];

    /// Atom type tags, indexed consistently with [`Self::read_ids`]
    fn read_type_tags(&self) -> &[u32];

    /// Current atom positions, indexed consistently with [`Self::read_ids`]
    fn read_positions(&self) -> Vec<NVec3>;

    /// Map a global atom id to its local index, if present
    fn map_id(&self, id: u32) -> Option<usize>;

    /// Advance the simulation by exactly one discrete timestep
    /// Blocking and synchronous; errors are fatal to the caller
    fn advance_one_step(&mut self) -> Result<()>;
}

/// Built-in MD oracle: Lennard-Jones pair forces + velocity-Verlet stepping
pub struct MdOracle {
    system: System,
    forces: ForceSet,
    parameters: Parameters,
    ids: Vec<u32>, // cached id array, same order as system.atoms
    type_tags: Vec<u32>, // cached type array, same order as system.atoms
    id_index: HashMap<u32, usize>, // global id -> local index
}

impl MdOracle {
    /// Build an oracle from a scenario configuration
    ///
    /// Fails on a malformed definition: position/velocity vectors that are
    /// not 3 components, non-positive ids or masses, or duplicate ids.
    pub fn initialize(cfg: &ScenarioConfig) -> Result<Self> {
        let mut atoms = Vec::with_capacity(cfg.atoms.len());
        let mut id_index = HashMap::with_capacity(cfg.atoms.len());

        for (i, ac) in cfg.atoms.iter().enumerate() {
            if ac.x.len() != 3 {
                bail!("atom {}: position must have 3 components, got {}", i, ac.x.len());
            }
            if ac.v.len() != 3 {
                bail!("atom {}: velocity must have 3 components, got {}", i, ac.v.len());
            }
            if ac.id == 0 {
                bail!("atom {}: ids must be positive", i);
            }
            if ac.m <= 0.0 {
                bail!("atom {}: mass must be positive, got {}", i, ac.m);
            }
            if id_index.insert(ac.id, i).is_some() {
                bail!("duplicate atom id {}", ac.id);
            }

            atoms.push(Atom {
                id: ac.id,
                type_tag: ac.type_tag,
                x: NVec3::new(ac.x[0], ac.x[1], ac.x[2]),
                v: NVec3::new(ac.v[0], ac.v[1], ac.v[2]),
                m: ac.m,
            });
        }

        let ids: Vec<u32> = atoms.iter().map(|a| a.id).collect();
        let type_tags: Vec<u32> = atoms.iter().map(|a| a.type_tag).collect();

        // Initial system state: atoms at t = 0
        let system = System {
            atoms,
            t: 0.0,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            epsilon: p_cfg.epsilon,
            sigma: p_cfg.sigma,
            cutoff: p_cfg.cutoff,
        };

        // Forces: construct a ForceSet and register the LJ pair interaction
        let forces = ForceSet::new().with(LennardJones {
            epsilon: parameters.epsilon,
            sigma: parameters.sigma,
            cutoff: parameters.cutoff,
        });

        Ok(Self {
            system,
            forces,
            parameters,
            ids,
            type_tags,
            id_index,
        })
    }

    /// Current simulation time
    pub fn time(&self) -> f64 {
        self.system.t
    }
}

impl SimulationOracle for MdOracle {
    fn particle_count(&self) -> usize {
        self.system.atoms.len()
    }

    fn read_ids(&self) -> &[u32] {
        &self.ids
    }

    fn read_type_tags(&self) -> &[u32] {
        &self.type_tags
    }

    fn read_positions(&self) -> Vec<NVec3> {
        self.system.atoms.iter().map(|a| a.x).collect()
    }

    fn map_id(&self, id: u32) -> Option<usize> {
        self.id_index.get(&id).copied()
    }

    fn advance_one_step(&mut self) -> Result<()> {
        verlet_step(&mut self.system, &self.forces, &self.parameters);

        // A numerical blowup inside the stepper is fatal, not recoverable
        for atom in &self.system.atoms {
            if !atom.x.iter().all(|c| c.is_finite()) {
                bail!(
                    "non-finite position for atom {} at t = {}",
                    atom.id,
                    self.system.t
                );
            }
        }
        Ok(())
    }
}
