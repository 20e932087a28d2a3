//! Simulation state: lattice, agents, active rules and the tick counter.

use std::time::Duration;

use crate::automaton::agent::{ring_placement, Agent};
use crate::automaton::lattice::{Coord, Lattice};
use crate::automaton::orientation::Dimension;
use crate::automaton::ruleset::RuleSet;
use crate::automaton::stepping;
use crate::config::{check_agent_count, AntType, Config, MAX_SYMBOLS};
use crate::error::{Error, Result};

/// A cell write recorded while the change log is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub position: Coord,
    pub old: u8,
    pub new: u8,
}

/// One independent simulation.
///
/// Owns all mutable engine state. A host that shares it between threads
/// must hold a single lock around each `tick`/`reset`.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub(crate) config: Config,
    pub(crate) rule_set: RuleSet,
    pub(crate) lattice: Lattice,
    pub(crate) agents: Vec<Agent>,
    pub(crate) tick_count: u64,
    pub(crate) changes: Option<Vec<CellChange>>,
}

impl SimulationState {
    /// Configure and reset a new simulation.
    pub fn new(config: Config) -> Result<Self> {
        let (rule_set, dimension) = config.resolve()?;
        let lattice = Lattice::new(config.lattice_size, dimension)?;
        let mut state = SimulationState {
            config,
            rule_set,
            lattice,
            agents: Vec::new(),
            tick_count: 0,
            changes: None,
        };
        state.reset();
        Ok(state)
    }

    /// Build a simulation around an explicit rule set, e.g. a custom
    /// turmite table.
    pub fn with_rules(
        lattice_size: u32,
        agent_count: u32,
        rule_set: RuleSet,
        dimension: Dimension,
    ) -> Result<Self> {
        if agent_count == 0 {
            return Err(Error::NoAgents);
        }
        if rule_set.cardinality() > MAX_SYMBOLS {
            return Err(Error::TooManySymbols(rule_set.cardinality()));
        }
        check_agent_count(lattice_size, agent_count, dimension)?;

        let (rule_spec, ant_type) = match &rule_set {
            RuleSet::Symbolic(grammar) => (grammar.to_string(), AntType::Langton),
            RuleSet::Turmite(_) => (String::new(), AntType::Turmite("custom".to_string())),
            RuleSet::MissingTurmite(name) => (String::new(), AntType::Turmite(name.clone())),
        };
        let config = Config {
            lattice_size,
            rule_spec,
            agent_count,
            ant_type,
            dimension: Some(dimension),
        };

        let lattice = Lattice::new(lattice_size, dimension)?;
        let mut state = SimulationState {
            config,
            rule_set,
            lattice,
            agents: Vec::new(),
            tick_count: 0,
            changes: None,
        };
        state.reset();
        Ok(state)
    }

    /// Replace the configuration and reset.
    ///
    /// On error the previous configuration, lattice and agents are kept.
    pub fn configure(&mut self, config: Config) -> Result<()> {
        let (rule_set, dimension) = config.resolve()?;
        self.lattice.reset(config.lattice_size, dimension)?;
        self.rule_set = rule_set;
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Clear the lattice, re-place the agents and zero the tick counter.
    pub fn reset(&mut self) {
        let size = self.lattice.size();
        let dimension = self.lattice.dimension();
        self.lattice.clear();
        self.agents.clear();
        self.tick_count = 0;
        if let Some(changes) = self.changes.as_mut() {
            changes.clear();
        }

        for (position, heading) in ring_placement(size, self.config.agent_count, dimension) {
            self.add_agent(position, heading, 0);
        }

        if let RuleSet::MissingTurmite(name) = &self.rule_set {
            log::warn!("no turmite table named '{}', agents will not move", name);
        }
        log::debug!(
            "reset: {}^{} lattice, rule {}, {} of {} agents placed",
            size,
            dimension.rank(),
            self.rule_set,
            self.agents.len(),
            self.config.agent_count
        );
    }

    /// Add an agent. Positions outside the lattice are rejected without
    /// wrapping; returns whether the agent was added.
    pub fn add_agent(&mut self, position: Coord, heading: u8, internal_state: u32) -> bool {
        if !self.lattice.contains(position) {
            log::debug!("rejected agent at {:?}: outside lattice", position);
            return false;
        }
        let position = self.lattice.normalize(position);
        let heading = heading % self.lattice.dimension().heading_count();
        self.agents.push(Agent::new(position, heading, internal_state));
        true
    }

    /// Advance every agent by one step.
    pub fn tick(&mut self) {
        stepping::tick(self);
    }

    /// Run `steps` ticks back to back.
    pub fn run(&mut self, steps: u64) {
        stepping::run(self, steps);
    }

    /// Run up to `max_steps` ticks, stopping once `budget` has elapsed.
    /// Returns the number of ticks performed.
    pub fn run_within(&mut self, max_steps: u64, budget: Duration) -> u64 {
        stepping::run_within(self, max_steps, budget)
    }

    pub fn get_cell(&self, coord: Coord) -> u8 {
        self.lattice.get(coord)
    }

    /// Agents in update order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn active_agent_count(&self) -> usize {
        self.agents.iter().filter(|a| a.active).count()
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dimension(&self) -> Dimension {
        self.lattice.dimension()
    }

    pub fn is_3d(&self) -> bool {
        self.lattice.dimension().is_3d()
    }

    /// Start or stop recording cell writes. Stopping discards pending changes.
    pub fn set_change_log(&mut self, enabled: bool) {
        match (enabled, self.changes.is_some()) {
            (true, false) => self.changes = Some(Vec::new()),
            (false, true) => self.changes = None,
            _ => {}
        }
    }

    /// Take the writes recorded since the last call.
    pub fn drain_changes(&mut self) -> Vec<CellChange> {
        self.changes.as_mut().map(std::mem::take).unwrap_or_default()
    }
}
