//! Simulation configuration.
//!
//! A `Config` is plain data. [`Config::resolve`] turns it into the rule set
//! and dimension the engine runs with.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::automaton::grammar::SymbolicGrammar;
use crate::automaton::orientation::Dimension;
use crate::automaton::presets;
use crate::automaton::ruleset::RuleSet;
use crate::error::{Error, Result};

/// Largest symbol count a `u8` cell can represent.
pub const MAX_SYMBOLS: usize = 256;

/// Upper bound on agents per simulation.
pub const MAX_AGENTS: u32 = 1 << 20;

/// Which rule family drives the agents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AntType {
    /// Symbolic grammar taken from `Config::rule_spec`.
    Langton,
    /// Named turmite table, e.g. `"turmite1"`.
    Turmite(String),
}

impl AntType {
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "langton" => AntType::Langton,
            other => AntType::Turmite(other.to_string()),
        }
    }
}

impl From<String> for AntType {
    fn from(name: String) -> Self {
        AntType::parse(&name)
    }
}

impl From<AntType> for String {
    fn from(ant: AntType) -> Self {
        ant.to_string()
    }
}

impl fmt::Display for AntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AntType::Langton => f.write_str("langton"),
            AntType::Turmite(name) => f.write_str(name),
        }
    }
}

/// Parameters applied on every reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Edge length of the lattice.
    pub lattice_size: u32,
    /// Rule string or named 3D preset (`"3D_SPIRAL"`, ...). Ignored for turmites.
    pub rule_spec: String,
    pub agent_count: u32,
    pub ant_type: AntType,
    /// Force 2D or 3D. When unset, 3D is chosen for named 3D presets and for
    /// custom rule strings containing U or D.
    pub dimension: Option<Dimension>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lattice_size: 50,
            rule_spec: presets::LANGTON.to_string(),
            agent_count: 1,
            ant_type: AntType::Langton,
            dimension: None,
        }
    }
}

impl Config {
    pub fn langton(lattice_size: u32, rule_spec: &str, agent_count: u32) -> Self {
        Config {
            lattice_size,
            rule_spec: rule_spec.to_string(),
            agent_count,
            ..Config::default()
        }
    }

    pub fn turmite(lattice_size: u32, name: &str, agent_count: u32) -> Self {
        Config {
            lattice_size,
            agent_count,
            ant_type: AntType::Turmite(name.to_string()),
            ..Config::default()
        }
    }

    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Validate the configuration and build its rule set.
    ///
    /// An unknown turmite identifier is not an error: it resolves to
    /// [`RuleSet::MissingTurmite`].
    pub fn resolve(&self) -> Result<(RuleSet, Dimension)> {
        if self.lattice_size == 0 {
            return Err(Error::EmptyLattice);
        }
        if self.agent_count == 0 {
            return Err(Error::NoAgents);
        }

        let spec = self.rule_spec.trim();
        let (rules, derived) = match &self.ant_type {
            AntType::Langton => {
                let (grammar, dimension) = symbolic_rule(spec);
                if grammar.cardinality() > MAX_SYMBOLS {
                    return Err(Error::TooManySymbols(grammar.cardinality()));
                }
                (RuleSet::Symbolic(grammar), dimension)
            }
            AntType::Turmite(name) => {
                // Turmites run in whatever space the selected rule string implies
                let dimension = if spec.is_empty() {
                    Dimension::Two
                } else {
                    symbolic_rule(spec).1
                };
                match presets::turmite(name) {
                    Some(table) => (RuleSet::Turmite(table), dimension),
                    None => (RuleSet::MissingTurmite(name.clone()), dimension),
                }
            }
        };

        let dimension = self.dimension.unwrap_or(derived);
        check_agent_count(self.lattice_size, self.agent_count, dimension)?;
        Ok((rules, dimension))
    }
}

/// Grammar and dimension for a rule string or named 3D preset.
fn symbolic_rule(spec: &str) -> (SymbolicGrammar, Dimension) {
    if let Some(rule) = presets::symbolic_3d(spec) {
        (SymbolicGrammar::parse(rule), Dimension::Three)
    } else if presets::is_symbolic_2d(spec) {
        (SymbolicGrammar::parse(spec), Dimension::Two)
    } else {
        let grammar = SymbolicGrammar::parse(spec);
        let dimension = if grammar.has_vertical() {
            Dimension::Three
        } else {
            Dimension::Two
        };
        (grammar, dimension)
    }
}

/// Reject agent counts above [`MAX_AGENTS`] or above the number of cells.
pub(crate) fn check_agent_count(
    lattice_size: u32,
    agent_count: u32,
    dimension: Dimension,
) -> Result<()> {
    let cells = (lattice_size as u64).saturating_pow(dimension.rank() as u32);
    let max = cells.min(MAX_AGENTS as u64);
    if agent_count as u64 > max {
        return Err(Error::TooManyAgents {
            count: agent_count,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_setup() {
        let config = Config::default();
        assert_eq!(config.lattice_size, 50);
        assert_eq!(config.rule_spec, "RL");
        assert_eq!(config.agent_count, 1);
        assert_eq!(config.ant_type, AntType::Langton);

        let (rules, dimension) = config.resolve().unwrap();
        assert_eq!(dimension, Dimension::Two);
        assert_eq!(rules.cardinality(), 2);
    }

    #[test]
    fn test_named_3d_preset() {
        let (rules, dimension) = Config::langton(20, "3D_HELIX", 1).resolve().unwrap();
        assert_eq!(dimension, Dimension::Three);
        match rules {
            RuleSet::Symbolic(g) => assert_eq!(g.to_string(), "RLUDUD"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_planar_preset_with_u_stays_2d() {
        let (_, dimension) = Config::langton(20, "L1L2NUL2L1R2", 1).resolve().unwrap();
        assert_eq!(dimension, Dimension::Two);
    }

    #[test]
    fn test_custom_rule_with_vertical_token_is_3d() {
        let (_, dimension) = Config::langton(20, "LRD", 1).resolve().unwrap();
        assert_eq!(dimension, Dimension::Three);
        let (_, dimension) = Config::langton(20, "LRN", 1).resolve().unwrap();
        assert_eq!(dimension, Dimension::Two);
    }

    #[test]
    fn test_dimension_override() {
        let config = Config::langton(20, "RL", 1).with_dimension(Dimension::Three);
        assert_eq!(config.resolve().unwrap().1, Dimension::Three);

        let config = Config::turmite(20, "turmite2", 1).with_dimension(Dimension::Three);
        assert_eq!(config.resolve().unwrap().1, Dimension::Three);
    }

    #[test]
    fn test_empty_rule_falls_back() {
        let (rules, _) = Config::langton(20, "", 1).resolve().unwrap();
        assert_eq!(rules, RuleSet::Symbolic(SymbolicGrammar::parse("RL")));
    }

    #[test]
    fn test_turmite_resolution() {
        let (rules, dimension) = Config::turmite(20, "turmite4", 2).resolve().unwrap();
        assert!(matches!(rules, RuleSet::Turmite(ref t) if t.state_count() == 4));
        assert_eq!(dimension, Dimension::Two);

        let (rules, _) = Config::turmite(20, "nope", 2).resolve().unwrap();
        assert_eq!(rules, RuleSet::MissingTurmite("nope".to_string()));
    }

    #[test]
    fn test_invalid_configs() {
        assert_eq!(Config::langton(0, "RL", 1).resolve(), Err(Error::EmptyLattice));
        assert_eq!(Config::langton(10, "RL", 0).resolve(), Err(Error::NoAgents));

        let long = "L".repeat(300);
        assert_eq!(
            Config::langton(10, &long, 1).resolve(),
            Err(Error::TooManySymbols(300))
        );
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"rule_spec": "LLRR", "ant_type": "langton"}"#).unwrap();
        assert_eq!(config.lattice_size, 50);
        assert_eq!(config.rule_spec, "LLRR");

        let config: Config =
            serde_json::from_str(r#"{"ant_type": "turmite3", "dimension": "3d"}"#).unwrap();
        assert_eq!(config.ant_type, AntType::Turmite("turmite3".to_string()));
        assert_eq!(config.dimension, Some(Dimension::Three));

        let text = serde_json::to_string(&Config::default()).unwrap();
        assert!(text.contains(r#""ant_type":"langton""#));
    }

    #[test]
    fn test_turmite_follows_rule_dimension() {
        let config = Config {
            rule_spec: "3D_SPIRAL".to_string(),
            ..Config::turmite(10, "turmite1", 6)
        };
        let (rules, dimension) = config.resolve().unwrap();
        assert_eq!(dimension, Dimension::Three);
        assert!(matches!(rules, RuleSet::Turmite(_)));

        let config = Config {
            rule_spec: String::new(),
            ..Config::turmite(10, "turmite1", 1)
        };
        assert_eq!(config.resolve().unwrap().1, Dimension::Two);

        // Planar presets with U keep turmites planar too
        let config = Config {
            rule_spec: "R1R2NUR2R1L2".to_string(),
            ..Config::turmite(10, "turmite2", 1)
        };
        assert_eq!(config.resolve().unwrap().1, Dimension::Two);
    }

    #[test]
    fn test_agent_count_is_bounded() {
        assert_eq!(
            Config::langton(50, "RL", u32::MAX).resolve(),
            Err(Error::TooManyAgents {
                count: u32::MAX,
                max: 2500
            })
        );
        assert_eq!(
            Config::langton(4, "RL", 17).resolve(),
            Err(Error::TooManyAgents { count: 17, max: 16 })
        );
        assert!(Config::langton(4, "RL", 16).resolve().is_ok());
        // The rank of the lattice decides the cell count
        assert!(Config::langton(4, "3D_SPIRAL", 64).resolve().is_ok());

        assert_eq!(
            Config::langton(100_000, "RL", MAX_AGENTS + 1).resolve(),
            Err(Error::TooManyAgents {
                count: MAX_AGENTS + 1,
                max: MAX_AGENTS as u64
            })
        );
    }

    #[test]
    fn test_ant_type_parse() {
        assert_eq!(AntType::parse("langton"), AntType::Langton);
        assert_eq!(AntType::parse(" turmite1 "), AntType::Turmite("turmite1".to_string()));
        assert_eq!(AntType::Turmite("turmite2".into()).to_string(), "turmite2");
    }
}
