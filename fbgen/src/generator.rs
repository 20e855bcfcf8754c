use crate::assemble::tidy;
use crate::block::{Block, InputKind, Workspace};
use crate::config::Config;
use crate::error::Error;
use crate::names::{Binding, Names};
use crate::pass::Pass;
use crate::rules::{Rule, Rules};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Top,
    Value,
    Statement,
}

/// Result of generating one workspace
#[derive(Debug, Clone)]
pub struct Generated {
    pub code: String,
    pub bindings: Vec<Binding>,
}

/// Turns workspaces into Firebird C programs.
pub struct Generator {
    config: Config,
    rules: Rules,
    names: Names,
}

impl Generator {
    pub fn new(config: Config, rules: Rules) -> Self {
        let names = Names::new(&config.reserved_words);
        Generator {
            config,
            rules,
            names,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }

    /// Start a pass over `workspace`
    pub fn init(&self, workspace: &Workspace) -> Pass<'_> {
        Pass::init(&self.config, &self.rules, self.names.clone(), workspace)
    }

    /// Check that every block has a rule and sits in a slot of its shape.
    pub fn validate(&self, workspace: &Workspace) -> Result<(), Error> {
        for (idx, block) in workspace.blocks.iter().enumerate() {
            self.check(block, format!("top[{}]", idx), Slot::Top)?;
        }
        Ok(())
    }

    fn check(&self, block: &Block, path: String, slot: Slot) -> Result<(), Error> {
        if !block.disabled {
            let rule = self
                .rules
                .get(&block.kind)
                .ok_or_else(|| Error::UnknownBlock(path.clone(), block.kind.clone()))?;
            match (slot, rule) {
                (Slot::Value, Rule::Statement(_)) => {
                    return Err(Error::MisplacedBlock(path, block.kind.clone(), "value"));
                }
                (Slot::Statement, Rule::Value(_)) => {
                    return Err(Error::MisplacedBlock(path, block.kind.clone(), "statement"));
                }
                _ => {}
            }
            // A value has nowhere to put a following statement
            if let (Rule::Value(_), Some(next)) = (rule, &block.next) {
                return Err(Error::MisplacedBlock(
                    format!("{}.next", path),
                    next.kind.clone(),
                    "value chain",
                ));
            }
            for input in &block.inputs {
                if let Some(child) = &input.block {
                    let slot = match input.kind {
                        InputKind::Value => Slot::Value,
                        InputKind::Statement => Slot::Statement,
                    };
                    self.check(child, format!("{}.inputs[{}]", path, input.name), slot)?;
                }
            }
        }
        if let Some(next) = &block.next {
            self.check(next, format!("{}.next", path), Slot::Statement)?;
        }
        Ok(())
    }

    /// Validate and generate, keeping the name table of the pass
    pub fn generate(&self, workspace: &Workspace) -> Result<Generated, Error> {
        self.validate(workspace)?;

        let mut pass = self.init(workspace);
        let lines: Vec<String> = workspace
            .blocks
            .iter()
            .map(|block| pass.block_to_code(Some(block)))
            .filter(|line| !line.is_empty())
            .collect();
        let bindings = pass.names().bindings();
        let code = pass.finish(&lines.join("\n"));

        Ok(Generated {
            code: tidy(&code),
            bindings,
        })
    }

    pub fn workspace_to_code(&self, workspace: &Workspace) -> Result<String, Error> {
        self.generate(workspace).map(|generated| generated.code)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new(Config::default(), Rules::core())
    }
}
