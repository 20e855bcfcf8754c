use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

use crate::error::Error;

/// One block of the host's program graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    /// Plain fields, e.g. `NUM: "3"`
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, String>,
    /// Fields naming a program variable, e.g. `VAR: count`
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub vars: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<Input>,
    /// Following statement in the chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Box<Block>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Value,
    Statement,
}

/// A named slot of a block, holding an optional child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: InputKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Block>,
}

impl Block {
    pub fn new(kind: &str) -> Self {
        Block {
            kind: kind.to_string(),
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_var(mut self, name: &str, var: &str) -> Self {
        self.vars.insert(name.to_string(), var.to_string());
        self
    }

    pub fn with_value(self, name: &str, child: Block) -> Self {
        self.with_input(name, InputKind::Value, Some(child))
    }

    pub fn with_statement(self, name: &str, child: Block) -> Self {
        self.with_input(name, InputKind::Statement, Some(child))
    }

    pub fn with_input(mut self, name: &str, kind: InputKind, block: Option<Block>) -> Self {
        self.inputs.push(Input {
            name: name.to_string(),
            kind,
            block,
        });
        self
    }

    pub fn with_next(mut self, next: Block) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    pub fn disable(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Attached comment, if it says anything
    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref().filter(|text| !text.is_empty())
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|s| s.as_str())
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|s| s.as_str())
    }

    pub fn input(&self, name: &str) -> Option<&Input> {
        self.inputs.iter().find(|input| input.name == name)
    }

    /// Block connected to the input `name`
    pub fn input_block(&self, name: &str) -> Option<&Block> {
        self.input(name).and_then(|input| input.block.as_ref())
    }

    /// Blocks plugged into value inputs, in slot order
    pub fn value_children(&self) -> impl Iterator<Item = &Block> {
        self.inputs
            .iter()
            .filter(|input| input.kind == InputKind::Value)
            .filter_map(|input| input.block.as_ref())
    }

    /// This block and everything below it, pre-order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Block)) {
        visit(self);
        for input in &self.inputs {
            if let Some(child) = &input.block {
                child.walk(visit);
            }
        }
        if let Some(next) = &self.next {
            next.walk(visit);
        }
    }
}

/// The top-level blocks of one program, in host order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Workspace {
    pub fn new(blocks: Vec<Block>) -> Self {
        Workspace { blocks }
    }

    pub fn load(path: &str) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|e| Error::Yaml(path.to_string(), e))
    }

    pub fn parse(yaml: &str) -> Result<Self, Error> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Yaml("<workspace>".to_string(), e))
    }

    /// Every variable used anywhere, first use first
    pub fn all_variables(&self) -> IndexSet<String> {
        let mut vars = IndexSet::new();
        for block in &self.blocks {
            block.walk(&mut |b: &Block| {
                vars.extend(b.vars.values().cloned());
            });
        }
        vars
    }
}

#[test]
fn test() {
    let ws = Workspace::parse(
        r#"
blocks:
  - type: variables_set
    comment: start
    vars: { VAR: count }
    inputs:
      - name: VALUE
        type: value
        block: { type: variables_get, vars: { VAR: limit } }
    next:
      type: variables_set
      vars: { VAR: count }
"#,
    )
    .unwrap();
    let top = &ws.blocks[0];
    assert_eq!(top.comment_text(), Some("start"));
    assert_eq!(top.input_block("VALUE").map(|b| b.kind.as_str()), Some("variables_get"));
    assert_eq!(ws.all_variables().into_iter().collect::<Vec<_>>(), vec!["count", "limit"]);
}
