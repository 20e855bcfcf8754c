use tracing::{debug, warn};

use crate::assemble::{self, prefix_lines, scrub_naked_value};
use crate::block::{Block, Workspace};
use crate::config::Config;
use crate::fragments::{Category, Fragments};
use crate::names::{NameKind, Names};
use crate::order::Order;
use crate::rules::{Emit, Rule, Rules};

const COMMENT_PREFIX: &str = "// ";

/// State of one generation pass.
///
/// A pass collects names and preamble fragments while rules run over the
/// block graph, and ends when [`Pass::finish`] consumes it.
pub struct Pass<'g> {
    config: &'g Config,
    rules: &'g Rules,
    names: Names,
    fragments: Fragments,
}

impl<'g> Pass<'g> {
    /// Start a pass. `names` keeps its reserved words and loses its bindings.
    /// Every workspace variable is bound and declared up front.
    pub fn init(config: &'g Config, rules: &'g Rules, mut names: Names, workspace: &Workspace) -> Self {
        names.reset();
        let mut pass = Pass {
            config,
            rules,
            names,
            fragments: Fragments::new(),
        };

        if let Some(hz) = config.f_cpu {
            pass.fragments
                .put(Category::ConstantDefine, "defineFCPU", format!("#define F_CPU {}UL", hz));
        }

        let decls: Vec<String> = workspace
            .all_variables()
            .iter()
            .map(|var| {
                let safe = pass.names.safe_name(var, NameKind::Variable);
                format!("{} {};", config.variable_type, safe)
            })
            .collect();
        debug!(variables = decls.len(), "pass started");
        if !decls.is_empty() {
            pass.fragments
                .put(Category::VariableDecl, "variables", decls.join("\n"));
        }
        pass
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn names(&self) -> &Names {
        &self.names
    }

    pub fn fragments(&self) -> &Fragments {
        &self.fragments
    }

    pub fn name(&mut self, raw: &str, kind: NameKind) -> String {
        self.names.safe_name(raw, kind)
    }

    pub fn distinct_name(&mut self, raw: &str, kind: NameKind) -> String {
        self.names.distinct_name(raw, kind)
    }

    pub fn put(&mut self, category: Category, key: &str, text: impl Into<String>) {
        self.fragments.put(category, key, text);
    }

    pub fn define(&mut self, key: &str, text: impl Into<String>) {
        self.fragments.define(key, text);
    }

    /// Code of a statement chain starting at `block`.
    ///
    /// A value block met here stands alone and is terminated as a naked value.
    pub fn block_to_code(&mut self, block: Option<&Block>) -> String {
        let Some(block) = block else {
            return String::new();
        };
        if block.disabled {
            return self.block_to_code(block.next.as_deref());
        }
        let rules = self.rules;
        match rules.get(&block.kind) {
            Some(Rule::Statement(rule)) => {
                let emit = rule(block, self);
                self.wrap_with_comments(block, emit, false)
            }
            Some(Rule::Value(rule)) => {
                let (code, _) = rule(block, self);
                let line = self.wrap_with_comments(block, Emit::Code(code), false);
                if line.is_empty() {
                    line
                } else {
                    scrub_naked_value(&line)
                }
            }
            None => {
                warn!(kind = %block.kind, "no rule for block");
                String::new()
            }
        }
    }

    /// Code of a value block used inline, with its precedence
    pub fn value_block_to_code(&mut self, block: &Block) -> Option<(String, Order)> {
        if block.disabled {
            return None;
        }
        let rules = self.rules;
        match rules.get(&block.kind) {
            Some(Rule::Value(rule)) => {
                let (code, order) = rule(block, self);
                Some((self.wrap_with_comments(block, Emit::Code(code), true), order))
            }
            Some(Rule::Statement(_)) => {
                warn!(kind = %block.kind, "statement block in a value slot");
                None
            }
            None => {
                warn!(kind = %block.kind, "no rule for block");
                None
            }
        }
    }

    /// Code of the value plugged into input `name`, parenthesized when its
    /// precedence is looser than `outer`. Empty if nothing is plugged in.
    pub fn value_to_code(&mut self, block: &Block, name: &str, outer: Order) -> String {
        let Some(child) = block.input_block(name) else {
            return String::new();
        };
        match self.value_block_to_code(child) {
            Some((code, inner)) if !code.is_empty() && outer.needs_parens(inner) => {
                format!("({})", code)
            }
            Some((code, _)) => code,
            None => String::new(),
        }
    }

    /// Code of the statements in input `name`, indented one level
    pub fn statement_to_code(&mut self, block: &Block, name: &str) -> String {
        let code = self.block_to_code(block.input_block(name));
        if code.is_empty() {
            code
        } else {
            prefix_lines(&code, &self.config.indent)
        }
    }

    /// Put the comments of `block` above its code and append the rest of the
    /// chain. Inline blocks carry no comments; their statement shows them.
    pub fn wrap_with_comments(&mut self, block: &Block, emit: Emit, inline: bool) -> String {
        let code = match emit {
            Emit::Handled => return String::new(),
            Emit::Code(code) => code,
        };

        let mut comments = String::new();
        if !inline {
            if let Some(comment) = block.comment_text() {
                comments.push_str(&prefix_lines(comment, COMMENT_PREFIX));
                comments.push('\n');
            }
            // Statement children are skipped; they wrap their own comments
            for child in block.value_children() {
                let nested = nested_comments(child);
                if !nested.is_empty() {
                    comments.push_str(&prefix_lines(&nested, COMMENT_PREFIX));
                }
            }
        }

        let next = self.block_to_code(block.next.as_deref());
        format!("{}{}{}", comments, code, next)
    }

    /// Assemble the final program around `body`. Ends the pass.
    pub fn finish(self, body: &str) -> String {
        debug!(
            names = self.names.len(),
            fragments = self.fragments.len(),
            "pass finished"
        );
        assemble::finish(&self.fragments, body, self.config)
    }
}

/// Comments of `block` and of every block in its value inputs, pre-order,
/// one per line with a trailing newline. Empty if there are none.
pub fn nested_comments(block: &Block) -> String {
    fn collect<'a>(block: &'a Block, out: &mut Vec<&'a str>) {
        if let Some(comment) = block.comment_text() {
            out.push(comment);
        }
        for child in block.value_children() {
            collect(child, out);
        }
    }

    let mut comments = vec![];
    collect(block, &mut comments);
    if comments.is_empty() {
        return String::new();
    }
    comments.push("");
    comments.join("\n")
}
