use indexmap::IndexMap;

use crate::assemble::{prefix_lines, quote};
use crate::block::Block;
use crate::fragments::Category;
use crate::names::NameKind;
use crate::order::Order;
use crate::pass::Pass;

/// What a statement rule produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emit {
    /// Text for this block; may be empty
    Code(String),
    /// The rule emitted everything itself. Nothing is added here,
    /// not even the statements chained after the block.
    Handled,
}

pub type StatementFn = Box<dyn Fn(&Block, &mut Pass<'_>) -> Emit>;
pub type ValueFn = Box<dyn Fn(&Block, &mut Pass<'_>) -> (String, Order)>;

pub enum Rule {
    Statement(StatementFn),
    Value(ValueFn),
}

/// Block type tag -> generation rule
#[derive(Default)]
pub struct Rules(IndexMap<String, Rule>);

impl Rules {
    pub fn new() -> Self {
        Rules(IndexMap::new())
    }

    /// The rules every Firebird program can rely on
    pub fn core() -> Self {
        let mut rules = Rules::new();
        rules.value("variables_get", variables_get);
        rules.statement("variables_set", variables_set);
        rules.value("math_number", math_number);
        rules.value("math_arithmetic", math_arithmetic);
        rules.value("text", text);
        rules.statement("controls_repeat", controls_repeat);
        rules.statement("procedures_defnoreturn", procedures_defnoreturn);
        rules.statement("procedures_callnoreturn", procedures_callnoreturn);
        rules.statement("include_header", include_header);
        rules.statement("delay_ms", delay_ms);
        rules
    }

    pub fn statement<F>(&mut self, kind: &str, rule: F) -> Option<Rule>
    where
        F: Fn(&Block, &mut Pass<'_>) -> Emit + 'static,
    {
        self.0.insert(kind.to_string(), Rule::Statement(Box::new(rule)))
    }

    pub fn value<F>(&mut self, kind: &str, rule: F) -> Option<Rule>
    where
        F: Fn(&Block, &mut Pass<'_>) -> (String, Order) + 'static,
    {
        self.0.insert(kind.to_string(), Rule::Value(Box::new(rule)))
    }

    pub fn get(&self, kind: &str) -> Option<&Rule> {
        self.0.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.0.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }
}

// ----------------------------------------------------------------------------
// Core rules

fn variables_get(block: &Block, pass: &mut Pass<'_>) -> (String, Order) {
    let name = pass.name(block.var("VAR").unwrap_or_default(), NameKind::Variable);
    (name, Order::Atomic)
}

fn variables_set(block: &Block, pass: &mut Pass<'_>) -> Emit {
    let value = pass.value_to_code(block, "VALUE", Order::Assignment);
    let value = if value.is_empty() { "0".to_string() } else { value };
    let name = pass.name(block.var("VAR").unwrap_or_default(), NameKind::Variable);
    Emit::Code(format!("{} = {};\n", name, value))
}

fn math_number(block: &Block, _pass: &mut Pass<'_>) -> (String, Order) {
    let num = block.field("NUM").unwrap_or("0").trim();
    if num.starts_with('-') {
        (num.to_string(), Order::UnaryPrefix)
    } else {
        (num.to_string(), Order::Atomic)
    }
}

fn math_arithmetic(block: &Block, pass: &mut Pass<'_>) -> (String, Order) {
    let (op, order) = match block.field("OP").unwrap_or("ADD") {
        "MINUS" => ("-", Order::Additive),
        "MULTIPLY" => ("*", Order::Multiplicative),
        "DIVIDE" => ("/", Order::Multiplicative),
        "MODULO" => ("%", Order::Multiplicative),
        _ => ("+", Order::Additive),
    };
    let a = pass.value_to_code(block, "A", order);
    let b = pass.value_to_code(block, "B", order);
    let a = if a.is_empty() { "0".to_string() } else { a };
    let b = if b.is_empty() { "0".to_string() } else { b };
    (format!("{} {} {}", a, op, b), order)
}

fn text(block: &Block, _pass: &mut Pass<'_>) -> (String, Order) {
    (quote(block.field("TEXT").unwrap_or_default()), Order::Atomic)
}

fn controls_repeat(block: &Block, pass: &mut Pass<'_>) -> Emit {
    let times = match block.field("TIMES") {
        Some(times) => times.to_string(),
        None => pass.value_to_code(block, "TIMES", Order::Relational),
    };
    let times = if times.is_empty() { "0".to_string() } else { times };
    let counter = pass.distinct_name("count", NameKind::Variable);
    let branch = pass.statement_to_code(block, "DO");
    Emit::Code(format!(
        "for (int {c} = 0; {c} < {t}; {c}++) {{\n{b}}}\n",
        c = counter,
        t = times,
        b = branch
    ))
}

fn procedures_defnoreturn(block: &Block, pass: &mut Pass<'_>) -> Emit {
    let name = pass.name(block.field("NAME").unwrap_or_default(), NameKind::Procedure);
    let body = pass.statement_to_code(block, "STACK");
    let mut code = String::new();
    // Handled blocks skip comment wrapping, so the definition carries its own
    if let Some(comment) = block.comment_text() {
        code.push_str(&prefix_lines(comment, "// "));
        code.push('\n');
    }
    code.push_str(&format!("void {}() {{\n{}}}", name, body));
    pass.put(Category::Definition, &format!("%{}", name), code);
    Emit::Handled
}

fn procedures_callnoreturn(block: &Block, pass: &mut Pass<'_>) -> Emit {
    let name = pass.name(block.field("NAME").unwrap_or_default(), NameKind::Procedure);
    Emit::Code(format!("{}();\n", name))
}

fn include_header(block: &Block, pass: &mut Pass<'_>) -> Emit {
    if let Some(header) = block.field("HEADER").filter(|h| !h.is_empty()) {
        pass.put(Category::Header, header, format!("#include <{}>", header));
    }
    Emit::Code(String::new())
}

fn delay_ms(block: &Block, pass: &mut Pass<'_>) -> Emit {
    let ms = pass.value_to_code(block, "MS", Order::None);
    let ms = if ms.is_empty() { "0".to_string() } else { ms };
    Emit::Code(format!("_delay_ms({});\n", ms))
}
