use indexmap::IndexMap;
use strum::{Display, EnumString};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Header,
    ConstantDefine,
    Definition,
    VariableDecl,
}

/// Preamble text collected while blocks are generated.
///
/// At most one fragment exists per `(category, key)`. Rewriting a key
/// replaces its text but keeps its place in collection order.
#[derive(Debug, Clone, Default)]
pub struct Fragments(IndexMap<(Category, String), String>);

impl Fragments {
    pub fn new() -> Self {
        Fragments(IndexMap::new())
    }

    pub fn put(&mut self, category: Category, key: &str, text: impl Into<String>) {
        let text = text.into();
        if let Some(prev) = self.0.insert((category, key.to_string()), text) {
            debug!(%category, key, prev = %prev, "fragment overwritten");
        }
    }

    /// Store a definition, picking its category the loose way:
    /// `defineFCPU` is the constant define, `#include ...` text is a header,
    /// `variables` holds the variable declarations, the rest are definitions.
    pub fn define(&mut self, key: &str, text: impl Into<String>) {
        let text = text.into();
        let category = if key == "defineFCPU" {
            Category::ConstantDefine
        } else if text.starts_with("#include") {
            Category::Header
        } else if key == "variables" {
            Category::VariableDecl
        } else {
            Category::Definition
        };
        self.put(category, key, text);
    }

    pub fn get(&self, category: Category, key: &str) -> Option<&str> {
        self.0
            .get(&(category, key.to_string()))
            .map(|text| text.as_str())
    }

    /// Texts of one category, in collection order
    pub fn drain(&self, category: Category) -> Vec<&str> {
        self.drain_any(&[category])
    }

    /// Texts of several categories, interleaved in collection order
    pub fn drain_any(&self, categories: &[Category]) -> Vec<&str> {
        self.0
            .iter()
            .filter(|((category, _), _)| categories.contains(category))
            .map(|(_, text)| text.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[test]
fn test() {
    let mut frags = Fragments::new();
    frags.define("defineFCPU", "#define F_CPU 16000000UL");
    frags.define("wire", "#include <Wire.h>");
    frags.define("variables", "int x;");
    frags.define("setup_led", "void setup_led() {}");
    assert_eq!(frags.drain(Category::ConstantDefine), vec!["#define F_CPU 16000000UL"]);
    assert_eq!(frags.drain(Category::Header), vec!["#include <Wire.h>"]);
    assert_eq!(frags.drain(Category::VariableDecl), vec!["int x;"]);
    assert_eq!(frags.drain(Category::Definition), vec!["void setup_led() {}"]);
}
