use bimap::BiMap;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use strum::{Display, EnumString};
use tracing::debug;

/// Identifiers the Firebird toolchain already owns.
pub const DEFAULT_RESERVED: &str = "\
port_config,init,if,else,for,switch,case,while,do,break,continue,return,goto,\
define,include,HIGH,LOW,INPUT,OUTPUT,INPUT_PULLUP,true,false,void,boolean,char,\
unsigned,byte,int,word,long,float,double,string,String,array,static,volatile,\
const,sizeof,pinMode,digitalWrite,digitalRead,analogReference,analogRead,\
analogWrite,tone,noTone,shiftOut,shiftIn,pulseIn,millis,micros,delay,\
delayMicroseconds,min,max,abs,constrain,map,pow,sqrt,sin,cos,tan,randomSeed,\
random,lowByte,highByte,bitRead,bitWrite,bitSet,bitClear,bit,attachInterrupt,\
detachInterrupt,interrupts,noInterrupts";

/// C89/C99 keywords. Always reserved, whatever list is configured.
pub const C_KEYWORDS: [&str; 37] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Bool", "_Complex", "_Imaginary",
];

static DEFAULT_RESERVED_SET: Lazy<IndexSet<String>> = Lazy::new(|| parse_reserved(DEFAULT_RESERVED));

/// Base name used when a raw name has nothing usable in it
pub const PLACEHOLDER: &str = "unnamed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NameKind {
    Variable,
    Procedure,
}

/// One user name and the identifier it was given in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub raw: String,
    pub kind: NameKind,
    pub safe: String,
}

/// Maps user-chosen names to unique, legal, non-reserved identifiers.
///
/// Lookups are memoized per `(raw, kind)` until [`Names::reset`], so a name
/// always renders the same way within one pass. Names are case-sensitive:
/// `x` and `X` are two different names.
#[derive(Debug, Clone)]
pub struct Names {
    reserved: IndexSet<String>,
    // (kind, raw) <-> safe
    db: BiMap<(NameKind, String), String>,
    // Names handed out by `distinct_name`, not tied to a raw name
    fresh: IndexSet<String>,
}

impl Default for Names {
    fn default() -> Self {
        Names {
            reserved: DEFAULT_RESERVED_SET.clone(),
            db: BiMap::new(),
            fresh: IndexSet::new(),
        }
    }
}

impl Names {
    pub fn new(reserved: &str) -> Self {
        let mut names = Names::default();
        names.configure(reserved);
        names
    }

    /// Replace the reserved word list with a comma-separated one.
    pub fn configure(&mut self, reserved: &str) {
        self.reserved = parse_reserved(reserved);
    }

    /// Forget every binding. Reserved words are kept.
    pub fn reset(&mut self) {
        self.db.clear();
        self.fresh.clear();
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name) || C_KEYWORDS.contains(&name)
    }

    /// Safe identifier for `raw`, creating the binding on first use.
    pub fn safe_name(&mut self, raw: &str, kind: NameKind) -> String {
        let key = (kind, raw.to_string());
        if let Some(safe) = self.db.get_by_left(&key) {
            return safe.clone();
        }
        let safe = self.unique(sanitize(raw));
        debug!(raw, %kind, safe = %safe, "bound name");
        self.db.insert(key, safe.clone());
        safe
    }

    /// A new identifier based on `raw` that no other name uses.
    /// Unlike [`Names::safe_name`] this never returns an existing binding.
    pub fn distinct_name(&mut self, raw: &str, kind: NameKind) -> String {
        let safe = self.unique(sanitize(raw));
        debug!(raw, %kind, safe = %safe, "fresh name");
        self.fresh.insert(safe.clone());
        safe
    }

    /// Raw name behind a safe identifier, if it was bound by `safe_name`
    pub fn raw_name(&self, safe: &str) -> Option<(NameKind, &str)> {
        self.db
            .get_by_right(safe)
            .map(|(kind, raw)| (*kind, raw.as_str()))
    }

    pub fn len(&self) -> usize {
        self.db.len() + self.fresh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All memoized bindings, ordered by safe name
    pub fn bindings(&self) -> Vec<Binding> {
        let mut list: Vec<Binding> = self
            .db
            .iter()
            .map(|((kind, raw), safe)| Binding {
                raw: raw.clone(),
                kind: *kind,
                safe: safe.clone(),
            })
            .collect();
        list.sort_by(|a, b| a.safe.cmp(&b.safe));
        list
    }

    fn is_taken(&self, name: &str) -> bool {
        self.is_reserved(name) || self.db.contains_right(name) || self.fresh.contains(name)
    }

    // base, base2, base3, ...
    fn unique(&self, base: String) -> String {
        let mut candidate = base.clone();
        let mut idx = 1;
        while self.is_taken(&candidate) {
            idx += 1;
            candidate = format!("{}{}", base, idx);
        }
        candidate
    }
}

/// Make `raw` a legal C identifier.
///
/// ASCII characters outside `[A-Za-z0-9_]` become `_`, other characters
/// become `u` followed by the lowercase hex of their UTF-8 bytes, so distinct
/// non-ASCII names keep distinct spellings.
pub fn sanitize(raw: &str) -> String {
    let mut name = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            name.push(c);
        } else if c.is_ascii() {
            name.push('_');
        } else {
            let mut buf = [0; 4];
            name.push('u');
            for byte in c.encode_utf8(&mut buf).bytes() {
                name.push_str(&format!("{:02x}", byte));
            }
        }
    }
    if name.is_empty() {
        return PLACEHOLDER.to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, "my_");
    }
    name
}

fn parse_reserved(list: &str) -> IndexSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn test() {
    assert_eq!(sanitize("my var"), "my_var");
    assert_eq!(sanitize(""), PLACEHOLDER);
    assert_eq!(sanitize("1st"), "my_1st");
    assert_eq!(sanitize("a-b.c"), "a_b_c");
    assert_eq!(sanitize("é"), "uc3a9");
    assert_eq!(sanitize("aé"), "auc3a9");
    assert!(parse_reserved(" a, ,b ,").contains("b"));
    assert_eq!(parse_reserved(" a, ,b ,").len(), 2);
}
