use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

use crate::error::Error;
use crate::names::DEFAULT_RESERVED;

pub const DEFAULT_SYSTEM_HEADERS: [&str; 3] = [
    "#include <avr/interrupt.h>",
    "#include <avr/io.h>",
    "#include <util/delay.h>",
];

/// Generator settings, loadable from YAML. Missing keys take defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Comma-separated identifiers that are never emitted as names
    pub reserved_words: String,
    /// One level of indentation
    pub indent: String,
    /// Headers always included after the program's own
    pub system_headers: Vec<String>,
    /// C type of declared program variables
    pub variable_type: String,
    /// CPU frequency in Hz, emitted as `F_CPU`
    pub f_cpu: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            reserved_words: DEFAULT_RESERVED.to_string(),
            indent: "  ".to_string(),
            system_headers: DEFAULT_SYSTEM_HEADERS.iter().map(|h| h.to_string()).collect(),
            variable_type: "int".to_string(),
            f_cpu: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|e| Error::Yaml(path.to_string(), e))
    }

    pub fn parse(yaml: &str) -> Result<Self, Error> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Yaml("<config>".to_string(), e))
    }
}

#[test]
fn test() {
    let cfg = Config::parse("indent: \"    \"\nf_cpu: 16000000\n").unwrap();
    assert_eq!(cfg.indent, "    ");
    assert_eq!(cfg.f_cpu, Some(16000000));
    assert_eq!(cfg.system_headers.len(), 3);
    assert_eq!(cfg.variable_type, "int");
}
