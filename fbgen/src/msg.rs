use color_print::cprintln;

use crate::error::Error;
use crate::names::Binding;

#[derive(Debug)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

impl Msg {
    pub fn print(&self) {
        match self {
            Msg::Error(msg) => cprintln!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => cprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
    }

    /// Print an error and, when it points at a block, where it is
    pub fn diag(err: &Error) {
        Msg::Error(err.to_string()).print();
        if let Some(path) = err.path() {
            cprintln!("     <blue>--></> <underline>{}</>", path);
        }
    }
}

pub fn dump(bindings: &[Binding]) {
    println!("+-[Names]---+----------------------+----------------------");
    for binding in bindings {
        cprintln!(
            "| {:<9} | <green>{:<20}</green> | {}",
            binding.kind.to_string(),
            binding.safe,
            binding.raw
        );
    }
    println!("+-----------+----------------------+----------------------");
}
