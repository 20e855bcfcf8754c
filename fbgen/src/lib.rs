pub mod assemble;
pub mod block;
pub mod config;
pub mod error;
pub mod fragments;
pub mod generator;
pub mod msg;
pub mod names;
pub mod order;
pub mod pass;
pub mod rules;

pub use block::{Block, Input, InputKind, Workspace};
pub use config::Config;
pub use error::Error;
pub use fragments::{Category, Fragments};
pub use generator::{Generated, Generator};
pub use names::{Binding, NameKind, Names};
pub use order::Order;
pub use pass::Pass;
pub use rules::{Emit, Rule, Rules};
