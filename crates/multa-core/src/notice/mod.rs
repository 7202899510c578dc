//! Notice field extraction module.

mod parser;
pub mod rules;

pub use parser::{NoticeParser, RuleBasedParser};
