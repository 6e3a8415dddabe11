//! Handing a rendered pattern to the regex engine

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::language::{PatternError, Settings};
use crate::pattern::Pattern;

mod cache;

pub use regex::Regex;

/// Options passed through to the engine when compiling. These change how
/// the compiled expression matches; they have no effect on the rendered
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
    pub unicode: bool,
    pub size_limit: Option<usize>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            unicode: true,
            size_limit: None,
        }
    }
}

impl Pattern {
    /// Render this pattern and compile the result. Constructs the engine
    /// does not support (lookaround, backreferences, conditionals, atomic
    /// and balancing groups) render fine but are rejected here.
    pub fn compile(&self, settings: &Settings, options: &CompileOptions) -> Result<Regex, PatternError> {
        let text = self.render_with(settings)?;
        debug!(pattern = %text, "compiling");

        let mut builder = RegexBuilder::new(&text);
        builder
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_matches_new_line)
            .ignore_whitespace(options.ignore_whitespace)
            .unicode(options.unicode);
        if let Some(limit) = options.size_limit {
            builder.size_limit(limit);
        }

        let regex = builder.build()?;
        Ok(regex)
    }
}
