//! Rendering patterns into regular expression text

use std::fmt;

use tracing::debug;

use crate::language::{PatternError, Settings};
use crate::pattern::Pattern;

mod context;
mod renderer;
mod syntax;
mod terminal;

pub use syntax::{Identity, Render, Syntax};
pub use terminal::Terminal;

use context::Context;

impl Pattern {
    /// Render with the default [`Settings`].
    pub fn render(&self) -> Result<String, PatternError> {
        self.render_with(&Settings::default())
    }

    pub fn render_with(&self, settings: &Settings) -> Result<String, PatternError> {
        self.highlight(&Identity, settings)
    }

    /// We render in two passes. First we expand the pattern into a Vec of
    /// "fragments" (Syntax tag, String pairs). Then second we apply the
    /// specified renderer to each pair to result in the final String.
    pub fn highlight(&self, renderer: &impl Render, settings: &Settings) -> Result<String, PatternError> {
        // Pass 1: Expand nodes to tagged fragments
        let fragments = self.fragments(settings)?;

        // Pass 2: Render tagged fragments to final output
        Ok(render_to_string(renderer, fragments))
    }

    /// Pass 1: the tagged pieces of output, in order.
    pub fn fragments(&self, settings: &Settings) -> Result<Vec<(Syntax, String)>, PatternError> {
        let mut context = Context::new(settings);

        renderer::expand_pattern(&mut context, self)?;

        debug!(
            "Rendered {} node{} into {} fragment{}",
            self.len(),
            if self.len() == 1 { "" } else { "s" },
            context
                .fragments
                .len(),
            if context
                .fragments
                .len()
                == 1
            {
                ""
            } else {
                "s"
            }
        );

        Ok(context.fragments)
    }
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(text) => f.write_str(&text),
            Err(error) => write!(f, "<invalid pattern: {}>", error),
        }
    }
}
