//! State held for the duration of a single render

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use super::Syntax;
use crate::language::{BackreferenceSeparator, PatternError, Settings};
use crate::pattern::Body;

pub(crate) struct Context<'s> {
    pub(crate) settings: &'s Settings,
    pub(crate) fragments: Vec<(Syntax, String)>,
    visiting: HashSet<*const Body>,
    separator_pending: bool,
}

impl<'s> Context<'s> {
    pub(crate) fn new(settings: &'s Settings) -> Context<'s> {
        Context {
            settings,
            fragments: Vec::new(),
            visiting: HashSet::new(),
            separator_pending: false,
        }
    }

    /// Add a fragment to the output. Empty fragments are dropped. A pending
    /// backreference separator is emitted first if this fragment would
    /// otherwise run digits into the group number, or unconditionally under
    /// [`BackreferenceSeparator::Always`]. A quantifier belongs to the
    /// backreference it follows, so it never gets a separator in front of it.
    pub(crate) fn append(&mut self, syntax: Syntax, content: impl Into<String>) {
        let content = content.into();
        if content.is_empty() {
            return;
        }

        if self.separator_pending {
            let always = self
                .settings
                .backreference_separator
                == BackreferenceSeparator::Always;

            if always && syntax == Syntax::Quantifier {
                self.fragments
                    .push((syntax, content));
                return;
            }

            self.separator_pending = false;
            if always || content.starts_with(|c: char| c.is_ascii_digit()) {
                self.fragments
                    .push((Syntax::Group, "(?:)".to_string()));
            }
        }

        self.fragments
            .push((syntax, content));
    }

    /// Called right after a numbered backreference has been appended.
    pub(crate) fn after_backreference(&mut self) {
        match self
            .settings
            .backreference_separator
        {
            BackreferenceSeparator::Never => {}
            BackreferenceSeparator::WhenFollowedByDigit | BackreferenceSeparator::Always => {
                self.separator_pending = true
            }
        }
    }

    /// Mark a node as being expanded. Meeting it again before [`leave`]
    /// means the node contains itself.
    ///
    /// [`leave`]: Context::leave
    pub(crate) fn enter(&mut self, body: &Arc<Body>) -> Result<(), PatternError> {
        if !self
            .visiting
            .insert(Arc::as_ptr(body))
        {
            debug!("circular reference at {:?}", body.kind());
            return Err(PatternError::CircularReference);
        }
        Ok(())
    }

    pub(crate) fn leave(&mut self, body: &Arc<Body>) {
        self.visiting
            .remove(&Arc::as_ptr(body));
    }
}
