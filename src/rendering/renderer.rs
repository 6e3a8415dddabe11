//! Expanding nodes into fragments
//!
//! Every node contributes an opening, its content, and a closing, in that
//! order. Leaf nodes only have content; composites put delimiters around a
//! nested pattern which is expanded in full before the closing is emitted.

use std::sync::Arc;

use tracing::trace;

use super::context::Context;
use super::Syntax;
use crate::language::*;
use crate::pattern::{Body, Condition, Content, Pattern};

/// Expand a whole chain. The nodes are walked oldest first so the output
/// follows the order in which the chain was built.
pub(crate) fn expand_pattern(context: &mut Context, pattern: &Pattern) -> Result<(), PatternError> {
    for node in pattern.nodes() {
        expand_body(context, &node.body)?;
    }
    Ok(())
}

fn expand_body(context: &mut Context, body: &Arc<Body>) -> Result<(), PatternError> {
    context.enter(body)?;
    trace!("expanding {:?}", body.kind());

    opening(context, body);
    content(context, body)?;
    closing(context, body);

    context.leave(body);
    Ok(())
}

fn opening(context: &mut Context, body: &Body) {
    let settings = context.settings;
    match body {
        Body::Text {
            ignore_case: true, ..
        } if !settings.invariant_culture => context.append(Syntax::Options, "(?i:"),
        Body::CharacterSet { negated, .. } => {
            context.append(Syntax::Set, if *negated { "[^" } else { "[" })
        }
        Body::Group { kind, .. } => {
            let text = group_opening(kind, settings);
            context.append(Syntax::Group, text)
        }
        Body::Assertion { kind, .. } => context.append(Syntax::Assertion, kind.opening()),
        Body::Alternation(_) => context.append(Syntax::Alternation, "(?:"),
        Body::Conditional { .. } => context.append(Syntax::Conditional, "(?"),
        Body::Quantified { target, .. } => {
            if needs_grouping(target, settings) {
                context.append(Syntax::Group, "(?:")
            }
        }
        _ => {}
    }
}

fn content(context: &mut Context, body: &Body) -> Result<(), PatternError> {
    match body {
        Body::Text {
            value,
            escape,
            ignore_case,
        } => {
            let text = if *ignore_case && context.settings.invariant_culture {
                fold_invariant(value, *escape)
            } else if *escape {
                regex::escape(value)
            } else {
                value.clone()
            };
            context.append(Syntax::Text, text);
        }
        Body::Character(c) => context.append(Syntax::Character, escape_char(*c)),
        Body::Class(class) => context.append(Syntax::Class, class.syntax()),
        Body::Anchor(anchor) => context.append(Syntax::Anchor, anchor.syntax()),
        Body::CharacterSet { items, .. } => {
            for item in items {
                context.append(Syntax::Set, set_item(item));
            }
        }
        Body::Group { content, .. } | Body::Assertion { content, .. } => {
            expand_content(context, content)?
        }
        Body::Alternation(alternatives) => {
            for (i, alternative) in alternatives
                .iter()
                .enumerate()
            {
                if i > 0 {
                    context.append(Syntax::Alternation, "|");
                }
                expand_pattern(context, alternative)?;
            }
        }
        Body::Conditional { condition, yes, no } => {
            expand_condition(context, condition)?;
            expand_pattern(context, yes)?;
            if let Some(no) = no {
                context.append(Syntax::Conditional, "|");
                expand_pattern(context, no)?;
            }
        }
        Body::Quantified { target, .. } => expand_pattern(context, target)?,
        Body::Backreference(reference) => {
            let text = backreference(reference, context.settings);
            context.append(Syntax::Backreference, text);
            if let Reference::Number(_) = reference {
                context.after_backreference();
            }
        }
        Body::Options { apply, disable } => {
            let toggle = Options::toggle(apply, disable);
            if !toggle.is_empty() {
                context.append(Syntax::Options, format!("(?{})", toggle));
            }
        }
        Body::Raw(syntax) => context.append(Syntax::Raw, syntax.as_str()),
        Body::Placeholder(cell) => match cell.get() {
            Some(pattern) => expand_pattern(context, pattern)?,
            None => return Err(PatternError::UnboundPlaceholder),
        },
    }
    Ok(())
}

fn closing(context: &mut Context, body: &Body) {
    let settings = context.settings;
    match body {
        Body::Text {
            ignore_case: true, ..
        } if !settings.invariant_culture => context.append(Syntax::Options, ")"),
        Body::CharacterSet { .. } => context.append(Syntax::Set, "]"),
        Body::Group { .. } => context.append(Syntax::Group, ")"),
        Body::Assertion { .. } => context.append(Syntax::Assertion, ")"),
        Body::Alternation(_) => context.append(Syntax::Alternation, ")"),
        Body::Conditional { .. } => context.append(Syntax::Conditional, ")"),
        Body::Quantified { target, quantifier } => {
            if needs_grouping(target, settings) {
                context.append(Syntax::Group, ")");
            }
            context.append(Syntax::Quantifier, quantifier.symbol());
        }
        _ => {}
    }
}

fn expand_content(context: &mut Context, content: &Content) -> Result<(), PatternError> {
    match content {
        Content::Pattern(pattern) => expand_pattern(context, pattern),
        Content::Raw { text, escape } => {
            if *escape {
                context.append(Syntax::Text, regex::escape(text));
            } else {
                context.append(Syntax::Raw, text.as_str());
            }
            Ok(())
        }
    }
}

fn expand_condition(context: &mut Context, condition: &Condition) -> Result<(), PatternError> {
    let lookahead = context
        .settings
        .condition
        == ConditionStyle::Lookahead;
    let open = if lookahead { "(?=" } else { "(" };

    context.append(Syntax::Conditional, open);
    match condition {
        Condition::Group(reference) => {
            let text = if lookahead {
                backreference(reference, context.settings)
            } else {
                match reference {
                    Reference::Number(number) => number.to_string(),
                    Reference::Name(name) => name.clone(),
                }
            };
            context.append(Syntax::Backreference, text);
        }
        Condition::Expression(pattern) => expand_pattern(context, pattern)?,
    }
    context.append(Syntax::Conditional, ")");
    Ok(())
}

fn group_opening(kind: &GroupKind, settings: &Settings) -> String {
    let boundary = settings.identifier_boundary;
    match kind {
        GroupKind::Capturing => "(".to_string(),
        GroupKind::Named(name) => format!("(?{}{}{}", boundary.open(), name, boundary.close()),
        GroupKind::NonCapturing => "(?:".to_string(),
        GroupKind::Atomic => "(?>".to_string(),
        GroupKind::Balancing { name, previous } => format!(
            "(?{}{}-{}{}",
            boundary.open(),
            name.as_deref()
                .unwrap_or(""),
            previous,
            boundary.close()
        ),
        GroupKind::Scoped { apply, disable } => format!("(?{}:", Options::toggle(apply, disable)),
    }
}

fn backreference(reference: &Reference, settings: &Settings) -> String {
    match reference {
        Reference::Number(number) => format!("\\{}", number),
        Reference::Name(name) => {
            let boundary = settings.identifier_boundary;
            format!("\\k{}{}{}", boundary.open(), name, boundary.close())
        }
    }
}

/// Whether a quantifier needs a group around its target to apply to all of
/// it rather than just the last atom.
fn needs_grouping(target: &Pattern, settings: &Settings) -> bool {
    settings.group_quantified && !is_single_atom(target, settings)
}

fn is_single_atom(pattern: &Pattern, settings: &Settings) -> bool {
    if pattern.len() != 1 {
        return false;
    }
    match pattern.body() {
        Body::Text {
            value, ignore_case, ..
        } => {
            (*ignore_case && !settings.invariant_culture)
                || value
                    .chars()
                    .count()
                    == 1
        }
        Body::Raw(syntax) => {
            syntax
                .chars()
                .count()
                == 1
        }
        Body::Character(_)
        | Body::Class(_)
        | Body::Anchor(_)
        | Body::CharacterSet { .. }
        | Body::Group { .. }
        | Body::Assertion { .. }
        | Body::Alternation(_)
        | Body::Conditional { .. }
        | Body::Backreference(_) => true,
        Body::Quantified { .. } | Body::Options { .. } | Body::Placeholder(_) => false,
    }
}

fn escape_char(c: char) -> String {
    let mut buffer = [0; 4];
    regex::escape(c.encode_utf8(&mut buffer))
}

/// Characters with meaning inside `[...]` get a backslash.
fn escape_in_set(c: char) -> String {
    match c {
        '\\' | ']' | '[' | '^' | '-' | '&' | '~' => format!("\\{}", c),
        _ => c.to_string(),
    }
}

fn set_item(item: &SetItem) -> String {
    match item {
        SetItem::Char(c) => escape_in_set(*c),
        SetItem::Range(start, end) => format!("{}-{}", escape_in_set(*start), escape_in_set(*end)),
        SetItem::Class(Class::Any) => "\\s\\S".to_string(),
        SetItem::Class(class) => class
            .syntax()
            .to_string(),
    }
}

/// Spell out each cased character as a small set of its case forms so the
/// text matches in either case without relying on the engine's folding.
/// Characters whose case mapping is not one-to-one (`ß` upper-cases to
/// `SS`) get an inline `(?i:...)` scope of their own instead.
fn fold_invariant(value: &str, escape: bool) -> String {
    let mut result = String::new();
    for c in value.chars() {
        let lower: Vec<char> = c
            .to_lowercase()
            .collect();
        let upper: Vec<char> = c
            .to_uppercase()
            .collect();

        match (lower.as_slice(), upper.as_slice()) {
            ([l], [u]) if l == u => {
                if escape {
                    result.push_str(&escape_char(c));
                } else {
                    result.push(c);
                }
            }
            ([l], [u]) => {
                let mut forms = vec![*l, *u];
                if c != *l && c != *u {
                    forms.push(c);
                }
                result.push('[');
                for form in forms {
                    result.push_str(&escape_in_set(form));
                }
                result.push(']');
            }
            _ => {
                result.push_str("(?i:");
                result.push_str(&escape_char(c));
                result.push(')');
            }
        }
    }
    result
}
