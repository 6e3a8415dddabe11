//! Highlighting patterns for display on a terminal

use owo_colors::OwoColorize;

use super::{Render, Syntax};

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Text => content.to_string(),
            Syntax::Character => content.to_string(),
            Syntax::Class => content // constant.character.class - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(173, 127, 168))
                .bold()
                .to_string(),
            Syntax::Anchor => content // keyword.control.anchor - #cc0000 (red) bold
                .color(owo_colors::Rgb(204, 0, 0))
                .bold()
                .to_string(),
            Syntax::Set => content // constant.other.set - #ad7fa8 (purple)
                .color(owo_colors::Rgb(173, 127, 168))
                .to_string(),
            Syntax::Group => content // punctuation.section.group - #999999 bold
                .color(owo_colors::Rgb(153, 153, 153))
                .bold()
                .to_string(),
            Syntax::Assertion => content // keyword.control.assertion - #75507b bold
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .bold()
                .to_string(),
            Syntax::Alternation => content // keyword.operator.or - #cc0000 (red) bold
                .color(owo_colors::Rgb(204, 0, 0))
                .bold()
                .to_string(),
            Syntax::Conditional => content // keyword.control.conditional - #75507b bold
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .bold()
                .to_string(),
            Syntax::Quantifier => content // keyword.operator.quantifier - #3465a4 (blue) bold
                .color(owo_colors::Rgb(52, 101, 164))
                .bold()
                .to_string(),
            Syntax::Backreference => content // variable.other.reference - #729fcf (light blue) bold
                .color(owo_colors::Rgb(114, 159, 207))
                .bold()
                .to_string(),
            Syntax::Options => content // storage.modifier - #c4a000 bold
                .color(owo_colors::Rgb(0xc4, 0xa0, 0x00))
                .bold()
                .to_string(),
            Syntax::Raw => content // string - #4e9a06 (green)
                .color(owo_colors::Rgb(78, 154, 6))
                .to_string(),
        }
    }
}
