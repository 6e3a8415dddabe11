#[cfg(test)]
mod verify {
    use pretty_assertions::assert_eq;

    use regexer::language::*;
    use regexer::Pattern;

    fn sample() -> Pattern {
        Pattern::named_group("id", Pattern::digit().one_or_more())
            .unwrap()
            .then_char(':')
            .then_named_backreference("id")
            .unwrap()
    }

    #[test]
    fn identifier_boundaries() {
        let apostrophes = Settings {
            identifier_boundary: IdentifierBoundary::Apostrophes,
            ..Settings::default()
        };

        assert_eq!(sample().render().unwrap(), "(?<id>\\d+):\\k<id>");
        assert_eq!(
            sample()
                .render_with(&apostrophes)
                .unwrap(),
            "(?'id'\\d+):\\k'id'"
        );

        let balancing = Pattern::balancing(Some("a"), "b", "x").unwrap();
        assert_eq!(
            balancing
                .render_with(&apostrophes)
                .unwrap(),
            "(?'a-b'x)"
        );
    }

    #[test]
    fn clone_does_not_affect_original() {
        let pattern = sample();
        let original = Settings::default();
        let before = pattern
            .render_with(&original)
            .unwrap();

        let mut changed = original.clone();
        changed.identifier_boundary = IdentifierBoundary::Apostrophes;
        changed.group_quantified = false;
        let different = pattern
            .render_with(&changed)
            .unwrap();

        let after = pattern
            .render_with(&original)
            .unwrap();
        assert_eq!(before, after);
        assert_ne!(before, different);
    }

    #[test]
    fn separator_when_followed_by_digit() {
        let pattern = Pattern::group(Pattern::digit())
            .then_backreference(1)
            .unwrap()
            .then_text("0");
        assert_eq!(pattern.render().unwrap(), "(\\d)\\1(?:)0");

        let pattern = Pattern::group(Pattern::digit())
            .then_backreference(1)
            .unwrap()
            .then_text("a");
        assert_eq!(pattern.render().unwrap(), "(\\d)\\1a");

        // a digit inside a following construct is not adjacent
        let pattern = Pattern::group(Pattern::digit())
            .then_backreference(1)
            .unwrap()
            .then_group("0");
        assert_eq!(pattern.render().unwrap(), "(\\d)\\1(0)");
    }

    #[test]
    fn separator_policies() {
        let pattern = Pattern::group(Pattern::digit())
            .then_backreference(1)
            .unwrap()
            .then_text("2")
            .then_backreference(1)
            .unwrap()
            .then_char('x');

        let never = Settings {
            backreference_separator: BackreferenceSeparator::Never,
            ..Settings::default()
        };
        let always = Settings {
            backreference_separator: BackreferenceSeparator::Always,
            ..Settings::default()
        };

        assert_eq!(pattern.render_with(&never).unwrap(), "(\\d)\\12\\1x");
        assert_eq!(pattern.render().unwrap(), "(\\d)\\1(?:)2\\1x");
        assert_eq!(
            pattern
                .render_with(&always)
                .unwrap(),
            "(\\d)\\1(?:)2\\1(?:)x"
        );
    }

    #[test]
    fn quantified_backreference_keeps_quantifier() {
        let always = Settings {
            backreference_separator: BackreferenceSeparator::Always,
            ..Settings::default()
        };

        let pattern = Pattern::group(Pattern::digit())
            .append(
                Pattern::backreference(1)
                    .unwrap()
                    .one_or_more(),
            )
            .then_text("0");
        assert_eq!(pattern.render_with(&always).unwrap(), "(\\d)\\1+(?:)0");
        assert_eq!(pattern.render().unwrap(), "(\\d)\\1+0");

        let pattern = Pattern::group(Pattern::digit())
            .append(
                Pattern::backreference(1)
                    .unwrap()
                    .exactly(2)
                    .unwrap(),
            )
            .then_text("5");
        assert_eq!(pattern.render_with(&always).unwrap(), "(\\d)\\1{2}(?:)5");
        assert_eq!(pattern.render().unwrap(), "(\\d)\\1{2}5");

        let lazy = Pattern::group(Pattern::digit())
            .append(
                Pattern::backreference(1)
                    .unwrap()
                    .zero_or_more()
                    .lazy(),
            );
        assert_eq!(lazy.render_with(&always).unwrap(), "(\\d)\\1*?");
    }

    #[test]
    fn named_backreferences_never_separated() {
        let always = Settings {
            backreference_separator: BackreferenceSeparator::Always,
            ..Settings::default()
        };
        let pattern = Pattern::named_group("n", "a")
            .unwrap()
            .then_named_backreference("n")
            .unwrap()
            .then_text("1");

        assert_eq!(pattern.render_with(&always).unwrap(), "(?<n>a)\\k<n>1");
    }

    #[test]
    fn invariant_culture() {
        let invariant = Settings {
            invariant_culture: true,
            ..Settings::default()
        };
        let pattern = Pattern::text("id=").then_text_ignore_case("Ab.");

        assert_eq!(pattern.render().unwrap(), "id=(?i:Ab\\.)");
        assert_eq!(
            pattern
                .render_with(&invariant)
                .unwrap(),
            "id=[aA][bB]\\."
        );
    }

    #[test]
    fn deserialized_with_defaults() {
        let settings: Settings = serde_json::from_str(
            r#"{ "identifier_boundary": "apostrophes", "condition": "lookahead" }"#,
        )
        .unwrap();

        assert_eq!(settings.identifier_boundary, IdentifierBoundary::Apostrophes);
        assert_eq!(settings.condition, ConditionStyle::Lookahead);
        assert!(settings.group_quantified);
        assert_eq!(
            settings.backreference_separator,
            BackreferenceSeparator::WhenFollowedByDigit
        );

        let text = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }
}
