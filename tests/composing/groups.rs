#[cfg(test)]
mod verify {
    use pretty_assertions::assert_eq;

    use regexer::language::*;
    use regexer::Pattern;

    #[test]
    fn group_kinds() {
        assert_eq!(Pattern::group("ab").render().unwrap(), "(ab)");
        assert_eq!(Pattern::non_capturing("ab").render().unwrap(), "(?:ab)");
        assert_eq!(Pattern::atomic("ab").render().unwrap(), "(?>ab)");
        assert_eq!(
            Pattern::named_group("year", Pattern::digit().exactly(4).unwrap())
                .unwrap()
                .render()
                .unwrap(),
            "(?<year>\\d{4})"
        );
    }

    #[test]
    fn raw_payloads() {
        assert_eq!(Pattern::group_raw("a+b", true).render().unwrap(), "(a\\+b)");
        assert_eq!(Pattern::group_raw("a+b", false).render().unwrap(), "(a+b)");
        assert_eq!(
            Pattern::assert_raw(AssertionKind::Lookbehind, "$", true)
                .render()
                .unwrap(),
            "(?<=\\$)"
        );
    }

    #[test]
    fn nested_groups() {
        let inner = Pattern::group(Pattern::text("b").then_digit());
        let outer = Pattern::non_capturing(Pattern::text("a").append(inner)).then_text("c");

        assert_eq!(outer.render().unwrap(), "(?:a(b\\d))c");
    }

    #[test]
    fn assertions() {
        assert_eq!(Pattern::lookahead("x").render().unwrap(), "(?=x)");
        assert_eq!(Pattern::not_lookahead("x").render().unwrap(), "(?!x)");
        assert_eq!(Pattern::lookbehind("x").render().unwrap(), "(?<=x)");
        assert_eq!(Pattern::not_lookbehind("x").render().unwrap(), "(?<!x)");

        let pattern = Pattern::word_char()
            .one_or_more()
            .then_lookahead(Pattern::char(';'));
        assert_eq!(pattern.render().unwrap(), "\\w+(?=;)");
    }

    #[test]
    fn balancing_groups() {
        let open = Pattern::named_group("open", Pattern::char('(')).unwrap();
        let close = Pattern::balancing(Some("inner"), "open", Pattern::char(')')).unwrap();
        assert_eq!(
            open.append(close)
                .render()
                .unwrap(),
            "(?<open>\\()(?<inner-open>\\))"
        );

        let pop = Pattern::balancing(None, "open", "x").unwrap();
        assert_eq!(pop.render().unwrap(), "(?<-open>x)");

        assert!(Pattern::balancing(None, "", "x").is_err());
        assert!(Pattern::balancing(Some("2x"), "open", "x").is_err());
    }

    #[test]
    fn scoped_options() {
        let apply = Options {
            ignore_case: true,
            ..Options::NONE
        };
        let disable = Options {
            multi_line: true,
            single_line: true,
            ..Options::NONE
        };

        let pattern = Pattern::with_options(apply, disable, "abc").unwrap();
        assert_eq!(pattern.render().unwrap(), "(?i-ms:abc)");

        let pattern = Pattern::with_options(Options::NONE, Options::NONE, "abc").unwrap();
        assert_eq!(pattern.render().unwrap(), "(?:abc)");

        assert!(matches!(
            Pattern::with_options(apply, apply, "abc"),
            Err(PatternError::ConflictingOptions('i'))
        ));
    }

    #[test]
    fn standalone_options() {
        let apply = Options {
            ignore_case: true,
            ignore_whitespace: true,
            ..Options::NONE
        };

        let pattern = Pattern::options(apply, Options::NONE)
            .unwrap()
            .then_text("a");
        assert_eq!(pattern.render().unwrap(), "(?ix)a");

        // nothing to toggle contributes nothing
        let pattern = Pattern::text("a")
            .then_options(Options::NONE, Options::NONE)
            .unwrap()
            .then_text("b");
        assert_eq!(pattern.render().unwrap(), "ab");
    }

    #[test]
    fn invalid_names() {
        assert!(matches!(
            Pattern::named_group("", "x"),
            Err(PatternError::InvalidGroupName(_))
        ));
        assert!(matches!(
            Pattern::named_group("no way", "x"),
            Err(PatternError::InvalidGroupName(_))
        ));
        assert!(Pattern::named_backreference("1").is_err());
    }

    #[test]
    fn backreferences() {
        let pattern = Pattern::group(Pattern::word_char())
            .then_backreference(1)
            .unwrap();
        assert_eq!(pattern.render().unwrap(), "(\\w)\\1");

        assert!(matches!(
            Pattern::backreference(0),
            Err(PatternError::InvalidGroupNumber)
        ));
    }
}
