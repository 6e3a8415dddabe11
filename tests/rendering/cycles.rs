#[cfg(test)]
mod verify {
    use pretty_assertions::assert_eq;

    use regexer::language::*;
    use regexer::Pattern;

    fn logging() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn group_containing_itself() {
        logging();

        let slot = Pattern::placeholder();
        let group = Pattern::group(Pattern::text("a").append(slot.clone()));
        slot.bind(group.clone())
            .unwrap();

        let result = group.render();
        assert!(matches!(result, Err(PatternError::CircularReference)));
        assert!(result
            .unwrap_err()
            .is_circular());
    }

    #[test]
    fn placeholder_bound_to_itself() {
        logging();

        let slot = Pattern::placeholder();
        slot.bind(slot.clone())
            .unwrap();

        assert!(matches!(
            slot.render(),
            Err(PatternError::CircularReference)
        ));
    }

    #[test]
    fn indirect_cycle() {
        logging();

        let slot = Pattern::placeholder();
        let inner = Pattern::lookahead(slot.clone());
        let outer = Pattern::any_of([Pattern::digit(), inner])
            .unwrap()
            .one_or_more();
        slot.bind(outer.clone())
            .unwrap();

        let result = Pattern::start_of_line()
            .append(outer)
            .render();
        assert!(matches!(result, Err(PatternError::CircularReference)));
    }

    #[test]
    fn cycle_in_condition() {
        logging();

        let slot = Pattern::placeholder();
        let conditional = Pattern::if_matches(slot.clone(), "y", None);
        slot.bind(conditional.clone())
            .unwrap();

        assert!(matches!(
            conditional.render(),
            Err(PatternError::CircularReference)
        ));
    }

    #[test]
    fn forward_reference_without_cycle() {
        let word = Pattern::placeholder();
        let pair = Pattern::group(word.clone())
            .then_char(',')
            .append(word.clone());
        word.bind(Pattern::word_char().one_or_more())
            .unwrap();

        assert_eq!(pair.render().unwrap(), "(\\w+),\\w+");
    }

    #[test]
    fn reuse_is_not_a_cycle() {
        let digit = Pattern::digit();
        let group = Pattern::group(digit.clone());
        let pattern = Pattern::any_of([group.clone(), group.clone()])
            .unwrap()
            .append(Pattern::if_group(1, group.clone(), Some(group)).unwrap())
            .append(digit);

        assert_eq!(
            pattern.render().unwrap(),
            "(?:(\\d)|(\\d))(?(1)(\\d)|(\\d))\\d"
        );
    }

    #[test]
    fn unbound_placeholder() {
        let pattern = Pattern::text("a").append(Pattern::placeholder());
        let result = pattern.render();

        assert!(matches!(result, Err(PatternError::UnboundPlaceholder)));
        assert!(!result
            .unwrap_err()
            .is_circular());
    }

    #[test]
    fn construction_errors_are_not_cycles() {
        let error = Pattern::char('a')
            .between(2, 1)
            .unwrap_err();
        assert!(!error.is_circular());
    }
}
