//! End-to-end exercises of the public builder surface.

use std::fmt::Display;

use regex_compose::{
    ANY, DIGIT, END, START, Flag, Fragment, PatternError, Section, alternate, compose,
    compose_flagged, execute, execute_all, named_capture, one_or_more, repeat,
};

fn expect_ok<T, E: Display>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{context}: {err}"),
    }
}

fn expect_match<'f, 't>(
    fragment: &'f Fragment,
    subject: &'t str,
) -> regex_compose::MatchView<'f, 't> {
    match expect_ok(execute(fragment, subject), "execution should succeed") {
        Some(view) => view,
        None => panic!("subject {subject:?} should match {:?}", fragment.source()),
    }
}

/// A date matcher in the shape `START (date: (month-text|month-num) - day - year) END`,
/// reusing one digit fragment across three captures.
fn date_pattern() -> Fragment {
    let some_digits = one_or_more(&DIGIT, false);
    let letters = expect_ok(
        regex_compose::char_in(&[('a', 'z').into(), ('A', 'Z').into()]),
        "letter class should build",
    );
    let month_text = expect_ok(
        named_capture(&one_or_more(&letters, false), "month-text"),
        "month-text should build",
    );
    let month_num = expect_ok(
        named_capture(&some_digits, "month-num"),
        "month-num should build",
    );
    let day = expect_ok(named_capture(&some_digits, "day"), "day should build");
    let year = expect_ok(
        named_capture(
            &expect_ok(repeat(&DIGIT, false, 2, Some(4)), "year digits should build"),
            "year",
        ),
        "year should build",
    );
    let body = expect_ok(
        compose([
            Section::from(expect_ok(
                alternate(&[month_text, month_num]),
                "month alternation should build",
            )),
            Section::from("-"),
            Section::from(day),
            Section::from("-"),
            Section::from(year),
        ]),
        "date body should compose",
    );
    expect_ok(
        compose([
            Section::from(&*START),
            Section::from(expect_ok(
                named_capture(&body, "date"),
                "date capture should build",
            )),
            Section::from(&*END),
        ]),
        "date pattern should compose",
    )
}

#[test]
fn date_pattern_source_and_table_match_the_composition() {
    let date = date_pattern();
    assert_eq!(
        date.source(),
        r"(?:(?:^)((?:(?:((?:(?:[a-zA-Z]){1,}))|((?:(?:\d){1,})))(?:\-)((?:(?:\d){1,}))(?:\-)((?:(?:\d){2,4}))))(?:$))"
    );
    let entries: Vec<(String, usize)> = date
        .captures()
        .iter()
        .map(|(name, index)| (name.to_string(), index))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("date".to_string(), 0),
            ("month-text".to_string(), 1),
            ("month-num".to_string(), 2),
            ("day".to_string(), 3),
            ("year".to_string(), 4),
        ]
    );
}

#[test]
fn date_pattern_resolves_every_capture_by_name() {
    let date = date_pattern();
    let matched = expect_match(&date, "Jan-5-2017");
    assert_eq!(
        expect_ok(matched.by_name("date"), "registered name"),
        Some("Jan-5-2017")
    );
    assert_eq!(
        expect_ok(matched.by_name("month-text"), "registered name"),
        Some("Jan")
    );
    assert_eq!(expect_ok(matched.by_name("month-num"), "registered name"), None);
    assert_eq!(expect_ok(matched.by_name("day"), "registered name"), Some("5"));
    assert_eq!(
        expect_ok(matched.by_name("year"), "registered name"),
        Some("2017")
    );
    assert!(matches!(
        matched.by_name("no such capture"),
        Err(PatternError::UnknownCapture(_))
    ));
}

#[test]
fn date_pattern_rejects_a_malformed_subject() {
    let date = date_pattern();
    assert!(
        expect_ok(execute(&date, "Jan-1st-09"), "execution should succeed").is_none(),
        "ordinal day should not match"
    );
}

#[test]
fn metacharacter_literals_match_themselves_exactly() {
    for literal in ["1+1=2", "a.b*c", "[x](y){z}", "path/to\\file", "^$|?"] {
        let pattern = expect_ok(
            compose([Section::from(literal)]),
            "literal should compose",
        );
        let matched = expect_match(&pattern, literal);
        assert_eq!(matched.as_str(), literal);
        assert_eq!(matched.start(), 0);
    }
}

#[test]
fn rewrapping_a_single_fragment_is_idempotent() {
    let once = expect_ok(compose([Section::from("x")]), "should compose");
    let twice = expect_ok(
        compose([Section::from(&once)]),
        "rewrap should compose",
    );
    assert_eq!(twice.source(), once.source());
}

#[test]
fn nested_captures_report_nested_extents() {
    let inner = expect_ok(
        named_capture(&one_or_more(&DIGIT, false), "inner"),
        "inner should build",
    );
    let outer = expect_ok(
        named_capture(
            &expect_ok(
                compose([Section::from("v"), Section::from(inner)]),
                "body should compose",
            ),
            "outer",
        ),
        "outer should build",
    );
    let matched = expect_match(&outer, "v42");
    let outer_text = expect_ok(matched.by_name("outer"), "registered name")
        .unwrap_or_else(|| panic!("outer group should participate"));
    let inner_text = expect_ok(matched.by_name("inner"), "registered name")
        .unwrap_or_else(|| panic!("inner group should participate"));
    assert_eq!(outer_text, "v42");
    assert_eq!(inner_text, "42");
    assert!(outer_text.contains(inner_text));
}

#[test]
fn alternation_numbers_groups_by_position_not_by_winner() {
    let a = expect_ok(named_capture(&one_or_more(&DIGIT, false), "a"), "builds");
    let b = expect_ok(named_capture(&one_or_more(&ANY, false), "b"), "builds");
    let a_size = a.captures().len();
    let either = expect_ok(alternate(&[a.clone(), b.clone()]), "alternation builds");
    for (name, index) in a.captures().iter() {
        assert_eq!(either.captures().index_of(name), Some(index));
    }
    for (name, index) in b.captures().iter() {
        assert_eq!(either.captures().index_of(name), Some(index + a_size));
    }
}

#[test]
fn lazy_and_greedy_repetition_differ_in_extent() {
    let greedy = one_or_more(&ANY, false);
    let lazy = one_or_more(&ANY, true);
    assert_eq!(expect_match(&greedy, "abc").as_str(), "abc");
    assert_eq!(expect_match(&lazy, "abc").as_str(), "a");
}

#[test]
fn global_scan_and_sticky_anchor_work_through_flags() {
    let digits = expect_ok(
        compose_flagged(
            [Section::from(one_or_more(&DIGIT, false))],
            &[Flag::Global],
        ),
        "flagged fragment should compose",
    );
    let all = expect_ok(execute_all(&digits, "1a22b333"), "scan should succeed");
    let texts: Vec<&str> = all.iter().map(regex_compose::MatchView::as_str).collect();
    assert_eq!(texts, vec!["1", "22", "333"]);

    let sticky = expect_ok(
        compose_flagged([Section::from("abc")], &[Flag::Sticky]),
        "sticky fragment should compose",
    );
    assert!(expect_ok(execute(&sticky, "zabc"), "execution should succeed").is_none());
    assert_eq!(expect_match(&sticky, "abcz").as_str(), "abc");
}

#[test]
fn validation_failures_are_raised_at_the_offending_call() {
    assert!(matches!(
        alternate(&[]),
        Err(PatternError::EmptyAlternation)
    ));
    assert!(matches!(
        repeat(&one_or_more(&DIGIT, false), false, 5, Some(2)),
        Err(PatternError::InvertedBounds { .. })
    ));
    assert!(matches!(
        regex_compose::char_in(&[('9', '0').into()]),
        Err(PatternError::InvertedRange { .. })
    ));
    assert!(matches!(
        compose_flagged([Section::from("x")], &[Flag::Unicode, Flag::Unicode]),
        Err(PatternError::DuplicateFlag(Flag::Unicode))
    ));
}
