use outcome_rail::context::{context_fn, with_context};
use outcome_rail::{parse_each, Error, ErrorClass, MemberParser, NamingPolicy, Outcome};

fn adult(age: i32) -> Outcome<i32> {
    if age > 3 {
        Outcome::ok(age)
    } else {
        Outcome::fail("Too young")
    }
}

#[test]
fn parse_each_tags_failures_with_their_index() {
    let ages = parse_each([1, 3, 4, 5], adult, "msg");

    assert_eq!(
        ages,
        Outcome::fail_many([
            Error::index(0, "msg", [Error::new("Too young")]),
            Error::index(1, "msg", [Error::new("Too young")]),
        ])
    );
}

#[test]
fn parse_each_collects_values_on_success() {
    assert_eq!(parse_each([4, 5, 6], adult, "msg"), Outcome::ok(vec![4, 5, 6]));
    assert_eq!(parse_each(Vec::<i32>::new(), adult, "msg"), Outcome::ok(vec![]));
}

#[test]
fn parse_each_keeps_multiple_errors_per_element() {
    let parsed = parse_each(
        ["ok", "bad"],
        |s| {
            if s == "ok" {
                Outcome::ok(s.len())
            } else {
                Outcome::fail_many([Error::new("first"), Error::new("second")])
            }
        },
        "invalid entry",
    );

    assert_eq!(
        parsed.errors(),
        &[Error::index(1, "invalid entry", [Error::new("first"), Error::new("second")])]
    );
}

#[test]
fn member_parser_applies_naming_policy() {
    let parser = MemberParser::new(NamingPolicy::SnakeCase);
    let parsed = parser.parse("FirstName", "", "invalid member", |name: &str| {
        Outcome::ok_if(!name.is_empty(), name, "empty")
    });

    assert_eq!(
        parsed.errors(),
        &[Error::member("first_name", "invalid member", [Error::new("empty")])]
    );
    assert_eq!(parser.naming_policy(), NamingPolicy::SnakeCase);
    assert_eq!(parser.member_name("HomeAddress"), "home_address");
}

#[test]
fn member_parser_defaults_to_as_is() {
    let parser = MemberParser::default();
    let parsed = parser.parse("Age", 2, "invalid member", adult);

    assert!(parsed.has_error_where(ErrorClass::Member, |e| e.member_name() == Some("Age")));
    assert_eq!(parser.parse("Age", 30, "invalid member", adult), Outcome::ok(30));
}

#[test]
fn member_parser_parse_each_nests_index_errors() {
    let parser = MemberParser::new(NamingPolicy::CamelCase);
    let parsed = parser.parse_each("ChildAges", [5, 2], "invalid ages", adult);

    assert_eq!(
        parsed.errors(),
        &[Error::member(
            "childAges",
            "invalid ages",
            [Error::index(1, "invalid ages", [Error::new("Too young")])]
        )]
    );
}

#[test]
fn with_context_wraps_plain_results() {
    let ok = with_context(Ok::<_, &str>(1), "config", "bad port");
    assert_eq!(ok, Outcome::ok(1));

    let failed = with_context(Err::<i32, _>("not a number"), "config", "bad port");
    assert_eq!(
        failed.errors(),
        &[Error::context("config", "bad port", [Error::new("not a number")])]
    );
}

#[test]
fn context_fn_is_reusable() {
    let in_db = context_fn("db", "query failed");

    let first = Outcome::<()>::fail("timeout").merge_errors_with(&in_db);
    let second =
        Outcome::<()>::fail_many([Error::new("a"), Error::new("b")]).merge_errors_with(&in_db);

    assert_eq!(first.errors()[0].inner_errors().len(), 1);
    assert_eq!(second.errors()[0].inner_errors().len(), 2);
    assert!(second.has_error_where(ErrorClass::Context, |e| e.context_label() == Some("db")));
}
