use outcome_rail::NamingPolicy;

#[test]
fn default_policy_keeps_names() {
    assert_eq!(NamingPolicy::default(), NamingPolicy::AsIs);
    assert_eq!(NamingPolicy::default().apply("FirstName"), "FirstName");
}

#[test]
fn case_policies() {
    assert_eq!(NamingPolicy::LowerCase.apply("FirstName"), "firstname");
    assert_eq!(NamingPolicy::UpperCase.apply("FirstName"), "FIRSTNAME");
}

#[test]
fn camel_case_lowers_leading_run() {
    assert_eq!(NamingPolicy::CamelCase.apply("FirstName"), "firstName");
    assert_eq!(NamingPolicy::CamelCase.apply("URLValue"), "urlValue");
    assert_eq!(NamingPolicy::CamelCase.apply("ID"), "id");
    assert_eq!(NamingPolicy::CamelCase.apply("already"), "already");
    assert_eq!(NamingPolicy::CamelCase.apply(""), "");
}

#[test]
fn snake_case_splits_words() {
    assert_eq!(NamingPolicy::SnakeCase.apply("FirstName"), "first_name");
    assert_eq!(NamingPolicy::SnakeCase.apply("URLValue"), "url_value");
    assert_eq!(NamingPolicy::SnakeCase.apply("Line2Text"), "line2_text");
    assert_eq!(NamingPolicy::SnakeCase.apply("name"), "name");
}
