//! Helpers that tag failures with where they happened.
//!
//! Key features:
//! - [`parse_each`] runs a parser over every element of a collection and
//!   wraps each failure in an index error, accumulating all of them.
//! - [`MemberParser`] does the same for named members, renaming the member
//!   through its [`NamingPolicy`].
//! - [`with_context`] and [`context_fn`] nest errors under a context error.

use alloc::string::String;
use alloc::vec::Vec;

use crate::outcome::Outcome;
use crate::types::{Error, Errors, NamingPolicy};

/// Parses every element, accumulating failures as index errors.
///
/// Each element is parsed independently. When the parser fails for the
/// element at position `i`, its errors become the causes of
/// `Error::index(i, message, ..)`. The result succeeds with all parsed
/// values in order only if every element succeeded.
///
/// # Examples
///
/// ```
/// use outcome_rail::{parse_each, Error, Outcome};
///
/// let ages = parse_each(
///     [1, 3, 4, 5],
///     |age| if age > 3 { Outcome::ok(age) } else { Outcome::fail("Too young") },
///     "msg",
/// );
///
/// assert_eq!(ages.errors(), &[
///     Error::index(0, "msg", [Error::new("Too young")]),
///     Error::index(1, "msg", [Error::new("Too young")]),
/// ]);
/// ```
pub fn parse_each<I, U, F, S>(items: I, mut parser: F, message: S) -> Outcome<Vec<U>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Outcome<U>,
    S: Into<String>,
{
    let message = message.into();
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            parser(item).merge_errors_with(|errors| Error::index(index, message.clone(), errors))
        })
        .collect()
}

/// Parses named members, tagging failures with member errors.
///
/// The naming policy is applied to every member name before it is stored
/// in the error. Parsers are plain values, so different policies can be
/// used side by side.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ErrorClass, MemberParser, NamingPolicy, Outcome};
///
/// let parser = MemberParser::new(NamingPolicy::CamelCase);
/// let age = parser.parse("UserAge", "abc", "invalid age", |raw: &str| {
///     Outcome::try_with(|| raw.parse::<u32>())
/// });
///
/// assert!(age.has_error_where(ErrorClass::Member, |e| e.member_name() == Some("userAge")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MemberParser {
    naming_policy: NamingPolicy,
}

impl MemberParser {
    #[inline]
    pub const fn new(naming_policy: NamingPolicy) -> Self {
        Self { naming_policy }
    }

    #[inline]
    pub fn naming_policy(&self) -> NamingPolicy {
        self.naming_policy
    }

    /// Returns `name` as it will appear in member errors.
    #[inline]
    pub fn member_name(&self, name: &str) -> String {
        self.naming_policy.apply(name)
    }

    /// Parses one member value; a failure becomes
    /// `Error::member(name, message, errors)`.
    pub fn parse<V, U, F, S>(&self, name: &str, value: V, message: S, parser: F) -> Outcome<U>
    where
        F: FnOnce(V) -> Outcome<U>,
        S: Into<String>,
    {
        parser(value)
            .merge_errors_with(|errors| Error::member(self.member_name(name), message, errors))
    }

    /// Parses every element of a collection member.
    ///
    /// Element failures are wrapped in index errors as in [`parse_each`],
    /// and all of them are nested under one member error.
    pub fn parse_each<I, U, F, S>(
        &self,
        name: &str,
        items: I,
        message: S,
        parser: F,
    ) -> Outcome<Vec<U>>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Outcome<U>,
        S: Into<String>,
    {
        let message = message.into();
        parse_each(items, parser, message.clone())
            .merge_errors_with(|errors| Error::member(self.member_name(name), message, errors))
    }
}

/// Converts a plain `Result`, nesting its error under a context error.
///
/// # Examples
///
/// ```
/// use outcome_rail::context::with_context;
///
/// let parsed = with_context("x".parse::<i32>().map_err(|e| e.to_string()), "config", "bad port");
/// assert_eq!(parsed.errors()[0].context_label(), Some("config"));
/// assert_eq!(parsed.errors()[0].inner_errors().len(), 1);
/// ```
#[inline]
pub fn with_context<T, E, L, S>(result: Result<T, E>, label: L, message: S) -> Outcome<T>
where
    E: Into<Error>,
    L: Into<String>,
    S: Into<String>,
{
    Outcome::from_result(result).with_context(label, message)
}

/// Creates a reusable closure that nests errors under a fixed context.
///
/// The closure is meant for [`Outcome::merge_errors_with`].
///
/// # Examples
///
/// ```
/// use outcome_rail::context::context_fn;
/// use outcome_rail::Outcome;
///
/// let in_db = context_fn("db", "query failed");
/// let first = Outcome::<()>::fail("timeout").merge_errors_with(&in_db);
/// let second = Outcome::<()>::fail("refused").merge_errors_with(&in_db);
///
/// assert_eq!(first.errors()[0].context_label(), Some("db"));
/// assert_eq!(second.errors()[0].message(), "query failed");
/// ```
pub fn context_fn<L, S>(label: L, message: S) -> impl Fn(Errors) -> Error
where
    L: Into<String>,
    S: Into<String>,
{
    let label = label.into();
    let message = message.into();
    move |errors| Error::context(label.clone(), message.clone(), errors)
}
