//! Member naming policies.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Renames a member identifier before it is recorded in a member error.
///
/// The policy is plain configuration: pass it to a
/// [`MemberParser`](crate::MemberParser) where it is needed. The default
/// leaves names unchanged.
///
/// # Examples
///
/// ```
/// use outcome_rail::NamingPolicy;
///
/// assert_eq!(NamingPolicy::AsIs.apply("FirstName"), "FirstName");
/// assert_eq!(NamingPolicy::CamelCase.apply("FirstName"), "firstName");
/// assert_eq!(NamingPolicy::CamelCase.apply("URLValue"), "urlValue");
/// assert_eq!(NamingPolicy::SnakeCase.apply("URLValue"), "url_value");
/// assert_eq!(NamingPolicy::UpperCase.apply("FirstName"), "FIRSTNAME");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamingPolicy {
    #[default]
    AsIs,
    LowerCase,
    UpperCase,
    CamelCase,
    SnakeCase,
}

impl NamingPolicy {
    /// Applies the policy to `name`.
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::AsIs => name.to_string(),
            Self::LowerCase => name.to_lowercase(),
            Self::UpperCase => name.to_uppercase(),
            Self::CamelCase => to_camel_case(name),
            Self::SnakeCase => to_snake_case(name),
        }
    }
}

/// Lowercases the leading run of uppercase characters. When the run is
/// followed by a lowercase character, its last letter starts the next word
/// and keeps its case (`URLValue` becomes `urlValue`).
fn to_camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let run = chars.iter().take_while(|c| c.is_uppercase()).count();
    if run == 0 {
        return name.to_string();
    }

    let next_is_lower = chars.get(run).is_some_and(|c| c.is_lowercase());
    let lowered = if run > 1 && next_is_lower { run - 1 } else { run };

    let mut out = String::with_capacity(name.len());
    for c in &chars[..lowered] {
        out.extend(c.to_lowercase());
    }
    out.extend(&chars[lowered..]);
    out
}

fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, c) in chars.iter().enumerate() {
        if !c.is_uppercase() {
            out.push(*c);
            continue;
        }
        if i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}
