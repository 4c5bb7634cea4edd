// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::link::Link;
use crate::prefer::Prefer;
use pest::Parser;

/// Grammar for a single Link header value (RFC 8288).
pub mod rfc8288 {
    use std::fmt::{self, Display};

    #[derive(Parser)]
    #[grammar = "rfc8288.pest"]
    pub struct Rfc8288Parser;

    impl Display for Rule {
        fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "{:?}", self)
        }
    }
}

/// Grammar for a Prefer header value (RFC 7240).
pub mod rfc7240 {
    use std::fmt::{self, Display};

    #[derive(Parser)]
    #[grammar = "rfc7240.pest"]
    pub struct Rfc7240Parser;

    impl Display for Rule {
        fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "{:?}", self)
        }
    }
}

/// Parse a single Link header value.
///
/// Never fails: both grammars accept any input string, so a malformed
/// header yields a `Link` with an absent URI and whatever parameters were
/// recognizable.
pub fn parse_link(input: &str) -> Link {
    rfc8288::Rfc8288Parser::parse(rfc8288::Rule::header, input)
        .ok()
        .and_then(|mut pairs| pairs.next())
        .and_then(|pair| Link::from_rule(pair).ok())
        .unwrap_or_default()
}

/// Parse a Prefer header value.
///
/// An absent header short-circuits to `None` before any grammar work. A
/// `wait` directive whose value is not a non-negative integer rejects the
/// whole header; every other malformed directive is dropped silently.
pub fn parse_prefer(input: Option<&str>) -> Option<Prefer> {
    let raw = input?;

    rfc7240::Rfc7240Parser::parse(rfc7240::Rule::prefer, raw)
        .ok()
        .and_then(|mut pairs| pairs.next())
        .and_then(|pair| Prefer::from_rule(pair).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod link {
        use super::*;

        #[test]
        fn leading_whitespace_before_target() {
            let input = "  <http://example.org/resource>  ; rel=type";

            let actual = parse_link(input);

            assert_eq!(actual.uri(), Some("http://example.org/resource"));
            assert_eq!(actual.rel(), Some("type"));
        }

        #[test]
        fn empty_brackets_yield_an_empty_uri() {
            let actual = parse_link("<>");

            assert_eq!(actual.uri(), Some(""));
        }

        #[test]
        fn params_survive_a_junk_first_segment() {
            let actual = parse_link("; rel=next");

            assert_eq!(actual.uri(), None);
            assert_eq!(actual.rel(), Some("next"));
        }

        #[test]
        fn quotes_do_not_protect_the_separator() {
            let input = r#"<http://example.org/>; title="some; title""#;

            let actual = parse_link(input);

            assert_eq!(actual.uri(), Some("http://example.org/"));
            assert_eq!(actual.title(), Some("\"some"));
            assert_eq!(actual.params().len(), 1);
        }

        #[test]
        fn junk_input_never_fails() {
            for input in &["", ";", ";;;", "<", ">", "=", "a=b=c; ; <x", "\"\";=\""] {
                let actual = parse_link(input);

                assert_eq!(actual.uri(), None);
            }
        }
    }

    mod prefer {
        use super::*;

        #[test]
        fn empty_header_is_an_empty_value() {
            let actual = parse_prefer(Some("")).expect("Expect a valid prefer header");

            assert_eq!(actual, Prefer::default());
        }

        #[test]
        fn junk_input_never_fails() {
            for input in &[";", ";;;", "= x", "\"quoted\"", "handling; return"] {
                let actual = parse_prefer(Some(input)).expect("Expect a valid prefer header");

                assert_eq!(actual, Prefer::default());
            }
        }

        #[test]
        fn wait_poisons_the_whole_header() {
            let actual = parse_prefer(Some("return=minimal; wait=soon"));

            assert_eq!(actual, None);
        }
    }
}
