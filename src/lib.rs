// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

#[macro_use]
extern crate failure;

extern crate pest;
#[macro_use]
extern crate pest_derive;

pub mod activity;
pub mod error;
pub mod link;
pub mod parser;
pub mod prefer;

pub use link::Link;
pub use parser::{parse_link, parse_prefer};
pub use prefer::{Handling, Prefer, Preference};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ldp_type_link() {
        let input = r#"<http://www.w3.org/ns/ldp#BasicContainer>; rel="type""#;

        let actual = parse_link(input);

        assert_eq!(actual.uri(), Some("http://www.w3.org/ns/ldp#BasicContainer"));
        assert_eq!(actual.rel(), Some("type"));
        assert_eq!(actual.params().len(), 1);
    }

    #[test]
    fn representation_with_membership() {
        let input = r#"return=representation; include="http://www.w3.org/ns/ldp#PreferMembership""#;

        let actual = parse_prefer(Some(input)).expect("Expect a valid prefer header");

        assert_eq!(actual.preference(), Some(Preference::Representation));
        assert!(actual
            .include()
            .contains("http://www.w3.org/ns/ldp#PreferMembership"));
        assert!(actual.omit().is_empty());
    }

    #[test]
    fn parse_matches_of_include() {
        let input = r#"return=representation; include="http://example.org/test""#;
        let expected = Prefer::of_include(vec!["http://example.org/test"]);

        let actual = parse_prefer(Some(input)).expect("Expect a valid prefer header");

        assert_eq!(actual, expected);
    }

    #[test]
    fn async_deletion_headers() {
        let input = "respond-async; wait=30";

        let actual = parse_prefer(Some(input)).expect("Expect a valid prefer header");

        assert!(actual.respond_async());
        assert_eq!(actual.wait(), Some(30));
        assert!(!actual.depth_noroot());
    }

    #[test]
    fn absent_prefer_header() {
        assert_eq!(parse_prefer(None), None);
    }
}
