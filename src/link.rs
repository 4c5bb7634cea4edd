// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::parser::rfc8288::Rule;
use pest::iterators::Pair;
use std::collections::HashMap;

/// A single Link header value: a target URI and its parameters.
///
/// The URI is present only when the first segment of the header is wrapped
/// in angle brackets; anything else leaves it absent without failing the
/// parse. Parameters keep the first value seen for a name and later
/// duplicates are ignored.
///
/// ## Examples
///
/// ```
/// use ldpheaders::parse_link;
///
/// let link = parse_link(r#"<http://www.w3.org/ns/ldp#Container>; rel="type""#);
///
/// assert_eq!(link.uri(), Some("http://www.w3.org/ns/ldp#Container"));
/// assert_eq!(link.rel(), Some("type"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Link {
    uri: Option<String>,
    params: HashMap<String, String>,
}

impl Link {
    /// The URI portion of the header, if the first segment had one.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_ref().map(|uri| uri.as_str())
    }

    /// The `rel` parameter, if one exists.
    pub fn rel(&self) -> Option<&str> {
        self.param("rel")
    }

    /// The `title` parameter, if one exists.
    pub fn title(&self) -> Option<&str> {
        self.param("title")
    }

    /// The `type` parameter, if one exists.
    pub fn media_type(&self) -> Option<&str> {
        self.param("type")
    }

    /// A parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|value| value.as_str())
    }

    /// All defined parameters, including `rel`, `title` and `type` when
    /// they exist.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    pub fn from_rule(pair: Pair<Rule>) -> Result<Link> {
        ensure!(
            pair.as_rule() == Rule::header,
            ParserError::InvalidRule(Rule::header.to_string(), pair.as_rule().to_string())
        );

        let mut uri = None;
        let mut params = HashMap::new();

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::first => uri = target_uri(inner_pair),

                Rule::segment => {
                    if let Some((name, value)) = param(inner_pair) {
                        if !params.contains_key(&name) {
                            params.insert(name, value);
                        }
                    }
                }

                Rule::EOI => (),

                _ => unreachable!(),
            }
        }

        Ok(Link { uri, params })
    }
}

fn target_uri(pair: Pair<Rule>) -> Option<String> {
    for inner_pair in pair.into_inner() {
        if inner_pair.as_rule() == Rule::target {
            for target_pair in inner_pair.into_inner() {
                if target_pair.as_rule() == Rule::uri {
                    return Some(target_pair.as_str().to_string());
                }
            }
        }
    }

    None
}

fn param(pair: Pair<Rule>) -> Option<(String, String)> {
    for inner_pair in pair.into_inner() {
        if inner_pair.as_rule() == Rule::pair {
            let mut name = String::new();
            let mut value = String::new();

            for part in inner_pair.into_inner() {
                match part.as_rule() {
                    Rule::name => name.push_str(part.as_str()),
                    Rule::value => value = value_text(part),
                    _ => unreachable!(),
                }
            }

            return Some((name, value));
        }
    }

    None
}

fn value_text(pair: Pair<Rule>) -> String {
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::quoted => {
                for quoted_pair in inner_pair.into_inner() {
                    if quoted_pair.as_rule() == Rule::quoted_text {
                        return quoted_pair.as_str().to_string();
                    }
                }
            }

            Rule::bare => return inner_pair.as_str().trim().to_string(),

            _ => unreachable!(),
        }
    }

    String::new()
}
