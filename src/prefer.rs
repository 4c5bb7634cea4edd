// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::parser::rfc7240::Rule;
use pest::iterators::Pair;
use std::collections::HashSet;
use std::fmt::{self, Display};

const RESPOND_ASYNC: &str = "respond-async";
const DEPTH_NOROOT: &str = "depth-noroot";

/// A Prefer header value.
///
/// Recognized directives are `return`, `include`, `omit`, `handling`,
/// `wait` and the bare tokens `respond-async` and `depth-noroot`; anything
/// else is dropped. Directives may appear in any order, and a repeated
/// recognized directive overrides the earlier occurrence.
///
/// A directive with an unrecognized value leaves the matching field
/// absent. The one exception is `wait`: a `wait` value that is not a
/// non-negative integer rejects the whole header, so `parse_prefer`
/// returns `None` rather than a partially populated value.
///
/// ## Examples
///
/// ```
/// use ldpheaders::{parse_prefer, Preference};
///
/// let prefer = parse_prefer(Some("handling=lenient; return=minimal")).unwrap();
///
/// assert_eq!(prefer.preference(), Some(Preference::Minimal));
/// assert!(prefer.include().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Prefer {
    preference: Option<Preference>,
    include: HashSet<String>,
    omit: HashSet<String>,
    handling: Option<Handling>,
    wait: Option<u32>,
    respond_async: bool,
    depth_noroot: bool,
}

impl Prefer {
    /// Create a Prefer value directly, bypassing the header grammar.
    ///
    /// Absent collections normalize to empty sets and the `flags`
    /// collection is probed for the `respond-async` and `depth-noroot`
    /// tokens. An explicit `wait` of zero is preserved as zero.
    pub fn new(
        preference: Option<Preference>,
        include: Option<Vec<String>>,
        omit: Option<Vec<String>>,
        handling: Option<Handling>,
        flags: Option<Vec<String>>,
        wait: Option<u32>,
    ) -> Prefer {
        let flags = flags.unwrap_or_default();

        Prefer {
            preference,
            include: include.unwrap_or_default().into_iter().collect(),
            omit: omit.unwrap_or_default().into_iter().collect(),
            handling,
            wait,
            respond_async: flags.iter().any(|flag| flag == RESPOND_ASYNC),
            depth_noroot: flags.iter().any(|flag| flag == DEPTH_NOROOT),
        }
    }

    /// A canonical `return=representation` value with only `include`
    /// populated.
    pub fn of_include<I>(uris: I) -> Prefer
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Prefer {
            preference: Some(Preference::Representation),
            include: uris.into_iter().map(Into::into).collect(),
            ..Prefer::default()
        }
    }

    /// A canonical `return=representation` value with only `omit`
    /// populated.
    pub fn of_omit<I>(uris: I) -> Prefer
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Prefer {
            preference: Some(Preference::Representation),
            omit: uris.into_iter().map(Into::into).collect(),
            ..Prefer::default()
        }
    }

    /// The `return` preference, if a recognized one was given.
    pub fn preference(&self) -> Option<Preference> {
        self.preference
    }

    /// The URIs named by `include` directives.
    pub fn include(&self) -> &HashSet<String> {
        &self.include
    }

    /// The URIs named by `omit` directives.
    pub fn omit(&self) -> &HashSet<String> {
        &self.omit
    }

    /// The `handling` strictness, if a recognized one was given.
    pub fn handling(&self) -> Option<Handling> {
        self.handling
    }

    /// The `wait` duration in seconds.
    pub fn wait(&self) -> Option<u32> {
        self.wait
    }

    /// Whether the `respond-async` token was given.
    pub fn respond_async(&self) -> bool {
        self.respond_async
    }

    /// Whether the `depth-noroot` token was given.
    pub fn depth_noroot(&self) -> bool {
        self.depth_noroot
    }

    pub fn from_rule(pair: Pair<Rule>) -> Result<Prefer> {
        ensure!(
            pair.as_rule() == Rule::prefer,
            ParserError::InvalidRule(Rule::prefer.to_string(), pair.as_rule().to_string())
        );

        let mut prefer = Prefer::default();

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::directive => prefer.apply(inner_pair)?,
                Rule::EOI => (),
                _ => unreachable!(),
            }
        }

        Ok(prefer)
    }

    fn apply(&mut self, pair: Pair<Rule>) -> Result<()> {
        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::pair => {
                    let (name, value) = name_value(inner_pair);

                    match name.as_str() {
                        "return" => self.preference = Preference::from_token(&value),
                        "include" => {
                            self.include.insert(value);
                        }
                        "omit" => {
                            self.omit.insert(value);
                        }
                        "handling" => self.handling = Handling::from_token(&value),
                        "wait" => match value.parse() {
                            Ok(seconds) => self.wait = Some(seconds),
                            Err(_) => return Err(ParserError::InvalidWait(value).into()),
                        },
                        _ => (),
                    }
                }

                Rule::flag => match inner_pair.as_str() {
                    RESPOND_ASYNC => self.respond_async = true,
                    DEPTH_NOROOT => self.depth_noroot = true,
                    _ => (),
                },

                Rule::anon => (),

                _ => unreachable!(),
            }
        }

        Ok(())
    }
}

fn name_value(pair: Pair<Rule>) -> (String, String) {
    let mut name = String::new();
    let mut value = String::new();

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::name => name.push_str(inner_pair.as_str()),
            Rule::value => value = value_text(inner_pair),
            _ => unreachable!(),
        }
    }

    (name, value)
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

/// The `return` preference of a Prefer header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Preference {
    Representation,
    Minimal,
}

impl Preference {
    /// Recognize the exact wire token; anything else is absent.
    pub fn from_token(token: &str) -> Option<Preference> {
        match token {
            "representation" => Some(Preference::Representation),
            "minimal" => Some(Preference::Minimal),
            _ => None,
        }
    }
}

impl Display for Preference {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Preference::Representation => write!(formatter, "representation"),
            Preference::Minimal => write!(formatter, "minimal"),
        }
    }
}

/// The `handling` strictness of a Prefer header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Handling {
    Strict,
    Lenient,
}

impl Handling {
    /// Recognize the exact wire token; anything else is absent.
    pub fn from_token(token: &str) -> Option<Handling> {
        match token {
            "strict" => Some(Handling::Strict),
            "lenient" => Some(Handling::Lenient),
            _ => None,
        }
    }
}

impl Display for Handling {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Handling::Strict => write!(formatter, "strict"),
            Handling::Lenient => write!(formatter, "lenient"),
        }
    }
}
