use crate::ast::{IncludeDirective, IncludeKind, SourceLine};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    character::complete::multispace0,
    combinator::{all_consuming, map as nommap},
    error::ParseError,
    sequence::{delimited, preceded, terminated},
    IResult,
};

////////// PARSER COMBINATORS //////////

pub fn wsl<'a, F, O, E>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    E: ParseError<&'a str>,
    F: FnMut(&'a str) -> IResult<&'a str, O, E> + 'a,
{
    preceded(multispace0, inner)
}

pub fn wsr<'a, F, O, E>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    E: ParseError<&'a str>,
    F: FnMut(&'a str) -> IResult<&'a str, O, E> + 'a,
{
    terminated(inner, multispace0)
}

////////// DIRECTIVE PARSERS //////////

/// `#` and `include`, each optionally preceded by whitespace.
pub fn hash_include(i: &str) -> IResult<&str, &str> {
    preceded(wsl(tag("#")), wsl(tag("include")))(i)
}

/// Everything between a pair of double quotes. May be empty.
pub fn quoted(i: &str) -> IResult<&str, &str> {
    delimited(tag("\""), take_till(|c| c == '"'), tag("\""))(i)
}

/// Everything between `<` and the first `>`. May be empty.
pub fn bracketed(i: &str) -> IResult<&str, &str> {
    delimited(tag("<"), take_till(|c| c == '>'), tag(">"))(i)
}

pub fn local_include(i: &str) -> IResult<&str, IncludeDirective> {
    let directive = wsr(preceded(hash_include, wsl(quoted)));
    nommap(directive, |target| IncludeDirective {
        kind: IncludeKind::Local,
        target: target.to_owned(),
    })(i)
}

pub fn global_include(i: &str) -> IResult<&str, IncludeDirective> {
    let directive = wsr(preceded(hash_include, wsl(bracketed)));
    nommap(directive, |target| IncludeDirective {
        kind: IncludeKind::Global,
        target: target.to_owned(),
    })(i)
}

pub fn any_include(i: &str) -> IResult<&str, IncludeDirective> {
    alt((local_include, global_include))(i)
}

////////////////////////////

/// Recognises a directive only when it spans the entire line.
/// The local form is tried before the global one.
pub fn include_directive(line: &str) -> Option<IncludeDirective> {
    all_consuming(any_include)(line).ok().map(|(_, directive)| directive)
}

/// Lines that are not valid UTF-8 are never directives.
pub fn directive_of(line: &SourceLine) -> Option<IncludeDirective> {
    std::str::from_utf8(line.text).ok().and_then(include_directive)
}
