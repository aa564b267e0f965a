use std::fmt;

/// Class body written when the namespace is known.
///
/// The whitespace-only lines are part of the output format.
pub const CLASS_TEMPLATE: &str = "package {package};\n                \npublic class {name} {{\n}}\n                ";

/// Class body written into the default package.
pub const DEFAULT_PACKAGE_CLASS_TEMPLATE: &str = "public class {name} {{\n}}\n                ";

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Component<'a> {
    Constant(&'a str),
    Variable(&'a str),
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum TemplateError {
    #[error("unmatched closing brace at byte {0}")]
    UnmatchedClose(usize),
    #[error("variable opened at byte {0} is never closed")]
    Unclosed(usize),
    #[error("brace inside variable name at byte {0}")]
    BraceInVariable(usize),
    #[error("empty variable name at byte {0}")]
    EmptyVariable(usize),
}

const BRACES: &[char] = &['{', '}'];

#[derive(Debug)]
pub struct Parser<'a> {
    remaining: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Parser<'a> {
    fn advance(&mut self, len: usize) -> &'a str {
        let (taken, remaining) = self.remaining.split_at(len);
        self.remaining = remaining;
        self.pos += len;
        taken
    }

    fn brace(&mut self) -> Result<Component<'a>, TemplateError> {
        if self.remaining.starts_with("{{") || self.remaining.starts_with("}}") {
            let escaped = &self.advance(2)[..1];
            return Ok(Component::Constant(escaped));
        }
        if self.remaining.starts_with('}') {
            return Err(TemplateError::UnmatchedClose(self.pos));
        }

        let name_end = match self.remaining[1..].find(BRACES) {
            Some(end) => end + 1,
            None => return Err(TemplateError::Unclosed(self.pos)),
        };
        if self.remaining[name_end..].starts_with('{') {
            return Err(TemplateError::BraceInVariable(self.pos + name_end));
        }
        if name_end == 1 {
            return Err(TemplateError::EmptyVariable(self.pos));
        }
        let var = &self.advance(name_end + 1)[1..name_end];
        Ok(Component::Variable(var))
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Component<'a>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining.is_empty() {
            return None;
        }

        let component = match self.remaining.find(BRACES) {
            Some(0) => self.brace(),
            Some(end) => Ok(Component::Constant(self.advance(end))),
            None => Ok(Component::Constant(self.advance(self.remaining.len()))),
        };
        self.failed = component.is_err();
        Some(component)
    }
}

pub fn parse<'a>(template: &'a str) -> Parser<'a> {
    Parser {
        remaining: template,
        pos: 0,
        failed: false,
    }
}

pub trait Query {
    fn get(&self, key: &str) -> Option<&str>;
}

impl<T: Query + ?Sized> Query for &T {
    fn get(&self, key: &str) -> Option<&str> {
        (*self).get(key)
    }
}

impl<'a, 'b> Query for [(&'a str, &'b str)] {
    fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(name, _)| *name == key).map(|(_, value)| *value)
    }
}

/// Lazily expanded template.
///
/// Formatting fails if the template is malformed or a variable is missing from
/// the query.
pub struct ExpandTemplate<'a, V> where V: Query {
    template: &'a str,
    vars: V,
}

impl<'a, V> fmt::Display for ExpandTemplate<'a, V> where V: Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for component in parse(self.template) {
            match component.map_err(|_| fmt::Error)? {
                Component::Constant(val) => f.write_str(val)?,
                Component::Variable(var) => f.write_str(self.vars.get(var).ok_or(fmt::Error)?)?,
            }
        }
        Ok(())
    }
}

pub fn expand<V: Query>(template: &str, vars: V) -> ExpandTemplate<'_, V> {
    ExpandTemplate {
        template,
        vars,
    }
}
