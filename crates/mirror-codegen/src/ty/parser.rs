use super::{Lexer, Primitive, Token, TypeExpr, TypePath};
use crate::Error;

/// Recursive-descent parser for declared field types:
///
/// ```text
/// type     := base '?'?
/// base     := path generics?
/// path     := '::'? ident ('::' ident)*
/// generics := '<' type (',' type)* '>'
/// ```
pub(super) struct Parser<'a> {
    text: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub(super) fn new(text: &'a str) -> Parser<'a> {
        Parser {
            text,
            lexer: Lexer::new(text),
        }
    }

    pub(super) fn parse(mut self) -> Result<TypeExpr, Error> {
        if self.lexer.peek()?.is_none() {
            return Err(self.error("expected a type, found nothing"));
        }

        let ty = self.parse_type()?;

        match self.lexer.next()? {
            None => Ok(ty),
            Some(token) => Err(self.error(format!("unexpected {} after type", describe(&token)))),
        }
    }

    fn parse_type(&mut self) -> Result<TypeExpr, Error> {
        let base = self.parse_base()?;

        if !self.eat(&Token::Question)? {
            return Ok(base);
        }

        if matches!(base, TypeExpr::Optional(_)) || self.is_next(&Token::Question)? {
            return Err(self.error("an optional type cannot be optional again"));
        }

        Ok(TypeExpr::Optional(Box::new(base)))
    }

    fn parse_base(&mut self) -> Result<TypeExpr, Error> {
        let path = self.parse_path()?;

        if self.eat(&Token::Lt)? {
            let mut args = vec![self.parse_type()?];

            while self.eat(&Token::Comma)? {
                args.push(self.parse_type()?);
            }

            self.expect(&Token::Gt)?;
            return self.generic(path, args);
        }

        if is_wrapper(path.name()) {
            return Err(self.error(format!("`{}` requires type arguments", path.name())));
        }

        Ok(match Primitive::from_path(&path) {
            Some(primitive) => TypeExpr::Primitive(primitive),
            None => TypeExpr::Reference(path),
        })
    }

    fn parse_path(&mut self) -> Result<TypePath, Error> {
        let leading_colon = self.eat(&Token::PathSep)?;
        let mut segments = vec![self.parse_ident()?];

        while self.eat(&Token::PathSep)? {
            segments.push(self.parse_ident()?);
        }

        Ok(TypePath {
            leading_colon,
            segments,
        })
    }

    fn parse_ident(&mut self) -> Result<String, Error> {
        match self.lexer.next()? {
            Some(Token::Ident(ident)) => Ok(ident),
            Some(token) => Err(self.error(format!("expected a type name, found {}", describe(&token)))),
            None => Err(self.error("expected a type name, found end of input")),
        }
    }

    /// Interprets a generic base by the name of its last path segment.
    fn generic(&self, path: TypePath, mut args: Vec<TypeExpr>) -> Result<TypeExpr, Error> {
        let name = path.name();

        if name == "Map" {
            if args.len() != 2 {
                return Err(Error::malformed_map_type(self.text.trim(), args.len()));
            }

            let value = args.pop().map(Box::new);
            let key = args.pop().map(Box::new);

            return match (key, value) {
                (Some(key), Some(value)) => Ok(TypeExpr::Map(key, value)),
                _ => Err(Error::malformed_map_type(self.text.trim(), 0)),
            };
        }

        if !is_wrapper(name) {
            return Err(self.error(format!("unsupported generic type `{path}`")));
        }

        if args.len() != 1 {
            return Err(self.error(format!(
                "`{name}` takes one type argument, found {}",
                args.len()
            )));
        }

        let inner = Box::new(args.remove(0));

        Ok(match name {
            "List" => TypeExpr::List(inner),
            "MutableSet" => TypeExpr::Set(inner),
            _ => {
                if matches!(*inner, TypeExpr::Optional(_)) {
                    return Err(self.error("an optional type cannot be optional again"));
                }

                TypeExpr::Optional(inner)
            }
        })
    }

    fn is_next(&mut self, token: &Token) -> Result<bool, Error> {
        Ok(self.lexer.peek()? == Some(token))
    }

    fn eat(&mut self, token: &Token) -> Result<bool, Error> {
        if self.is_next(token)? {
            self.lexer.next()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, token: &Token) -> Result<(), Error> {
        match self.lexer.next()? {
            Some(actual) if actual == *token => Ok(()),
            Some(actual) => Err(self.error(format!(
                "expected {}, found {}",
                describe(token),
                describe(&actual)
            ))),
            None => Err(self.error(format!(
                "expected {}, found end of input",
                describe(token)
            ))),
        }
    }

    fn error(&self, reason: impl Into<String>) -> Error {
        Error::unparsable_type(self.text.trim(), reason)
    }
}

/// Generic wrappers with their own shape. `Map` is handled separately since
/// its arity errors are reported differently.
fn is_wrapper(name: &str) -> bool {
    matches!(name, "List" | "MutableSet" | "Option" | "Map")
}

fn describe(token: &Token) -> String {
    match token {
        Token::Ident(ident) => format!("`{ident}`"),
        Token::PathSep => "`::`".to_string(),
        Token::Lt => "`<`".to_string(),
        Token::Gt => "`>`".to_string(),
        Token::Comma => "`,`".to_string(),
        Token::Question => "`?`".to_string(),
    }
}
