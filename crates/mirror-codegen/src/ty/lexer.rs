use crate::Error;

use std::collections::VecDeque;
use syn::ext::IdentExt;
use syn::parse::Parser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Token {
    Ident(String),
    PathSep,
    Lt,
    Gt,
    Comma,
    Question,
}

pub(super) struct Lexer<'a> {
    /// Full type text, kept for error messages
    text: &'a str,

    /// Remaining input
    src: &'a str,

    next: VecDeque<Token>,
}

impl<'a> Lexer<'a> {
    pub(super) fn new(text: &'a str) -> Lexer<'a> {
        Lexer {
            text,
            src: text,
            next: VecDeque::new(),
        }
    }

    pub(super) fn next(&mut self) -> Result<Option<Token>, Error> {
        self.lex_n(1)?;
        Ok(self.next.pop_front())
    }

    pub(super) fn peek(&mut self) -> Result<Option<&Token>, Error> {
        self.lex_n(1)?;
        Ok(self.next.front())
    }

    fn lex_n(&mut self, n: usize) -> Result<(), Error> {
        while self.next.len() < n {
            self.skip_whitespace();

            let Some(ch) = self.try_next_char() else {
                return Ok(());
            };

            let token = match ch {
                ',' => Token::Comma,
                '<' => Token::Lt,
                '>' => Token::Gt,
                '?' => Token::Question,
                ':' if self.peek_char() == Some(':') => {
                    self.consume(1);
                    Token::PathSep
                }
                ch if ch == '_' || ch.is_alphabetic() => {
                    let mut ident = String::new();
                    ident.push(ch);

                    while let Some(ch) = self.take_if(ident_ch) {
                        ident.push(ch);
                    }

                    if !is_valid_ident(&ident) {
                        return Err(Error::unparsable_type(
                            self.text.trim(),
                            format!("invalid identifier `{ident}`"),
                        ));
                    }

                    Token::Ident(ident)
                }
                ch => {
                    return Err(Error::unparsable_type(
                        self.text.trim(),
                        format!("unexpected character `{ch}`"),
                    ))
                }
            };

            self.next.push_back(token);
        }

        Ok(())
    }

    fn try_next_char(&mut self) -> Option<char> {
        let ch = self.src.chars().next()?;
        self.consume(ch.len_utf8());
        Some(ch)
    }

    fn peek_char(&self) -> Option<char> {
        self.peek_char_n(0)
    }

    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.src.chars().nth(n)
    }

    fn take_if<P>(&mut self, predicate: P) -> Option<char>
    where
        P: FnOnce(char) -> bool,
    {
        match self.peek_char() {
            Some(ch) if predicate(ch) => {
                self.consume(ch.len_utf8());
                Some(ch)
            }
            _ => None,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                '/' if self.peek_char_n(1) == Some('*') => {
                    self.consume(2);
                    self.skip_block_comment();
                }
                '/' if self.peek_char_n(1) == Some('/') => {
                    self.skip_line_comment();
                }
                ch if ch.is_whitespace() => {
                    self.consume(ch.len_utf8());
                }
                _ => return,
            }
        }
    }

    fn skip_block_comment(&mut self) {
        while let Some(ch) = self.try_next_char() {
            if ch == '*' && self.peek_char() == Some('/') {
                self.consume(1);
                return;
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.try_next_char() {
            if ch == '\n' {
                return;
            }
        }
    }

    fn consume(&mut self, amount: usize) {
        self.src = &self.src[amount..];
    }
}

fn ident_ch(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Alphanumeric runs are checked against Rust's identifier rules, which are
/// narrower than `char::is_alphanumeric`. Keywords are accepted so that
/// paths such as `crate::pets::Dog` lex.
fn is_valid_ident(ident: &str) -> bool {
    syn::Ident::parse_any.parse_str(ident).is_ok()
}
