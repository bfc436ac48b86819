use super::escape;
use super::{Token, TokenKind};
use crate::error::{Error, ErrorKind, Result};

/// Byte-offset scanner over the pattern text.
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        let ch = self.peek()?;
        let offset = self.pos;
        self.pos += ch.len_utf8();
        Some((offset, ch))
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }
}

/// Lex an entire pattern.
pub(super) fn run(pattern: &str) -> Result<Vec<Token>> {
    let mut scanner = Scanner::new(pattern);
    let mut tokens = Vec::new();
    while let Some(ch) = scanner.peek() {
        let offset = scanner.pos;
        match ch {
            c if c.is_whitespace() => {
                scanner.bump();
            }
            '[' => {
                scanner.bump();
                if scanner.eat(':') {
                    let negated = scanner.eat('^');
                    tokens.push(Token::new(TokenKind::PosixOpen { negated }, offset));
                } else {
                    tokens.push(Token::new(TokenKind::LBracket, offset));
                }
            }
            ']' => {
                scanner.bump();
                tokens.push(Token::new(TokenKind::RBracket, offset));
            }
            '{' => {
                scanner.bump();
                tokens.push(Token::new(TokenKind::LBrace, offset));
            }
            '}' => {
                scanner.bump();
                tokens.push(Token::new(TokenKind::RBrace, offset));
            }
            '-' => {
                scanner.bump();
                tokens.push(Token::new(TokenKind::Dash, offset));
            }
            '&' => {
                scanner.bump();
                tokens.push(Token::new(TokenKind::Amp, offset));
            }
            ':' => {
                scanner.bump();
                if scanner.eat(']') {
                    tokens.push(Token::new(TokenKind::PosixClose, offset));
                } else {
                    tokens.push(Token::new(TokenKind::Colon, offset));
                }
            }
            '^' => {
                scanner.bump();
                // `^` negates only as the first token of a bracketed set;
                // elsewhere it is an ordinary member.
                if matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::LBracket)) {
                    tokens.push(Token::new(TokenKind::CaretInitial, offset));
                } else {
                    tokens.push(Token::new(
                        TokenKind::Char {
                            cp: '^' as u32,
                            literal: false,
                        },
                        offset,
                    ));
                }
            }
            '\'' => quote_run(&mut scanner, &mut tokens)?,
            '\\' => backslash(&mut scanner, &mut tokens, pattern)?,
            other => {
                scanner.bump();
                tokens.push(Token::new(
                    TokenKind::Char {
                        cp: other as u32,
                        literal: false,
                    },
                    offset,
                ));
            }
        }
    }
    Ok(tokens)
}

/// Consume a single-quoted literal run. `''` is an escaped quote, both as a
/// standalone pair and inside a run.
fn quote_run(scanner: &mut Scanner<'_>, tokens: &mut Vec<Token>) -> Result<()> {
    let open = scanner.pos;
    scanner.bump();
    if scanner.eat('\'') {
        tokens.push(Token::new(
            TokenKind::Char {
                cp: '\'' as u32,
                literal: true,
            },
            open,
        ));
        return Ok(());
    }
    loop {
        match scanner.bump() {
            None => return Err(Error::new(ErrorKind::UnterminatedQuote, open)),
            Some((offset, '\'')) => {
                if scanner.eat('\'') {
                    tokens.push(Token::new(
                        TokenKind::Char {
                            cp: '\'' as u32,
                            literal: true,
                        },
                        offset,
                    ));
                } else {
                    return Ok(());
                }
            }
            Some((offset, ch)) => tokens.push(Token::new(
                TokenKind::Char {
                    cp: ch as u32,
                    literal: true,
                },
                offset,
            )),
        }
    }
}

/// Dispatch a backslash: `\p{…}`/`\P{…}` become property tokens, everything
/// else decodes to a literal char token.
fn backslash(scanner: &mut Scanner<'_>, tokens: &mut Vec<Token>, pattern: &str) -> Result<()> {
    let start = scanner.pos;
    match scanner.peek_second() {
        Some(marker @ ('p' | 'P')) => {
            scanner.bump();
            scanner.bump();
            let brace = scanner.pos;
            if !scanner.eat('{') {
                return Err(Error::new(ErrorKind::BadEscape, start));
            }
            let Some(len) = pattern[scanner.pos..].find('}') else {
                return Err(Error::new(ErrorKind::UnbalancedBrace, brace));
            };
            let body = pattern[scanner.pos..scanner.pos + len].to_string();
            scanner.pos += len + 1;
            tokens.push(Token::new(
                TokenKind::BackslashP {
                    negated: marker == 'P',
                    body,
                },
                start,
            ));
            Ok(())
        }
        _ => {
            let (cp, consumed) = escape::decode_escape(pattern, start)?;
            scanner.pos = start + consumed;
            tokens.push(Token::new(TokenKind::Char { cp, literal: true }, start));
            Ok(())
        }
    }
}
