//! Recursive-descent parser for the UnicodeSet grammar.
//!
//! The parser walks the token stream with an index cursor and builds the
//! [`Node`] tree. `&` and `-` bind with the same precedence as the
//! implicit union and associate left; the evaluator folds the flat child
//! list in order.

use crate::ast::{Node, Operator, PropertyRef, SetNode};
use crate::error::{Error, ErrorKind, Result};
use crate::lexer::{self, Token, TokenKind};

/// Bracket nesting limit; exceeding it reports `DepthExceeded`.
pub const MAX_DEPTH: usize = 64;

/// Parse a pattern into its AST.
///
/// The whole input must be a single bracketed set or property expression;
/// leading or trailing text, including whitespace, is rejected.
pub fn parse(pattern: &str) -> Result<Node> {
    if pattern.starts_with(char::is_whitespace) {
        return Err(Error::new(ErrorKind::UnbalancedBracket, 0));
    }
    if pattern.ends_with(char::is_whitespace) {
        return Err(Error::new(
            ErrorKind::UnbalancedBracket,
            pattern.trim_end().len(),
        ));
    }
    let tokens = lexer::lex(pattern)?;
    Parser {
        tokens: &tokens,
        index: 0,
        end: pattern.len(),
    }
    .parse_root()
}

struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
    /// Pattern byte length, used as the offset of end-of-input errors.
    end: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned()?;
        self.index += 1;
        Some(token)
    }

    fn parse_root(&mut self) -> Result<Node> {
        let Some(first) = self.advance() else {
            return Err(Error::new(ErrorKind::UnbalancedBracket, 0));
        };
        let root = match first.kind {
            TokenKind::LBracket => self.parse_set(first.offset, 1)?,
            TokenKind::PosixOpen { negated } => self.parse_posix_body(negated, first.offset)?,
            TokenKind::BackslashP { negated, body } => {
                self.make_property(&body, negated, first.offset)?
            }
            _ => return Err(Error::new(ErrorKind::UnbalancedBracket, first.offset)),
        };
        match self.peek() {
            Some(extra) => Err(Error::new(ErrorKind::UnbalancedBracket, extra.offset)),
            None => Ok(root),
        }
    }

    /// Parse a set body; the opening bracket has already been consumed.
    fn parse_set(&mut self, open_offset: usize, depth: usize) -> Result<Node> {
        if depth > MAX_DEPTH {
            return Err(Error::new(ErrorKind::DepthExceeded, open_offset));
        }
        let mut children: Vec<Node> = Vec::new();
        let mut negated = false;
        // `last_from_char` tracks whether the newest child is a Literal that
        // came directly from a char token; only those open a range.
        let mut last_from_char = false;
        let mut pending_op: Option<usize> = None;
        if matches!(
            self.peek().map(|token| &token.kind),
            Some(TokenKind::CaretInitial)
        ) {
            self.advance();
            negated = true;
        }
        loop {
            let Some(token) = self.advance() else {
                return Err(Error::new(ErrorKind::UnbalancedBracket, open_offset));
            };
            match token.kind {
                TokenKind::RBracket => break,
                TokenKind::Amp => {
                    self.push_operator(&mut children, Operator::Intersect, token.offset)?;
                    pending_op = Some(token.offset);
                    last_from_char = false;
                }
                TokenKind::Dash => {
                    let next_char = match self.peek().map(|next| &next.kind) {
                        Some(&TokenKind::Char { cp, .. }) => Some(cp),
                        _ => None,
                    };
                    if last_from_char {
                        if let Some(hi) = next_char {
                            self.advance();
                            if let Some(Node::Literal(lo)) = children.pop() {
                                if lo > hi {
                                    return Err(Error::new(ErrorKind::EmptyRange, token.offset));
                                }
                                children.push(Node::Range(lo, hi));
                                last_from_char = false;
                                continue;
                            }
                        }
                    }
                    self.push_operator(&mut children, Operator::Difference, token.offset)?;
                    pending_op = Some(token.offset);
                    last_from_char = false;
                }
                TokenKind::Char { cp, .. } => {
                    self.push_operand(&mut children, Node::Literal(cp), token.offset)?;
                    pending_op = None;
                    last_from_char = true;
                }
                TokenKind::Colon => {
                    self.push_operand(&mut children, Node::Literal(':' as u32), token.offset)?;
                    pending_op = None;
                    last_from_char = true;
                }
                TokenKind::CaretInitial => {
                    // The lexer only emits this directly after `[`, which the
                    // set entry already consumed; treat a stray one as a
                    // member for robustness.
                    self.push_operand(&mut children, Node::Literal('^' as u32), token.offset)?;
                    pending_op = None;
                    last_from_char = true;
                }
                TokenKind::LBracket => {
                    let inner = self.parse_set(token.offset, depth + 1)?;
                    self.push_operand(&mut children, inner, token.offset)?;
                    pending_op = None;
                    last_from_char = false;
                }
                TokenKind::PosixOpen { negated: posix_neg } => {
                    let prop = self.parse_posix_body(posix_neg, token.offset)?;
                    self.push_operand(&mut children, prop, token.offset)?;
                    pending_op = None;
                    last_from_char = false;
                }
                TokenKind::BackslashP { negated: prop_neg, body } => {
                    let prop = self.make_property(&body, prop_neg, token.offset)?;
                    self.push_operand(&mut children, prop, token.offset)?;
                    pending_op = None;
                    last_from_char = false;
                }
                TokenKind::LBrace => {
                    let node = self.parse_string(token.offset)?;
                    self.push_operand(&mut children, node, token.offset)?;
                    pending_op = None;
                    last_from_char = false;
                }
                TokenKind::RBrace => {
                    return Err(Error::new(ErrorKind::UnbalancedBrace, token.offset));
                }
                TokenKind::PosixClose => {
                    return Err(Error::new(ErrorKind::UnbalancedBracket, token.offset));
                }
            }
        }
        if let Some(offset) = pending_op {
            return Err(Error::new(ErrorKind::OperatorNeedsSet, offset));
        }
        Ok(Node::Set(SetNode { children, negated }))
    }

    /// Record an explicit `&`/`-`; its left operand must already be a set.
    fn push_operator(
        &mut self,
        children: &mut Vec<Node>,
        op: Operator,
        offset: usize,
    ) -> Result<()> {
        match children.last() {
            Some(node) if node.is_set_valued() => {
                children.push(Node::Op(op));
                Ok(())
            }
            _ => Err(Error::new(ErrorKind::OperatorNeedsSet, offset)),
        }
    }

    /// Append an operand, inserting the implicit union between adjacent
    /// operands and enforcing the operand restriction after `&`/`-`.
    fn push_operand(&mut self, children: &mut Vec<Node>, node: Node, offset: usize) -> Result<()> {
        match children.last() {
            Some(Node::Op(Operator::Intersect | Operator::Difference)) => {
                if !node.is_set_valued() {
                    return Err(Error::new(ErrorKind::OperatorNeedsSet, offset));
                }
            }
            Some(Node::Op(Operator::Union)) | None => {}
            Some(_) => children.push(Node::Op(Operator::Union)),
        }
        children.push(node);
        Ok(())
    }

    /// Collect a `[: … :]` body; the opening token has been consumed.
    fn parse_posix_body(&mut self, negated: bool, offset: usize) -> Result<Node> {
        let mut body = String::new();
        loop {
            let Some(token) = self.advance() else {
                return Err(Error::new(ErrorKind::UnbalancedBracket, self.end));
            };
            match token.kind {
                TokenKind::PosixClose => break,
                TokenKind::Char { cp, .. } => {
                    let ch = char::from_u32(cp)
                        .ok_or(Error::new(ErrorKind::BadEscape, token.offset))?;
                    body.push(ch);
                }
                TokenKind::Dash => body.push('-'),
                TokenKind::Colon => body.push(':'),
                TokenKind::Amp => body.push('&'),
                _ => return Err(Error::new(ErrorKind::UnbalancedBracket, token.offset)),
            }
        }
        self.make_property(&body, negated, offset)
    }

    fn make_property(&self, body: &str, negated: bool, offset: usize) -> Result<Node> {
        let (name, value) = match body.split_once('=') {
            Some((name, value)) => (Some(name), value),
            None => (None, body),
        };
        if value.trim().is_empty() || name.is_some_and(|n| n.trim().is_empty()) {
            return Err(Error::new(ErrorKind::EmptyPropertyName, offset));
        }
        Ok(Node::PropertyRef(PropertyRef {
            name: name.map(str::to_string),
            value: value.to_string(),
            negated,
            offset,
        }))
    }

    /// Collect a `{…}` string member; the opening brace has been consumed.
    fn parse_string(&mut self, open_offset: usize) -> Result<Node> {
        let mut codepoints = Vec::new();
        loop {
            let Some(token) = self.advance() else {
                return Err(Error::new(ErrorKind::UnbalancedBrace, open_offset));
            };
            match token.kind {
                TokenKind::RBrace => break,
                // Surrogates are ordinary members, in strings too.
                TokenKind::Char { cp, .. } => codepoints.push(cp),
                TokenKind::Dash => codepoints.push('-' as u32),
                TokenKind::Colon => codepoints.push(':' as u32),
                TokenKind::Amp => codepoints.push('&' as u32),
                _ => return Err(Error::new(ErrorKind::UnbalancedBrace, token.offset)),
            }
        }
        if codepoints.is_empty() {
            return Err(Error::new(ErrorKind::UnbalancedBrace, open_offset));
        }
        Ok(Node::string(codepoints))
    }
}
