#![deny(warnings)]

use std::iter::Peekable;

// Single-lookahead char scanner. The postfix grammar is regular enough
// (digit runs and single-char operators) that one char of lookahead is
// all the tokenizer needs.
pub struct Scanner<I: Iterator<Item = char>> {
    src: Peekable<I>,
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(source: I) -> Scanner<I> {
        Scanner {
            src: source.peekable(),
        }
    }

    pub fn peek(&mut self) -> Option<char> {
        self.src.peek().copied()
    }

    // Advance only if the next char satisfies `pred`
    pub fn accept_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.src.peek() {
            Some(&c) if pred(c) => self.src.next(),
            _ => None,
        }
    }

    // Collect the maximal run of chars satisfying `pred`
    pub fn scan_while(&mut self, pred: impl Fn(char) -> bool) -> Option<String> {
        let mut lexeme = String::new();
        while let Some(c) = self.accept_if(&pred) {
            lexeme.push(c);
        }
        if lexeme.is_empty() {
            None
        } else {
            Some(lexeme)
        }
    }

    // Unconditionally consume one char
    pub fn skip(&mut self) -> Option<char> {
        self.src.next()
    }
}
