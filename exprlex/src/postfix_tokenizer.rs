#![deny(warnings)]

use crate::classify::{is_digit, is_operator};
use crate::scanner::Scanner;

#[derive(Clone, PartialEq, Debug)]
pub enum PostfixToken {
    // a maximal run of digit chars, kept as text so the printer can
    // reuse it verbatim
    Number(String),
    Op(char),
}

pub struct PostfixTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item = char>> PostfixTokenizer<I> {
    pub fn new(source: I) -> Self {
        PostfixTokenizer {
            src: Scanner::new(source),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for PostfixTokenizer<I> {
    type Item = PostfixToken;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(num) = self.src.scan_while(is_digit) {
                return Some(PostfixToken::Number(num));
            }
            if let Some(op) = self.src.accept_if(is_operator) {
                return Some(PostfixToken::Op(op));
            }
            // whitespace or anything else the grammar doesn't know about
            // is skipped, same as the infix conversion loop
            self.src.skip()?;
        }
    }
}
