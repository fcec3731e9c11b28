use crate::expr::{InfixExpr, PostfixExpr};
use exprlex::{is_digit, is_operator, priority};

impl InfixExpr {
    /// Convert to postfix notation with the classic shunting yard loop,
    /// cut down to the four binary operators: no parens, no functions,
    /// single-digit operands.
    ///
    /// The scan is char by char with no tokenizing pass, so a digit run
    /// like "12" emits two operands ("1 2") and anything that is neither
    /// a digit nor an operator (parens and whitespace included) is
    /// silently dropped. Output tokens are space separated, with a
    /// trailing space after the last one.
    pub fn to_postfix(&self) -> PostfixExpr {
        let mut out = String::new();
        let mut stack: Vec<char> = Vec::new();

        for c in self.as_str().chars() {
            if is_digit(c) {
                out.push(c);
                out.push(' ');
            } else if is_operator(c) {
                // popping on equal priority keeps ties left-associative
                while !stack.is_empty() && priority(*stack.last().unwrap()) >= priority(c) {
                    out.push(stack.pop().unwrap());
                    out.push(' ');
                }
                stack.push(c);
            }
        }
        while let Some(op) = stack.pop() {
            out.push(op);
            out.push(' ');
        }
        PostfixExpr::new(out)
    }
}
