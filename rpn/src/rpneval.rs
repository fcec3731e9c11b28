use crate::expr::{ExprError, PostfixExpr};
use exprlex::{PostfixToken, PostfixTokenizer};

impl PostfixExpr {
    /// Evaluate this expression on a numeric stack.
    ///
    /// Pop order matters: the first pop is the right-hand operand.
    /// Division is plain f64 division, so dividing by zero yields
    /// infinity or NaN rather than an error. If more than one value is
    /// left at the end only the top is returned.
    pub fn eval(&self) -> Result<f64, ExprError> {
        let mut operands: Vec<f64> = Vec::new();

        for token in PostfixTokenizer::new(self.as_str().chars()) {
            match token {
                PostfixToken::Number(num) => {
                    let val = num
                        .parse::<f64>()
                        .map_err(|_| ExprError::MalformedExpression)?;
                    operands.push(val);
                }
                PostfixToken::Op(op) => {
                    let r = operands.pop().ok_or(ExprError::MalformedExpression)?;
                    let l = operands.pop().ok_or(ExprError::MalformedExpression)?;
                    match op {
                        '+' => operands.push(l + r),
                        '-' => operands.push(l - r),
                        '*' => operands.push(l * r),
                        '/' => operands.push(l / r),
                        // the tokenizer only yields the four operators
                        _ => unreachable!(),
                    }
                }
            }
        }
        operands.pop().ok_or(ExprError::MalformedExpression)
    }
}
