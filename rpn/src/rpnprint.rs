use crate::expr::{ExprError, InfixExpr, PostfixExpr};
use exprlex::{PostfixToken, PostfixTokenizer};

impl PostfixExpr {
    /// Rebuild the fully parenthesized infix form of this expression.
    ///
    /// Operands here are maximal digit runs, so multi-digit numbers work
    /// on this path. A lone operand comes back unparenthesized.
    pub fn to_infix(&self) -> Result<InfixExpr, ExprError> {
        if self.as_str().is_empty() {
            return Err(ExprError::EmptyInput);
        }
        let mut operands: Vec<String> = Vec::new();

        for token in PostfixTokenizer::new(self.as_str().chars()) {
            match token {
                PostfixToken::Number(num) => operands.push(num),
                PostfixToken::Op(op) => {
                    // first pop is the right-hand side
                    let rhs = operands.pop().ok_or(ExprError::MissingOperand)?;
                    let lhs = operands.pop().ok_or(ExprError::MissingOperand)?;
                    operands.push(format!("({}{}{})", lhs, op, rhs));
                }
            }
        }
        // residue below the top is silently dropped, same as evaluation
        operands
            .pop()
            .map(InfixExpr::new)
            .ok_or(ExprError::MalformedExpression)
    }
}
