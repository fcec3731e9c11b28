use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    // postfix source was empty
    EmptyInput,
    // an operator showed up with fewer than two operands on the stack
    MissingOperand,
    // stack underflow or an empty stack at the end of the scan
    MalformedExpression,
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExprError::EmptyInput => write!(f, "no expression provided"),
            ExprError::MissingOperand => {
                write!(f, "invalid expression, an operator is missing an operand")
            }
            ExprError::MalformedExpression => write!(f, "malformed expression"),
        }
    }
}

/// An expression in infix notation, e.g. "2+3*4".
///
/// Only `to_postfix` applies here; postfix-only operations simply don't
/// exist on this type, so there is no wrong-mode failure to report.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr(String);

/// An expression in postfix (reverse polish) notation, e.g. "2 3 4 * +".
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpr(String);

impl InfixExpr {
    pub fn new(source: impl Into<String>) -> Self {
        InfixExpr(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PostfixExpr {
    pub fn new(source: impl Into<String>) -> Self {
        PostfixExpr(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PostfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
