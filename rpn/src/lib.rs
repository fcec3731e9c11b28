pub use crate::expr::ExprError;
pub use crate::expr::InfixExpr;
pub use crate::expr::PostfixExpr;

mod expr;
mod parser;
mod rpneval;
mod rpnprint;

#[cfg(test)]
mod rpnprint_test;
