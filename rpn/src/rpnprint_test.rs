use crate::expr::{ExprError, PostfixExpr};

#[test]
fn simple_pair() {
    let infix = PostfixExpr::new("2 3 +").to_infix().unwrap();
    assert_eq!(infix.as_str(), "(2+3)");
}

#[test]
fn nested_grouping() {
    let infix = PostfixExpr::new("2 3 4 * +").to_infix().unwrap();
    assert_eq!(infix.as_str(), "(2+(3*4))");

    let infix = PostfixExpr::new("2 3 - 4 5 * +").to_infix().unwrap();
    assert_eq!(infix.as_str(), "((2-3)+(4*5))");
}

#[test]
fn multidigit_operands() {
    let infix = PostfixExpr::new("12 3 +").to_infix().unwrap();
    assert_eq!(infix.as_str(), "(12+3)");
}

#[test]
fn lone_operand_is_unparenthesized() {
    let infix = PostfixExpr::new("42").to_infix().unwrap();
    assert_eq!(infix.as_str(), "42");
}

#[test]
fn empty_source() {
    assert_eq!(
        PostfixExpr::new("").to_infix(),
        Err(ExprError::EmptyInput)
    );
}

#[test]
fn missing_operand() {
    assert_eq!(
        PostfixExpr::new("2 +").to_infix(),
        Err(ExprError::MissingOperand)
    );
    assert_eq!(
        PostfixExpr::new("+").to_infix(),
        Err(ExprError::MissingOperand)
    );
}

// non-empty source that tokenizes to nothing has no result to return
#[test]
fn blank_source() {
    assert_eq!(
        PostfixExpr::new("   ").to_infix(),
        Err(ExprError::MalformedExpression)
    );
}

#[test]
fn residue_below_top_is_dropped() {
    let infix = PostfixExpr::new("2 3 4 +").to_infix().unwrap();
    assert_eq!(infix.as_str(), "(3+4)");
}
