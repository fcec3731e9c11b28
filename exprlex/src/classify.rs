#![deny(warnings)]

// Operator priority. 0 means `c` is not an operator at all and must never
// reach the operator stack; callers gate on is_operator first.
pub fn priority(c: char) -> u8 {
    match c {
        '+' | '-' => 1,
        '*' | '/' => 2,
        _ => 0,
    }
}

pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
