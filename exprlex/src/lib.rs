mod classify;
mod postfix_tokenizer;
mod scanner;

pub use classify::{is_digit, is_operator, priority};
pub use postfix_tokenizer::{PostfixToken, PostfixTokenizer};
pub use scanner::Scanner;
