mod repl {
    use rpn::{InfixExpr, PostfixExpr};

    pub fn print_help() {
        println!("post <expr>   convert infix to postfix, eg: post 2+3*4");
        println!("in <expr>     convert postfix to infix, eg: in 2 3 4 * +");
        println!("eval <expr>   evaluate postfix, eg: eval 2 3 +");
        println!("help          show this message");
        println!("quit          exit");
        println!();
        println!("infix conversion handles single-digit operands only;");
        println!("postfix operands must be space separated, eg: 2 3 + not 23+");
    }

    pub fn run_command(input: &str) {
        let (cmd, expr) = match input.trim().split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input.trim(), ""),
        };
        match cmd {
            "post" => println!("{}", InfixExpr::new(expr).to_postfix()),
            "in" => match PostfixExpr::new(expr).to_infix() {
                Ok(infix) => println!("{}", infix),
                Err(e) => println!("Error: {}", e),
            },
            "eval" => match PostfixExpr::new(expr).eval() {
                Ok(result) => println!("{}", result),
                Err(e) => println!("Error: {}", e),
            },
            "help" | "" => print_help(),
            _ => println!("unknown command '{}', try 'help'", cmd),
        }
    }
}

fn main() {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::run_command(&input[..]);
    } else {
        let histpath = dirs::home_dir().map(|h| h.join(".rpncalc_history"));
        let mut rl = rustyline::Editor::<()>::new();
        if let Some(ref histpath) = histpath {
            let _ = rl.load_history(histpath);
        }
        while let Ok(input) = rl.readline(">> ") {
            if input.trim() == "quit" {
                break;
            }
            rl.add_history_entry(input.as_str());
            repl::run_command(&input[..]);
        }
        if let Some(ref histpath) = histpath {
            let _ = rl.save_history(histpath);
        }
    }
}
