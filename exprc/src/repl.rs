use std::io::Write;
use std::path::PathBuf;

const PROMPT: &str = ">> ";

/// One pipeline run per line; static and runtime errors are reported and
/// forgotten, so a bad line never poisons the next one. Ends on `.exit`
/// or end-of-input, always successfully.
pub fn start() -> std::io::Result<()> {
    let stdin = std::io::stdin();

    loop {
        let mut input = String::from("");

        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        if stdin.read_line(&mut input)? == 0 {
            return Ok(());
        }

        if let Some('\n') = input.chars().next_back() {
            input.pop();
        }
        if let Some('\r') = input.chars().next_back() {
            input.pop();
        }

        match input.as_str() {
            "" => {},
            ".exit" => return Ok(()),
            _ => {
                match expr_core::run(PathBuf::from("<repl>"), &input) {
                    Ok(value) => println!("{value}"),
                    Err(err) => {
                        for report in err.reports() {
                            println!("{report}");
                        }
                    }
                }
            }
        }
    }
}
