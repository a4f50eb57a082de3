use bincalc::{evaluate_line, is_quit_command, Config};
use log::{debug, error, info};
use rustyline::{error::ReadlineError, DefaultEditor};

type DynResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> DynResult {
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        debug!("dotenvy load with error {}", e);
    }

    let config = Config::from_env()?;
    debug!("{:?}", config);

    let args = std::env::args().collect::<Vec<String>>();
    match args.get(1).map(String::as_str) {
        None | Some("-i") => repl(&config),
        Some("-f") => read_from_file(required_arg(&args, "file name")?, &config),
        Some("-e") => {
            run_line(required_arg(&args, "expression")?, &config);
            Ok(())
        }
        Some(mode) => {
            Err(format!("unknown mode `{}`, expected -i, -f <file> or -e <expr>", mode).into())
        }
    }
}

fn required_arg<'a>(args: &'a [String], what: &str) -> Result<&'a str, String> {
    args.get(2)
        .map(String::as_str)
        .ok_or_else(|| format!("must provide {}", what))
}

fn repl(config: &Config) -> DynResult {
    info!("Running in REPL mode");
    println!("Binary calculator. Separate expressions with `;`, enter q to quit.");

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if is_quit_command(&line) {
                    break;
                }
                rl.add_history_entry(&line)?;
                run_line(&line, config);
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}

fn read_from_file(file_path: &str, config: &Config) -> DynResult {
    info!("Read from file {}", file_path);
    let contents = std::fs::read_to_string(file_path)?;

    for line in contents.lines() {
        if is_quit_command(line) {
            break;
        }
        run_line(line, config);
    }

    Ok(())
}

fn run_line(line: &str, config: &Config) {
    for outcome in evaluate_line(line, config) {
        if let Err(err) = &outcome.result {
            error!("`{}` failed: {:?}", outcome.expression, err);
        }
        println!("{}", outcome);
    }
}
