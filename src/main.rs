use std::io::Write;
use std::sync::Arc;

use arithmix::db::{queries, seed};
use arithmix::model::groq;
use arithmix::{jokes, CommandResolver, Config, Database, GroqClient};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    dotenvy::dotenv().ok();
    arithmix::init_tracing();

    let mut local_only = false;
    let mut words: Vec<String> = Vec::new();

    for arg in std::env::args().skip(1) {
        if arg == "--help" || arg == "-h" {
            print_help();
            return Ok(());
        }
        if arg == "--local" {
            local_only = true;
            continue;
        }
        if arg.starts_with("--") {
            return Err(format!("unknown argument: {arg}"));
        }
        words.push(arg);
    }

    let config = Config::from_env();
    // Required even when --local never uses it.
    let api_key = config.require_api_key()?;

    let db = Arc::new(open_database(&config).map_err(|error| error.to_string())?);
    if seed::seed_users(&db).map_err(|error| error.to_string())? {
        println!("Database seeded successfully!");
    }

    let remote = if local_only {
        None
    } else {
        Some(GroqClient::new(
            api_key,
            config.model.clone(),
            config.base_url.clone(),
        ))
    };
    let resolver = CommandResolver::new(remote, db.clone());

    if !words.is_empty() {
        let line = words.join(" ");
        dispatch(&resolver, &db, &line).await?;
        return Ok(());
    }
    if let Some(instruction) = config.instruction.clone() {
        dispatch(&resolver, &db, &instruction).await?;
        return Ok(());
    }

    repl(&resolver, &db).await
}

fn open_database(config: &Config) -> Result<Database, arithmix::DbError> {
    if config.in_memory {
        tracing::info!("testing mode: using an in-memory database");
        Database::open_in_memory()
    } else {
        Database::open(&config.db_path)
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

enum Command<'a> {
    Empty,
    Exit,
    History,
    User(&'a str),
    Joke,
    Calculate(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    let lowered = trimmed.to_lowercase();
    match lowered.as_str() {
        "exit" | "quit" => return Command::Exit,
        "history" => return Command::History,
        "joke" => return Command::Joke,
        _ => {}
    }
    if lowered.starts_with("user ") {
        // The prefix is ASCII, so the byte offset is valid in `trimmed` too.
        let email = trimmed[5..].trim();
        if !email.is_empty() {
            return Command::User(email);
        }
    }

    Command::Calculate(trimmed)
}

/// Handle one input line. Returns `false` once the user asked to exit.
async fn dispatch(
    resolver: &CommandResolver,
    db: &Database,
    line: &str,
) -> Result<bool, String> {
    match parse_command(line) {
        Command::Empty => {}
        Command::Exit => {
            println!("Goodbye!");
            return Ok(false);
        }
        Command::History => {
            let rows = queries::list_history(db).map_err(|error| error.to_string())?;
            if rows.is_empty() {
                println!("(no history yet)");
            } else {
                for row in rows {
                    println!("{}. {} -> {}", row.id, row.instruction, row.result);
                }
            }
        }
        Command::User(email) => {
            match queries::get_user_by_email(db, email).map_err(|error| error.to_string())? {
                Some(user) => println!(
                    "{} {} <{}> ({})",
                    user.first_name, user.last_name, user.email, user.username
                ),
                None => println!("No user found with email {email}."),
            }
        }
        Command::Joke => println!("{}", jokes::random_joke()),
        Command::Calculate(instruction) => {
            let resolution = resolver
                .resolve(instruction)
                .await
                .map_err(|error| error.to_string())?;
            println!("Result: {}", resolution.message());
        }
    }
    Ok(true)
}

async fn repl(resolver: &CommandResolver, db: &Database) -> Result<(), String> {
    println!("Now ready for calculations.");
    loop {
        print!("Enter a calculation (e.g., Add 5 and 3) or 'exit' to quit: ");
        std::io::stdout()
            .flush()
            .map_err(|error| error.to_string())?;

        let mut line = String::new();
        let read = std::io::stdin()
            .read_line(&mut line)
            .map_err(|error| error.to_string())?;
        if read == 0 {
            // EOF behaves like `exit`.
            println!("Goodbye!");
            return Ok(());
        }

        if !dispatch(resolver, db, &line).await? {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("Natural-language calculator backed by Groq tool calling");
    println!();
    println!("Usage:");
    println!("  arithmix [options] [instruction...]");
    println!();
    println!("With no instruction, ARITHMIX_INSTRUCTION is used when set; otherwise an");
    println!("interactive loop starts. Besides calculations, the input line understands");
    println!("the literal commands: history, user <email>, joke, exit/quit.");
    println!();
    println!("Options:");
    println!("  --local        Skip the remote model and use the local parser only");
    println!("  -h, --help     Show this help");
    println!();
    println!("Environment:");
    println!("  GROQ_API_KEY          Bearer credential (required; legacy API_KEY also read)");
    println!("  GROQ_MODEL            Model override (default: {})", groq::DEFAULT_MODEL);
    println!("  GROQ_BASE_URL         Endpoint override (default: {})", groq::DEFAULT_BASE_URL);
    println!("  ARITHMIX_DB           SQLite file path (default: arithmix.db)");
    println!("  ARITHMIX_TESTING      Non-empty value switches to an in-memory database");
    println!("  ARITHMIX_INSTRUCTION  One-shot instruction when no argument is given");
    println!("  RUST_LOG              Log filter (default: arithmix=debug,info)");
}
