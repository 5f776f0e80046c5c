use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use kardex::api::{CmdMessage, KardexApi, MessageLevel, RecordUpdate};
use kardex::config::KardexConfig;
use kardex::error::{KardexError, Result};
use kardex::model::Record;
use kardex::store::fs::FileBackend;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: KardexApi<FileBackend>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            id,
            name,
            condition,
        }) => handle_add(&mut ctx, id, name, condition),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Update {
            id,
            name,
            condition,
            new_id,
        }) => handle_update(&mut ctx, RecordUpdate::new(id, new_id, name, condition)),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        None => menu_loop(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_path = resolve_data_path(cli);
    let api = KardexApi::open(FileBackend::new(data_path))?;
    Ok(AppContext { api })
}

/// `--file` beats `KARDEX_HOME` beats the platform data directory; inside a
/// data directory the filename comes from config.json.
fn resolve_data_path(cli: &Cli) -> PathBuf {
    if let Some(file) = &cli.file {
        return file.clone();
    }

    let data_dir = match std::env::var_os("KARDEX_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let proj_dirs =
                ProjectDirs::from("com", "kardex", "kardex").expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = KardexConfig::load(&data_dir).unwrap_or_default();
    data_dir.join(config.data_file)
}

fn handle_add(ctx: &mut AppContext, id: String, name: String, condition: String) -> Result<()> {
    let result = ctx.api.add_record(id, name, condition)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_records()?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, update: RecordUpdate) -> Result<()> {
    let result = ctx.api.update_record(&update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_record(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn menu_loop(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("Menu:");
        println!("1. Add Record");
        println!("2. View Records");
        println!("3. Update Record");
        println!("4. Delete Record");
        println!("5. Exit");

        let line = match prompt(&mut input, "Choose an option: ")? {
            Some(line) => line,
            None => return Ok(()), // end of input ends the session
        };

        let choice: i32 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Invalid input. Returning to menu.");
                continue;
            }
        };

        let outcome = match choice {
            1 => menu_add(ctx, &mut input),
            2 => handle_list(ctx),
            3 => menu_update(ctx, &mut input),
            4 => menu_delete(ctx, &mut input),
            5 => {
                println!("Exiting...");
                return Ok(());
            }
            _ => {
                println!("Invalid option. Try again.");
                continue;
            }
        };

        match outcome {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                print_messages(&[CmdMessage::error(e.to_string())]);
            }
            Err(e) => return Err(e),
        }
    }
}

fn menu_add<R: BufRead>(ctx: &mut AppContext, input: &mut R) -> Result<()> {
    let Some(id) = prompt(input, "Enter ID: ")? else {
        return Ok(());
    };
    let Some(name) = prompt(input, "Enter Name: ")? else {
        return Ok(());
    };
    let Some(condition) = prompt(input, "Enter Condition: ")? else {
        return Ok(());
    };

    handle_add(ctx, id, name, condition)
}

fn menu_update<R: BufRead>(ctx: &mut AppContext, input: &mut R) -> Result<()> {
    let Some(id) = prompt(input, "Enter ID of the record to update: ")? else {
        return Ok(());
    };
    let Some(new_id) = prompt(input, "Enter new ID (blank to keep): ")? else {
        return Ok(());
    };
    let Some(name) = prompt(input, "Enter new Name: ")? else {
        return Ok(());
    };
    let Some(condition) = prompt(input, "Enter new Condition: ")? else {
        return Ok(());
    };

    let new_id = if new_id.is_empty() { None } else { Some(new_id) };
    handle_update(ctx, RecordUpdate::new(id, new_id, name, condition))
}

fn menu_delete<R: BufRead>(ctx: &mut AppContext, input: &mut R) -> Result<()> {
    let Some(id) = prompt(input, "Enter ID of the record to delete: ")? else {
        return Ok(());
    };

    handle_delete(ctx, &id)
}

/// Print a label, flush, and read one line. `None` means end of input.
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush().map_err(KardexError::Io)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(KardexError::Io)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }

    for record in records {
        println!(
            "ID: {}, Name: {}, Condition: {}",
            record.id, record.name, record.condition
        );
    }
}
