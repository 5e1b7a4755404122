//! Command-line front end for the tasklite core.
//!
//! # Responsibility
//! - Act as a stand-in view: forward argv commands to the store and print
//!   derived state.
//! - Keep output deterministic and line-oriented.

use std::path::PathBuf;
use std::process::ExitCode;

use tasklite_core::{
    core_version, default_log_level, init_logging, Filter, SqliteStorage, TaskId, TaskListStore,
};

const DB_FILE_NAME: &str = "tasklite.sqlite3";
const LOG_DIR_NAME: &str = "logs";

const USAGE: &str = "\
usage: tasklite <data-dir> <command> [args]
       tasklite version

commands:
  add <text>...              add a task
  list [all|active|completed] show tasks under a filter (default: all)
  toggle <id>                flip completion for one task
  rm <id>                    remove one task
  clear                      remove all completed tasks";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    match args.first().map(String::as_str) {
        None | Some("help") | Some("--help") => {
            println!("{USAGE}");
            Ok(())
        }
        Some("version") => {
            println!("tasklite {}", core_version());
            Ok(())
        }
        Some(data_dir) => {
            let command = args
                .get(1)
                .ok_or_else(|| format!("missing command\n{USAGE}"))?;
            let mut store = open_store(data_dir)?;
            dispatch(&mut store, command, &args[2..])
        }
    }
}

fn open_store(data_dir: &str) -> Result<TaskListStore<SqliteStorage>, String> {
    let root = PathBuf::from(data_dir);
    std::fs::create_dir_all(&root)
        .map_err(|err| format!("cannot create data dir `{data_dir}`: {err}"))?;
    let root = root
        .canonicalize()
        .map_err(|err| format!("cannot resolve data dir `{data_dir}`: {err}"))?;

    // Logging is best-effort for the CLI; commands work without it.
    if let Some(log_dir) = root.join(LOG_DIR_NAME).to_str() {
        if let Err(message) = init_logging(default_log_level(), log_dir) {
            eprintln!("warning: logging disabled: {message}");
        }
    }

    let storage = SqliteStorage::open(root.join(DB_FILE_NAME))
        .map_err(|err| format!("cannot open task database: {err}"))?;
    Ok(TaskListStore::open(storage))
}

fn dispatch(
    store: &mut TaskListStore<SqliteStorage>,
    command: &str,
    rest: &[String],
) -> Result<(), String> {
    match command {
        "add" => {
            let text = rest.join(" ");
            match store.create(&text) {
                Some(id) => println!("added {id}"),
                None => println!("ignored blank task"),
            }
            Ok(())
        }
        "list" => {
            let filter = match rest.first() {
                Some(label) => Filter::parse(label)
                    .ok_or_else(|| format!("unknown filter `{label}`; expected all|active|completed"))?,
                None => Filter::All,
            };
            store.set_filter(filter);
            print_snapshot(store);
            Ok(())
        }
        "toggle" => {
            let id = parse_id(rest)?;
            if store.toggle(id) {
                println!("toggled {id}");
            } else {
                println!("no task {id}");
            }
            Ok(())
        }
        "rm" => {
            let id = parse_id(rest)?;
            if store.remove(id) {
                println!("removed {id}");
            } else {
                println!("no task {id}");
            }
            Ok(())
        }
        "clear" => {
            let removed = store.clear_completed();
            println!("cleared {removed} completed task(s)");
            Ok(())
        }
        other => Err(format!("unknown command `{other}`\n{USAGE}")),
    }
}

fn parse_id(rest: &[String]) -> Result<TaskId, String> {
    let raw = rest.first().ok_or_else(|| "missing task id".to_string())?;
    TaskId::parse_str(raw).map_err(|_| format!("malformed task id `{raw}`"))
}

fn print_snapshot(store: &TaskListStore<SqliteStorage>) {
    let snapshot = store.snapshot();
    for task in &snapshot.visible {
        let mark = if task.completed { "x" } else { " " };
        println!("[{mark}] {}  {}", task.id, task.text);
    }
    println!(
        "{} of {} left to do, showing {} ({})",
        snapshot.incomplete_count,
        snapshot.total,
        snapshot.visible.len(),
        snapshot.filter.as_str()
    );
}
