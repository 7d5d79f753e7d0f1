use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::prefs::{self, Prefs};
use crate::io::snapshot;
use crate::model::state::{parse_filter, parse_sort};
use crate::ops::view::visible_tasks;
use crate::store::TaskStore;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let data_dir = match cli.data_dir {
        Some(ref dir) => PathBuf::from(dir),
        None => snapshot::data_dir(),
    };

    match cli.command {
        // Write commands
        Commands::Add(args) => cmd_add(&data_dir, args, json),
        Commands::Edit(args) => cmd_edit(&data_dir, args, json),
        Commands::Rm(args) => cmd_rm(&data_dir, args),
        Commands::Toggle(args) => cmd_toggle(&data_dir, args, json),

        // Read commands
        Commands::List(args) => cmd_list(&data_dir, args, json),
        Commands::Show(args) => cmd_show(&data_dir, args, json),

        // View selection and preferences
        Commands::Filter(args) => cmd_filter(&data_dir, args, json),
        Commands::Sort(args) => cmd_sort(&data_dir, args, json),
        Commands::Theme(args) => cmd_theme(args, json),
    }
}

/// The store itself treats unknown ids as silent no-ops; the CLI checks
/// first so the user gets feedback about a stale id.
fn require_task(store: &TaskStore, id: i64) -> Result<(), String> {
    if store.get(id).is_none() {
        return Err(format!("no task with id {}", id));
    }
    Ok(())
}

fn print_task(store: &TaskStore, id: i64, json: bool, verb: &str) -> CmdResult {
    if let Some(task) = store.get(id) {
        if json {
            println!("{}", serde_json::to_string_pretty(&task_to_json(task))?);
        } else {
            println!("{} {}", verb, format_task_line(task));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(data_dir: &Path, args: AddArgs, json: bool) -> CmdResult {
    let mut store = TaskStore::load(data_dir);
    let task = store.add(args.title, args.description);
    print_task(&store, task.id, json, "added")
}

fn cmd_edit(data_dir: &Path, args: EditArgs, json: bool) -> CmdResult {
    let mut store = TaskStore::load(data_dir);
    require_task(&store, args.id)?;
    store.edit(args.id, args.title, args.description);
    print_task(&store, args.id, json, "edited")
}

fn cmd_rm(data_dir: &Path, args: RmArgs) -> CmdResult {
    let mut store = TaskStore::load(data_dir);
    require_task(&store, args.id)?;
    store.remove(args.id);
    println!("removed {}", args.id);
    Ok(())
}

fn cmd_toggle(data_dir: &Path, args: ToggleArgs, json: bool) -> CmdResult {
    let mut store = TaskStore::load(data_dir);
    require_task(&store, args.id)?;
    store.toggle_completed(args.id);
    print_task(&store, args.id, json, "toggled")
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(data_dir: &Path, args: ListArgs, json: bool) -> CmdResult {
    let store = TaskStore::load(data_dir);
    let view = visible_tasks(store.tasks(), store.filter(), store.sort_by(), &args.search);

    if json {
        let out = ListJson {
            filter: store.filter(),
            sort_by: store.sort_by(),
            tasks: view.iter().map(|t| task_to_json(t)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if view.is_empty() {
        println!("nothing to show");
        return Ok(());
    }
    for task in view {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

fn cmd_show(data_dir: &Path, args: ShowArgs, json: bool) -> CmdResult {
    let store = TaskStore::load(data_dir);
    require_task(&store, args.id)?;
    if json {
        return print_task(&store, args.id, true, "");
    }
    if let Some(task) = store.get(args.id) {
        for line in format_task_detail(task) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// View selection and preferences
// ---------------------------------------------------------------------------

fn cmd_filter(data_dir: &Path, args: FilterArgs, json: bool) -> CmdResult {
    let mut store = TaskStore::load(data_dir);
    if let Some(value) = args.value {
        store.set_filter(parse_filter(&value)?);
    }
    if json {
        let out = FilterJson {
            filter: store.filter(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("filter: {}", store.filter());
    }
    Ok(())
}

fn cmd_sort(data_dir: &Path, args: SortArgs, json: bool) -> CmdResult {
    let mut store = TaskStore::load(data_dir);
    if let Some(value) = args.value {
        store.set_sort(parse_sort(&value)?);
    }
    if json {
        let out = SortJson {
            sort_by: store.sort_by(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("sort: {}", store.sort_by());
    }
    Ok(())
}

fn cmd_theme(args: ThemeArgs, json: bool) -> CmdResult {
    let mut prefs = prefs::read_prefs();
    if args.toggle {
        prefs = Prefs {
            theme: prefs.theme.toggled(),
        };
        prefs::write_prefs(&prefs)?;
    }
    if json {
        let out = ThemeJson { theme: prefs.theme };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("theme: {}", prefs.theme);
    }
    Ok(())
}
