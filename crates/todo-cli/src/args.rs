//! Command-line argument definitions using clap
//!
//! The list itself is described entirely by arguments: a title, the items to
//! add, and the mutations to apply before the command runs. Nothing is read
//! from or written to disk.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use todo_core::{StatusFilter, Todo};

/// Separator between a todo's title and description in `--item` values
pub const DESCRIPTION_SEPARATOR: &str = "::";

/// Build a todo list from the command line and render it
///
/// Items are added in the order given, then the mutation flags are applied
/// (all-done, all-undone, done-at, undone-at, done), then the command runs.
/// Without a command the whole list is shown.
#[derive(Parser)]
#[command(version, about, name = "todo")]
pub struct Args {
    /// Title of the list
    #[arg(short, long, global = true, default_value = "Todos")]
    pub title: String,

    /// Todo to add, as TITLE or TITLE::DESCRIPTION (repeatable)
    #[arg(
        short = 'i',
        long = "item",
        value_name = "TODO",
        value_parser = parse_todo
    )]
    pub items: Vec<Todo>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub mutations: MutationArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Mutations applied to the list before the command runs
#[derive(ClapArgs, Debug, Default)]
pub struct MutationArgs {
    /// Mark every todo as done
    #[arg(long, global = true)]
    pub all_done: bool,

    /// Mark every todo as not done
    #[arg(long, global = true)]
    pub all_undone: bool,

    /// Mark the todo at a 0-based index as done (repeatable)
    #[arg(long, value_name = "INDEX")]
    pub done_at: Vec<usize>,

    /// Mark the todo at a 0-based index as not done (repeatable)
    #[arg(long, value_name = "INDEX")]
    pub undone_at: Vec<usize>,

    /// Mark the first todo whose title or description matches TEXT as done
    /// (repeatable)
    #[arg(long, value_name = "TEXT")]
    pub done: Vec<String>,
}

/// Available commands for the todo CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render the list, optionally filtered by status
    #[command(aliases = ["s", "ls"])]
    Show(ShowArgs),
    /// Render the first todo with an exactly matching title
    #[command(alias = "f")]
    Find(FindArgs),
    /// Render the todo at a 0-based index
    Item(IndexArgs),
    /// Remove the todo at a 0-based index, then render the list
    #[command(alias = "rm")]
    Remove(IndexArgs),
    /// Remove the first todo, then render the list
    Shift,
    /// Remove the last todo, then render the list
    Pop,
    /// Print done/total counts and whether every todo is done
    Summary,
}

#[derive(ClapArgs, Default)]
pub struct ShowArgs {
    /// Which todos to show
    #[arg(long, short, value_enum, default_value_t = StatusArg::All)]
    pub status: StatusArg,
}

#[derive(ClapArgs)]
pub struct FindArgs {
    /// Exact title to look up
    #[arg(value_name = "TITLE")]
    pub search: String,
}

#[derive(ClapArgs)]
pub struct IndexArgs {
    /// 0-based position in the list
    pub index: usize,
}

/// Command-line representation of [`StatusFilter`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusArg {
    /// Every todo
    #[default]
    All,
    /// Only completed todos
    Done,
    /// Only pending todos
    NotDone,
}

impl From<StatusArg> for StatusFilter {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::All => StatusFilter::All,
            StatusArg::Done => StatusFilter::Done,
            StatusArg::NotDone => StatusFilter::NotDone,
        }
    }
}

/// Parse `TITLE` or `TITLE::DESCRIPTION` into a pending todo.
///
/// Whitespace is only trimmed next to the separator; the outer ends of the
/// value are kept as given so exact-match lookups see the same text.
fn parse_todo(value: &str) -> Result<Todo, String> {
    let (title, description) = match value.split_once(DESCRIPTION_SEPARATOR) {
        Some((title, description)) => (title.trim_end(), description.trim_start()),
        None => (value, ""),
    };

    Todo::new(title)
        .map(|todo| todo.with_description(description))
        .map_err(|e| e.to_string())
}
