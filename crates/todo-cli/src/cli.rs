//! Command handlers for the todo CLI
//!
//! [`Cli`] owns the list built from the arguments and the renderer. It
//! applies the mutation flags, runs one command, and prints the result.

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use todo_core::{StatusFilter, Todo, TodoList};

use crate::{
    args::{Commands, MutationArgs, ShowArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    list: TodoList,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(list: TodoList, renderer: TerminalRenderer) -> Self {
        Self { list, renderer }
    }

    /// Apply mutation flags in a fixed order: all-done, all-undone, done-at,
    /// undone-at, then done-by-text.
    pub fn apply_mutations(&mut self, mutations: &MutationArgs) -> Result<()> {
        if mutations.all_done {
            debug!("mark_all_done");
            self.list.mark_all_done();
        }
        if mutations.all_undone {
            debug!("mark_all_undone");
            self.list.mark_all_undone();
        }
        for &index in &mutations.done_at {
            debug!("mark_done_at: {index}");
            self.list
                .mark_done_at(index)
                .with_context(|| format!("Failed to mark todo {index} as done"))?;
        }
        for &index in &mutations.undone_at {
            debug!("mark_undone_at: {index}");
            self.list
                .mark_undone_at(index)
                .with_context(|| format!("Failed to mark todo {index} as not done"))?;
        }
        for text in &mutations.done {
            debug!("mark_done: {text:?}");
            if self.list.mark_done(text).is_none() {
                warn!("No todo has title or description {text:?}");
            }
        }
        Ok(())
    }

    pub fn handle_command(mut self, command: Option<Commands>) -> Result<()> {
        match command {
            None => self.show(&ShowArgs::default()),
            Some(Commands::Show(args)) => self.show(&args),
            Some(Commands::Find(args)) => self.find(&args.search),
            Some(Commands::Item(args)) => self.item(args.index),
            Some(Commands::Remove(args)) => {
                debug!("remove_at: {}", args.index);
                let removed = self
                    .list
                    .remove_at(args.index)
                    .with_context(|| format!("Failed to remove todo {}", args.index))?;
                self.removed(&removed)
            }
            Some(Commands::Shift) => {
                debug!("remove_first");
                let removed = self
                    .list
                    .remove_first()
                    .context("Failed to remove first todo")?;
                self.removed(&removed)
            }
            Some(Commands::Pop) => {
                debug!("remove_last");
                let removed = self
                    .list
                    .remove_last()
                    .context("Failed to remove last todo")?;
                self.removed(&removed)
            }
            Some(Commands::Summary) => self.summary(),
        }
    }

    fn show(&self, args: &ShowArgs) -> Result<()> {
        let filter = StatusFilter::from(args.status);
        debug!("show: {filter:?}");
        self.renderer
            .render(&self.list.filter_status(filter).to_string())
    }

    fn find(&self, title: &str) -> Result<()> {
        debug!("find_by_title: {title:?}");
        let Some(todo) = self.list.find_by_title(title) else {
            bail!("No todo titled '{title}'");
        };
        self.renderer.render(&todo.to_string())
    }

    fn item(&self, index: usize) -> Result<()> {
        debug!("item_at: {index}");
        let todo = self
            .list
            .item_at(index)
            .with_context(|| format!("Failed to get todo {index}"))?;
        self.renderer.render(&todo.to_string())
    }

    fn removed(&self, todo: &Todo) -> Result<()> {
        self.renderer.render(&format!("Removed: {todo}"))?;
        self.renderer.render(&self.list.to_string())
    }

    fn summary(&self) -> Result<()> {
        let summary = self.list.summary();
        let all_done = if self.list.all_done() { "yes" } else { "no" };
        self.renderer
            .render(&format!("{summary}\nAll done: {all_done}"))
    }
}
