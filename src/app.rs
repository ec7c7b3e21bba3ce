use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::AppError;
use crate::item::ItemId;
use crate::logger;
use crate::storage::{FileStorage, Storage};
use crate::store::ListStore;
use crate::ui;
use anyhow::{Context, Result};
use log::*;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// Oversees configuration, the list store and terminal output for a single
/// command.
///
pub struct App<S: Storage> {
    store: ListStore<S>,
    toasts: Rc<RefCell<Vec<String>>>,
}

impl App<FileStorage> {
    /// Run the given command line against the list in the configured data
    /// directory. Returns the result of the command.
    ///
    pub fn start(cli: Cli) -> Result<()> {
        let mut config = Config::new();
        config
            .load(cli.config_dir.as_deref())
            .context("Failed to load configuration")?;

        let level = if cli.verbose {
            LevelFilter::Debug
        } else {
            config.log_level()?
        };
        logger::init(level, Box::new(|line: String| eprintln!("{}", line)))?;
        if let Some(path) = config.file_path() {
            debug!("Using configuration from {}", path.display());
        }

        let data_dir = config.data_dir()?;
        debug!("Opening shopping list in {}...", data_dir.display());
        let storage = FileStorage::new(&data_dir).map_err(AppError::from)?;
        let store = ListStore::open(storage).map_err(AppError::from)?;

        let mut app = App::new(store);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        app.execute(cli.command, &mut out, &mut prompt_clear)
    }
}

impl<S: Storage> App<S> {
    /// Wrap a loaded store, collecting a confirmation message for every
    /// change it commits.
    ///
    pub fn new(mut store: ListStore<S>) -> Self {
        let toasts = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&toasts);
        store.subscribe(move |event, _items| {
            if let Some(message) = ui::toast(event) {
                sink.borrow_mut().push(message);
            }
        });
        App { store, toasts }
    }

    pub fn store(&self) -> &ListStore<S> {
        &self.store
    }

    /// Apply a command, then print confirmations and the resulting list.
    /// `confirm_clear` is asked before clearing a non-empty list unless the
    /// command already carries confirmation.
    ///
    pub fn execute<W, F>(&mut self, command: Command, out: &mut W, confirm_clear: &mut F) -> Result<()>
    where
        W: Write,
        F: FnMut(usize) -> io::Result<bool>,
    {
        debug!("Processing command '{:?}'...", command);
        match command {
            Command::List => {}
            Command::Add {
                text,
                quantity,
                unit,
            } => {
                let before = self.store.len();
                self.store
                    .add_with(&text, quantity, unit)
                    .map_err(AppError::from)?;
                if self.store.len() == before {
                    writeln!(out, "Nothing added: the name is blank or the quantity is negative.")?;
                }
            }
            Command::Toggle { item } => {
                let id = self.resolve(&item)?;
                self.store.toggle(&id).map_err(AppError::from)?;
            }
            Command::Edit {
                item,
                text,
                quantity,
                unit,
            } => {
                let id = self.resolve(&item)?;
                let (current_quantity, current_unit) = match self.store.get(&id) {
                    Some(current) => (current.quantity, current.unit),
                    None => return Err(AppError::ItemNotFound(item).into()),
                };
                self.store
                    .edit(
                        &id,
                        &text,
                        quantity.unwrap_or(current_quantity),
                        unit.unwrap_or(current_unit),
                    )
                    .map_err(AppError::from)?;
                if self.toasts.borrow().is_empty() {
                    writeln!(out, "Nothing changed: the name is blank or the quantity is negative.")?;
                }
            }
            Command::Delete { item } => {
                let id = self.resolve(&item)?;
                self.store.delete(&id).map_err(AppError::from)?;
            }
            Command::Clear { confirmed } => {
                let count = self.store.len();
                if confirmed || count == 0 || confirm_clear(count)? {
                    self.store.clear().map_err(AppError::from)?;
                } else {
                    info!("Clear cancelled by user.");
                    writeln!(out, "Cancelled.")?;
                }
            }
        }

        for message in self.toasts.borrow_mut().drain(..) {
            writeln!(out, "{}", message)?;
        }
        write!(out, "{}", ui::render_list(self.store.items()))?;
        if !self.store.is_empty() {
            writeln!(
                out,
                "\n{}",
                ui::render_summary(self.store.remaining(), self.store.len())
            )?;
        }
        Ok(())
    }

    /// Find the item a command refers to: a 1-based position in display
    /// order, or an id.
    ///
    fn resolve(&self, reference: &str) -> Result<ItemId, AppError> {
        let reference = reference.trim();
        if let Ok(position) = reference.parse::<usize>() {
            if let Some(item) = position
                .checked_sub(1)
                .and_then(|index| self.store.display_order().get(index).copied())
            {
                return Ok(item.id.clone());
            }
        }
        let id = ItemId::from(reference);
        match self.store.get(&id) {
            Some(_) => Ok(id),
            None => Err(AppError::ItemNotFound(reference.to_string())),
        }
    }
}

/// Ask on stdin before removing every item.
///
fn prompt_clear(count: usize) -> io::Result<bool> {
    print!(
        "Remove all {} items from your shopping list? This cannot be undone. [y/N] ",
        count
    );
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
