//! Command-line interface definition.
//!
//! Builds the `clap` application and turns its matches into a `Cli` value the
//! app can dispatch on.

use crate::error::{AppError, AppResult};
use crate::item::{Unit, DEFAULT_QUANTITY};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

/// Specifying the different commands.
///
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    List,
    Add {
        text: String,
        quantity: f64,
        unit: Unit,
    },
    Toggle {
        item: String,
    },
    /// Omitted quantity or unit keeps the item's current value.
    Edit {
        item: String,
        text: String,
        quantity: Option<f64>,
        unit: Option<Unit>,
    },
    Delete {
        item: String,
    },
    Clear {
        confirmed: bool,
    },
}

/// Parsed command line.
///
#[derive(Debug, PartialEq, Clone)]
pub struct Cli {
    pub config_dir: Option<String>,
    pub verbose: bool,
    pub command: Command,
}

/// Build the clap application.
///
pub fn app() -> App<'static, 'static> {
    let item_arg = Arg::with_name("ITEM")
        .help("Position shown by `list`, or the item id")
        .required(true);
    let quantity_arg = Arg::with_name("quantity")
        .short("q")
        .long("quantity")
        .value_name("QTY")
        .takes_value(true)
        .validator(validate_quantity)
        .help("Amount to buy; whole numbers for units");
    let unit_arg = Arg::with_name("unit")
        .short("u")
        .long("unit")
        .value_name("UNIT")
        .takes_value(true)
        .validator(validate_unit)
        .help("Measurement: unit or kg");

    App::new("shoplist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keep track of what you need to buy")
        .setting(AppSettings::VersionlessSubcommands)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .takes_value(true)
                .global(true)
                .help("Directory holding config.yml"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .global(true)
                .help("Log debug output to stderr"),
        )
        .subcommand(SubCommand::with_name("list").about("Show the shopping list"))
        .subcommand(
            SubCommand::with_name("add")
                .about("Add an item to the top of the list")
                .arg(
                    Arg::with_name("TEXT")
                        .help("Item name")
                        .required(true)
                        .multiple(true),
                )
                .arg(quantity_arg.clone())
                .arg(unit_arg.clone()),
        )
        .subcommand(
            SubCommand::with_name("toggle")
                .about("Mark an item purchased or not purchased")
                .arg(item_arg.clone()),
        )
        .subcommand(
            SubCommand::with_name("edit")
                .about("Change an item's name, quantity or unit")
                .arg(item_arg.clone())
                .arg(
                    Arg::with_name("TEXT")
                        .help("New item name")
                        .required(true)
                        .multiple(true),
                )
                .arg(quantity_arg)
                .arg(unit_arg),
        )
        .subcommand(
            SubCommand::with_name("delete")
                .about("Remove an item from the list")
                .arg(item_arg),
        )
        .subcommand(
            SubCommand::with_name("clear")
                .about("Remove every item from the list")
                .arg(
                    Arg::with_name("yes")
                        .short("y")
                        .long("yes")
                        .help("Skip the confirmation prompt"),
                ),
        )
}

impl Cli {
    /// Interpret matches produced by [`app`].
    ///
    pub fn from_matches(matches: &ArgMatches) -> AppResult<Cli> {
        let command = match matches.subcommand() {
            ("add", Some(sub)) => Command::Add {
                text: joined_text(sub),
                quantity: quantity(sub)?.unwrap_or(DEFAULT_QUANTITY),
                unit: unit(sub)?.unwrap_or_default(),
            },
            ("toggle", Some(sub)) => Command::Toggle {
                item: item(sub)?,
            },
            ("edit", Some(sub)) => Command::Edit {
                item: item(sub)?,
                text: joined_text(sub),
                quantity: quantity(sub)?,
                unit: unit(sub)?,
            },
            ("delete", Some(sub)) => Command::Delete {
                item: item(sub)?,
            },
            ("clear", Some(sub)) => Command::Clear {
                confirmed: sub.is_present("yes"),
            },
            _ => Command::List,
        };

        // Globals given after the subcommand only land in its matches
        let sub = matches.subcommand().1;
        let config_dir = matches
            .value_of("config")
            .or_else(|| sub.and_then(|sub| sub.value_of("config")))
            .map(str::to_string);
        let verbose =
            matches.is_present("verbose") || sub.map_or(false, |sub| sub.is_present("verbose"));

        Ok(Cli {
            config_dir,
            verbose,
            command,
        })
    }
}

fn joined_text(matches: &ArgMatches) -> String {
    matches
        .values_of("TEXT")
        .map(|words| words.collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

fn item(matches: &ArgMatches) -> AppResult<String> {
    matches
        .value_of("ITEM")
        .map(str::to_string)
        .ok_or_else(|| AppError::InvalidArgument("missing ITEM".to_string()))
}

fn quantity(matches: &ArgMatches) -> AppResult<Option<f64>> {
    matches
        .value_of("quantity")
        .map(|value| {
            value
                .parse::<f64>()
                .map_err(|e| AppError::InvalidArgument(format!("quantity '{}': {}", value, e)))
        })
        .transpose()
}

fn unit(matches: &ArgMatches) -> AppResult<Option<Unit>> {
    matches
        .value_of("unit")
        .map(|value| value.parse::<Unit>().map_err(AppError::from))
        .transpose()
}

fn validate_quantity(value: String) -> Result<(), String> {
    match value.parse::<f64>() {
        Ok(quantity) if quantity.is_finite() => Ok(()),
        _ => Err(format!("'{}' is not a number", value)),
    }
}

fn validate_unit(value: String) -> Result<(), String> {
    value
        .parse::<Unit>()
        .map(|_| ())
        .map_err(|e| e.to_string())
}
