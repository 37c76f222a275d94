//! # Classes Greet Command
//!
//! File: cli/src/commands/greet/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `classes greet`, which builds a `Person` and prints one greeting:
//!
//! | Flags                     | Output                  |
//! |---------------------------|-------------------------|
//! | *(none)*                  | `Hi, I'm <name>`        |
//! | `--greeting Hello`        | `Hello, <name>`         |
//! | `--time morning`          | `Good morning, <name>`  |
//! | `--hour 14`               | `Good afternoon, <name>`|
//!
//! The name comes from `--name`, then `person.name` in the configuration,
//! then the `Anonymous` placeholder.
//!
//! ```bash
//! classes greet --name Ada --time morning
//! ```
//!
use crate::core::config;
use crate::core::error::{ClassesError, Result};
use crate::domain::person::{Person, TimeOfDay};
use clap::Parser;
use tracing::info;

/// # Greet Arguments (`GreetArgs`)
#[derive(Parser, Debug, Default)]
pub struct GreetArgs {
    /// Name of the person greeting. Defaults to `person.name` from the configuration.
    #[arg(long, short)]
    pub name: Option<String>,

    /// Custom greeting word, printed as "<greeting>, <name>".
    #[arg(long, short, conflicts_with_all = ["time", "hour"])]
    pub greeting: Option<String>,

    /// Time-of-day label, printed as "Good <time>, <name>".
    #[arg(long, short, conflicts_with = "hour")]
    pub time: Option<String>,

    /// Clock hour (0-23) from which the time-of-day label is derived.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    pub hour: Option<u32>,
}

pub fn handle_greet(args: GreetArgs) -> Result<()> {
    info!("Handling greet command with args: {:?}", args);
    let cfg = config::load_config()?;
    let greeting = render_greeting(&args, cfg.person.name.as_deref())?;
    println!("{}", greeting);
    Ok(())
}

fn render_greeting(args: &GreetArgs, configured_name: Option<&str>) -> Result<String> {
    let mut person = Person::default();
    person.set_name(args.name.as_deref().or(configured_name));

    let time = match (&args.time, args.hour) {
        (Some(time), _) => Some(time.clone()),
        (None, Some(hour)) => {
            let time_of_day = TimeOfDay::from_hour(hour).ok_or_else(|| {
                ClassesError::InvalidArgument(format!("hour {} is out of range (0-23)", hour))
            })?;
            Some(time_of_day.label().to_string())
        }
        (None, None) => None,
    };

    Ok(match (time, &args.greeting) {
        (Some(time), _) => person.greeting_for_time(&time),
        (None, Some(greeting)) => person.greet_with(greeting),
        (None, None) => person.greet(),
    })
}
