//! # Person
//!
//! File: cli/src/domain/person.rs
//! Author: Christi Mahu
//!
//! A named entity that produces greeting strings. The name is optional:
//! when it is unset (or set to an empty string) every accessor and greeting
//! falls back to [`DEFAULT_NAME`], so a greeting never has an empty name
//! segment.
//!
//! ```rust
//! use classes::domain::person::Person;
//!
//! let mut ada = Person::new("Ada");
//! assert_eq!(ada.greet(), "Hi, I'm Ada");
//! assert_eq!(Person::greet_at_time("Ada", "morning"), "Good morning, Ada");
//!
//! ada.set_name(None::<&str>);
//! assert_eq!(ada.greet(), "Hi, I'm Anonymous");
//! ```

use std::fmt;

/// Placeholder reported when no name is set.
pub const DEFAULT_NAME: &str = "Anonymous";
/// Greeting word used by `greet_with` when the supplied greeting is blank.
pub const DEFAULT_GREETING: &str = "Hi";
/// Time-of-day label used when the supplied label is blank.
pub const DEFAULT_TIME: &str = "day";

/// A person who can greet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    name: Option<String>,
}

impl Person {
    /// Creates a person with the given name. A blank name leaves it unset.
    pub fn new(name: &str) -> Self {
        let mut person = Self::default();
        person.set_name(Some(name));
        person
    }

    /// Replaces the stored name. `None` or a blank string resets it to the placeholder.
    pub fn set_name<S: AsRef<str>>(&mut self, name: Option<S>) {
        self.name = name
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty());
    }

    /// The current name, or [`DEFAULT_NAME`] if none is set.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    /// Read-only alias of [`Person::name`].
    pub fn name_too(&self) -> &str {
        self.name()
    }

    /// Whether a real name (not the placeholder) is set.
    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    /// `"Hi, I'm <name>"`.
    pub fn greet(&self) -> String {
        format!("Hi, I'm {}", self.name())
    }

    /// `"<greeting>, <name>"`.
    pub fn greet_with(&self, greeting: &str) -> String {
        let greeting = non_blank_or(greeting, DEFAULT_GREETING);
        format!("{}, {}", greeting, self.name())
    }

    /// Same format as [`Person::greet_with`], addressed through [`Person::name_too`].
    pub fn greet_too(&self, greeting: &str) -> String {
        let greeting = non_blank_or(greeting, DEFAULT_GREETING);
        format!("{}, {}", greeting, self.name_too())
    }

    /// `"Good <time>, <name>"` for an arbitrary name.
    pub fn greet_at_time(name: &str, time: &str) -> String {
        format!(
            "Good {}, {}",
            non_blank_or(time, DEFAULT_TIME),
            non_blank_or(name, DEFAULT_NAME)
        )
    }

    /// [`Person::greet_at_time`] addressed to this person.
    pub fn greeting_for_time(&self, time: &str) -> String {
        Self::greet_at_time(self.name(), time)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// Coarse time-of-day buckets used to pick a greeting from a clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Classifies a 24-hour clock hour. Returns `None` for hours above 23.
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            5..=11 => Some(Self::Morning),
            12..=16 => Some(Self::Afternoon),
            17..=21 => Some(Self::Evening),
            0..=4 | 22..=23 => Some(Self::Night),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
