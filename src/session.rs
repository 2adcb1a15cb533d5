//! Cargo management session
//!
//! A [`CargoSession`] owns the shipment pool and the cargo heap for one run of
//! the game. It is the only way shipments move from the pool into the heap, so
//! a value is never in both at once: the pool releases it first, and a failed
//! lookup leaves both collections untouched.
//!
//! The presentation layer feeds user input to [`CargoSession::handle_line`] or
//! [`CargoSession::execute`] and renders the returned [`Outcome`].
//!
//! # Example
//!
//! ```rust
//! use galactic_cargo::config::SessionConfig;
//! use galactic_cargo::session::{CargoError, CargoSession};
//!
//! let mut session = CargoSession::new(SessionConfig::default());
//! assert_eq!(session.admit(35), Ok(35));
//! assert_eq!(session.admit(35), Err(CargoError::ValueNotInPool(35)));
//! assert_eq!(session.dispatch(), Ok(35));
//! assert_eq!(session.dispatch(), Err(CargoError::EmptyHeap));
//! ```

use std::fmt;

use log::debug;

use crate::cargo_heap::PriorityCargoHeap;
use crate::config::SessionConfig;
use crate::pool::AvailableShipmentPool;
use crate::traits::HeapError;

/// Recoverable conditions reported back to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CargoError {
    /// Nothing in the heap to dispatch
    EmptyHeap,
    /// The requested shipment is not in the pool
    ValueNotInPool(i32),
    /// Input could not be read as a shipment priority
    MalformedInput(String),
    /// Every seed shipment has already been admitted
    PoolExhausted,
    /// The menu choice is not one of the known commands
    UnknownCommand(String),
}

impl fmt::Display for CargoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CargoError::EmptyHeap => write!(f, "No shipments to dispatch."),
            CargoError::ValueNotInPool(value) => {
                write!(f, "Invalid shipment {}. Please select a valid priority.", value)
            }
            CargoError::MalformedInput(input) => {
                write!(f, "Invalid input {:?}. Please try again.", input)
            }
            CargoError::PoolExhausted => write!(f, "No shipments left to insert."),
            CargoError::UnknownCommand(input) => {
                write!(f, "Invalid choice {:?}. Please try again.", input)
            }
        }
    }
}

impl std::error::Error for CargoError {}

impl From<HeapError> for CargoError {
    fn from(err: HeapError) -> Self {
        match err {
            HeapError::EmptyHeap => CargoError::EmptyHeap,
        }
    }
}

/// Parses a shipment priority typed by the player
pub fn parse_shipment(input: &str) -> Result<i32, CargoError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| CargoError::MalformedInput(trimmed.to_string()))
}

/// A menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `1 <value>`: move a shipment from the pool into the heap
    Insert(i32),
    /// `2`: dispatch the highest-priority shipment
    Dispatch,
    /// `3`: show the heap's internal order
    View,
    /// `4`: leave the session
    Exit,
}

impl Command {
    /// Parses a menu line such as `"1 23"`, `"2"`, `"3"` or `"4"`
    pub fn parse(line: &str) -> Result<Command, CargoError> {
        let mut parts = line.split_whitespace();
        let choice = parts.next().unwrap_or("");
        let command = match choice {
            "1" => {
                let value = parts
                    .next()
                    .ok_or_else(|| CargoError::MalformedInput(String::new()))?;
                Command::Insert(parse_shipment(value)?)
            }
            "2" => Command::Dispatch,
            "3" => Command::View,
            "4" => Command::Exit,
            other => return Err(CargoError::UnknownCommand(other.to_string())),
        };

        match parts.next() {
            Some(extra) => Err(CargoError::MalformedInput(extra.to_string())),
            None => Ok(command),
        }
    }
}

/// What happened in response to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Inserted(i32),
    Dispatched(i32),
    /// The heap's internal array at the time of viewing
    Viewed(Vec<i32>),
    Exited,
    Rejected(CargoError),
    /// The wrapped outcome emptied both the pool and the heap
    Completed(Box<Outcome>),
}

/// Shown once every shipment has been admitted and dispatched
pub const COMPLETION_MESSAGE: &str = "All shipments have been managed. You completed the task!";

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Inserted(value) => {
                write!(f, "Inserted shipment with priority {} into the heap.", value)
            }
            Outcome::Dispatched(value) => {
                write!(f, "Dispatched shipment with priority {}.", value)
            }
            Outcome::Viewed(elements) if elements.is_empty() => write!(f, "The heap is empty."),
            Outcome::Viewed(elements) => {
                write!(f, "Current heap (priority order): {}", DisplaySeq(elements))
            }
            Outcome::Exited => write!(f, "Exiting Galactic Cargo Management. Goodbye!"),
            Outcome::Rejected(err) => write!(f, "{}", err),
            Outcome::Completed(last) => write!(f, "{}\n{}", last, COMPLETION_MESSAGE),
        }
    }
}

/// Renders a sequence as `[ 35 23 9 ]`
pub struct DisplaySeq<'a>(pub &'a [i32]);

impl fmt::Display for DisplaySeq<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for value in self.0 {
            write!(f, "{} ", value)?;
        }
        write!(f, "]")
    }
}

/// One player's pool and heap
#[derive(Debug, Clone)]
pub struct CargoSession {
    heap: PriorityCargoHeap,
    pool: AvailableShipmentPool,
}

impl CargoSession {
    pub fn new(config: SessionConfig) -> Self {
        debug!(
            "starting session with seed {:?} ({:?})",
            config.seed, config.strategy
        );
        Self {
            heap: PriorityCargoHeap::with_strategy(config.strategy),
            pool: AvailableShipmentPool::new(config.seed),
        }
    }

    pub fn heap(&self) -> &PriorityCargoHeap {
        &self.heap
    }

    pub fn pool(&self) -> &AvailableShipmentPool {
        &self.pool
    }

    /// Moves `value` from the pool into the heap
    ///
    /// # Errors
    /// [`CargoError::PoolExhausted`] when the pool is empty and
    /// [`CargoError::ValueNotInPool`] when `value` is not in it. Neither
    /// collection changes on error.
    pub fn admit(&mut self, value: i32) -> Result<i32, CargoError> {
        if self.pool.is_empty() {
            return Err(CargoError::PoolExhausted);
        }
        if !self.pool.take_if_present(value) {
            debug!("rejected shipment {}: not in pool", value);
            return Err(CargoError::ValueNotInPool(value));
        }
        self.heap.insert(value);
        debug!("admitted shipment {}", value);
        Ok(value)
    }

    /// Parses `input` and admits the resulting shipment
    pub fn admit_input(&mut self, input: &str) -> Result<i32, CargoError> {
        let value = parse_shipment(input)?;
        self.admit(value)
    }

    /// Removes and returns the highest-priority shipment
    pub fn dispatch(&mut self) -> Result<i32, CargoError> {
        let value = self.heap.extract_max()?;
        debug!("dispatched shipment {}", value);
        Ok(value)
    }

    /// The heap's internal array, for display
    pub fn view(&self) -> &[i32] {
        self.heap.snapshot()
    }

    /// Shipments still waiting in the pool, for display
    pub fn available(&self) -> &[i32] {
        self.pool.as_sequence()
    }

    /// True once every shipment has been admitted and dispatched
    pub fn is_complete(&self) -> bool {
        self.heap.is_empty() && self.pool.is_empty()
    }

    /// Runs one command, marking the outcome [`Outcome::Completed`] once
    /// the pool and heap are both empty
    pub fn execute(&mut self, command: Command) -> Outcome {
        let outcome = self.run(command);
        self.settle(outcome)
    }

    /// Parses and executes one line of menu input
    ///
    /// An insert choice on an exhausted pool is rejected before its value is
    /// read, so `"1"` and `"1 abc"` both report [`CargoError::PoolExhausted`].
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let choice = line.split_whitespace().next();
        let outcome = if choice == Some("1") && self.pool.is_empty() {
            debug!("rejected input {:?}: pool exhausted", line);
            Outcome::Rejected(CargoError::PoolExhausted)
        } else {
            match Command::parse(line) {
                Ok(command) => self.run(command),
                Err(err) => {
                    debug!("rejected input {:?}: {}", line, err);
                    Outcome::Rejected(err)
                }
            }
        };
        self.settle(outcome)
    }

    fn run(&mut self, command: Command) -> Outcome {
        let result = match command {
            Command::Insert(value) => self.admit(value).map(Outcome::Inserted),
            Command::Dispatch => self.dispatch().map(Outcome::Dispatched),
            Command::View => Ok(Outcome::Viewed(self.view().to_vec())),
            Command::Exit => Ok(Outcome::Exited),
        };
        result.unwrap_or_else(Outcome::Rejected)
    }

    fn settle(&self, outcome: Outcome) -> Outcome {
        match outcome {
            Outcome::Exited => outcome,
            _ if self.is_complete() => {
                debug!("all shipments managed");
                Outcome::Completed(Box::new(outcome))
            }
            _ => outcome,
        }
    }
}

impl Default for CargoSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
