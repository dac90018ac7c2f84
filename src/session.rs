/*!
 * Interactive booking session
 *
 * Collects the passenger and route, lists the flights for that route and
 * applies a single book or cancel action to the ledger. Input comes through
 * the `Prompt` trait and output goes to any writer, so the whole flow runs
 * unchanged against a terminal or a script.
 */

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Stderr, StdinLock, Write};

use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::{debug, info};

use crate::cli_style::{self, Icons};
use crate::core::{Ledger, LedgerError};
use crate::error::{AirEasyError, Result};
use crate::source::{load_ledger, FlightSource, Route};

/// Source of answers to session questions
pub trait Prompt {
    /// Ask one question and return the raw answer
    fn ask(&mut self, label: &str) -> Result<String>;
}

/// Prompts on the attached terminal.
///
/// Falls back to plain line reads from stdin when stdin or stderr is not a
/// terminal, so answers can be piped in.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
    piped: Option<LinePrompt<StdinLock<'static>, Stderr>>,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        let attended = Term::stderr().is_term() && io::stdin().is_terminal();
        let piped = (!attended).then(|| LinePrompt::new(io::stdin().lock(), io::stderr()));
        debug!(attended, "prompt mode selected");
        Self {
            theme: ColorfulTheme::default(),
            piped,
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, label: &str) -> Result<String> {
        if let Some(piped) = self.piped.as_mut() {
            return piped.ask(label);
        }

        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// Reads one answer per line, echoing each label to `echo`
pub struct LinePrompt<R, W> {
    input: R,
    echo: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, echo: W) -> Self {
        Self { input, echo }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.echo, "{}: ", label)?;
        self.echo.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AirEasyError::Prompt(format!(
                "input closed before \"{}\" was answered",
                label
            )));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Replays canned answers in order
///
/// Running out of answers is reported as a prompt failure, the same way a
/// closed terminal would be.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, A>(answers: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Labels of every question asked so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, label: &str) -> Result<String> {
        self.asked.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| AirEasyError::Prompt(format!("no answer for \"{}\"", label)))
    }
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, label: &str) -> Result<String> {
        (**self).ask(label)
    }
}

/// Details printed on the ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub mobile: String,
}

/// Choice made at the action selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Book,
    Cancel,
    Invalid(String),
}

impl Action {
    /// Parse the menu answer as a number, so "01" and "+1" both book
    pub fn from_choice(choice: &str) -> Self {
        let choice = choice.trim();
        match choice.parse::<i64>() {
            Ok(1) => Action::Book,
            Ok(2) => Action::Cancel,
            _ => Action::Invalid(choice.to_string()),
        }
    }
}

/// How a session ended. Every variant is a normal completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Booked { flight_number: String },
    Cancelled { flight_number: String },
    Rejected(LedgerError),
    NoFlights,
    InvalidAction,
}

/// Read a 1-based flight position; anything that is not a number maps to 0,
/// which the ledger rejects as out of range.
fn parse_index(answer: &str) -> usize {
    answer.trim().parse().unwrap_or(0)
}

pub struct Session<P, W> {
    prompt: P,
    out: W,
}

impl<P: Prompt, W: Write> Session<P, W> {
    pub fn new(prompt: P, out: W) -> Self {
        Self { prompt, out }
    }

    pub fn into_parts(self) -> (P, W) {
        (self.prompt, self.out)
    }

    fn ask_trimmed(&mut self, label: &str) -> Result<String> {
        Ok(self.prompt.ask(label)?.trim().to_string())
    }

    pub fn print_welcome(&mut self) -> Result<()> {
        writeln!(self.out)?;
        cli_style::header_box(
            &mut self.out,
            "Welcome to Air-Easy Ticket Booking",
            Some("Please enter your details"),
        )?;
        Ok(())
    }

    /// Ask for name, email, age and mobile, in that order.
    ///
    /// The name keeps inner spaces. Age is asked again until it parses.
    pub fn collect_passenger(&mut self) -> Result<Passenger> {
        let name = self.ask_trimmed("Name")?;
        let email = self.ask_trimmed("Email")?;
        let age = loop {
            let answer = self.ask_trimmed("Age")?;
            match answer.parse::<u32>() {
                Ok(age) => break age,
                Err(_) => cli_style::write_warning(
                    &mut self.out,
                    &format!("\"{}\" is not a valid age, please enter a whole number.", answer),
                )?,
            }
        };
        let mobile = self.ask_trimmed("Mobile")?;

        debug!("passenger details collected");
        Ok(Passenger {
            name,
            email,
            age,
            mobile,
        })
    }

    pub fn ask_route(&mut self) -> Result<Route> {
        let origin = self.ask_trimmed("Enter source (IATA code)")?;
        let destination = self.ask_trimmed("Enter destination (IATA code)")?;
        Ok(Route::new(origin, destination))
    }

    /// Print the listing, or the no-flights notice for an empty ledger
    pub fn show_flights(&mut self, ledger: &Ledger) -> Result<()> {
        if ledger.is_empty() {
            cli_style::write_warning(&mut self.out, "No flights found for the given route.")?;
            return Ok(());
        }

        cli_style::section_header(&mut self.out, "Available Flights")?;
        writeln!(self.out, "{}", cli_style::flights_table(ledger.list()))?;
        Ok(())
    }

    pub fn choose_action(&mut self) -> Result<Action> {
        cli_style::section_header(&mut self.out, "Select action")?;
        writeln!(self.out, "  1. Book a flight")?;
        writeln!(self.out, "  2. Cancel a flight")?;
        let choice = self.prompt.ask("Enter choice")?;
        Ok(Action::from_choice(&choice))
    }

    /// Book one seat and print the ticket on success
    pub fn book(&mut self, ledger: &mut Ledger, passenger: &Passenger) -> Result<Outcome> {
        if ledger.is_empty() {
            cli_style::write_warning(&mut self.out, "No flights available for booking.")?;
            return Ok(Outcome::NoFlights);
        }

        let index = parse_index(&self.prompt.ask("Enter the flight number to book")?);
        match ledger.book_seat(index) {
            Ok(flight_number) => {
                cli_style::write_success(
                    &mut self.out,
                    &format!("Booking successful for Flight: {}", flight_number),
                )?;
                if let Some(flight) = ledger.get(index) {
                    let issued = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
                    let ticket = cli_style::ticket_table(&[
                        ("Passenger Name", passenger.name.as_str()),
                        ("Email", passenger.email.as_str()),
                        ("Flight Number", flight.flight_number.as_str()),
                        ("Departure", flight.departure.as_str()),
                        ("Arrival", flight.arrival.as_str()),
                        ("Issued", issued.as_str()),
                    ]);
                    writeln!(self.out, "\n{}", ticket)?;
                }
                Ok(Outcome::Booked { flight_number })
            }
            Err(e) => {
                let message = match e {
                    LedgerError::OutOfRange { .. } => "Invalid choice.",
                    LedgerError::NoSeatsAvailable { .. } => "No seats available on this flight.",
                };
                cli_style::write_error(&mut self.out, message, None)?;
                Ok(Outcome::Rejected(e))
            }
        }
    }

    /// Give back one seat on the chosen flight
    pub fn cancel(&mut self, ledger: &mut Ledger) -> Result<Outcome> {
        let index = parse_index(&self.prompt.ask("Enter the flight number to cancel")?);
        match ledger.cancel_seat(index) {
            Ok(flight_number) => {
                cli_style::write_success(
                    &mut self.out,
                    &format!("Cancellation successful for Flight: {}", flight_number),
                )?;
                Ok(Outcome::Cancelled { flight_number })
            }
            Err(e) => {
                cli_style::write_error(&mut self.out, "Invalid flight number.", None)?;
                Ok(Outcome::Rejected(e))
            }
        }
    }

    /// Run the whole session against `source`
    pub fn run<S: FlightSource + ?Sized>(&mut self, source: &S) -> Result<Outcome> {
        self.print_welcome()?;
        let passenger = self.collect_passenger()?;
        let route = self.ask_route()?;

        let searching = format!(
            "Searching flights {} {} {}",
            route.origin,
            Icons::ARROW_RIGHT,
            route.destination
        );
        cli_style::write_info(&mut self.out, &searching)?;
        let mut ledger = load_ledger(source, &route);
        self.show_flights(&ledger)?;

        let outcome = match self.choose_action()? {
            Action::Book => self.book(&mut ledger, &passenger)?,
            Action::Cancel => self.cancel(&mut ledger)?,
            Action::Invalid(choice) => {
                debug!(choice = %choice, "unrecognised action");
                cli_style::write_warning(&mut self.out, "Invalid action.")?;
                Outcome::InvalidAction
            }
        };

        info!(route = %route, outcome = ?outcome, "session finished");
        self.out.flush()?;
        Ok(outcome)
    }
}
