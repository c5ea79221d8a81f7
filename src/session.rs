use crate::console::menu::{DIM_LEVEL_PROMPT, EXITING, INVALID_CHOICE, INVALID_INPUT, MENU, MenuChoice, TEMPERATURE_PROMPT};
use crate::console::{ConsoleInput, InputError};
use crate::domain::commands::Command;
use crate::domain::device::{Light, Thermostat};
use crate::domain::invoker::{Invoker, InvokerError};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Interactive loop translating menu choices into commands for the two invokers.
#[derive(Debug)]
pub struct Session<'a> {
    light: &'a Light,
    thermostat: &'a Thermostat,
    light_remote: Invoker<'a>,
    thermostat_controller: Invoker<'a>,
}

impl<'a> Session<'a> {
    pub fn new(light: &'a Light, thermostat: &'a Thermostat) -> Self {
        Session {
            light,
            thermostat,
            light_remote: Invoker::light_remote(),
            thermostat_controller: Invoker::thermostat_controller(),
        }
    }

    #[instrument(fields(light = self.light.name(), thermostat = self.thermostat.name()), skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut ConsoleInput<R>, out: &mut W) -> Result<(), SessionError> {
        info!("🏠 Session started");

        loop {
            write!(out, "{}", MENU)?;
            out.flush()?;

            let choice = match read_int(input, out)? {
                Some(value) => MenuChoice::try_from(value),
                None => continue,
            };

            let choice = match choice {
                Ok(choice) => choice,
                Err(invalid) => {
                    debug!("⚠️ Rejected choice, {}", invalid);
                    writeln!(out, "{}", INVALID_CHOICE)?;
                    continue;
                }
            };

            debug!(?choice, "Menu choice");
            match choice {
                MenuChoice::TurnOnLight => self.press_light_remote(Command::TurnOnLight(self.light), out)?,
                MenuChoice::TurnOffLight => self.press_light_remote(Command::TurnOffLight(self.light), out)?,
                MenuChoice::DimLight => {
                    let level = prompt_int(DIM_LEVEL_PROMPT, input, out)?;
                    self.press_light_remote(Command::DimLight { light: self.light, level }, out)?;
                }
                MenuChoice::SetTemperature => {
                    let temperature = prompt_int(TEMPERATURE_PROMPT, input, out)?;
                    let command = Command::SetTemperature {
                        thermostat: self.thermostat,
                        temperature,
                    };
                    self.press_thermostat_controller(command, out)?;
                }
                MenuChoice::SwitchToCoolingMode => self.press_thermostat_controller(Command::SwitchToCoolingMode(self.thermostat), out)?,
                MenuChoice::SwitchToHeatingMode => self.press_thermostat_controller(Command::SwitchToHeatingMode(self.thermostat), out)?,
                MenuChoice::Exit => {
                    writeln!(out, "{}", EXITING)?;
                    out.flush()?;
                    info!("🏠 Session ended");
                    return Ok(());
                }
            }
        }
    }

    fn press_light_remote(&mut self, command: Command<'a>, out: &mut dyn Write) -> Result<(), InvokerError> {
        self.light_remote.set_command(command);
        self.light_remote.press_button(out)
    }

    fn press_thermostat_controller(&mut self, command: Command<'a>, out: &mut dyn Write) -> Result<(), InvokerError> {
        self.thermostat_controller.set_command(command);
        self.thermostat_controller.press_button(out)
    }
}

/// Reads one integer, printing a notice and returning `None` if the token was not one.
fn read_int<R: BufRead>(input: &mut ConsoleInput<R>, out: &mut dyn Write) -> Result<Option<i32>, SessionError> {
    match input.next_int() {
        Ok(value) => Ok(Some(value)),
        Err(InputError::NotAnInteger(token)) => {
            warn!(token, "⚠️ Ignoring input that is not a whole number");
            writeln!(out, "{}", INVALID_INPUT)?;
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn prompt_int<R: BufRead>(prompt: &str, input: &mut ConsoleInput<R>, out: &mut dyn Write) -> Result<i32, SessionError> {
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        if let Some(value) = read_int(input, out)? {
            return Ok(value);
        }
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Invoker(#[from] InvokerError),
    #[error("unable to write to the console: {0}")]
    Output(#[from] io::Error),
}
