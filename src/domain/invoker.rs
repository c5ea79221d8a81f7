use crate::domain::commands::Command;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub const LIGHT_REMOTE: &str = "light remote";
pub const THERMOSTAT_CONTROLLER: &str = "thermostat controller";

/// Triggers whatever command was last bound to it, without knowing what it does.
#[derive(Debug)]
pub struct Invoker<'a> {
    name: &'static str,
    command: Option<Command<'a>>,
}

impl<'a> Invoker<'a> {
    pub fn new(name: &'static str) -> Self {
        Invoker { name, command: None }
    }

    pub fn light_remote() -> Self {
        Invoker::new(LIGHT_REMOTE)
    }

    pub fn thermostat_controller() -> Self {
        Invoker::new(THERMOSTAT_CONTROLLER)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[cfg(test)]
    pub fn command(&self) -> Option<&Command<'a>> {
        self.command.as_ref()
    }

    pub fn set_command(&mut self, command: Command<'a>) {
        debug!(invoker = self.name(), command = command.kind(), "🔗 Bind command");
        self.command = Some(command);
    }

    #[instrument(fields(invoker = self.name()), skip_all)]
    pub fn press_button(&self, out: &mut dyn Write) -> Result<(), InvokerError> {
        let Some(command) = &self.command else {
            warn!("⚠️ Button pressed without a bound command");
            return Err(InvokerError::NoCommandBound(self.name()));
        };

        debug!(command = command.kind(), "▶️ Executing command");
        command.execute(out)?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum InvokerError {
    #[error("no command is bound to the {0}")]
    NoCommandBound(&'static str),
    #[error("unable to write the device status: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::{Light, Thermostat};
    use pretty_assertions::assert_eq;
    use test_log::test;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn invokers_are_labelled() {
        assert_eq!(Invoker::light_remote().name(), "light remote");
        assert_eq!(Invoker::thermostat_controller().name(), "thermostat controller");
    }

    #[test]
    fn press_button_surfaces_output_failures() {
        let light = Light::new("living room");
        let mut invoker = Invoker::light_remote();

        invoker.set_command(Command::TurnOnLight(&light));
        let result = invoker.press_button(&mut FailingWriter);

        assert!(matches!(result, Err(InvokerError::Output(ref e)) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn press_button_without_a_command_is_an_error() {
        let invoker = Invoker::light_remote();
        let mut out = Vec::new();

        let result = invoker.press_button(&mut out);

        assert!(matches!(result, Err(InvokerError::NoCommandBound(LIGHT_REMOTE))));
        assert!(out.is_empty());
    }

    #[test]
    fn press_button_executes_the_bound_command() -> Result<(), InvokerError> {
        let thermostat = Thermostat::new("living room");
        let mut invoker = Invoker::thermostat_controller();
        let mut out = Vec::new();

        invoker.set_command(Command::SwitchToCoolingMode(&thermostat));
        invoker.press_button(&mut out)?;

        assert_eq!(String::from_utf8_lossy(&out), "Thermostat switched to cooling mode\n");

        Ok(())
    }

    #[test]
    fn set_command_replaces_the_previous_command() -> Result<(), InvokerError> {
        let light = Light::new("living room");
        let mut invoker = Invoker::light_remote();
        let mut out = Vec::new();

        invoker.set_command(Command::TurnOnLight(&light));
        invoker.set_command(Command::TurnOffLight(&light));
        invoker.press_button(&mut out)?;

        assert_eq!(invoker.command(), Some(&Command::TurnOffLight(&light)));
        assert_eq!(String::from_utf8_lossy(&out), "Light is turned off\n");

        Ok(())
    }

    #[test]
    fn pressing_twice_repeats_the_command() -> Result<(), InvokerError> {
        let light = Light::new("living room");
        let mut invoker = Invoker::light_remote();
        let mut out = Vec::new();

        invoker.set_command(Command::DimLight { light: &light, level: 30 });
        invoker.press_button(&mut out)?;
        invoker.press_button(&mut out)?;

        assert_eq!(String::from_utf8_lossy(&out), "Light is dimmed to 30%\nLight is dimmed to 30%\n");

        Ok(())
    }
}
