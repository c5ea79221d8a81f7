use crate::domain::device::{Light, Thermostat};
use std::io::{self, Write};

/// A request bound to its receiver, created for a single button press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command<'a> {
    TurnOnLight(&'a Light),
    TurnOffLight(&'a Light),
    DimLight { light: &'a Light, level: i32 },
    SetTemperature { thermostat: &'a Thermostat, temperature: i32 },
    SwitchToCoolingMode(&'a Thermostat),
    SwitchToHeatingMode(&'a Thermostat),
}

impl Command<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Command::TurnOnLight(_) => "turnOnLight",
            Command::TurnOffLight(_) => "turnOffLight",
            Command::DimLight { .. } => "dimLight",
            Command::SetTemperature { .. } => "setTemperature",
            Command::SwitchToCoolingMode(_) => "switchToCoolingMode",
            Command::SwitchToHeatingMode(_) => "switchToHeatingMode",
        }
    }

    pub fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        match *self {
            Command::TurnOnLight(light) => light.turn_on(out),
            Command::TurnOffLight(light) => light.turn_off(out),
            Command::DimLight { light, level } => light.dim(level, out),
            Command::SetTemperature { thermostat, temperature } => thermostat.set_temperature(temperature, out),
            Command::SwitchToCoolingMode(thermostat) => thermostat.switch_to_cooling_mode(out),
            Command::SwitchToHeatingMode(thermostat) => thermostat.switch_to_heating_mode(out),
        }
    }
}
