use thiserror::Error;

pub const MENU: &str = "\nChoose an option:
1. Turn on the light
2. Turn off the light
3. Dim the light
4. Set thermostat temperature
5. Switch to cooling mode
6. Switch to heating mode
7. Exit
";

pub const DIM_LEVEL_PROMPT: &str = "Enter dim level (0-100): ";
pub const TEMPERATURE_PROMPT: &str = "Enter temperature: ";

pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a whole number.";
pub const EXITING: &str = "Exiting...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TurnOnLight,
    TurnOffLight,
    DimLight,
    SetTemperature,
    SwitchToCoolingMode,
    SwitchToHeatingMode,
    Exit,
}

impl TryFrom<i32> for MenuChoice {
    type Error = InvalidChoice;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::TurnOnLight),
            2 => Ok(MenuChoice::TurnOffLight),
            3 => Ok(MenuChoice::DimLight),
            4 => Ok(MenuChoice::SetTemperature),
            5 => Ok(MenuChoice::SwitchToCoolingMode),
            6 => Ok(MenuChoice::SwitchToHeatingMode),
            7 => Ok(MenuChoice::Exit),
            other => Err(InvalidChoice(other)),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no menu option {0}")]
pub struct InvalidChoice(pub i32);
