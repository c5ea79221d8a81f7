use std::io::{self, Write};
use tracing::{info, instrument};

#[derive(PartialEq, Debug)]
pub struct Light {
    name: String,
}

impl Light {
    pub fn new(name: impl Into<String>) -> Self {
        Light { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[instrument(fields(light = self.name), skip_all)]
    pub fn turn_on(&self, out: &mut dyn Write) -> io::Result<()> {
        info!("🟢 Turn on light");
        writeln!(out, "Light is turned on")
    }

    #[instrument(fields(light = self.name), skip_all)]
    pub fn turn_off(&self, out: &mut dyn Write) -> io::Result<()> {
        info!("⚫ Turn off light");
        writeln!(out, "Light is turned off")
    }

    #[instrument(fields(light = self.name), skip(self, out))]
    pub fn dim(&self, level: i32, out: &mut dyn Write) -> io::Result<()> {
        info!("🔅 Dim light to {}%", level);
        writeln!(out, "Light is dimmed to {}%", level)
    }
}

#[derive(PartialEq, Debug)]
pub struct Thermostat {
    name: String,
}

impl Thermostat {
    pub fn new(name: impl Into<String>) -> Self {
        Thermostat { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[instrument(fields(thermostat = self.name), skip(self, out))]
    pub fn set_temperature(&self, temperature: i32, out: &mut dyn Write) -> io::Result<()> {
        info!("🌡️ Set temperature to {}°C", temperature);
        writeln!(out, "Thermostat temperature set to {}°C", temperature)
    }

    #[instrument(fields(thermostat = self.name), skip_all)]
    pub fn switch_to_cooling_mode(&self, out: &mut dyn Write) -> io::Result<()> {
        info!("❄️ Switch to cooling mode");
        writeln!(out, "Thermostat switched to cooling mode")
    }

    #[instrument(fields(thermostat = self.name), skip_all)]
    pub fn switch_to_heating_mode(&self, out: &mut dyn Write) -> io::Result<()> {
        info!("🔥 Switch to heating mode");
        writeln!(out, "Thermostat switched to heating mode")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn written(action: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> io::Result<String> {
        let mut out = Vec::new();
        action(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn light_reports_on_and_off() -> io::Result<()> {
        let light = Light::new("hall");

        assert_eq!(written(|out| light.turn_on(out))?, "Light is turned on\n");
        assert_eq!(written(|out| light.turn_off(out))?, "Light is turned off\n");

        Ok(())
    }

    #[rstest]
    #[case(0)]
    #[case(75)]
    #[case(150)]
    #[case(-20)]
    fn light_dims_to_any_level_unchanged(#[case] level: i32) -> io::Result<()> {
        let light = Light::new("hall");

        assert_eq!(written(|out| light.dim(level, out))?, format!("Light is dimmed to {}%\n", level));

        Ok(())
    }

    #[rstest]
    #[case(21)]
    #[case(-5)]
    #[case(i32::MAX)]
    fn thermostat_sets_any_temperature_unchanged(#[case] temperature: i32) -> io::Result<()> {
        let thermostat = Thermostat::new("upstairs");

        let expected = format!("Thermostat temperature set to {}°C\n", temperature);
        assert_eq!(written(|out| thermostat.set_temperature(temperature, out))?, expected);

        Ok(())
    }

    #[test]
    fn thermostat_reports_mode_switches() -> io::Result<()> {
        let thermostat = Thermostat::new("upstairs");

        assert_eq!(written(|out| thermostat.switch_to_cooling_mode(out))?, "Thermostat switched to cooling mode\n");
        assert_eq!(written(|out| thermostat.switch_to_heating_mode(out))?, "Thermostat switched to heating mode\n");

        Ok(())
    }
}
