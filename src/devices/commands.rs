//! Device command enum for the smart-home remote.

use crate::command::{Command, CommandError};

use super::execute::{run_forward, run_reverse};
use super::receivers::{AirConditioner, CurtainState, Curtains, Door, Light, Shared, Television, Thermostat};

/// A reversible action against one device
#[derive(Clone, Debug)]
pub enum DeviceAction {
    /// Light switched on or off
    SwitchLight {
        light: Shared<Light>,
        on: bool,
        /// State before the last execute
        previous: Option<bool>,
    },
    /// Door opened or closed
    SwitchDoor {
        door: Shared<Door>,
        open: bool,
        previous: Option<bool>,
    },
    /// Thermostat nudged by `delta` degrees (negative to cool)
    AdjustThermostat {
        thermostat: Shared<Thermostat>,
        delta: f64,
        previous: Option<f64>,
    },
    /// Television power flipped
    ToggleTv { tv: Shared<Television> },
    /// Television switched to a channel
    TuneTv {
        tv: Shared<Television>,
        channel: String,
        previous: Option<String>,
    },
    /// Air conditioner set to a target temperature
    SetAcTemperature {
        ac: Shared<AirConditioner>,
        target: i32,
        /// Temperature and power before the last execute
        previous: Option<(i32, bool)>,
    },
    /// Curtains opened or closed
    SwitchCurtains {
        curtains: Shared<Curtains>,
        state: CurtainState,
        previous: Option<CurtainState>,
    },
}

impl DeviceAction {
    /// Display name, in the style of the remote's button labels
    pub fn label(&self) -> String {
        match self {
            Self::SwitchLight { light, on, .. } => {
                let verb = if *on { "On" } else { "Off" };
                format!("Light{verb}({})", peek(light, |l| l.location.clone()))
            }
            Self::SwitchDoor { door, open, .. } => {
                let verb = if *open { "Open" } else { "Close" };
                format!("Door{verb}({})", peek(door, |d| d.name.clone()))
            }
            Self::AdjustThermostat { delta, .. } if *delta >= 0.0 => format!("IncreaseTemp({delta:.1})"),
            Self::AdjustThermostat { delta, .. } => format!("DecreaseTemp({:.1})", -delta),
            Self::ToggleTv { .. } => "TvToggle".to_string(),
            Self::TuneTv { channel, .. } => format!("TvChannel({channel})"),
            Self::SetAcTemperature { ac, target, .. } => {
                format!("AcTemperature({}, {target})", peek(ac, |a| a.location.clone()))
            }
            Self::SwitchCurtains { curtains, state, .. } => {
                let verb = match state {
                    CurtainState::Open => "Open",
                    CurtainState::Closed => "Close",
                };
                format!("Curtains{verb}({})", peek(curtains, |c| c.location.clone()))
            }
        }
    }
}

/// Read a receiver field for a label without panicking if it is mid-update
fn peek<T>(receiver: &Shared<T>, field: impl FnOnce(&T) -> String) -> String {
    receiver
        .try_borrow()
        .map(|r| field(&r))
        .unwrap_or_else(|_| "busy".to_string())
}

/// A [`DeviceAction`] plus its execution flag
#[derive(Clone, Debug)]
pub struct DeviceCommand {
    action: DeviceAction,
    executed: bool,
}

impl DeviceCommand {
    pub fn new(action: DeviceAction) -> Self {
        Self {
            action,
            executed: false,
        }
    }

    pub fn light_on(light: &Shared<Light>) -> Self {
        Self::switch_light(light, true)
    }

    pub fn light_off(light: &Shared<Light>) -> Self {
        Self::switch_light(light, false)
    }

    fn switch_light(light: &Shared<Light>, on: bool) -> Self {
        Self::new(DeviceAction::SwitchLight {
            light: light.clone(),
            on,
            previous: None,
        })
    }

    pub fn door_open(door: &Shared<Door>) -> Self {
        Self::switch_door(door, true)
    }

    pub fn door_close(door: &Shared<Door>) -> Self {
        Self::switch_door(door, false)
    }

    fn switch_door(door: &Shared<Door>, open: bool) -> Self {
        Self::new(DeviceAction::SwitchDoor {
            door: door.clone(),
            open,
            previous: None,
        })
    }

    pub fn increase_temp(thermostat: &Shared<Thermostat>, delta: f64) -> Self {
        Self::new(DeviceAction::AdjustThermostat {
            thermostat: thermostat.clone(),
            delta: delta.abs(),
            previous: None,
        })
    }

    pub fn decrease_temp(thermostat: &Shared<Thermostat>, delta: f64) -> Self {
        Self::new(DeviceAction::AdjustThermostat {
            thermostat: thermostat.clone(),
            delta: -delta.abs(),
            previous: None,
        })
    }

    pub fn tv_toggle(tv: &Shared<Television>) -> Self {
        Self::new(DeviceAction::ToggleTv { tv: tv.clone() })
    }

    pub fn tv_channel(tv: &Shared<Television>, channel: impl Into<String>) -> Self {
        Self::new(DeviceAction::TuneTv {
            tv: tv.clone(),
            channel: channel.into(),
            previous: None,
        })
    }

    pub fn ac_temperature(ac: &Shared<AirConditioner>, target: i32) -> Self {
        Self::new(DeviceAction::SetAcTemperature {
            ac: ac.clone(),
            target,
            previous: None,
        })
    }

    pub fn curtains_open(curtains: &Shared<Curtains>) -> Self {
        Self::switch_curtains(curtains, CurtainState::Open)
    }

    pub fn curtains_close(curtains: &Shared<Curtains>) -> Self {
        Self::switch_curtains(curtains, CurtainState::Closed)
    }

    fn switch_curtains(curtains: &Shared<Curtains>, state: CurtainState) -> Self {
        Self::new(DeviceAction::SwitchCurtains {
            curtains: curtains.clone(),
            state,
            previous: None,
        })
    }

    pub fn action(&self) -> &DeviceAction {
        &self.action
    }
}

impl Command for DeviceCommand {
    fn execute(&mut self) -> Result<(), CommandError> {
        run_forward(&mut self.action)?;
        self.executed = true;
        Ok(())
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        if !self.executed {
            return Err(CommandError::invalid_state(self.name()));
        }
        run_reverse(&mut self.action)?;
        self.executed = false;
        Ok(())
    }

    fn was_executed(&self) -> bool {
        self.executed
    }

    fn name(&self) -> String {
        self.action.label()
    }
}
