//! Simulated smart-home receivers.
//!
//! Receivers are plain stateful objects. Commands hold them through
//! [`Shared`] handles so several commands (and their clones in history) can
//! act on the same device.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::info;

/// Handle to a receiver shared between commands
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a receiver in a [`Shared`] handle
pub fn shared<T>(receiver: T) -> Shared<T> {
    Rc::new(RefCell::new(receiver))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub location: String,
    pub is_on: bool,
}

impl Light {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            is_on: false,
        }
    }

    pub fn turn_on(&mut self) {
        self.is_on = true;
        info!("[Light] {} - ON", self.location);
    }

    pub fn turn_off(&mut self) {
        self.is_on = false;
        info!("[Light] {} - OFF", self.location);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Door {
    pub name: String,
    pub is_open: bool,
}

impl Door {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_open: false,
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
        info!("[Door] {} - OPEN", self.name);
    }

    pub fn close(&mut self) {
        self.is_open = false;
        info!("[Door] {} - CLOSED", self.name);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Thermostat {
    pub temperature: f64,
}

impl Thermostat {
    pub fn new(initial: f64) -> Self {
        Self {
            temperature: initial,
        }
    }

    pub fn increase(&mut self, delta: f64) {
        self.temperature += delta;
        info!("[Thermostat] +{delta:.1} -> {:.1}°C", self.temperature);
    }

    pub fn decrease(&mut self, delta: f64) {
        self.temperature -= delta;
        info!("[Thermostat] -{delta:.1} -> {:.1}°C", self.temperature);
    }

    /// Put back an earlier reading
    pub fn restore(&mut self, temperature: f64) {
        self.temperature = temperature;
        info!("[Thermostat] restored to {:.1}°C", self.temperature);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Television {
    pub is_on: bool,
    pub channel: String,
}

impl Default for Television {
    fn default() -> Self {
        Self {
            is_on: false,
            channel: "None".to_string(),
        }
    }
}

impl Television {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&mut self) {
        self.is_on = true;
        info!("[TV] ON");
    }

    pub fn turn_off(&mut self) {
        self.is_on = false;
        info!("[TV] OFF");
    }

    pub fn set_channel(&mut self, channel: impl Into<String>) {
        self.channel = channel.into();
        info!("[TV] channel set to {}", self.channel);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AirConditioner {
    pub location: String,
    pub temperature: i32,
    pub is_on: bool,
}

impl AirConditioner {
    pub const DEFAULT_TEMPERATURE: i32 = 25;

    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            temperature: Self::DEFAULT_TEMPERATURE,
            is_on: false,
        }
    }

    /// Set the target temperature, switching the unit on
    pub fn set_temperature(&mut self, temperature: i32) {
        let previous = self.temperature;
        self.is_on = true;
        self.temperature = temperature;
        info!(
            "[AC] {} - set to {}°C (was {}°C)",
            self.location, self.temperature, previous
        );
    }

    pub fn turn_off(&mut self) {
        self.is_on = false;
        info!("[AC] {} - OFF", self.location);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurtainState {
    Open,
    #[default]
    Closed,
}

impl fmt::Display for CurtainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Closed => f.write_str("closed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Curtains {
    pub location: String,
    pub state: CurtainState,
}

impl Curtains {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            state: CurtainState::Closed,
        }
    }

    pub fn open(&mut self) {
        self.state = CurtainState::Open;
        info!("[Curtains] {} - {}", self.location, self.state);
    }

    pub fn close(&mut self) {
        self.state = CurtainState::Closed;
        info!("[Curtains] {} - {}", self.location, self.state);
    }
}
