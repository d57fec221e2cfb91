//! Smart-home devices driven through the remote.
//!
//! ## Module Structure
//!
//! - [`receivers`] - Light, Door, Thermostat, Television, AirConditioner, Curtains
//! - [`commands`] - DeviceCommand wrapping every reversible device action
//! - `execute` - forward/reverse dispatch over the action enum

pub mod commands;
mod execute;
pub mod receivers;

#[cfg(test)]
mod tests;

pub use commands::{DeviceAction, DeviceCommand};
pub use receivers::{
    AirConditioner, CurtainState, Curtains, Door, Light, Shared, Television, Thermostat, shared,
};
