//! Forward and reverse execution of device actions.

use std::cell::RefMut;

use crate::command::CommandError;

use super::commands::DeviceAction;
use super::receivers::{CurtainState, Shared};

fn borrow_mut<'a, T>(receiver: &'a Shared<T>, label: &str) -> Result<RefMut<'a, T>, CommandError> {
    receiver
        .try_borrow_mut()
        .map_err(|_| CommandError::failure(label, "device is busy"))
}

/// Perform the action, remembering whatever the reverse needs to restore
pub(super) fn run_forward(action: &mut DeviceAction) -> Result<(), CommandError> {
    let label = action.label();

    match action {
        DeviceAction::SwitchLight { light, on, previous } => {
            let mut light = borrow_mut(light, &label)?;
            *previous = Some(light.is_on);
            if *on {
                light.turn_on();
            } else {
                light.turn_off();
            }
        }
        DeviceAction::SwitchDoor { door, open, previous } => {
            let mut door = borrow_mut(door, &label)?;
            *previous = Some(door.is_open);
            if *open {
                door.open();
            } else {
                door.close();
            }
        }
        DeviceAction::AdjustThermostat {
            thermostat,
            delta,
            previous,
        } => {
            let mut thermostat = borrow_mut(thermostat, &label)?;
            *previous = Some(thermostat.temperature);
            if *delta >= 0.0 {
                thermostat.increase(*delta);
            } else {
                thermostat.decrease(-*delta);
            }
        }
        DeviceAction::ToggleTv { tv } => {
            let mut tv = borrow_mut(tv, &label)?;
            if tv.is_on {
                tv.turn_off();
            } else {
                tv.turn_on();
            }
        }
        DeviceAction::TuneTv { tv, channel, previous } => {
            let mut tv = borrow_mut(tv, &label)?;
            *previous = Some(tv.channel.clone());
            tv.set_channel(channel.clone());
        }
        DeviceAction::SetAcTemperature { ac, target, previous } => {
            let mut ac = borrow_mut(ac, &label)?;
            *previous = Some((ac.temperature, ac.is_on));
            ac.set_temperature(*target);
        }
        DeviceAction::SwitchCurtains {
            curtains,
            state,
            previous,
        } => {
            let mut curtains = borrow_mut(curtains, &label)?;
            *previous = Some(curtains.state);
            match state {
                CurtainState::Open => curtains.open(),
                CurtainState::Closed => curtains.close(),
            }
        }
    }

    Ok(())
}

/// Restore the device to the state it had before the last forward run
pub(super) fn run_reverse(action: &mut DeviceAction) -> Result<(), CommandError> {
    let label = action.label();

    match action {
        DeviceAction::SwitchLight { light, on, previous } => {
            let mut light = borrow_mut(light, &label)?;
            // Undo switch = put it back the way it was
            if previous.take().unwrap_or(!*on) {
                light.turn_on();
            } else {
                light.turn_off();
            }
        }
        DeviceAction::SwitchDoor { door, open, previous } => {
            let mut door = borrow_mut(door, &label)?;
            if previous.take().unwrap_or(!*open) {
                door.open();
            } else {
                door.close();
            }
        }
        DeviceAction::AdjustThermostat {
            thermostat,
            delta,
            previous,
        } => {
            let mut thermostat = borrow_mut(thermostat, &label)?;
            // Put back the exact reading rather than applying -delta
            match previous.take() {
                Some(temperature) => thermostat.restore(temperature),
                None if *delta >= 0.0 => thermostat.decrease(*delta),
                None => thermostat.increase(-*delta),
            }
        }
        DeviceAction::ToggleTv { tv } => {
            let mut tv = borrow_mut(tv, &label)?;
            if tv.is_on {
                tv.turn_off();
            } else {
                tv.turn_on();
            }
        }
        DeviceAction::TuneTv { tv, previous, .. } => {
            let mut tv = borrow_mut(tv, &label)?;
            if let Some(channel) = previous.take() {
                tv.set_channel(channel);
            }
        }
        DeviceAction::SetAcTemperature { ac, previous, .. } => {
            let mut ac = borrow_mut(ac, &label)?;
            if let Some((temperature, was_on)) = previous.take() {
                ac.set_temperature(temperature);
                if !was_on {
                    ac.turn_off();
                }
            }
        }
        DeviceAction::SwitchCurtains {
            curtains,
            state,
            previous,
        } => {
            let mut curtains = borrow_mut(curtains, &label)?;
            let restore = previous.take().unwrap_or(match state {
                CurtainState::Open => CurtainState::Closed,
                CurtainState::Closed => CurtainState::Open,
            });
            match restore {
                CurtainState::Open => curtains.open(),
                CurtainState::Closed => curtains.close(),
            }
        }
    }

    Ok(())
}
