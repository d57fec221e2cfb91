//! Unit tests for device commands.

use proptest::prelude::*;

use crate::command::Command;

use super::*;

/// Execute then undo, checking the receiver lands back where it started
fn assert_round_trip<T: Clone + PartialEq + std::fmt::Debug>(receiver: &Shared<T>, mut command: DeviceCommand) {
    let before = receiver.borrow().clone();

    command.execute().unwrap();
    assert!(command.was_executed());
    command.undo().unwrap();
    assert!(!command.was_executed());

    assert_eq!(*receiver.borrow(), before, "{} did not restore state", command.name());
}

#[test]
fn test_light_round_trips() {
    let light = shared(Light::new("Kitchen"));
    assert_round_trip(&light, DeviceCommand::light_on(&light));
    assert_round_trip(&light, DeviceCommand::light_off(&light));

    light.borrow_mut().is_on = true;
    assert_round_trip(&light, DeviceCommand::light_on(&light));
    assert_round_trip(&light, DeviceCommand::light_off(&light));
}

#[test]
fn test_door_round_trips() {
    let door = shared(Door::new("Front Door"));
    assert_round_trip(&door, DeviceCommand::door_open(&door));
    assert_round_trip(&door, DeviceCommand::door_close(&door));
}

#[test]
fn test_thermostat_round_trips() {
    let thermostat = shared(Thermostat::new(22.0));
    assert_round_trip(&thermostat, DeviceCommand::increase_temp(&thermostat, 1.5));
    assert_round_trip(&thermostat, DeviceCommand::decrease_temp(&thermostat, 2.5));
}

#[test]
fn test_thermostat_round_trip_with_fractional_delta() {
    let thermostat = shared(Thermostat::new(0.2));
    assert_round_trip(&thermostat, DeviceCommand::increase_temp(&thermostat, 0.1));
    assert_round_trip(&thermostat, DeviceCommand::decrease_temp(&thermostat, 0.7));
    assert_eq!(thermostat.borrow().temperature, 0.2);
}

#[test]
fn test_tv_round_trips() {
    let tv = shared(Television::new());
    assert_round_trip(&tv, DeviceCommand::tv_toggle(&tv));
    assert_round_trip(&tv, DeviceCommand::tv_channel(&tv, "News"));
}

#[test]
fn test_ac_round_trip_restores_power() {
    let ac = shared(AirConditioner::new("Living Room"));
    assert!(!ac.borrow().is_on);
    assert_round_trip(&ac, DeviceCommand::ac_temperature(&ac, 20));

    ac.borrow_mut().set_temperature(18);
    assert_round_trip(&ac, DeviceCommand::ac_temperature(&ac, 28));
}

#[test]
fn test_curtains_round_trip() {
    let curtains = shared(Curtains::new("Bedroom"));
    assert_round_trip(&curtains, DeviceCommand::curtains_open(&curtains));
    assert_round_trip(&curtains, DeviceCommand::curtains_close(&curtains));
}

#[test]
fn test_execute_changes_state() {
    let thermostat = shared(Thermostat::new(22.0));
    let mut warmer = DeviceCommand::increase_temp(&thermostat, 1.5);
    warmer.execute().unwrap();
    assert_eq!(thermostat.borrow().temperature, 23.5);

    let ac = shared(AirConditioner::new("Hall"));
    let mut cool = DeviceCommand::ac_temperature(&ac, 20);
    cool.execute().unwrap();
    assert_eq!(ac.borrow().temperature, 20);
    assert!(ac.borrow().is_on);
}

#[test]
fn test_undo_without_execute_is_invalid_state() {
    let ghost = shared(Light::new("Ghost"));
    let mut command = DeviceCommand::light_off(&ghost);

    let err = command.undo().unwrap_err();
    assert!(err.is_invalid_state());
    assert_eq!(err.command(), "LightOff(Ghost)");
    assert!(!ghost.borrow().is_on);
}

#[test]
fn test_busy_receiver_is_execution_failure() {
    let door = shared(Door::new("Garage"));
    let mut command = DeviceCommand::door_open(&door);

    let guard = door.borrow_mut();
    let err = command.execute().unwrap_err();
    drop(guard);

    assert!(!err.is_invalid_state());
    assert!(!command.was_executed());
    assert!(!door.borrow().is_open);
}

#[test]
fn test_labels() {
    let light = shared(Light::new("Kitchen"));
    let thermostat = shared(Thermostat::new(20.0));
    let tv = shared(Television::new());
    let curtains = shared(Curtains::new("Bedroom"));

    assert_eq!(DeviceCommand::light_on(&light).name(), "LightOn(Kitchen)");
    assert_eq!(DeviceCommand::increase_temp(&thermostat, 1.5).name(), "IncreaseTemp(1.5)");
    assert_eq!(DeviceCommand::decrease_temp(&thermostat, 0.5).name(), "DecreaseTemp(0.5)");
    assert_eq!(DeviceCommand::tv_toggle(&tv).name(), "TvToggle");
    assert_eq!(DeviceCommand::curtains_open(&curtains).name(), "CurtainsOpen(Bedroom)");
}

proptest! {
    #[test]
    fn prop_thermostat_undo_restores_exact_reading(start in -50.0f64..50.0, delta in -10.0f64..10.0) {
        let thermostat = shared(Thermostat::new(start));
        let mut command = if delta >= 0.0 {
            DeviceCommand::increase_temp(&thermostat, delta)
        } else {
            DeviceCommand::decrease_temp(&thermostat, -delta)
        };

        command.execute().unwrap();
        command.undo().unwrap();
        prop_assert_eq!(thermostat.borrow().temperature, start);
    }
}
