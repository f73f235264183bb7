//! # Signal Monitor Tests

use crtsim_core::common::Registers;
use crtsim_core::soc::{Checkpoint, Device, DeviceEvent, SignalMonitor};

#[test]
fn samples_only_at_checkpoints() {
    let mut monitor = SignalMonitor::new(&[20, 60]);
    let regs = Registers { x: 21 };

    assert_eq!(monitor.sample(19, &regs), None);
    let cp = monitor.sample(20, &regs).unwrap();
    assert_eq!(
        cp,
        Checkpoint {
            cycle: 20,
            registers: regs,
            signal_strength: 420,
            running_sum: 420
        }
    );
    assert_eq!(monitor.sample(21, &regs), None);
    assert_eq!(monitor.sum(), 420);
}

#[test]
fn running_sum_accumulates() {
    let mut monitor = SignalMonitor::new(&[20, 60]);
    let _ = monitor.sample(20, &Registers { x: 21 });
    let cp = monitor.sample(60, &Registers { x: 19 }).unwrap();
    assert_eq!(cp.signal_strength, 1140);
    assert_eq!(cp.running_sum, 1560);
}

#[test]
fn negative_register_subtracts() {
    let mut monitor = SignalMonitor::new(&[10]);
    let cp = monitor.sample(10, &Registers { x: -4 }).unwrap();
    assert_eq!(cp.signal_strength, -40);
    assert_eq!(monitor.sum(), -40);
}

#[test]
fn checkpoints_sorted_and_deduplicated() {
    let monitor = SignalMonitor::new(&[220, 20, 60, 20]);
    assert_eq!(monitor.checkpoints(), &[20, 60, 220]);
}

#[test]
fn idle_after_last_checkpoint() {
    let mut monitor = SignalMonitor::new(&[3]);
    let regs = Registers::default();
    assert_eq!(monitor.name(), "SIGNAL");
    assert!(!monitor.is_idle());
    assert_eq!(monitor.tick(2, &regs), None);
    assert!(!monitor.is_idle());
    assert!(matches!(
        monitor.tick(3, &regs),
        Some(DeviceEvent::Checkpoint(_))
    ));
    assert!(monitor.is_idle());

    monitor.reset();
    assert_eq!(monitor.sum(), 0);
    assert!(!monitor.is_idle());
}

#[test]
fn no_checkpoints_is_idle_immediately() {
    assert!(SignalMonitor::new(&[]).is_idle());
}
