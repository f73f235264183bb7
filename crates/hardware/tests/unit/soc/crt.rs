//! # CRT Tests
//!
//! Lit-pixel rule, beam raster order, row emission and the parked beam after the last row.

use crtsim_core::common::Registers;
use crtsim_core::config::CrtConfig;
use crtsim_core::soc::devices::{Crt, sprite_covers};
use crtsim_core::soc::{Device, DeviceEvent};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn small(width: usize, height: usize) -> CrtConfig {
    CrtConfig {
        width,
        height,
        ..CrtConfig::default()
    }
}

#[rstest]
#[case(0, 0, true)]
#[case(0, 1, true)]
#[case(0, 2, false)]
#[case(1, 0, true)]
#[case(-1, 0, true)]
#[case(-2, 0, false)]
#[case(39, 38, true)]
#[case(39, 39, true)]
#[case(39, 37, false)]
#[case(40, 39, true)]
#[case(41, 39, false)]
#[case(i64::MIN, 0, false)]
#[case(i64::MAX, 39, false)]
fn lit_pixel_boundaries(#[case] sprite: i64, #[case] column: usize, #[case] lit: bool) {
    assert_eq!(sprite_covers(sprite, column), lit);
}

proptest! {
    #[test]
    fn lit_iff_within_one(sprite in -100i64..100, column in 0usize..40) {
        let c = column as i64;
        let expected = c == sprite - 1 || c == sprite || c == sprite + 1;
        prop_assert_eq!(sprite_covers(sprite, column), expected);
    }
}

#[test]
fn blank_display_is_dark() {
    let crt = Crt::new(&CrtConfig::default());
    assert_eq!(crt.beam(), (0, 0));
    assert_eq!(crt.frame(), vec![".".repeat(40); 6]);
}

#[test]
fn beam_scans_in_raster_order() {
    let mut crt = Crt::new(&small(3, 2));
    assert_eq!(crt.draw(1), None);
    assert_eq!(crt.beam(), (1, 0));
    assert_eq!(crt.draw(1), None);
    assert_eq!(crt.beam(), (2, 0));
    assert_eq!(crt.draw(1), Some((0, "###".to_string())));
    assert_eq!(crt.beam(), (0, 1));
}

#[test]
fn last_row_emitted_then_beam_parks() {
    let mut crt = Crt::new(&small(3, 2));
    let rows: Vec<_> = (0..6).filter_map(|_| crt.draw(0)).collect();
    assert_eq!(
        rows,
        vec![(0, "##.".to_string()), (1, "##.".to_string())]
    );
    assert_eq!(crt.beam(), (0, 2));
    assert!(crt.is_parked());

    // Below the screen: writes discarded, beam walks to the last column and stays.
    for _ in 0..10 {
        assert_eq!(crt.draw(10), None);
    }
    assert_eq!(crt.beam(), (2, 2));
    assert_eq!(crt.frame(), vec!["##.".to_string(), "##.".to_string()]);
}

#[test]
fn continuous_mode_restarts_at_top() {
    let mut config = small(2, 2);
    config.continuous = true;
    let mut crt = Crt::new(&config);

    let first: Vec<_> = (0..4).filter_map(|_| crt.draw(0)).collect();
    assert_eq!(first.len(), 2);
    assert_eq!(crt.beam(), (0, 0));
    assert!(!crt.is_parked());

    let second: Vec<_> = (0..4).filter_map(|_| crt.draw(5)).collect();
    assert_eq!(second, vec![(0, "..".to_string()), (1, "..".to_string())]);
}

#[test]
fn continuous_mode_idles_between_frames() {
    let mut config = small(2, 2);
    config.continuous = true;
    let mut crt = Crt::new(&config);
    let regs = Registers { x: 0 };

    assert!(!crt.is_idle());
    for cycle in 1..=3 {
        let _ = crt.tick(cycle, &regs);
        assert!(!crt.is_idle());
    }
    let _ = crt.tick(4, &regs);
    assert_eq!(crt.frames(), 1);
    assert!(crt.is_idle());

    let _ = crt.tick(5, &regs);
    assert!(!crt.is_idle());

    crt.reset();
    assert_eq!(crt.frames(), 0);
    assert!(!crt.is_idle());
}

#[test]
fn custom_glyphs() {
    let config = CrtConfig {
        width: 4,
        height: 1,
        lit: '@',
        dark: ' ',
        continuous: false,
    };
    let mut crt = Crt::new(&config);
    let row = (0..4).find_map(|_| crt.draw(3));
    assert_eq!(row, Some((0, "  @@".to_string())));
}

#[test]
fn device_tick_reports_rows_and_idles_when_parked() {
    let mut crt = Crt::new(&small(2, 1));
    let regs = Registers { x: 0 };
    assert_eq!(crt.name(), "CRT");
    assert!(!crt.is_idle());
    assert_eq!(crt.tick(1, &regs), None);
    assert_eq!(
        crt.tick(2, &regs),
        Some(DeviceEvent::Row {
            index: 0,
            pixels: "##".to_string()
        })
    );
    assert!(crt.is_idle());

    crt.reset();
    assert_eq!(crt.beam(), (0, 0));
    assert_eq!(crt.frame(), vec!["..".to_string()]);
}
