use std::path::PathBuf;

use deflicker_core::error::DeflickerError;
use deflicker_core::frame::Frame;

#[test]
fn test_brightness_percent_exact() {
    let mut frame = Frame::new(0, PathBuf::from("a.png"));
    frame.set_original_luminance(100.0).unwrap();
    assert_eq!(frame.brightness_percent().unwrap(), 100.0);

    frame.current_luminance = 50.0;
    assert_eq!(frame.brightness_percent().unwrap(), 50.0);
}

#[test]
fn test_zero_original_luminance_is_fatal() {
    let frame = Frame::new(0, PathBuf::from("black.png"));
    match frame.brightness_percent() {
        Err(DeflickerError::ZeroLuminance { path }) => {
            assert_eq!(path, PathBuf::from("black.png"));
        }
        other => panic!("expected ZeroLuminance, got {other:?}"),
    }
}

#[test]
fn test_non_finite_luminance_rejected() {
    let mut frame = Frame::new(0, PathBuf::from("a.png"));
    assert!(frame.set_original_luminance(f64::INFINITY).is_err());
    assert!(frame.set_original_luminance(f64::NAN).is_err());
    assert!(frame.set_original_luminance(12.0).is_ok());
}

#[test]
fn test_base_name_strips_directories() {
    let frame = Frame::new(3, PathBuf::from("shoot/day2/IMG_0042.jpg"));
    assert_eq!(frame.base_name(), "IMG_0042.jpg");
}
