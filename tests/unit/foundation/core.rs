use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frame_math() {
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
    assert_eq!(fps.secs_to_frames_ceil(0.5), 30);
    assert_eq!(fps.secs_to_frames_ceil(0.51), 31);
    assert_eq!(fps.secs_to_frames_ceil(0.0), 0);
}
