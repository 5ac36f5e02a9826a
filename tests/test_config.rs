use std::time::Duration;

use balloon_pop::config::Config;
use clap::Parser;

#[test]
fn defaults_to_thirty_fps_and_no_seed() {
    let c = Config::try_parse_from(["balloon_pop"]).unwrap();
    assert_eq!(c.fps, 30);
    assert_eq!(c.seed, None);
    assert_eq!(c.log_file, None);
    assert_eq!(c.frame_duration(), Duration::from_secs(1) / 30);
}

#[test]
fn parses_seed_fps_and_log_file() {
    let c = Config::try_parse_from([
        "balloon_pop",
        "--fps",
        "60",
        "--seed",
        "7",
        "--log-file",
        "pop.log",
    ])
    .unwrap();
    assert_eq!(c.fps, 60);
    assert_eq!(c.seed, Some(7));
    assert_eq!(c.log_file.as_deref(), Some(std::path::Path::new("pop.log")));
}

#[test]
fn rejects_zero_fps() {
    assert!(Config::try_parse_from(["balloon_pop", "--fps", "0"]).is_err());
}

#[test]
fn default_matches_parsed_default() {
    let parsed = Config::try_parse_from(["balloon_pop"]).unwrap();
    let default = Config::default();
    assert_eq!(parsed.fps, default.fps);
    assert_eq!(parsed.seed, default.seed);
}
