use std::io;
use std::path::PathBuf;

use initpyproj::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_from_create() {
    let err = Error::from_create(io::Error::from(io::ErrorKind::AlreadyExists), "/tmp/demo");
    assert!(matches!(err, Error::AlreadyExists { path } if path == PathBuf::from("/tmp/demo")));

    let err = Error::from_create(io::Error::from(io::ErrorKind::PermissionDenied), "/tmp/demo");
    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::ExternalProcessFailure {
        command: "git init".to_string(),
        code: Some(1),
        diagnostic: "permission denied".to_string(),
    };
    assert_eq!(err.to_string(), "External command `git init` failed with exit code 1: permission denied");

    let err = Error::AlreadyExists { path: PathBuf::from("/tmp/demo") };
    assert_eq!(err.to_string(), "'/tmp/demo' already exists.");
}
