use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("RTCLOCK_BIND");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_host_env() };

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", " 8080 ");
        std::env::set_var("RTCLOCK_BIND", "127.0.0.1");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");

    unsafe { clear_host_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = HostConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnv { var: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"not-a-port\"");

    unsafe { clear_host_env() };
}

#[test]
fn from_env_rejects_bad_bind() {
    unsafe {
        clear_host_env();
        std::env::set_var("RTCLOCK_BIND", "localhost:80");
    }

    let err = HostConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnv { var: "RTCLOCK_BIND", .. }));

    unsafe { clear_host_env() };
}
