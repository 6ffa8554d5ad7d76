use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;

const KEY_VARS: [(&str, &str); 2] = [
    ("GROQ_API_KEY", "gsk_test"),
    ("ELEVENLABS_API_KEY", "el_test"),
];

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_parley_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("PARLEY_PORT");
        env::remove_var("PARLEY_BIND_ADDR");
        env::remove_var("GROQ_API_KEY");
        env::remove_var("ELEVENLABS_API_KEY");
        env::remove_var("PARLEY_CACHE_CAPACITY");
        env::remove_var("PARLEY_CACHE_TTL_SECS");
        env::remove_var("PARLEY_ASSISTANT_LOCATION");
    }
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_parley_env();

    let config = with_env_vars(&KEY_VARS, || {
        Config::from_env().expect("should parse with defaults")
    });

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert_eq!(config.cache_capacity, 100);
    assert_eq!(config.cache_ttl_secs, 3600);
    assert!(config.assistant_location.is_none());
}

#[test]
#[serial]
fn test_from_env_missing_groq_key() {
    clear_parley_env();

    let result = with_env_vars(&[("ELEVENLABS_API_KEY", "el_test")], Config::from_env);

    assert!(matches!(
        result,
        Err(ConfigError::MissingEnvVar {
            name: "GROQ_API_KEY"
        })
    ));
}

#[test]
#[serial]
fn test_from_env_missing_elevenlabs_key() {
    clear_parley_env();

    let result = with_env_vars(&[("GROQ_API_KEY", "gsk_test")], Config::from_env);

    assert!(matches!(
        result,
        Err(ConfigError::MissingEnvVar {
            name: "ELEVENLABS_API_KEY"
        })
    ));
}

#[test]
#[serial]
fn test_from_env_blank_key_is_missing() {
    clear_parley_env();

    let result = with_env_vars(
        &[("GROQ_API_KEY", "   "), ("ELEVENLABS_API_KEY", "el_test")],
        Config::from_env,
    );

    assert!(matches!(result, Err(ConfigError::MissingEnvVar { .. })));
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_parley_env();

    let vars = [
        ("GROQ_API_KEY", "gsk_test"),
        ("ELEVENLABS_API_KEY", "el_test"),
        ("PARLEY_PORT", "3000"),
        ("PARLEY_BIND_ADDR", "0.0.0.0"),
        ("PARLEY_CACHE_CAPACITY", "10"),
        ("PARLEY_CACHE_TTL_SECS", "60"),
        ("PARLEY_ASSISTANT_LOCATION", "Austin, TX"),
    ];

    let config = with_env_vars(&vars, || Config::from_env().expect("should parse overrides"));

    assert_eq!(config.port, 3000);
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    assert_eq!(config.cache_capacity, 10);
    assert_eq!(config.cache_ttl(), std::time::Duration::from_secs(60));
    assert_eq!(config.assistant_location.as_deref(), Some("Austin, TX"));
}

#[test]
#[serial]
fn test_from_env_invalid_port() {
    clear_parley_env();

    let mut vars = KEY_VARS.to_vec();
    vars.push(("PARLEY_PORT", "not-a-port"));
    let result = with_env_vars(&vars, Config::from_env);
    assert!(matches!(result, Err(ConfigError::PortParseError { .. })));
}

#[test]
#[serial]
fn test_from_env_port_zero() {
    clear_parley_env();

    let mut vars = KEY_VARS.to_vec();
    vars.push(("PARLEY_PORT", "0"));
    let result = with_env_vars(&vars, Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
}

#[test]
#[serial]
fn test_from_env_invalid_bind_addr() {
    clear_parley_env();

    let mut vars = KEY_VARS.to_vec();
    vars.push(("PARLEY_BIND_ADDR", "localhost"));
    let result = with_env_vars(&vars, Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidBindAddr { .. })));
}

#[test]
#[serial]
fn test_from_env_zero_cache_capacity() {
    clear_parley_env();

    let mut vars = KEY_VARS.to_vec();
    vars.push(("PARLEY_CACHE_CAPACITY", "0"));
    let result = with_env_vars(&vars, Config::from_env);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidCacheCapacity { .. })
    ));
}

#[test]
#[serial]
fn test_validate_rejects_blank_keys() {
    clear_parley_env();

    let mut config = with_env_vars(&KEY_VARS, || Config::from_env().expect("should parse"));
    assert!(config.validate().is_ok());

    config.groq_api_key = String::new();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingEnvVar { .. })
    ));
}
