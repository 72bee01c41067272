use flightctl::config::{
    BuildProfile, Config, ConfigError, CpuArch, FLIGHT_MAX_THRUST_N, GROUND_MAX_THRUST_N,
    STRUCTURAL_LIMIT_N,
};

#[test]
fn test_ground_profile_resolves_debug_constants() {
    let config = Config::for_profile(BuildProfile::Ground, CpuArch::RiscV);

    assert_eq!(config.max_thrust_n, 4000);
    assert!(config.logs_enabled);
    assert!(config.asserts_enabled);
}

#[test]
fn test_flight_profile_strips_diagnostics() {
    let config = Config::for_profile(BuildProfile::Flight, CpuArch::Arm);

    assert_eq!(config.max_thrust_n, 5000);
    assert!(!config.logs_enabled);
    assert!(!config.asserts_enabled);
}

#[test]
fn test_profile_caps_respect_structural_limit() {
    assert!(GROUND_MAX_THRUST_N <= STRUCTURAL_LIMIT_N);
    assert!(FLIGHT_MAX_THRUST_N <= STRUCTURAL_LIMIT_N);
}

#[test]
fn test_profile_and_arch_parse_from_cli_strings() {
    assert_eq!("ground".parse::<BuildProfile>(), Ok(BuildProfile::Ground));
    assert_eq!("FLIGHT".parse::<BuildProfile>(), Ok(BuildProfile::Flight));
    assert_eq!("arm".parse::<CpuArch>(), Ok(CpuArch::Arm));
    assert_eq!("riscv".parse::<CpuArch>(), Ok(CpuArch::RiscV));
}

#[test]
fn test_unknown_selections_rejected() {
    assert!(matches!(
        "mars".parse::<BuildProfile>(),
        Err(ConfigError::UnknownProfile(_))
    ));
    assert!(matches!(
        "x86".parse::<CpuArch>(),
        Err(ConfigError::UnknownArch(_))
    ));
}
