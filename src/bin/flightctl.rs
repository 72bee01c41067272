use clap::{App, Arg};
use colored::*;
use flightctl::config::{BuildProfile, Config, CpuArch};
use flightctl::{safe_call, FlightController, Status};
use tracing::info;

const DEFAULT_CYCLES: &str = "3";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = App::new("flightctl")
        .version("0.1.0")
        .author("Space Systems Engineering Team")
        .about("🚀 Flight Controller Simulator - simulated register bank with safety-capped thrust control")
        .arg(
            Arg::with_name("profile")
                .short("p")
                .long("profile")
                .value_name("PROFILE")
                .help("Build profile selecting the thrust cap and diagnostics")
                .takes_value(true)
                .possible_values(&["ground", "flight"])
                .default_value("ground"),
        )
        .arg(
            Arg::with_name("arch")
                .short("a")
                .long("arch")
                .value_name("ARCH")
                .help("Target architecture tag")
                .takes_value(true)
                .possible_values(&["arm", "riscv"])
                .default_value("riscv"),
        )
        .arg(
            Arg::with_name("cycles")
                .short("n")
                .long("cycles")
                .value_name("N")
                .help("Number of control cycles to run before the fault demo")
                .takes_value(true)
                .default_value(DEFAULT_CYCLES)
                .validator(|v| match v.parse::<u32>() {
                    Ok(_) => Ok(()),
                    Err(_) => Err("Cycle count must be a valid number".into()),
                }),
        )
        .get_matches();

    let profile: BuildProfile = matches.value_of("profile").unwrap_or("ground").parse()?;
    let arch: CpuArch = matches.value_of("arch").unwrap_or("riscv").parse()?;
    let cycles: u32 = matches.value_of("cycles").unwrap_or(DEFAULT_CYCLES).parse()?;

    let config = Config::for_profile(profile, arch);

    // Ground builds log to stderr; flight builds run silent.
    if config.logs_enabled {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .init();
    }

    println!("{}", "🚀 Flight Controller Simulator".bold());
    println!(
        "   Profile: {:?} | Arch: {:?} | Thrust cap: {} N",
        profile, arch, config.max_thrust_n
    );

    let mut controller = FlightController::new(config);
    safe_call!(controller.initialize());

    // Ground self-check: the cap is specified in round tens of Newtons.
    if config.asserts_enabled {
        assert!(
            config.max_thrust_n % 10 == 0,
            "Thrust cap {} is not a round number of Newtons",
            config.max_thrust_n
        );
    }

    for cycle in 0..cycles {
        let status = controller.run_once();
        if status != Status::Ok {
            eprintln!("ERROR {}: {}", status.code(), status.message());
            break;
        }
        info!(cycle, thrust_n = controller.registers().thrust(), "cycle complete");

        // Mutate the sensed temperature to exercise the policy.
        controller.registers_mut().bump_temperature(5);
    }

    // Exercise the fault path: the next cycle still issues its thrust
    // command before the latched fault is reported.
    controller.signal_fault();
    let status = controller.run_once();
    if status != Status::Ok {
        eprintln!("ERROR {}: {}", status.code(), status.message());
        println!("{}", format!("⚠️  Fault latched: {}", status.message()).red());
    }

    controller.shutdown();

    let snapshot = controller.registers().snapshot();
    println!("Final registers: {}", serde_json::to_string_pretty(&snapshot)?);
    println!("{}", "🛑 Simulation complete".bold());

    Ok(())
}
