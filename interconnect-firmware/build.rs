//! Build script for interconnect-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates slave.toml at compile time
//! - Generates the `SLAVE_CONFIG` constant from it

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Highest 7-bit I2C address
const MAX_I2C_ADDRESS: i64 = 0x7f;

/// GPIO lines on RP2040
const GPIO_COUNT: i64 = 30;

/// Longest timeout the RP2040 watchdog counter can hold
const MAX_WATCHDOG_MS: i64 = 8_388;

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    // cortex-m-rt, embassy-rp boot2 and defmt linker scripts
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate slave.toml and return the parsed document
fn validate_config() -> toml::Value {
    println!("cargo:rerun-if-changed=slave.toml");

    let config_path = Path::new("slave.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: slave.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a slave.toml configuration file.          ║\n\
            ║  Please create one in the interconnect-firmware directory.       ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read slave.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in slave.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_bus(&config, &mut errors);
    validate_addresses(&config, &mut errors);
    validate_gpio(&config, &mut errors);
    validate_timing(&config, &mut errors);

    if !errors.is_empty() {
        report("Invalid slave configuration", &errors);
    }

    println!("cargo:warning=slave.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Abort the build with a list of problems
fn report(title: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Look up `section.key` (dotted sections allowed)
fn lookup<'a>(config: &'a toml::Value, path: &str) -> Option<&'a toml::Value> {
    path.split('.').try_fold(config, |value, key| value.get(key))
}

/// Integer at `path`, checked against an inclusive range
fn integer(
    config: &toml::Value,
    path: &str,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) -> Option<i64> {
    match lookup(config, path)? {
        toml::Value::Integer(v) if range.contains(v) => Some(*v),
        toml::Value::Integer(_) => {
            errors.push(format!(
                "{} must be {}-{}",
                path,
                range.start(),
                range.end()
            ));
            None
        }
        _ => {
            errors.push(format!("{} must be an integer", path));
            None
        }
    }
}

/// Integer pair at `path`, each checked against an inclusive range
fn integer_pair(
    config: &toml::Value,
    path: &str,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) -> Option<[i64; 2]> {
    let values = match lookup(config, path)? {
        toml::Value::Array(values) if values.len() == 2 => values,
        _ => {
            errors.push(format!("{} must be an array of 2 integers", path));
            return None;
        }
    };

    let mut out = [0; 2];
    for (slot, value) in out.iter_mut().zip(values) {
        match value {
            toml::Value::Integer(v) if range.contains(v) => *slot = *v,
            _ => {
                errors.push(format!(
                    "{} entries must be {}-{}",
                    path,
                    range.start(),
                    range.end()
                ));
                return None;
            }
        }
    }
    Some(out)
}

fn line_mask() -> i64 {
    (1 << GPIO_COUNT) - 1
}

fn validate_bus(config: &toml::Value, errors: &mut Vec<String>) {
    let sda = integer(config, "bus.sda_pin", 0..=GPIO_COUNT - 1, errors);
    let scl = integer(config, "bus.scl_pin", 0..=GPIO_COUNT - 1, errors);

    if let (Some(sda), Some(scl)) = (sda, scl) {
        if sda == scl {
            errors.push("bus.sda_pin and bus.scl_pin must differ".to_string());
        }
    }

    if let Some(boot_mask) = integer(config, "gpio.boot_mask", 0..=line_mask(), &mut Vec::new()) {
        for (name, pin) in [("bus.sda_pin", sda), ("bus.scl_pin", scl)] {
            if pin.is_some_and(|pin| boot_mask & (1 << pin) != 0) {
                errors.push(format!("{} is inside gpio.boot_mask", name));
            }
        }
    }
}

fn validate_addresses(config: &toml::Value, errors: &mut Vec<String>) {
    integer_pair(config, "address.straps", 0..=GPIO_COUNT - 1, errors);
    // Straps add up to 3 to the offset
    integer(config, "address.offset", 0x08..=MAX_I2C_ADDRESS - 3, errors);
    integer(config, "address.port", 0x08..=MAX_I2C_ADDRESS, errors);
    integer_pair(config, "address.gpio", 0x08..=MAX_I2C_ADDRESS, errors);
}

fn validate_gpio(config: &toml::Value, errors: &mut Vec<String>) {
    integer(config, "gpio.boot_mask", 0..=line_mask(), errors);
    let select = integer(config, "gpio.role_select_mask", 0..=line_mask(), errors)
        .unwrap_or(0x1e3f_ffff);

    for profile in ["port_profile", "gpio_profile"] {
        for field in ["direction", "output"] {
            let path = format!("gpio.{}.{}", profile, field);
            if let Some(value) = integer(config, &path, 0..=line_mask(), errors) {
                if value & !select != 0 {
                    errors.push(format!("{} sets lines outside role_select_mask", path));
                }
            }
        }
    }
}

fn validate_timing(config: &toml::Value, errors: &mut Vec<String>) {
    let timeout = integer(config, "watchdog.timeout_ms", 0..=MAX_WATCHDOG_MS, errors);

    let tick = integer(config, "heartbeat.tick_ms", 1..=1_000, errors).unwrap_or(10);
    let blink = integer(config, "heartbeat.blink_off_ms", 0..=10_000, errors).unwrap_or(200);
    let flash = integer(config, "heartbeat.message_flash_ms", 0..=1_000, errors).unwrap_or(50);

    // The main loop feeds once per pass and once per printed record
    if let Some(timeout) = timeout.filter(|&t| t != 0) {
        let gap = tick + blink + flash;
        if timeout <= gap {
            errors.push(format!("watchdog.timeout_ms must exceed {} ms", gap));
        }
    }
    for key in ["pulse_ticks", "watchdog_pulse_ticks", "report_ticks"] {
        integer(config, &format!("heartbeat.{}", key), 1..=u16::MAX as i64, errors);
    }
}

/// Write `SLAVE_CONFIG` with the file's values over the defaults
fn generate_config(config: &toml::Value) {
    let get = |path: &str| match lookup(config, path) {
        Some(toml::Value::Integer(v)) => Some(*v),
        _ => None,
    };
    let pair = |path: &str| match lookup(config, path) {
        Some(toml::Value::Array(a)) => Some(
            a.iter()
                .filter_map(toml::Value::as_integer)
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => None,
    };

    let mut fields = Vec::new();
    let mut push = |field: &str, value: Option<String>| {
        if let Some(value) = value {
            fields.push(format!("    {}: {},", field, value));
        }
    };

    push("sda_pin", get("bus.sda_pin").map(|v| v.to_string()));
    push("scl_pin", get("bus.scl_pin").map(|v| v.to_string()));
    push("address_pins", pair("address.straps").map(|v| format!("[{}]", v)));
    push("address_offset", get("address.offset").map(|v| format!("{:#04x}", v)));
    push("port_address", get("address.port").map(|v| format!("{:#04x}", v)));
    push("gpio_addresses", pair("address.gpio").map(|v| format!("[{}]", v)));
    push("boot_mask", get("gpio.boot_mask").map(|v| format!("{:#010x}", v)));
    push("role_select_mask", get("gpio.role_select_mask").map(|v| format!("{:#010x}", v)));
    for (field, section) in [("port_profile", "gpio.port_profile"), ("gpio_profile", "gpio.gpio_profile")] {
        let direction = get(&format!("{}.direction", section));
        let output = get(&format!("{}.output", section));
        if direction.is_some() || output.is_some() {
            let mut parts = Vec::new();
            if let Some(d) = direction {
                parts.push(format!("direction: {:#010x}", d));
            }
            if let Some(o) = output {
                parts.push(format!("output: {:#010x}", o));
            }
            push(
                field,
                Some(format!(
                    "RoleProfile {{ {}, ..SlaveConfig::DEFAULT.{} }}",
                    parts.join(", "),
                    field
                )),
            );
        }
    }
    push("watchdog_timeout_ms", get("watchdog.timeout_ms").map(|v| v.to_string()));

    let heartbeat: Vec<String> = [
        "tick_ms",
        "pulse_ticks",
        "watchdog_pulse_ticks",
        "blink_off_ms",
        "report_ticks",
        "message_flash_ms",
    ]
    .iter()
    .filter_map(|key| get(&format!("heartbeat.{}", key)).map(|v| format!("{}: {}", key, v)))
    .collect();
    if !heartbeat.is_empty() {
        push(
            "heartbeat",
            Some(format!(
                "HeartbeatConfig {{ {}, ..HeartbeatConfig::DEFAULT }}",
                heartbeat.join(", ")
            )),
        );
    }

    let source = format!(
        "/// Slave configuration generated from slave.toml\n\
         pub const SLAVE_CONFIG: SlaveConfig = SlaveConfig {{\n\
         {}\n    \
         ..SlaveConfig::DEFAULT\n\
         }};\n",
        fields.join("\n")
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("slave_config.rs"), source).unwrap();
}
