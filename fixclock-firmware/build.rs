//! Build script for fixclock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clock.toml at compile time
//! - Generates the `CLOCK_CONFIG` constant from it

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    setup_linker(&out_dir);
    let config = validate_config();
    generate_config(&out_dir, &config);
}

/// Set up linker search paths and scripts
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated values from clock.toml
struct ClockToml {
    utc_offset_hours: i64,
    poll_interval_ms: i64,
    baudrate: i64,
    i2c_address: i64,
    i2c_frequency: i64,
    brightness: i64,
    panel_enabled: bool,
    spi_frequency: i64,
    width: i64,
    height: i64,
    rotation: i64,
}

/// Validate clock.toml configuration at compile time
fn validate_config() -> ClockToml {
    // Re-run if clock.toml changes
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: clock.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a clock.toml configuration file.          ║\n\
            ║  Please create one in the fixclock-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read clock.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in clock.toml                        ║\n\
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

    let utc_offset_hours =
        int_in_range(&config, "clock", "utc_offset_hours", -23, 23, &mut errors);
    let poll_interval_ms =
        int_in_range(&config, "clock", "poll_interval_ms", 10, 10_000, &mut errors);
    let baudrate = int_in_range(&config, "gps", "baudrate", 1, 4_000_000, &mut errors);
    let i2c_address = int_in_range(&config, "segment", "i2c_address", 0x70, 0x77, &mut errors);
    let i2c_frequency =
        int_in_range(&config, "segment", "i2c_frequency", 1, 1_000_000, &mut errors);
    let brightness = int_in_range(&config, "segment", "brightness", 0, 15, &mut errors);
    let panel_enabled = boolean(&config, "panel", "enabled", &mut errors);
    let spi_frequency = int_in_range(&config, "panel", "spi_frequency", 1, 62_500_000, &mut errors);
    let width = int_in_range(&config, "panel", "width", 1, 480, &mut errors);
    let height = int_in_range(&config, "panel", "height", 1, 480, &mut errors);
    let rotation = int_in_range(&config, "panel", "rotation", 0, 3, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid clock configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=clock.toml validated successfully");

    ClockToml {
        utc_offset_hours,
        poll_interval_ms,
        baudrate,
        i2c_address,
        i2c_frequency,
        brightness,
        panel_enabled,
        spi_frequency,
        width,
        height,
        rotation,
    }
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

/// Look up `[section] key`, recording an error if it is missing
fn lookup<'a>(
    config: &'a toml::Value,
    section: &str,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<&'a toml::Value> {
    match config.get(section) {
        Some(toml::Value::Table(table)) => {
            let value = table.get(key);
            if value.is_none() {
                errors.push(format!("[{}] missing '{}'", section, key));
            }
            value
        }
        Some(_) => {
            errors.push(format!("[{}] must be a table", section));
            None
        }
        None => {
            errors.push(format!("Missing [{}] section", section));
            None
        }
    }
}

/// Read an integer and check it against an inclusive range
fn int_in_range(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> i64 {
    match lookup(config, section, key, errors) {
        Some(toml::Value::Integer(value)) => {
            if *value < min || *value > max {
                errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            }
            *value
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
        None => 0,
    }
}

fn boolean(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> bool {
    match lookup(config, section, key, errors) {
        Some(toml::Value::Boolean(value)) => *value,
        Some(_) => {
            errors.push(format!("[{}] {} must be true or false", section, key));
            false
        }
        None => false,
    }
}

/// Write `$OUT_DIR/clock_config.rs`
fn generate_config(out_dir: &Path, c: &ClockToml) {
    let source = format!(
        "pub const CLOCK_CONFIG: ClockConfig = ClockConfig {{
    utc_offset_hours: {},
    poll_interval_ms: {},
    gps: GpsConfig {{ baudrate: {} }},
    segment: SegmentConfig {{
        i2c_address: {:#04x},
        i2c_frequency: {},
        brightness: {},
    }},
    panel: PanelConfig {{
        enabled: {},
        spi_frequency: {},
        width: {},
        height: {},
        rotation: {},
    }},
}};
",
        c.utc_offset_hours,
        c.poll_interval_ms,
        c.baudrate,
        c.i2c_address,
        c.i2c_frequency,
        c.brightness,
        c.panel_enabled,
        c.spi_frequency,
        c.width,
        c.height,
        c.rotation,
    );

    fs::write(out_dir.join("clock_config.rs"), source).unwrap();
}
