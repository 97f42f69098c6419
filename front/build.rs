use std::{fs, path::Path};

fn parse_memory_size(size: String) -> Option<u64> {
    let size = size.trim().trim_matches('"');
    let Some(split_n) = size.find(' ') else {
        eprintln!("Expected a space in the size str: {size}");
        return None;
    };

    let (num_str, unit) = size.split_at(split_n);

    let Ok(num) = num_str.trim().parse::<u64>() else {
        eprintln!("Invalid number format: {size}, '{num_str}', '{unit}'");
        return None;
    };

    let unit = unit.trim().to_lowercase();

    let multiplier: u64 = match unit.as_str() {
        "b" => 1,
        "kb" => 1_000,
        "kib" => 1_024,
        "mb" => 1_000 * 1_000,
        "mib" => 1_024 * 1_024,
        "gb" => 1_000 * 1_000 * 1_000,
        "gib" => 1_024 * 1_024 * 1_024,
        _ => {
            eprintln!("Unknown unit: {unit}");
            return None;
        }
    };

    Some(num * multiplier)
}

fn main() {
    let rocket_toml_path = Path::new("..").join("Rocket.toml");

    println!("cargo:rerun-if-changed={}", rocket_toml_path.display());
    println!("cargo:rerun-if-env-changed=API_BASE_URL");

    let Ok(contents) = fs::read_to_string(&rocket_toml_path) else {
        panic!("Could not find Rocket.toml config file in {rocket_toml_path:?}");
    };

    let value: toml::Value = contents.parse().expect("Unable to parse TOML");

    let max_upload_size = value
        .get("default")
        .and_then(|defaults| defaults.get("upload"))
        .and_then(|upload| upload.get("max_size"))
        .map(|value| value.to_string())
        .and_then(parse_memory_size)
        .expect("default.upload.max_size not found in Rocket.toml");

    println!("cargo:rustc-env=MAX_UPLOAD_SIZE={}", max_upload_size);
}
