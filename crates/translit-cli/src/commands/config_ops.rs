use std::fs;

use translit_engine::{settings, standard};

pub fn standards_export() {
    print!("{}", standard::default_toml());
}

pub fn standards_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let defs = die!(standard::parse_standards_toml(&content), "Error: {}");
    for def in &defs {
        println!("OK: {} ({} mappings)", def.id, def.table.len());
    }
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: transliterator.default_standard={}",
        s.transliterator.default_standard
    );
}
