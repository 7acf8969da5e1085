use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use serde::Serialize;

use translit_engine::api::{self, StandardInfo, TranslitEngine};
use translit_engine::Registry;

#[derive(Serialize)]
struct StandardJson<'a> {
    id: &'a str,
    description: &'a str,
    mappings: usize,
}

/// Install extra standards from `file`, if given, before the registry is used.
pub fn load_standards(file: Option<&str>) {
    if let Some(path) = file {
        die!(api::standards_load_config(path), "Error loading standards: {}");
    }
}

/// Install custom settings from `file`, if given, before any engine is created.
pub fn load_settings(file: Option<&str>) {
    if let Some(path) = file {
        die!(api::settings_load_config(path), "Error loading settings: {}");
    }
}

/// Transliterate `reader` into `writer` line by line, keeping line endings.
///
/// Input need not be valid UTF-8: valid runs are transliterated and any
/// invalid bytes are copied through unchanged.
pub fn convert_stream<R: BufRead, W: Write>(
    engine: &TranslitEngine,
    mut reader: R,
    mut writer: W,
) -> io::Result<()> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        convert_bytes(engine, &line, &mut writer)?;
    }
    writer.flush()
}

fn convert_bytes<W: Write>(
    engine: &TranslitEngine,
    mut bytes: &[u8],
    writer: &mut W,
) -> io::Result<()> {
    while !bytes.is_empty() {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                writer.write_all(engine.transliterate(text).as_bytes())?;
                break;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                let text = std::str::from_utf8(valid).unwrap_or_default();
                writer.write_all(engine.transliterate(text).as_bytes())?;
                // `None` means a truncated sequence at the end; copy it as is.
                let bad = e.error_len().unwrap_or(rest.len());
                writer.write_all(&rest[..bad])?;
                bytes = &rest[bad..];
            }
        }
    }
    Ok(())
}

pub fn convert_cmd(file: Option<&str>, standard: Option<&str>) {
    let engine = match standard {
        Some(id) => die!(TranslitEngine::with_standard(id), "Error: {}"),
        None => die!(TranslitEngine::new(), "Error: {}"),
    };

    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());
    let result = match file {
        Some(path) => {
            let f = die!(File::open(path), "Error opening {path}: {}");
            convert_stream(&engine, BufReader::new(f), writer)
        }
        None => convert_stream(&engine, io::stdin().lock(), writer),
    };
    die!(result, "Error: {}");
}

pub fn standards_json(standards: &[StandardInfo]) -> serde_json::Result<String> {
    let rows: Vec<StandardJson> = standards
        .iter()
        .map(|s| StandardJson {
            id: &s.id,
            description: &s.description,
            mappings: s.mappings,
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

pub fn list_cmd(json: bool) {
    let standards = api::list_standards();
    if json {
        println!("{}", die!(standards_json(&standards), "Error: {}"));
        return;
    }
    for s in &standards {
        println!("{:<16} {:>4}  {}", s.id, s.mappings, s.description);
    }
}

pub fn show_cmd(id: &str) {
    let table = match Registry::global().get_table(id) {
        Some(t) => t,
        None => {
            eprintln!("Error: unknown standard {id}");
            std::process::exit(1);
        }
    };
    for (key, value) in table.entries() {
        println!("{key}\tU+{:04X}\t{value:?}", key as u32);
    }
}
