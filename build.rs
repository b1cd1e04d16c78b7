use std::collections::HashMap;
use std::env;
use std::fs;

fn parse_verinfo() -> Result<HashMap<String, HashMap<String, String>>, String> {
    let content = fs::read_to_string(".verinfo")
        .map_err(|e| format!("Failed to read .verinfo: {}", e))?;

    let mut map = HashMap::new();
    let mut current_section = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            current_section = Some(line[1..line.len() - 1].to_string());
        } else if let Some(ref section) = current_section {
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                // 移除引号
                let value = value.trim().trim_matches('"').to_string();

                map.entry(section.clone())
                    .or_insert_with(HashMap::new)
                    .insert(key, value);
            }
        }
    }

    Ok(map)
}

/// (.verinfo 段名, 导出的环境变量名)
const TOOLS: &[(&str, &str)] = &[
    ("EXPRTREE", "EXPRTREE_VERSION"),
    ("EXPRTREE_CHECK", "EXPRTREE_CHECK_VERSION"),
];

fn main() {
    let fallback = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());

    let verinfo = match parse_verinfo() {
        Ok(verinfo) => verinfo,
        Err(e) => {
            println!("cargo:warning=Failed to parse .verinfo: {}", e);
            HashMap::new()
        }
    };

    for (section, var) in TOOLS {
        let version = verinfo
            .get(*section)
            .and_then(|s| s.get("version"))
            .cloned()
            .unwrap_or_else(|| fallback.clone());
        println!("cargo:rustc-env={}={}", var, version);
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.verinfo");
}
