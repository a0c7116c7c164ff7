// build.rs

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

const LOCALES_DIR: &str = "locales";
const FALLBACK_LANG: &str = "en";

fn main() {
    let lang = select_language();
    println!("cargo:rustc-env=GODOCO_LANG_EFFECTIVE={}", lang);

    println!("cargo:rerun-if-env-changed=GODOCO_LANG");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}/", LOCALES_DIR);

    // English is always loaded first so every key has a value.
    let mut messages = load_locale(FALLBACK_LANG)
        .unwrap_or_else(|| panic!("Missing fallback locale: {}/{}.toml", LOCALES_DIR, FALLBACK_LANG));

    if lang != FALLBACK_LANG {
        match load_locale(&lang) {
            Some(specific) => messages.extend(specific),
            None => println!(
                "cargo:warning=Locale '{}' not found in {}/. Falling back to '{}'.",
                lang, LOCALES_DIR, FALLBACK_LANG
            ),
        }
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("translations.rs");
    fs::write(&dest_path, render_macro(&messages)).expect("Failed to write translations.rs");
}

/// `lang_*` cargo features win over `GODOCO_LANG`; English is the default.
fn select_language() -> String {
    let mut from_features: Vec<String> = env::vars()
        .filter_map(|(key, _)| key.strip_prefix("CARGO_FEATURE_LANG_").map(str::to_lowercase))
        .collect();
    from_features.sort();

    match from_features.first() {
        Some(first) => {
            if from_features.len() > 1 {
                println!(
                    "cargo:warning=Multiple language features enabled ({:?}). Using '{}'.",
                    from_features, first
                );
            }
            first.clone()
        }
        None => env::var("GODOCO_LANG").unwrap_or_else(|_| FALLBACK_LANG.to_string()),
    }
}

fn load_locale(lang: &str) -> Option<BTreeMap<String, String>> {
    let path = format!("{}/{}.toml", LOCALES_DIR, lang);
    let content = fs::read_to_string(&path).ok()?;
    let parsed = toml::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {}: {}", path, e));
    Some(parsed)
}

/// Emits a `t!` macro with one literal arm per key, so `t!` can be used as a
/// format string. Unknown keys fail to compile.
fn render_macro(messages: &BTreeMap<String, String>) -> String {
    let mut code = String::from("#[macro_export]\nmacro_rules! t {\n");
    for (key, value) in messages {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        code.push_str(&format!("    (\"{}\") => {{ \"{}\" }};\n", key, escaped));
    }
    code.push_str(
        "    ($key:expr) => {{ compile_error!(concat!(\"Missing translation key: \", $key)) }};\n",
    );
    code.push('}');
    code
}
