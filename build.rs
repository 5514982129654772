//! Build script to generate the embedded word list
//!
//! Reads the word list file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");

    generate_word_list(
        "data/words_es.txt",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Five-letter Spanish words used when no remote provider is reachable",
    );

    println!("cargo:rerun-if-changed=data/words_es.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, description: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let mut file = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(file, "/// {description}").unwrap();
    writeln!(file, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(file, "    \"{word}\",").unwrap();
    }
    writeln!(file, "];").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "/// Number of entries in [`{const_name}`]").unwrap();
    writeln!(file, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
}
