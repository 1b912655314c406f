use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use co_core::iching::{HEXAGRAMS, Hexagram, hexagram, hexagram_by_number, trigram};
use co_core::resolve::resolve_hexagram;

use super::{print_reading, render_lines};

/// Accept a six-bit code or a King Wen number.
fn lookup(input: &str) -> Result<&'static Hexagram, String> {
    let input = input.trim();
    if input.len() == 6 && input.bytes().all(|b| b == b'0' || b == b'1') {
        return hexagram(input).ok_or_else(|| format!("no hexagram with code {input}"));
    }
    match input.parse::<u8>() {
        Ok(number) => hexagram_by_number(number)
            .ok_or_else(|| format!("no hexagram number {number}, expected 1-64")),
        Err(_) => Err(format!(
            "invalid hexagram code '{input}': expected six characters of 0 and 1, top line first, or a number 1-64"
        )),
    }
}

pub fn run(input: &str, line: Option<u8>) -> Result<(), String> {
    let entry = lookup(input)?;
    let code = entry.code;

    if let Some(line) = line {
        if !(1..=6).contains(&line) {
            return Err(format!("line must be between 1 and 6, got {line}"));
        }
        let reading = resolve_hexagram(&code[3..], &code[..3], line);
        print_reading(&reading);
        return Ok(());
    }

    println!();
    print!("{}", render_lines(code, None));
    println!();
    println!(
        "  {}  {}  {}",
        format!("#{}", entry.number).dimmed(),
        entry.name.bold(),
        entry.title
    );
    if let (Some(upper), Some(lower)) = (trigram(&code[..3]), trigram(&code[3..])) {
        println!(
            "  {} {}{} ({}) over {}{} ({})",
            "Trigrams".dimmed(),
            upper.symbol,
            upper.name,
            upper.image,
            lower.symbol,
            lower.name,
            lower.image
        );
    }
    Ok(())
}

pub fn list() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Code", "Name", "Title", "Upper", "Lower"]);

    for entry in &HEXAGRAMS {
        let describe = |bits: &str| {
            trigram(bits).map_or_else(String::new, |t| format!("{}{}", t.symbol, t.name))
        };
        table.add_row(vec![
            entry.number.to_string(),
            entry.code.to_string(),
            entry.name.to_string(),
            entry.title.to_string(),
            describe(&entry.code[..3]),
            describe(&entry.code[3..]),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} hexagrams", HEXAGRAMS.len());
    Ok(())
}
