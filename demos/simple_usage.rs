/// Simple example demonstrating how to use the Anagram Finder library

use anyhow::Result;
use anagram_finder::find_anagrams_in_files;

fn main() -> Result<()> {
    let dir = std::env::temp_dir();
    let keys_path = dir.join("anagram_keys.txt");
    let input_path = dir.join("anagram_input.txt");

    // Create sample files
    std::fs::write(&keys_path, "listen\nEvil\nstop\n")?;
    std::fs::write(
        &input_path,
        "silent\nenlist\nGoogle\nvile\nLIVE\nveil\npots\ntops\nopts\nspot\nstops\n",
    )?;

    println!("Keys: {}", keys_path.display());
    println!("Candidates: {}", input_path.display());

    let results = find_anagrams_in_files(&keys_path, &input_path)?;

    for (key, anagrams) in &results {
        let listing: Vec<&str> = anagrams.iter().map(String::as_str).collect();
        println!("{}: {}", key, listing.join(", "));
    }

    Ok(())
}
