/// Output formatter for anagram results
///
/// This module handles formatting and exporting results in various formats,
/// including console output, JSON, HTML, and CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use handlebars::Handlebars;
use serde_json::{self, json, Value};

use crate::core::finder::AnagramReport;
use crate::core::matcher::AnagramMap;

/// Format anagram results for console output
///
/// # Arguments
///
/// * `results` - Key -> anagrams mapping
/// * `use_markdown` - Whether to format output with markdown triple backticks
///
/// # Returns
///
/// Formatted string for console output, one line per key
pub fn format_results(results: &AnagramMap, use_markdown: &bool) -> String {
    let mut output = String::new();

    if results.is_empty() {
        return if *use_markdown {
            "```\nNo keys to match.\n```\n".to_string()
        } else {
            "No keys to match.\n".to_string()
        };
    }

    // Start markdown code block if requested
    if *use_markdown {
        output.push_str("```\n");
    }

    // BTreeMap/BTreeSet iterate in sorted order
    for (key, anagrams) in results {
        let listing = if anagrams.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            anagrams.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
        };

        output.push_str(&format!("{}: {}\n", key.cyan().bold(), listing));
    }

    if *use_markdown {
        output.push_str("```\n");
    }

    output
}

/// Convert results into a JSON object of key -> sorted array of anagrams
pub fn results_to_json(results: &AnagramMap) -> Value {
    let mut json_output = serde_json::Map::new();

    for (key, anagrams) in results {
        json_output.insert(key.clone(), json!(anagrams));
    }

    Value::Object(json_output)
}

/// Export results to a JSON file
///
/// # Arguments
///
/// * `results` - Key -> anagrams mapping
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn export_results_json(results: &AnagramMap, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, &results_to_json(results))
        .context("Failed to write JSON data")?;

    Ok(())
}

/// Create an HTML report from a finder report
///
/// # Arguments
///
/// * `report` - Results plus run statistics
/// * `output_path` - Path where the HTML file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn create_html_report(report: &AnagramReport, output_path: &Path) -> Result<()> {
    let html = render_html_report(report)?;

    let mut file = File::create(output_path)
        .context(format!("Failed to create HTML output file: {}", output_path.display()))?;

    file.write_all(html.as_bytes())
        .context("Failed to write HTML data")?;

    Ok(())
}

/// Render the HTML report to a string
pub fn render_html_report(report: &AnagramReport) -> Result<String> {
    let mut handlebars = Handlebars::new();

    const HTML_TEMPLATE: &str = r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>Anagram Report</title>
        <style>
            body {
                font-family: Arial, sans-serif;
                line-height: 1.6;
                color: #333;
                max-width: 1200px;
                margin: 0 auto;
                padding: 20px;
            }
            h1 {
                color: #2c3e50;
                border-bottom: 2px solid #3498db;
                padding-bottom: 10px;
            }
            .key {
                background-color: #f8f9fa;
                border-radius: 5px;
                padding: 10px 15px;
                margin-bottom: 10px;
            }
            .count {
                background-color: #3498db;
                color: white;
                border-radius: 20px;
                padding: 2px 8px;
                font-size: 0.8em;
                margin-left: 10px;
            }
            .timestamp {
                color: #7f8c8d;
                font-size: 0.9em;
                margin-bottom: 30px;
            }
            .summary {
                background-color: #e8f4f8;
                padding: 15px;
                border-radius: 5px;
                margin-bottom: 30px;
            }
        </style>
    </head>
    <body>
        <h1>Anagram Report</h1>
        <div class="timestamp">Generated on: {{timestamp}}</div>

        <div class="summary">
            <h2>Summary</h2>
            <p>Distinct keys: {{distinct_keys}}</p>
            <p>Distinct candidates: {{distinct_candidates}}</p>
            <p>Total anagrams: {{total_matches}}</p>
            <p>Keys with anagrams: {{keys_with_matches}}</p>
        </div>

        {{#each keys}}
        <div class="key">
            <strong>{{name}}</strong> <span class="count">{{count}}</span>
            {{#if anagrams}}
            <div>{{#each anagrams}}{{#unless @first}}, {{/unless}}{{this}}{{/each}}</div>
            {{/if}}
        </div>
        {{/each}}
    </body>
    </html>
    "#;

    handlebars
        .register_template_string("report", HTML_TEMPLATE)
        .context("Failed to register HTML template")?;

    let keys: Vec<Value> = report
        .results
        .iter()
        .map(|(key, anagrams)| json!({ "name": key, "count": anagrams.len(), "anagrams": anagrams }))
        .collect();

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let template_data = json!({
        "timestamp": timestamp,
        "distinct_keys": report.distinct_keys(),
        "distinct_candidates": report.distinct_candidates,
        "total_matches": report.total_matches(),
        "keys_with_matches": report.keys_with_matches(),
        "keys": keys,
    });

    handlebars
        .render("report", &template_data)
        .context("Failed to render HTML template")
}

/// Create a CSV report from anagram results
///
/// One row per (key, anagram) pair. Keys without anagrams get a single row
/// with an empty anagram column.
///
/// # Arguments
///
/// * `results` - Key -> anagrams mapping
/// * `output_path` - Path where the CSV file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn create_csv_report(results: &AnagramMap, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create CSV output file: {}", output_path.display()))?;

    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(["Key", "Anagram"])
        .context("Failed to write CSV header")?;

    for (key, anagrams) in results {
        if anagrams.is_empty() {
            writer
                .write_record([key.as_str(), ""])
                .context("Failed to write CSV record")?;
        }

        for anagram in anagrams {
            writer
                .write_record([key.as_str(), anagram.as_str()])
                .context("Failed to write CSV record")?;
        }
    }

    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}

/// Create a summary of a finder report
///
/// # Arguments
///
/// * `report` - Results plus run statistics
///
/// # Returns
///
/// Summary string
pub fn create_summary(report: &AnagramReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n\n", "Anagram Summary".yellow().bold()));
    output.push_str(&format!(
        "Keys: {} ({} distinct)\n",
        report.keys_read,
        report.distinct_keys()
    ));
    output.push_str(&format!(
        "Candidates: {} ({} distinct)\n",
        report.candidates_read, report.distinct_candidates
    ));
    output.push_str(&format!("Total anagrams: {}\n", report.total_matches()));
    output.push_str(&format!(
        "Keys with anagrams: {}\n",
        report.keys_with_matches()
    ));

    // Show keys with the most anagrams
    let mut ranked: Vec<_> = report
        .results
        .iter()
        .filter(|(_, anagrams)| !anagrams.is_empty())
        .collect();

    if !ranked.is_empty() {
        // Stable sort keeps ties in key order
        ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

        output.push_str(&format!("\n{}\n", "Top Keys".cyan().bold()));
        for (i, (key, anagrams)) in ranked.iter().take(10).enumerate() {
            output.push_str(&format!("{}. {}: {}\n", i + 1, key, anagrams.len()));
        }
    }

    output
}
