use anyhow::Result;
use colored::Colorize;
use serde_json::{json, Value};

use nyrenx::template::{descriptors, TemplateDescriptor};
use nyrenx::Config;

/// List bundled templates and whether both of their files are present
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let templates = descriptors(&config.templates_dir);

    if json {
        println!("{}", serde_json::to_string_pretty(&listing_json(&templates))?);
        return Ok(());
    }

    println!("Templates in {}:", config.templates_dir.display());
    for t in &templates {
        let status = if t.is_available() {
            "✓".green().bold()
        } else {
            "✗ missing".red().bold()
        };
        println!("  {} {:<12} {}", status, t.id.as_str(), t.src.display());
    }
    Ok(())
}

fn listing_json(templates: &[TemplateDescriptor]) -> Value {
    templates
        .iter()
        .map(|t| {
            json!({
                "id": t.id.as_str(),
                "manifest": t.manifest_path.display().to_string(),
                "archive": t.archive_path.display().to_string(),
                "available": t.is_available(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_listing_marks_incomplete_pairs() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ts.json"), "{}").unwrap();
        fs::write(temp.path().join("ts.zip"), b"").unwrap();
        // js has its defaults but no archive
        fs::write(temp.path().join("js.json"), "{}").unwrap();

        let listing = listing_json(&descriptors(temp.path()));
        let entries = listing.as_array().unwrap();
        assert_eq!(entries.len(), 2);

        let ts = entries.iter().find(|e| e["id"] == "typescript").unwrap();
        assert_eq!(ts["available"], true);
        assert!(ts["archive"].as_str().unwrap().ends_with("ts.zip"));

        let js = entries.iter().find(|e| e["id"] == "javascript").unwrap();
        assert_eq!(js["available"], false);
    }
}
