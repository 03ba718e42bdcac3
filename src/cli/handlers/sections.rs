use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use crate::model::Section;

pub fn handle_sections(json: bool) -> Result<()> {
    if json {
        let sections: Vec<_> = Section::ALL
            .iter()
            .map(|s| json!({ "id": s.id(), "label": s.label(), "icon": s.icon() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    for (i, section) in Section::ALL.iter().enumerate() {
        println!(
            "{} {} {} {}",
            format!("{}.", i + 1).dimmed(),
            section.icon(),
            section.label().bold(),
            format!("({})", section.id()).cyan()
        );
    }
    Ok(())
}
