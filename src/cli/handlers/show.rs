use anyhow::Result;
use colored::Colorize;

use super::print::print_tree;
use crate::contact::FormStatus;
use crate::model::Section;
use crate::{content, router};

pub fn handle_show(section: Section, json: bool) -> Result<()> {
    let tree = router::render(section, &FormStatus::Idle);

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    print_tree(&tree);
    for line in content::FOOTER {
        println!("{}", line.dimmed());
    }
    Ok(())
}
