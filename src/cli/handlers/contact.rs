use anyhow::{Result, bail};
use colored::Colorize;
use serde_json::json;

use crate::contact::{ContactForm, Subject};

pub fn handle_contact(
    name: String,
    email: String,
    subject: Subject,
    message: String,
    json: bool,
) -> Result<()> {
    let mut form = ContactForm::new(name, email, subject, message);

    match form.submit() {
        Ok(ack) => {
            if json {
                let receipt = json!({ "accepted": true, "subject": ack.subject, "message": ack.message });
                println!("{}", serde_json::to_string_pretty(&receipt)?);
            } else {
                println!("{} {}", "✓".green(), ack.message.green());
                println!("{} {}", "Subject:".dimmed(), ack.subject);
            }
            Ok(())
        }
        Err(err) => {
            if json {
                let receipt = json!({ "accepted": false, "message": err.to_string() });
                println!("{}", serde_json::to_string_pretty(&receipt)?);
            }
            bail!(err)
        }
    }
}
