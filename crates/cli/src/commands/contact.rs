//! Contact form command.

use clap::Args;

use robotech_client::models::ContactPayload;
use robotech_client::validators::{ContactFormInput, validate_contact_form};

use super::AppContext;

/// Fields for `robo contact`.
#[derive(Debug, Args)]
pub struct ContactArgs {
    /// Your name
    #[arg(short, long)]
    pub name: String,

    /// Your email address
    #[arg(short, long)]
    pub email: String,

    /// Message subject
    #[arg(short, long)]
    pub subject: String,

    /// Message body
    #[arg(short, long)]
    pub message: String,
}

/// Validate and submit the contact form.
pub async fn send(ctx: &AppContext, args: ContactArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = ContactFormInput {
        name: args.name.clone(),
        email: args.email.clone(),
        subject: args.subject.clone(),
        message: args.message.clone(),
    };

    let validation = validate_contact_form(&input);
    if !validation.is_valid() {
        for (field, message) in validation.errors() {
            println!("  {field}: {message}");
        }
        return Err("contact form is invalid".into());
    }

    let payload = ContactPayload {
        name: args.name,
        email: args.email,
        subject: args.subject,
        message: args.message,
    };
    ctx.api.send_message(&payload).await?;

    println!("Message sent. We'll get back to you soon.");
    Ok(())
}
