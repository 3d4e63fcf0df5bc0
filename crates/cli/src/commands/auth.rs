//! Session commands.

use robotech_client::api::NewUser;
use robotech_client::validators::{validate_email, validate_password};

use super::AppContext;

/// Log in with email and password.
pub async fn login(
    ctx: &AppContext,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = ctx.session.login(email, password).await?;
    println!("Logged in as {} <{}> ({})", user.name, user.email, user.role);
    Ok(())
}

/// Log out and discard the persisted session.
pub fn logout(ctx: &AppContext) {
    ctx.session.logout();
    println!("Logged out.");
}

/// Create an account; validates input before calling the backend.
pub async fn register(
    ctx: &AppContext,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(message) = validate_email(email) {
        return Err(message.into());
    }
    if let Err(message) = validate_password(password) {
        return Err(message.into());
    }

    let new_user = NewUser {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    };

    let user = ctx.session.register(&new_user).await?;
    println!("Account created. Logged in as {} <{}>", user.name, user.email);
    Ok(())
}

/// Print the current session.
pub fn whoami(ctx: &AppContext) {
    match ctx.session.current_user() {
        Some(user) => {
            println!("{} <{}> ({})", user.name, user.email, user.role);
        }
        None => println!("Not logged in."),
    }
}
