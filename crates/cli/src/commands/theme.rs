//! Theme commands.

use robotech_client::stores::Theme;

use super::AppContext;

/// Print the current theme.
pub fn show(ctx: &AppContext) {
    println!("{}", ctx.theme.current());
}

/// Toggle between light and dark.
pub fn toggle(ctx: &AppContext) {
    let mode = ctx.theme.toggle();
    println!("Theme set to {mode}.");
}

/// Set a specific theme mode.
pub fn set(ctx: &AppContext, mode: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mode: Theme = mode.parse()?;
    ctx.theme.set(mode);
    println!("Theme set to {mode}.");
    Ok(())
}
