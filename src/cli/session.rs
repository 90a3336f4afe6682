//! Login / logout commands

use anyhow::Result;

use questlog::shell;

use super::Context;

pub fn login_command(ctx: &mut Context, name: &str) -> Result<()> {
    let db = ctx.open_db()?;
    shell::sign_in(&db, &mut ctx.config, name)?;
    ctx.save()?;

    // First load creates the profile
    let log = ctx.quest_log()?;
    let state = log.load()?;
    println!(
        "Welcome, {}! Level {} with {} quest(s).",
        name.trim(),
        state.profile.level,
        state.tasks.len()
    );
    Ok(())
}

pub fn logout_command(ctx: &mut Context) -> Result<()> {
    match shell::sign_out(&mut ctx.config) {
        Some(name) => {
            ctx.save()?;
            println!("Signed out {}.", name);
        }
        None => println!("Not signed in."),
    }
    Ok(())
}

pub fn whoami_command(ctx: &Context) -> Result<()> {
    let user_id = shell::current_user(&ctx.config)?;
    let name = ctx.config.session.display_name.as_deref().unwrap_or("?");
    println!("{} ({})", name, user_id);
    Ok(())
}
