use crate::db::Database;
use crate::theme::ThemeMode;

pub fn theme(db: &Database, mode: Option<&str>) -> anyhow::Result<()> {
    let current = ThemeMode::load(db)?;

    let next = match mode {
        None => {
            println!("Theme: {current}");
            return Ok(());
        }
        Some("toggle") => current.toggle(),
        Some(other) => other.parse::<ThemeMode>().map_err(|e| anyhow::anyhow!(e))?,
    };

    next.save(db)?;
    println!("Theme: {next}");
    Ok(())
}
