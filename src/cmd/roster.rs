use crate::data::{AppSettings, RosterMember};
use anyhow::Result;

pub fn run() -> Result<()> {
    let settings = AppSettings::load()?;
    write_roster(&settings.roster, &mut std::io::stdout())
}

pub(crate) fn write_roster<W: std::io::Write>(roster: &[RosterMember], out: &mut W) -> Result<()> {
    writeln!(out, "Talent")?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<24} {}", "Name", "Color")?;
    for m in roster {
        writeln!(out, "  {:<24} {}", m.name, m.color)?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} member(s)", roster.len())?;
    Ok(())
}
