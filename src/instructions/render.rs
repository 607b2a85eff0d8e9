use std::io::{self, Write};

use console::style;

use crate::config::Settings;

/// Path the operator is told to copy the SQL from. Referenced in the printed
/// text only; nothing here creates or checks the file.
pub const SQL_FILE_PATH: &str = "/tmp/agent_setup.sql";

/// Width of the `=` rules framing the instruction block.
const RULE_WIDTH: usize = 80;

/// Write the full instruction sequence. The ordering is fixed: banner, REST
/// warning, methods 1-3, closing rule, confirmation lines. Styling is accent
/// only, so every marker substring stays intact for plain-text consumers.
pub fn write_instructions<W: Write>(out: &mut W, settings: &Settings) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    // ── Banner ──
    writeln!(out, "🚀 {}", style("Applying Agent Dashboard Migration").bold())?;
    writeln!(out)?;
    writeln!(out, "{}", rule)?;

    // ── REST warning ──
    // The hosted REST surface cannot run arbitrary SQL, so the operator has
    // to take one of the manual routes below.
    writeln!(out, "⚠️  Note: Direct SQL execution via REST API is not available")?;
    writeln!(out)?;
    writeln!(out, "📌 Please use one of these methods:")?;
    writeln!(out)?;

    // ── Method 1: dashboard UI ──
    writeln!(
        out,
        "{}",
        style("Method 1: Supabase Dashboard (Recommended)").cyan().bold()
    )?;
    writeln!(out, "1. Go to: https://supabase.com/dashboard")?;
    writeln!(out, "2. Select project: {}", settings.project_ref)?;
    writeln!(out, "3. Click SQL Editor → New Query")?;
    writeln!(out, "4. Paste the SQL from {}", SQL_FILE_PATH)?;
    writeln!(out, "5. Click Run")?;
    writeln!(out)?;

    // ── Method 2: Supabase CLI ──
    writeln!(out, "{}", style("Method 2: Supabase CLI").cyan().bold())?;
    writeln!(out, "1. Install: npm install -g supabase")?;
    writeln!(
        out,
        "2. Link project: supabase link --project-ref {}",
        settings.project_ref
    )?;
    writeln!(out, "3. Push migrations: supabase db push")?;
    writeln!(out)?;

    // ── Method 3: direct connection ──
    writeln!(out, "{}", style("Method 3: psql (Direct PostgreSQL)").cyan().bold())?;
    writeln!(out, "1. Get connection string from Supabase Dashboard")?;
    writeln!(out, "2. Run: psql <connection_string> < {}", SQL_FILE_PATH)?;
    writeln!(out)?;

    // ── Closing rule and confirmation ──
    writeln!(out, "{}", rule)?;
    writeln!(out)?;
    writeln!(
        out,
        "{} SQL file prepared at: {}",
        style("✅").green(),
        SQL_FILE_PATH
    )?;
    writeln!(out, "📋 Copy and paste into Supabase Dashboard SQL Editor")?;
    writeln!(out)?;

    Ok(())
}

/// Print the instruction sequence to stdout.
pub fn print_instructions(settings: &Settings) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_instructions(&mut out, settings)
}
