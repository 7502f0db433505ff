//! Human-readable reports for every terminal state of a chat call.

use std::io::{self, Write};

use colored::Colorize;
use uniroute_config::ConfigError;

use crate::error::ChatError;
use crate::response::ChatResponse;

pub fn render_response<W: Write>(out: &mut W, response: &ChatResponse) -> io::Result<()> {
    writeln!(out, "{}", "✅ Chat Response:".green().bold())?;
    writeln!(out)?;

    if let Some(content) = response.first_content() {
        writeln!(out, "💬 {}", content)?;
    }
    writeln!(out)?;

    if let Some(usage) = &response.usage {
        writeln!(out, "{}", format!("📊 Tokens: {}", usage.summary()).dimmed())?;
    }

    Ok(())
}

pub fn render_config_error<W: Write>(out: &mut W, err: &ConfigError) -> io::Result<()> {
    writeln!(out, "{}", format!("❌ Error: {}", err).red())?;

    if let ConfigError::MissingCredential { key } = err {
        writeln!(out)?;
        writeln!(out, "Get your API key:")?;
        writeln!(out, "  1. Run: uniroute keys create")?;
        writeln!(out, "  2. Export: export {}='ur_your_key_here'", key)?;
    }

    Ok(())
}

pub fn render_chat_error<W: Write>(out: &mut W, err: &ChatError) -> io::Result<()> {
    let headline = match err {
        ChatError::Decode { .. } => format!("❌ Error parsing response: {}", err),
        _ => format!("❌ Error sending request: {}", err),
    };
    writeln!(out, "{}", headline.red())?;

    if let Some(body) = err.body() {
        writeln!(out, "Response: {}", body)?;
    }

    if err.is_connection() {
        writeln!(out)?;
        writeln!(out, "{}", "💡 Make sure UniRoute server is running:".yellow())?;
        writeln!(out, "  make dev")?;
    }

    Ok(())
}
