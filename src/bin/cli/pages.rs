//! The "pages" of the terminal client

use std::io;
use std::io::Write;

use anyhow::bail;
use anyhow::Result;

use crate::api::ApiClient;
use crate::api::Note;

const SNIPPET_LENGTH: usize = 80;

/// List view: all notes as cards, or the empty-state prompt
pub async fn list(client: &ApiClient) -> Result<()> {
    let notes = client.list_notes().await?;

    if notes.is_empty() {
        println!("No notes yet");
        println!("Ready to organize your thoughts? Create your first note:");
        println!();
        println!("    noteboard-cli create --title <title> --content <content>");

        return Ok(());
    }

    for note in &notes {
        print_card(note);
    }

    Ok(())
}

/// Detail view: a single note in full
pub async fn show(client: &ApiClient, id: &str) -> Result<()> {
    let note = client.get_note(id).await?;

    println!("{}", note.title);
    println!("created {}  updated {}", date_of(&note.created_at), date_of(&note.updated_at));
    println!();
    println!("{}", note.content);

    Ok(())
}

/// Create view
pub async fn create(client: &ApiClient, title: &str, content: &str) -> Result<()> {
    require_fields(title, content)?;

    let message = client.create_note(title, content).await?;
    println!("{message}");

    Ok(())
}

/// In-place edit on the detail view
pub async fn edit(client: &ApiClient, id: &str, title: &str, content: &str) -> Result<()> {
    require_fields(title, content)?;

    let message = client.update_note(id, title, content).await?;
    println!("{message}");

    Ok(())
}

/// Delete, guarded by a confirmation prompt
pub async fn delete(client: &ApiClient, id: &str, yes: bool) -> Result<()> {
    if !yes && !confirm("Are you sure you want to delete this note?")? {
        println!("Aborted");

        return Ok(());
    }

    let message = client.delete_note(id).await?;
    println!("{message}");

    Ok(())
}

/// Same required-field guard the server applies, saves a round trip
fn require_fields(title: &str, content: &str) -> Result<()> {
    if title.is_empty() || content.is_empty() {
        bail!("Title and content are required");
    }

    Ok(())
}

fn print_card(note: &Note) {
    println!("{}  ({})", note.title, date_of(&note.created_at));
    println!("    {}", snippet(&note.content));
    println!("    id: {}", note.id);
    println!();
}

/// First line of the content, shortened to card size
fn snippet(content: &str) -> String {
    let line = content.lines().next().unwrap_or_default();

    let mut snippet = line
        .chars()
        .take(SNIPPET_LENGTH)
        .collect::<String>();

    if line.chars().count() > SNIPPET_LENGTH || content.lines().count() > 1 {
        snippet.push('…');
    }

    snippet
}

/// The date part of an API timestamp
fn date_of(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_keeps_short_content() {
        assert_eq!(snippet("Milk, eggs"), "Milk, eggs".to_string());
    }

    #[test]
    fn test_snippet_shortens_long_content() {
        let content = "x".repeat(SNIPPET_LENGTH + 1);
        let snippet = snippet(&content);
        assert!(snippet.ends_with('…'));
    }

    #[test]
    fn test_snippet_takes_the_first_line() {
        assert_eq!(snippet("first\nsecond"), "first…".to_string());
    }

    #[test]
    fn test_date_of() {
        assert_eq!(date_of("2026-08-25T09:30:00.123456"), "2026-08-25");
    }
}
