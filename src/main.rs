use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use jotz::api::{CmdMessage, JotzApi, MessageLevel};
use jotz::error::{JotzError, Result};
use jotz::markdown::markdown_to_html;
use jotz::model::Note;
use jotz::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: JotzApi<FileStore>,
    skip_confirm: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Login { name }) => handle_login(&mut ctx, name),
        Some(Commands::Logout) => handle_logout(&mut ctx),
        Some(Commands::Whoami) => handle_whoami(&ctx),
        Some(Commands::Users) => handle_users(&ctx),
        Some(Commands::Create { title, content }) => handle_create(&mut ctx, title, content),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::View { id, html }) => handle_view(&ctx, id, html),
        Some(Commands::Edit { id, title, content }) => handle_edit(&mut ctx, id, title, content),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Search { query }) => handle_search(&ctx, query),
        Some(Commands::Export { out }) => handle_export(&ctx, out),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => match std::env::var_os("JOTZ_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let proj_dirs = ProjectDirs::from("com", "jotz", "jotz")
                    .expect("Could not determine data dir");
                proj_dirs.data_dir().to_path_buf()
            }
        },
    };

    Ok(AppContext {
        api: JotzApi::new(FileStore::new(data_dir)),
        skip_confirm: cli.yes,
    })
}

fn handle_login(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.login(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    if let Some(user) = ctx.api.whoami()?.active_user {
        let prompt = format!("Switch user? You are currently logged in as {}.", user);
        if !ctx.skip_confirm && !confirm(&prompt)? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }
    let result = ctx.api.logout()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_whoami(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.whoami()?;
    if let Some(user) = &result.active_user {
        println!("{}", user);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_users(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.users()?;
    for user in &result.users {
        println!("{}", user);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(ctx: &mut AppContext, title: String, content: Option<String>) -> Result<()> {
    let result = ctx.api.create_note(&title, content.as_deref().unwrap_or_default())?;
    if let Some(note) = result.affected_notes.first() {
        println!("{}", note.id);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: String, html: bool) -> Result<()> {
    let id = parse_id(&id)?;
    let result = ctx.api.view_note(&id)?;
    for note in &result.listed_notes {
        print_full_note(note, html);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: String,
    title: String,
    content: Option<String>,
) -> Result<()> {
    let id = parse_id(&id)?;
    let content = match content {
        Some(content) => content,
        // Keep the existing body when only a new title is given
        None => ctx.api.view_note(&id)?.listed_notes[0].content.clone(),
    };
    let result = ctx.api.update_note(&id, &title, &content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: String) -> Result<()> {
    let id = parse_id(&id)?;
    let note = ctx.api.view_note(&id)?.listed_notes[0].clone();

    let prompt = format!("Delete note \"{}\"?", note.title);
    if !ctx.skip_confirm && !confirm(&prompt)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let result = ctx.api.delete_note(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: String) -> Result<()> {
    let result = ctx.api.search_notes(&query)?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, out: Option<PathBuf>) -> Result<()> {
    let dir = out.unwrap_or_else(|| PathBuf::from("."));
    let result = ctx.api.export_notes(&dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let raw = std::fs::read_to_string(&file).map_err(JotzError::Io)?;
    // Typed deserialization is the import validation: entries missing any
    // required field are rejected here, before the store sees them.
    let notes: Vec<Note> = serde_json::from_str(&raw).map_err(JotzError::Serialization)?;

    let existing = ctx.api.list_notes()?.listed_notes;
    let overwritten = notes
        .iter()
        .filter(|incoming| existing.iter().any(|n| n.id == incoming.id))
        .count();
    if overwritten > 0 {
        let prompt = format!("{} existing notes will be overwritten. Continue?", overwritten);
        if !ctx.skip_confirm && !confirm(&prompt)? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.import_notes(notes)?;
    print_messages(&result.messages);
    Ok(())
}

fn parse_id(s: &str) -> Result<Uuid> {
    Uuid::parse_str(s).map_err(|_| JotzError::Api(format!("Invalid note id: {}", s)))
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush().map_err(JotzError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(JotzError::Io)?;
    Ok(matches!(input.trim(), "y" | "Y" | "yes"))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    // Display recency is a presentation choice; storage order is untouched
    let mut by_recency: Vec<&Note> = notes.iter().collect();
    by_recency.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    for note in by_recency {
        let preview: String = note
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        println!(
            "{}  {} {} {}",
            note.id.to_string().dimmed(),
            note.title.bold(),
            preview.dimmed(),
            format_time_ago(note.updated_at).dimmed()
        );
    }
}

fn print_full_note(note: &Note, html: bool) {
    println!("{}", note.title.bold());
    println!(
        "{}",
        format!(
            "{} · created {} · updated {}",
            note.id,
            note.created_at.format("%Y-%m-%d %H:%M"),
            note.updated_at.format("%Y-%m-%d %H:%M")
        )
        .dimmed()
    );
    println!("--------------------------------");
    if html {
        println!("{}", markdown_to_html(&note.content));
    } else {
        println!("{}", note.content);
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
