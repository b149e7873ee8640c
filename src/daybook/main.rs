use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use colored::*;
use daybook::api::{CmdMessage, ConfigAction, DaybookApi, MessageLevel, SortOrder};
use daybook::config::DaybookConfig;
use daybook::error::{DaybookError, Result};
use daybook::model::Entry;
use daybook::store::fs::FileStore;
use directories::ProjectDirs;
use std::io::Write;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, SortArg};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: DaybookApi<FileStore>,
    config: DaybookConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::New {
            date,
            emotion,
            content,
        }) => handle_new(&mut ctx, date, emotion, content),
        Some(Commands::List { sort, emotion }) => handle_list(&ctx, sort, emotion),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Edit {
            id,
            date,
            emotion,
            content,
        }) => handle_edit(&mut ctx, id, date, emotion, content),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, SortArg::Latest, None),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("DAYBOOK_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let proj_dirs = ProjectDirs::from("com", "daybook", "daybook")
                .expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    // Same recovery policy as the data file: an unreadable config falls back
    // to defaults with a visible warning instead of dying or going silent.
    let config = match DaybookConfig::load(&data_dir) {
        Ok(config) => config,
        Err(DaybookError::Serialization(e)) => {
            print_messages(&[CmdMessage::warning(format!(
                "Config is unreadable, using defaults: {}",
                e
            ))]);
            DaybookConfig::default()
        }
        Err(e) => return Err(e),
    };
    let store = FileStore::new(data_dir.clone());
    let mut api = DaybookApi::new(store, data_dir);

    // Startup load; surfaces a warning when stored data was unreadable.
    let result = api.load()?;
    print_messages(&result.messages);

    Ok(AppContext { api, config })
}

fn handle_new(
    ctx: &mut AppContext,
    date: Option<String>,
    emotion: Option<u8>,
    content: Vec<String>,
) -> Result<()> {
    let date = parse_date(date.as_deref())?;
    let emotion_id = validate_emotion(emotion.unwrap_or(ctx.config.default_emotion))?;
    let content = content.join(" ");
    if content.trim().is_empty() {
        return Err(DaybookError::Api("Entry text cannot be empty".into()));
    }

    let result = ctx.api.create_entry(date, content, emotion_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, sort: SortArg, emotion: Option<u8>) -> Result<()> {
    let emotion = emotion.map(validate_emotion).transpose()?;
    let sort = match sort {
        SortArg::Latest => SortOrder::Latest,
        SortArg::Oldest => SortOrder::Oldest,
    };
    let result = ctx.api.list_entries(sort, emotion)?;
    print_entries(&result.listed_entries, &ctx.config);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.view_entry(id)?;
    for entry in &result.listed_entries {
        print_full_entry(entry, &ctx.config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: u64,
    date: Option<String>,
    emotion: Option<u8>,
    content: Vec<String>,
) -> Result<()> {
    // Read the current snapshot first; omitted fields carry over, but the
    // core always receives a whole replacement entry.
    let current = ctx.api.view_entry(id)?.listed_entries.remove(0);

    let date = match date {
        Some(d) => parse_date(Some(&d))?,
        None => current.date,
    };
    let emotion_id = match emotion {
        Some(e) => validate_emotion(e)?,
        None => current.emotion_id,
    };
    let content = if content.is_empty() {
        current.content
    } else {
        content.join(" ")
    };

    let result = ctx.api.update_entry(id, date, content, emotion_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64, yes: bool) -> Result<()> {
    if !yes {
        let entry = ctx.api.view_entry(id)?.listed_entries.remove(0);
        let prompt = format!(
            "Delete entry #{} ({})? This cannot be undone. [y/N] ",
            id,
            format_date(&entry, &ctx.config)
        );
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_entry(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.data_path()?;
    if let Some(path) = &result.data_path {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("date-format = {}", config.date_format);
        println!("default-emotion = {}", config.default_emotion);
    }
    print_messages(&result.messages);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush().map_err(DaybookError::Io)?;
    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map_err(DaybookError::Io)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn parse_date(input: Option<&str>) -> Result<DateTime<Utc>> {
    let naive = match input {
        None | Some("today") => Utc::now().date_naive(),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| DaybookError::Api(format!("Invalid date (expected YYYY-MM-DD): {}", s)))?,
    };
    // Diary dates are day-granular; midnight UTC is the stored instant.
    Ok(naive
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc())
}

fn validate_emotion(emotion_id: u8) -> Result<u8> {
    if !(1..=5).contains(&emotion_id) {
        return Err(DaybookError::Api(format!(
            "Emotion must be between 1 and 5, got {}",
            emotion_id
        )));
    }
    Ok(emotion_id)
}

const EMOTION_LABELS: [&str; 5] = ["great", "good", "okay", "bad", "awful"];

fn emotion_label(emotion_id: u8) -> String {
    (emotion_id as usize)
        .checked_sub(1)
        .and_then(|i| EMOTION_LABELS.get(i))
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("emotion {}", emotion_id))
}

fn format_date(entry: &Entry, config: &DaybookConfig) -> String {
    entry.date.format(&config.date_format).to_string()
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

fn print_full_entry(entry: &Entry, config: &DaybookConfig) {
    println!(
        "{} {}  {}",
        format!("#{}", entry.id).yellow(),
        format_date(entry, config).bold(),
        emotion_label(entry.emotion_id).cyan()
    );
    println!("--------------------------------");
    println!("{}", entry.content);
}

const LINE_WIDTH: usize = 100;
const AGE_WIDTH: usize = 14;

fn print_entries(entries: &[Entry], config: &DaybookConfig) {
    if entries.is_empty() {
        println!("No entries yet.");
        return;
    }

    for entry in entries {
        let id_str = format!("#{}. ", entry.id);
        let date_str = format!("{}  ", format_date(entry, config));
        let label = format!("[{}] ", emotion_label(entry.emotion_id));

        let preview: String = entry
            .content
            .chars()
            .take(60)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        let age = format_age(entry.date);

        let fixed_width = id_str.width() + date_str.width() + label.width() + AGE_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let preview_display = truncate_to_width(&preview, available);
        let padding = available.saturating_sub(preview_display.width());

        println!(
            "    {}{}{}{}{}{}",
            id_str.yellow(),
            date_str.bold(),
            label.cyan(),
            preview_display,
            " ".repeat(padding),
            age.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_age(date: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(date);
    let formatter = timeago::Formatter::new();
    let age = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", age, width = AGE_WIDTH)
}
