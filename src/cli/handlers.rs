use std::env;
use std::io::{self, Read};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::confirm::{Always, Confirm, TerminalConfirm};
use crate::editor::{Editor, SaveOutcome};
use crate::entity::{color_for, Note, TagColor};
use crate::error::{NotekeeperError, Result};
use crate::project::{find_project_root, Project};
use crate::search::{parse_query, tag_frequency, NoteFilter, Stats};
use crate::storage::FileSlot;
use crate::store::NoteStore;

fn open_project() -> Result<(Project, NoteStore<FileSlot>)> {
    let project = Project::open(&find_project_root())?;
    let store = project.store();
    Ok((project, store))
}

fn use_color(project: &Project) -> bool {
    project.config().color && atty::is(atty::Stream::Stdout)
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

/// "Oct 18, 2026"
fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn render_tags(tags: &[String], color: bool) -> String {
    tags.iter()
        .map(|t| {
            let label = format!("#{}", t);
            if color {
                color_for(t).paint(&label)
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn filter_from(query: &[String], tags: &[String]) -> NoteFilter {
    parse_query(&query.join(" ")).with_tags(tags)
}

fn finish_save(outcome: SaveOutcome) -> Result<Note> {
    match outcome {
        SaveOutcome::Saved(note) => Ok(note),
        SaveOutcome::Blocked => Err(NotekeeperError::Validation(
            "title and content must not be empty".to_string(),
        )),
        SaveOutcome::Missing(id) => Err(NotekeeperError::NoteNotFound(id)),
        SaveOutcome::NotOpen => Err(NotekeeperError::Storage("editor was not open".to_string())),
    }
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;
    let project = Project::init(&root)?;

    println!("Initialized notekeeper project in {}", project.dir().display());
    Ok(())
}

pub fn handle_add(
    title: String,
    content: Option<String>,
    stdin: bool,
    tags: Vec<String>,
    json: bool,
) -> Result<()> {
    let (_project, mut store) = open_project()?;

    let content = if stdin {
        read_stdin()?
    } else {
        content.unwrap_or_default()
    };

    let mut editor = Editor::new();
    editor.open_new();
    editor.set_title(title);
    editor.set_content(content);
    for tag in &tags {
        editor.enter_tags(tag);
    }

    let note = finish_save(editor.save(&mut store))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note ({}) - {}", note.short_id(), note.title);
    }

    Ok(())
}

pub fn handle_edit(
    id: String,
    title: Option<String>,
    content: Option<String>,
    stdin: bool,
    tags: Vec<String>,
    remove_tags: Vec<String>,
    json: bool,
) -> Result<()> {
    let (_project, mut store) = open_project()?;
    let note = store.find(&id)?.clone();

    let mut editor = Editor::new();
    editor.open_existing(&note);

    if let Some(title) = title {
        editor.set_title(title);
    }
    if stdin {
        editor.set_content(read_stdin()?);
    } else if let Some(content) = content {
        editor.set_content(content);
    }
    for tag in &remove_tags {
        editor.remove_tag(tag);
    }
    for tag in &tags {
        editor.enter_tags(tag);
    }

    let updated = finish_save(editor.save(&mut store))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!("Updated note ({}) - {}", updated.short_id(), updated.title);
    }

    Ok(())
}

pub fn handle_delete(id: String, force: bool) -> Result<()> {
    let (_project, mut store) = open_project()?;
    let note = store.find(&id)?.clone();

    let deleted = if force {
        delete_with(&mut store, &note, &mut Always(true))?
    } else {
        delete_with(&mut store, &note, &mut TerminalConfirm)?
    };

    if deleted {
        println!("Deleted note ({}) - {}", note.short_id(), note.title);
    } else {
        println!("Cancelled.");
    }

    Ok(())
}

fn delete_with<C: Confirm>(store: &mut NoteStore<FileSlot>, note: &Note, confirm: &mut C) -> Result<bool> {
    store.delete_confirmed(&note.id, confirm)
}

pub fn handle_get(id: String, json: bool) -> Result<()> {
    let (project, store) = open_project()?;
    let note = store.find(&id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!("Note ({})", note.id);
        println!("Title: {}", note.title);
        println!("Created: {}", note.created_at.format("%Y-%m-%d %H:%M"));
        println!("Updated: {}", note.updated_at.format("%Y-%m-%d %H:%M"));
        if !note.tags.is_empty() {
            println!("Tags: {}", render_tags(&note.tags, use_color(&project)));
        }
        println!("\n{}", note.content);
    }

    Ok(())
}

pub fn handle_list(query: Vec<String>, tags: Vec<String>, json: bool) -> Result<()> {
    let (project, store) = open_project()?;
    let filter = filter_from(&query, &tags);
    let notes = filter.apply(store.notes());

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else if notes.is_empty() {
        if store.is_empty() {
            println!("No notes yet. Create one with 'notekeeper add'.");
        } else {
            println!("No matching notes found.");
        }
    } else {
        let color = use_color(&project);
        println!("Notes:\n");
        for n in notes {
            let tags_str = if n.tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", render_tags(&n.tags, color))
            };
            println!(
                "  ({}) {}{} - updated {}",
                n.short_id(),
                n.title,
                tags_str,
                format_date(&n.updated_at)
            );
        }
    }

    Ok(())
}

pub fn handle_tags(json: bool) -> Result<()> {
    let (project, store) = open_project()?;
    let tags = tag_frequency(store.notes());

    if json {
        #[derive(Serialize)]
        struct TagJson {
            name: String,
            count: usize,
            color: TagColor,
        }

        let json_tags: Vec<TagJson> = tags
            .into_iter()
            .map(|t| TagJson {
                color: color_for(&t.name),
                name: t.name,
                count: t.count,
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&json_tags)?);
    } else if tags.is_empty() {
        println!("No tags found.");
    } else {
        let color = use_color(&project);
        println!("Tags:\n");
        for t in tags {
            let label = if color {
                color_for(&t.name).paint(&t.name)
            } else {
                t.name.clone()
            };
            println!("  {} ({})", label, t.count);
        }
    }

    Ok(())
}

pub fn handle_stats(query: Vec<String>, tags: Vec<String>, json: bool) -> Result<()> {
    let (_project, store) = open_project()?;
    let filter = filter_from(&query, &tags);
    let stats = Stats::compute(store.notes(), &filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Total notes: {}", stats.total_notes);
        println!("Total tags: {}", stats.total_tags);
        println!("Filtered results: {}", stats.filtered);
    }

    Ok(())
}
