use clap::Parser;
use notekeeper::cli::{
    handle_add, handle_delete, handle_edit, handle_get, handle_init, handle_list, handle_stats,
    handle_tags, Cli, Commands,
};
use notekeeper::project::{find_project_root, Project};

fn main() {
    let cli = Cli::parse();

    let level = Project::open(&find_project_root())
        .map(|p| p.config().log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    notekeeper::logging::init(&level);

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Add {
            title,
            content,
            stdin,
            tags,
            json,
        } => handle_add(title, content, stdin, tags, json),
        Commands::Edit {
            id,
            title,
            content,
            stdin,
            tags,
            remove_tags,
            json,
        } => handle_edit(id, title, content, stdin, tags, remove_tags, json),
        Commands::Delete { id, force } => handle_delete(id, force),
        Commands::Get { id, json } => handle_get(id, json),
        Commands::List { query, tags, json } => handle_list(query, tags, json),
        Commands::Tags { json } => handle_tags(json),
        Commands::Stats { query, tags, json } => handle_stats(query, tags, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
