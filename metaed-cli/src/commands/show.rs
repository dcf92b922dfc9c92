use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use metaed_lib::{Game, IssueLog, load_document};

use crate::error::CliError;

/// Print the games in a file, as a summary or as JSON.
pub(crate) fn run_show(file: &Path, json: bool) -> Result<(), CliError> {
    let mut log = IssueLog::new();
    let games = load_document(file, &mut log)?;

    for issue in log.issues() {
        log::warn!("{}:{}", file.display(), issue);
    }

    if json {
        let text = serde_json::to_string_pretty(&games).map_err(|e| CliError::json(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    for (i, game) in games.iter().enumerate() {
        if i > 0 {
            log::info!("");
        }
        print_game(game);
    }
    Ok(())
}

fn print_game(game: &Game) {
    let title = if game.title.is_empty() {
        "(untitled)"
    } else {
        game.title.as_str()
    };
    log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));

    if !game.developers.is_empty() {
        row("Developers", &join(&game.developers));
    }
    if !game.publishers.is_empty() {
        row("Publishers", &join(&game.publishers));
    }
    if !game.genres.is_empty() {
        row("Genres", &join(&game.genres));
    }
    if let Some(date) = game.release_date {
        row("Released", &date.format("%Y-%m-%d").to_string());
    }
    if let Some(players) = &game.player_count {
        row("Players", &players.to_string());
    }
    if let Some(rating) = game.rating {
        row("Rating", &format!("{:.0}%", rating * 100.0));
    }
    if let Some(count) = game.play_count {
        row("Played", &format!("{} times", count));
    }
    if let Some(last) = game.last_played {
        row("Last played", &last.format("%Y-%m-%d %H:%M").to_string());
    }
    if !game.files.is_empty() {
        row("Files", &game.files.join(", "));
    }
    if let Some(launch) = &game.launch_cmd {
        row("Launch", launch);
    }
    for asset in &game.assets {
        row(asset.role.display_name(), &asset.path);
    }
}

fn row(label: &str, value: &str) {
    let label = format!("{:<14}", format!("{}:", label));
    log::info!("  {} {}", label.if_supports_color(Stdout, |t| t.dimmed()), value);
}

fn join<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
