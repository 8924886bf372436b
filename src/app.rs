use crate::core::JukeboxCore;
use crate::error::CatalogError;
use crate::model::Song;
use anyhow::Result;
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

/// Line-oriented front end. Owns no catalog data: it parses commands,
/// calls the core, and prints the returned records or error messages.
#[derive(Debug, Default)]
pub struct AppOptions {
    pub seed_demo: bool,
}

pub fn run(options: AppOptions) -> Result<()> {
    let mut core = JukeboxCore::new();
    if options.seed_demo {
        seed_demo(&mut core);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "jukebox - type 'help' for commands")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match execute(&mut core, line.trim()) {
            Reply::Text(text) => {
                if !text.is_empty() {
                    writeln!(stdout, "{text}")?;
                }
            }
            Reply::Quit => break,
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Reply {
    Text(String),
    Quit,
}

fn execute(core: &mut JukeboxCore, line: &str) -> Reply {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let result = match command {
        "" => Ok(String::new()),
        "help" => Ok(String::from(HELP)),
        "quit" | "exit" => return Reply::Quit,
        "add" => parse_song(rest).and_then(|song| {
            let shown = song.to_string();
            core.add_song(song)?;
            Ok(format!("added {shown}"))
        }),
        "update" => parse_song(rest).and_then(|song| {
            let id = song.id.clone();
            let shown = song.to_string();
            core.update_song(&id, song)?;
            Ok(format!("updated {shown}"))
        }),
        "delete" => require_arg(rest, "delete <id>")
            .and_then(|id| core.delete_song(id))
            .map(|removed| format!("deleted {removed}")),
        "list" => Ok(render_songs(core.songs())),
        "search" => require_arg(rest, "search <title>").map(|title| {
            match core.search_title(title) {
                Some(song) => song.to_string(),
                None => format!("no song titled '{title}'"),
            }
        }),
        "artists" => Ok(render_artists(core)),
        "similar" => require_arg(rest, "similar <id>").map(|id| {
            let names: Vec<String> = core
                .graph
                .neighbors(id)
                .filter_map(|other| core.library.find_by_id(other))
                .map(Song::to_string)
                .collect();
            if names.is_empty() {
                format!("no similar songs for {id}")
            } else {
                names.join("\n")
            }
        }),
        "pladd" => require_arg(rest, "pladd <id>")
            .and_then(|id| core.add_to_playlist(id).map(|()| format!("{id} added to playlist"))),
        "plremove" => require_arg(rest, "plremove <id>")
            .and_then(|id| core.remove_from_playlist(id))
            .map(|removed| format!("removed {removed} from playlist")),
        "pllist" => Ok(render_songs(core.playlist.iter())),
        "plplay" => require_arg(rest, "plplay <index>")
            .and_then(parse_index)
            .and_then(|index| core.play_from_playlist(index))
            .map(|song| format!("playing {song}")),
        "queue" => require_arg(rest, "queue <id>")
            .and_then(|id| core.enqueue_up_next(id).map(|()| format!("{id} queued up next"))),
        "play" => require_arg(rest, "play <id>")
            .and_then(|id| core.play_by_id(id, false))
            .map(|song| format!("playing {song}")),
        "stop" => {
            core.stop();
            Ok(String::from("stopped"))
        }
        "next" => Ok(match core.play_next() {
            Some(song) => format!("playing {song}"),
            None => String::from("nothing to play"),
        }),
        "prev" => Ok(match core.play_prev() {
            Some(song) => format!("playing {song}"),
            None => String::from("nothing to go back to"),
        }),
        "now" => Ok(match &core.current_song {
            Some(song) => format!("now playing {song}"),
            None => String::from("nothing playing"),
        }),
        other => Err(CatalogError::InvalidInput(format!(
            "unknown command '{other}', type 'help'"
        ))),
    };

    match result {
        Ok(text) => Reply::Text(text),
        Err(err) => Reply::Text(format!("error: {err}")),
    }
}

const HELP: &str = "\
  add id|title|artist|album|year|genre     add a song to the library
  update id|title|artist|album|year|genre  replace the song with that id
  delete <id>                              remove a song everywhere
  list                                     all songs, newest first
  search <title>                           exact title lookup, case-insensitive
  artists                                  songs grouped by artist
  similar <id>                             similar songs (shared artist/genre)
  pladd <id> / plremove <id> / pllist      manage the playlist
  plplay <index>                           play a playlist entry by position
  queue <id>                               put a song in the up-next queue
  play <id> / stop / next / prev / now     playback controls
  quit                                     leave";

fn require_arg<'a>(rest: &'a str, usage: &str) -> Result<&'a str, CatalogError> {
    if rest.is_empty() {
        Err(CatalogError::InvalidInput(format!("usage: {usage}")))
    } else {
        Ok(rest)
    }
}

fn parse_index(raw: &str) -> Result<usize, CatalogError> {
    raw.parse()
        .map_err(|_| CatalogError::InvalidInput(format!("'{raw}' is not a playlist index")))
}

fn parse_song(rest: &str) -> Result<Song, CatalogError> {
    let mut fields = rest.split('|').map(str::trim);
    let id = fields.next().unwrap_or_default();
    let Some(title) = fields.next() else {
        return Err(CatalogError::InvalidInput(String::from(
            "expected id|title|artist|album|year|genre",
        )));
    };

    Song::new(
        id,
        title,
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
    )
}

fn render_songs<'a>(songs: impl Iterator<Item = &'a Song>) -> String {
    let lines: Vec<String> = songs.map(Song::to_string).collect();
    if lines.is_empty() {
        String::from("(empty)")
    } else {
        lines.join("\n")
    }
}

fn render_artists(core: &JukeboxCore) -> String {
    if core.artists.is_empty() {
        return String::from("(empty)");
    }

    let mut out = String::new();
    for artist in core.artists.artists() {
        let _ = writeln!(out, "{artist}:");
        if let Some(group) = core.artists.songs_for(artist) {
            for song in group {
                let _ = writeln!(out, "  {song}");
            }
        }
    }
    out.trim_end().to_string()
}

fn seed_demo(core: &mut JukeboxCore) {
    let demo = [
        ("1", "Paranoid", "Black Sabbath", "Paranoid", "1970", "Metal"),
        ("2", "Iron Man", "Black Sabbath", "Paranoid", "1970", "Metal"),
        ("3", "So What", "Miles Davis", "Kind of Blue", "1959", "Jazz"),
        ("4", "Take Five", "Dave Brubeck", "Time Out", "1959", "Jazz"),
        ("5", "Hey Jude", "The Beatles", "", "1968", "Rock"),
    ];
    for (id, title, artist, album, year, genre) in demo {
        let song = Song::new(id, title, artist, album, year, genre)
            .expect("demo fields are non-empty");
        core.add_song(song).expect("demo ids are unique");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Text(text) => text,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn add_then_search_round_trips() {
        let mut core = JukeboxCore::new();
        let added = text(execute(&mut core, "add 1|Alpha|X|Album|2001|Rock"));
        assert!(added.contains("Alpha"));

        let found = text(execute(&mut core, "search ALPHA"));
        assert_eq!(found, "1 - Alpha (X)");
    }

    #[test]
    fn malformed_add_reports_invalid_input() {
        let mut core = JukeboxCore::new();
        assert_eq!(
            execute(&mut core, "add just-an-id"),
            Reply::Text(String::from(
                "error: invalid input: expected id|title|artist|album|year|genre"
            ))
        );
    }

    #[test]
    fn duplicate_add_surfaces_the_error_kind() {
        let mut core = JukeboxCore::new();
        execute(&mut core, "add 1|Alpha|X|||Rock");
        assert_eq!(
            execute(&mut core, "add 1|Beta|Y|||Pop"),
            Reply::Text(String::from("error: song id 1 is already in use"))
        );
    }

    #[test]
    fn playback_commands_drive_the_core() {
        let mut core = JukeboxCore::new();
        execute(&mut core, "add 1|Alpha|X|||Rock");
        execute(&mut core, "add 2|Beta|X|||Pop");
        execute(&mut core, "play 1");

        assert_eq!(
            execute(&mut core, "next"),
            Reply::Text(String::from("playing 2 - Beta (X)"))
        );
        assert_eq!(
            execute(&mut core, "prev"),
            Reply::Text(String::from("playing 1 - Alpha (X)"))
        );
        assert_eq!(
            execute(&mut core, "now"),
            Reply::Text(String::from("now playing 1 - Alpha (X)"))
        );
    }

    #[test]
    fn bad_index_and_unknown_command_are_rejected() {
        let mut core = JukeboxCore::new();
        assert!(matches!(
            execute(&mut core, "plplay one"),
            Reply::Text(text) if text.starts_with("error: invalid input")
        ));
        assert!(matches!(
            execute(&mut core, "frobnicate"),
            Reply::Text(text) if text.contains("unknown command")
        ));
    }

    #[test]
    fn quit_ends_the_session() {
        let mut core = JukeboxCore::new();
        assert_eq!(execute(&mut core, "quit"), Reply::Quit);
    }

    #[test]
    fn demo_seed_is_valid() {
        let mut core = JukeboxCore::new();
        seed_demo(&mut core);
        assert_eq!(core.library.len(), 5);
        // The two jazz tracks share a genre, so they come out similar.
        assert!(core.graph.neighbors("3").any(|id| id == "4"));
    }
}
