#![no_main]

use jukebox::core::JukeboxCore;
use jukebox::model::Song;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut core = JukeboxCore::new();

    for byte in data {
        let id = format!("{}", byte % 8);
        let title = format!("track_{id}");
        let artist = format!("artist_{}", byte % 3);
        let genre = format!("genre_{}", byte % 2);

        match byte % 10 {
            0 | 1 => {
                let _ = core.add_song(Song::new(&id, &title, &artist, "", "", &genre).unwrap());
            }
            2 => {
                let renamed = format!("renamed_{id}");
                let _ =
                    core.update_song(&id, Song::new(&id, &renamed, &artist, "", "", &genre).unwrap());
            }
            3 => {
                let _ = core.delete_song(&id);
            }
            4 => {
                let _ = core.add_to_playlist(&id);
            }
            5 => {
                let _ = core.remove_from_playlist(&id);
            }
            6 => {
                let _ = core.enqueue_up_next(&id);
            }
            7 => {
                let _ = core.play_from_playlist((*byte as usize) % 6);
            }
            8 => {
                let _ = core.play_next();
            }
            _ => {
                let _ = core.play_prev();
            }
        }
    }
});
