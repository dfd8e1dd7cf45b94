/// Static descriptor of one background track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub key: &'static str,
    pub title: &'static str,
    pub src: &'static str,
}

pub const TRACKS: [Track; 3] = [
    Track {
        key: "xinloi",
        title: "Xin Lỗi",
        src: "xinloi.mp3",
    },
    Track {
        key: "truockhiemtontai",
        title: "Trước Khi Em Tồn Tại",
        src: "truockhiemtontai.mp3",
    },
    Track {
        key: "lancuoi",
        title: "Lần Cuối",
        src: "lancuoi.mp3",
    },
];

// An empty table would leave `current` without a track.
const _: () = assert!(!TRACKS.is_empty());

/// Cyclic selection over [`TRACKS`]. The index always stays in `[0, len)`.
#[derive(Clone, Debug, Default)]
pub struct Playlist {
    current: usize,
}

impl Playlist {
    pub fn len(&self) -> usize {
        TRACKS.len()
    }

    pub fn is_empty(&self) -> bool {
        TRACKS.is_empty()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &'static Track {
        &TRACKS[self.current]
    }

    /// Key of the track after the current one, wrapping to the first.
    pub fn next_key(&self) -> &'static str {
        TRACKS[(self.current + 1) % TRACKS.len()].key
    }

    /// Select a track by key; unknown keys select the first track.
    pub fn select(&mut self, key: &str) -> &'static Track {
        self.current = TRACKS.iter().position(|t| t.key == key).unwrap_or(0);
        self.current()
    }
}
