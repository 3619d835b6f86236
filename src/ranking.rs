use serde::{Deserialize, Serialize};

/// Number of entries kept in the high-score table.
pub const RANKING_CAPACITY: usize = 5;

/// Key the ranking is stored under in eframe persistence.
pub const RANKING_KEY: &str = "ranking";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub score: u32,
}

/// High-score table, sorted by descending score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    entries: Vec<RankingEntry>,
}

impl Ranking {
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a score and returns its 1-based rank if it made the table.
    ///
    /// Names are trimmed and blank names are not recorded. Ties keep the
    /// earlier entry ahead.
    pub fn insert(&mut self, name: &str, score: u32) -> Option<usize> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        // entries stay sorted, so this matches a stable sort after pushing
        let position = self.entries.partition_point(|entry| entry.score >= score);
        self.entries.insert(
            position,
            RankingEntry {
                name: name.to_owned(),
                score,
            },
        );
        self.entries.truncate(RANKING_CAPACITY);

        (position < RANKING_CAPACITY).then_some(position + 1)
    }

    /// Lines of the form `"1. name: score"`.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}. {}: {}", i + 1, entry.name, entry.score))
    }

    /// Restores the table invariants on data read back from storage.
    fn normalized(mut self) -> Self {
        self.entries.retain(|entry| !entry.name.trim().is_empty());
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(RANKING_CAPACITY);
        self
    }
}

/// Durable storage for the ranking
pub trait ScoreStore {
    fn load(&self) -> Ranking;
    fn save(&mut self, ranking: &Ranking);
}

/// Store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    ranking: Ranking,
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Ranking {
        self.ranking.clone()
    }

    fn save(&mut self, ranking: &Ranking) {
        self.ranking = ranking.clone();
    }
}

/// Store backed by eframe persistence (a file natively, `localStorage` on the web)
pub struct StorageScoreStore<'a> {
    storage: &'a mut dyn eframe::Storage,
}

impl<'a> StorageScoreStore<'a> {
    pub fn new(storage: &'a mut dyn eframe::Storage) -> Self {
        Self { storage }
    }
}

impl ScoreStore for StorageScoreStore<'_> {
    fn load(&self) -> Ranking {
        load_ranking(&*self.storage)
    }

    fn save(&mut self, ranking: &Ranking) {
        eframe::set_value(&mut *self.storage, RANKING_KEY, ranking);
        self.storage.flush();
        log::debug!("saved ranking with {} entries", ranking.entries().len());
    }
}

/// Reads the ranking from read-only storage, as handed out at startup.
pub fn load_ranking(storage: &dyn eframe::Storage) -> Ranking {
    eframe::get_value::<Ranking>(storage, RANKING_KEY)
        .map(Ranking::normalized)
        .unwrap_or_default()
}
