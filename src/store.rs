//! Output files: one pretty-printed JSON document per dataset, overwritten every run.

use crate::error::{PipelineError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File names. League datasets embed the league id; matchups also embed the week.
pub mod names {
    pub const NFL_STATE: &str = "nfl_state.json";
    pub const NFL_PLAYERS: &str = "nfl_players.json";

    pub fn league_info(league_id: &str) -> String {
        format!("league_{league_id}_info.json")
    }

    pub fn rosters(league_id: &str) -> String {
        format!("league_{league_id}_rosters.json")
    }

    pub fn users(league_id: &str) -> String {
        format!("league_{league_id}_users.json")
    }

    pub fn matchups(league_id: &str, week: u32) -> String {
        format!("league_{league_id}_matchups_week_{week}.json")
    }

    pub fn draft_info(league_id: &str) -> String {
        format!("league_{league_id}_draft_info.json")
    }

    pub fn draft_picks(league_id: &str) -> String {
        format!("league_{league_id}_draft_picks.json")
    }

    pub fn view_model(league_id: &str) -> String {
        format!("league_{league_id}_web_data.json")
    }

    pub fn unrostered(league_id: &str) -> String {
        format!("league_{league_id}_unrostered_season_stats.json")
    }
}

/// The output directory.
#[derive(Clone, Debug)]
pub struct OutputStore {
    dir: PathBuf,
}

impl OutputStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Replace `name` with `data` as pretty JSON. Returns the path written.
    pub fn write<T: Serialize + ?Sized>(&self, name: &str, data: &T) -> Result<PathBuf> {
        let path = self.path(name);
        write_json(&path, data).map_err(|source| PipelineError::Write {
            path: path.clone(),
            source,
        })?;
        log::debug!("Wrote {}", path.display());
        Ok(path)
    }

    /// Read back a file written by [`OutputStore::write`].
    pub fn read<T: DeserializeOwned>(&self, name: &str) -> io::Result<T> {
        let file = File::open(self.path(name))?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.write_all(b"\n")?;
    writer.flush()
}
