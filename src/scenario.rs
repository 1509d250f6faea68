use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use toml::{Table, Value};

use crate::error::PatchError;
use crate::tasks::TaskList;

const CONFIG_KEY: &str = "config";
const TASKS_KEY: &str = "tasks";

/// A scenario file held as a generic TOML tree so unrelated sections survive
/// the rewrite untouched.
#[derive(Debug)]
pub struct Scenario {
    path: PathBuf,
    document: Table,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        if !path.exists() {
            return Err(PatchError::NotFound(path.to_path_buf()));
        }
        debug!("Loading scenario {}", path.display());
        let contents = fs::read_to_string(path)?;
        let document: Table = toml::from_str(&contents)?;
        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set `[config].tasks`, creating the `config` table if needed. A `config`
    /// value that is not a table is replaced.
    pub fn set_tasks(&mut self, tasks: &TaskList) -> Result<(), PatchError> {
        let value = Value::try_from(tasks)?;

        match self.document.get(CONFIG_KEY) {
            Some(Value::Table(_)) => {}
            Some(other) => {
                warn!(
                    "Discarding non-table '{}' value ({}) in {}",
                    CONFIG_KEY,
                    other.type_str(),
                    self.path.display()
                );
                self.document
                    .insert(CONFIG_KEY.to_owned(), Value::Table(Table::new()));
            }
            None => {
                self.document
                    .insert(CONFIG_KEY.to_owned(), Value::Table(Table::new()));
            }
        }

        if let Some(Value::Table(config)) = self.document.get_mut(CONFIG_KEY) {
            config.insert(TASKS_KEY.to_owned(), value);
        }
        Ok(())
    }

    /// Current `[config].tasks`, if any.
    pub fn tasks(&self) -> Option<&Value> {
        self.document
            .get(CONFIG_KEY)
            .and_then(Value::as_table)
            .and_then(|config| config.get(TASKS_KEY))
    }

    pub fn render(&self) -> Result<String, PatchError> {
        Ok(toml::to_string(&self.document)?)
    }

    /// Rewrite the whole file. Comments and formatting of the original are not kept.
    ///
    /// Writes through the existing path, so a symlinked scenario updates its target.
    pub fn save(&self) -> Result<(), PatchError> {
        let contents = self.render()?;
        fs::write(&self.path, &contents)?;
        debug!("Wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }
}
