pub mod file;
pub mod noop;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::FieldBox;

pub struct FieldManager {}

impl FieldManager {
    /// Picks the field implementation for the current configuration. No
    /// configured code file means persistence is skipped entirely.
    pub fn get() -> FieldBox {
        if Config::get(ConfigKey::CodeFile).is_empty() {
            return Box::<noop::NoopField>::default();
        }

        return Box::<file::FileField>::default();
    }
}
