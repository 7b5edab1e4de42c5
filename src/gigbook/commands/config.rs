use crate::commands::{CmdMessage, CmdResult};
use crate::config::GigbookConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = GigbookConfig::load(data_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = GigbookConfig::load(data_dir)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(config.get(&key)?));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = GigbookConfig::load(data_dir)?;
            config.set(&key, &value)?;
            config.save(data_dir)?;

            let display_val = config.get(&key)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::SearchMode;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("search-mode".into(), "Minimal".into()),
        )
        .unwrap();

        let shown = run(dir.path(), ConfigAction::ShowKey("search-mode".into())).unwrap();
        assert_eq!(shown.messages[0].content, "minimal");

        let all = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().search_mode, SearchMode::Minimal);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("theme".into())).is_err());
        assert!(run(dir.path(), ConfigAction::Set("theme".into(), "dark".into())).is_err());
        assert!(!dir.path().join("config.json").exists());
    }
}
