use crate::commands::{CmdMessage, CmdResult};
use crate::config::SiftConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = SiftConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = SiftConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(config.get(&key)?));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = SiftConfig::load(config_dir)?;
            config.set(&key, &value)?;
            config.save(config_dir)?;

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
    use crate::error::SiftError;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(SiftConfig::default()));
    }

    #[test]
    fn set_persists_and_reports() {
        let dir = TempDir::new().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("export-file".into(), "diary.txt".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "export-file set to diary.txt");

        let shown = run(dir.path(), ConfigAction::ShowKey("export-file".into())).unwrap();
        assert_eq!(shown.messages[0].content, "diary.txt");
    }

    #[test]
    fn unknown_key_is_invalid() {
        let dir = TempDir::new().unwrap();
        let err = run(dir.path(), ConfigAction::ShowKey("nope".into())).unwrap_err();
        assert!(matches!(err, SiftError::InvalidArgument(_)));
    }
}
