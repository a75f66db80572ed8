//! ワークスペースの `.tm-viewer.json` から設定を組み立てる

use std::io::ErrorKind;
use std::path::Path;

use super::{
    ConfigError,
    ViewerSettings,
};

/// ワークスペース直下に置く設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".tm-viewer.json";

impl ViewerSettings {
    /// ワークスペースの設定を読み込み、検証する
    ///
    /// `workspace_root` が `None`、または設定ファイルが無い場合はデフォルト値を使う。
    /// ファイルに無い項目もデフォルト値で埋まる。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー（デフォルト値へのフォールバックはしない）
    pub fn load(workspace_root: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = match workspace_root {
            Some(root) => read_config_file(&root.join(CONFIG_FILE_NAME))?.unwrap_or_default(),
            None => Self::default(),
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!("Using settings: {:?}", settings);

        Ok(settings)
    }
}

/// 設定ファイルを読む。存在しなければ `Ok(None)`
fn read_config_file(path: &Path) -> Result<Option<ViewerSettings>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!("No configuration file at {:?}, using defaults", path);
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    tracing::debug!("Loading configuration from {:?}", path);
    Ok(Some(serde_json::from_str(&content)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;

    /// 設定ファイルを書いたワークスペース
    fn workspace_with(config: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), config).unwrap();
        dir
    }

    #[rstest]
    fn no_workspace_uses_defaults() {
        assert_that!(ViewerSettings::load(None).unwrap(), eq(&ViewerSettings::default()));
    }

    #[rstest]
    fn missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();

        assert_that!(ViewerSettings::load(Some(dir.path())).unwrap(), eq(&ViewerSettings::default()));
    }

    #[rstest]
    fn partial_file_keeps_other_defaults() {
        let dir = workspace_with(r#"{"translationLanguages": ["de", "fr"]}"#);

        let settings = ViewerSettings::load(Some(dir.path())).unwrap();

        assert_eq!(settings.translation_languages, ["de", "fr"]);
        assert_eq!(settings.origin_languages, ViewerSettings::default().origin_languages);
    }

    #[rstest]
    #[case::not_json("invalid json")]
    #[case::wrong_type(r#"{"originLanguages": "en"}"#)]
    fn unparsable_file_is_an_error(#[case] config: &str) {
        let dir = workspace_with(config);

        let result = ViewerSettings::load(Some(dir.path()));

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[rstest]
    fn invalid_settings_do_not_fall_back_to_defaults() {
        let dir = workspace_with(r#"{"originLanguages": [], "translationLanguages": ["pl", "pl"]}"#);

        let Err(ConfigError::ValidationErrors(errors)) = ViewerSettings::load(Some(dir.path()))
        else {
            panic!("expected validation errors");
        };

        assert_that!(errors, len(eq(2)));
        assert_that!(errors[0].field_path, eq("originLanguages"));
        assert_that!(errors[1].field_path, eq("translationLanguages[1]"));
    }

    #[rstest]
    fn unreadable_path_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let result = ViewerSettings::load(Some(dir.path()));

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
