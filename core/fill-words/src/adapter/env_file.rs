//! .env ファイルの読み込み（dotenv）
//!
//! 既に設定されている環境変数は上書きしない。親ディレクトリは探さない。

use common::error::Error;
use std::path::{Path, PathBuf};

/// 明示パスがあればそれを必須として読み、無ければカレントの .env を任意で読む。
/// 読み込んだファイルのパスを返す。
pub fn load_env_file(explicit: Option<&Path>) -> Result<Option<PathBuf>, Error> {
    load_env_file_from(explicit, Path::new("."))
}

/// `default_dir/.env` が存在するときだけ読む（明示パスが優先）
pub fn load_env_file_from(
    explicit: Option<&Path>,
    default_dir: &Path,
) -> Result<Option<PathBuf>, Error> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = default_dir.join(".env");
            if !candidate.is_file() {
                return Ok(None);
            }
            candidate
        }
    };
    dotenv::from_path(&path).map_err(|e| {
        Error::env(format!("Failed to load env file '{}': {}", path.display(), e))
    })?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_explicit_env_file_sets_variables() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "FILL_WORDS_TEST_DOTENV_VALUE=from-file").unwrap();
        let loaded = load_env_file(Some(f.path())).unwrap();
        assert_eq!(loaded.as_deref(), Some(f.path()));
        assert_eq!(
            std::env::var("FILL_WORDS_TEST_DOTENV_VALUE").as_deref(),
            Ok("from-file")
        );
    }

    #[test]
    fn test_load_missing_explicit_env_file_is_error() {
        let err = load_env_file(Some(Path::new("/nonexistent/fill-words/.env"))).unwrap_err();
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("/nonexistent/fill-words/.env"));
    }

    #[test]
    fn test_default_dir_without_env_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        // 親ディレクトリに .env があっても拾わない
        let child = dir.path().join("nested");
        std::fs::create_dir(&child).unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "FILL_WORDS_TEST_PARENT_DOTENV=parent\n",
        )
        .unwrap();

        assert_eq!(load_env_file_from(None, &child).unwrap(), None);
        assert!(std::env::var("FILL_WORDS_TEST_PARENT_DOTENV").is_err());
    }

    #[test]
    fn test_default_dir_env_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "FILL_WORDS_TEST_LOCAL_DOTENV=local\n").unwrap();

        let loaded = load_env_file_from(None, dir.path()).unwrap();
        assert_eq!(loaded, Some(path));
        assert_eq!(
            std::env::var("FILL_WORDS_TEST_LOCAL_DOTENV").as_deref(),
            Ok("local")
        );
    }
}
