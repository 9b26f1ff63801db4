use config::{Config, ConfigError, File, FileFormat};
use log::info;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Reads a configuration file and deserializes it into `T`.
    ///
    /// The format is picked from the file extension: `yaml`, `yml`, `json`, `toml`
    /// or `ron`. Before parsing, `$VAR` and `${VAR}` references are replaced by the
    /// matching environment variables, so a literal `$` has to be written as `\$`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] for a missing or unsupported extension,
    /// [`ConfigError::Foreign`] when the file cannot be read or an environment
    /// variable is undefined, and any parse or deserialization error from `config`.
    pub fn load<T: DeserializeOwned>(file_path: &Path) -> Result<T, ConfigError> {
        let Some(ext) = file_path.extension() else {
            return Err(ConfigError::NotFound(format!(
                "Could not find file extension on path {file_path:?}"
            )));
        };

        let file_format = match ext.to_str() {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            Some("json") => FileFormat::Json,
            Some("toml") => FileFormat::Toml,
            Some("ron") => FileFormat::Ron,
            _ => {
                return Err(ConfigError::NotFound(format!(
                    "File format not supported. File needs to end with .yaml, .json, .toml or .ron. {file_path:?}"
                )));
            }
        };

        let config_str =
            fs::read_to_string(file_path).map_err(|err| ConfigError::Foreign(Box::new(err)))?;

        let config_str_with_env_vars =
            shellexpand::env(&config_str).map_err(|err| ConfigError::Foreign(Box::new(err)))?;

        info!("Loading configuration from {file_path:?}");
        let config = Config::builder()
            .add_source(File::from_str(&config_str_with_env_vars, file_format))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use std::fs::File as StdFile;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const YAML_DATA: &[u8] = br#"
base_url: "http://localhost:8010/api/"
user_agent: "datecalc-test"
timeout_secs: 5
"#;

    const TOML_DATA: &[u8] = br#"
base_url = "http://localhost:8010/api/"
user_agent = "datecalc-test"
timeout_secs = 5
"#;

    const JSON_DATA: &[u8] = br#"
{
  "base_url": "http://localhost:8010/api/",
  "user_agent": "datecalc-test",
  "timeout_secs": 5
}
"#;

    const RON_DATA: &[u8] = br#"
(
  base_url: "http://localhost:8010/api/",
  user_agent: "datecalc-test",
  timeout_secs: 5,
)
"#;

    #[fixture]
    fn temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temporary directory")
    }

    fn write_config(temp_dir: &TempDir, file_name: &str, data: &[u8]) -> PathBuf {
        let file_path = temp_dir.path().join(file_name);
        let mut file = StdFile::create(&file_path).unwrap();
        file.write_all(data).unwrap();
        file_path
    }

    #[rstest]
    #[case("yaml", YAML_DATA)]
    #[case("yml", YAML_DATA)]
    #[case("toml", TOML_DATA)]
    #[case("json", JSON_DATA)]
    #[case("ron", RON_DATA)]
    fn test_load_config_from_various_formats(
        temp_dir: TempDir,
        #[case] extension: &str,
        #[case] data: &[u8],
    ) {
        let file_path = write_config(&temp_dir, &format!("config.{extension}"), data);

        let config: ClientConfig = ConfigLoader::load(&file_path).unwrap();

        assert_eq!(
            config,
            ClientConfig {
                base_url: "http://localhost:8010/api/".to_string(),
                user_agent: "datecalc-test".to_string(),
                timeout_secs: Some(5),
            }
        );
    }

    #[rstest]
    fn test_load_config_fills_defaults(temp_dir: TempDir) {
        let file_path = write_config(&temp_dir, "config.toml", b"timeout_secs = 2\n");

        let config: ClientConfig = ConfigLoader::load(&file_path).unwrap();

        assert_eq!(
            config,
            ClientConfig {
                timeout_secs: Some(2),
                ..ClientConfig::default()
            }
        );
    }

    #[rstest]
    fn test_load_config_expands_env_vars(temp_dir: TempDir) {
        let file_path = write_config(
            &temp_dir,
            "config.toml",
            b"user_agent = \"${CARGO_PKG_NAME}-agent\"\n",
        );

        let config: ClientConfig = ConfigLoader::load(&file_path).unwrap();

        assert_eq!(config.user_agent, format!("{}-agent", env!("CARGO_PKG_NAME")));
    }

    #[rstest]
    fn test_load_config_undefined_env_var(temp_dir: TempDir) {
        let file_path = write_config(
            &temp_dir,
            "config.toml",
            b"user_agent = \"$DATECALC_SURELY_UNDEFINED_VARIABLE\"\n",
        );

        let result: Result<ClientConfig, _> = ConfigLoader::load(&file_path);

        assert!(result.is_err());
    }

    #[rstest]
    fn test_load_config_unsupported_file_format() {
        let result: Result<ClientConfig, _> = ConfigLoader::load(Path::new("test/path/config.exe"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[rstest]
    fn test_load_config_missing_extension() {
        let result: Result<ClientConfig, _> = ConfigLoader::load(Path::new("test/path/config"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[rstest]
    fn test_load_config_missing_file(temp_dir: TempDir) {
        let result: Result<ClientConfig, _> =
            ConfigLoader::load(&temp_dir.path().join("absent.yaml"));
        assert!(result.is_err());
    }
}
