use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::str::FromStr;
use tracing::info;

/// Retrieve some environment variable value by its name. Also checks if the environment variable
/// value is in some file, the path to which is retrieved from an environment variable by the
/// given name concatenated with `_FILE`.
///
/// Returns [Result::Ok()] if a value is successfully retrieved from either environment variable;
/// returns [Result::Err()] otherwise.
pub fn get_env_var(name: &str) -> Result<String> {
    let value = match env::var(name) {
        Ok(s) => s,
        Err(e) => get_from_file(name).context(format!(
            "Could not find a value for {} nor for {}_FILE. Original Error: {:?}",
            name, name, e
        ))?,
    };
    Ok(value.trim().to_string())
}

/// Retrieve and parse some environment variable, falling back to `default` when the variable
/// isn't set. A value that is set but cannot be parsed is an error.
pub fn get_env_var_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr + std::fmt::Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match get_env_var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Failed to parse \"{}\" from {}.", raw, name)),
        Err(_) => {
            info!(
                "No value found for {}, using the default value {}.",
                name, default
            );
            Ok(default)
        }
    }
}

fn get_from_file(name: &str) -> Result<String> {
    let path = env::var(format!("{}_FILE", name))?;
    Ok(fs::read_to_string(path)?)
}

pub mod variables {
    pub use crate::environment_variables::*;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn get_env_var_trims_the_value() {
        // Arrange
        let name = "ANIMAQU_TEST_TRIMMED_VALUE";
        env::set_var(name, "  padded \n");

        // Act
        let actual = get_env_var(name);

        // Assert
        assert_eq!("padded", actual.unwrap());
    }

    #[test]
    fn get_env_var_reads_from_file_when_variable_missing() {
        // Arrange
        let name = "ANIMAQU_TEST_FROM_FILE";
        let path = env::temp_dir().join("animaqu_test_from_file.txt");
        fs::write(&path, "secret\n").unwrap();
        env::remove_var(name);
        env::set_var(format!("{}_FILE", name), &path);

        // Act
        let actual = get_env_var(name);

        // Assert
        assert_eq!("secret", actual.unwrap());
    }

    #[test]
    fn get_env_var_or_returns_default_when_missing() {
        // Arrange
        let name = "ANIMAQU_TEST_MISSING_NUMBER";
        env::remove_var(name);

        // Act
        let actual = get_env_var_or::<u16>(name, 8080);

        // Assert
        assert_eq!(8080, actual.unwrap());
    }

    #[test]
    fn get_env_var_or_returns_error_given_unparseable_value() {
        // Arrange
        let name = "ANIMAQU_TEST_BAD_NUMBER";
        env::set_var(name, "eighty");

        // Act
        let actual = get_env_var_or::<u16>(name, 8080);

        // Assert
        assert!(actual.is_err());
    }
}
