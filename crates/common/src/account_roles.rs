//! The allow-list of privileged accounts, supplied through configuration rather than
//! compiled in.

use crate::environment::{get_env_var, variables::ACCOUNT_ROLES};
use std::collections::HashMap;
use std::str::FromStr;
use strum_macros::{AsRefStr, EnumString};
use thiserror::Error;
use tracing::info;

/// The roles a privileged account may hold. Accounts without a role are ordinary readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AccountRole {
    /// May do everything an [AccountRole::Administrator] can.
    SystemAdministrator,

    /// May moderate comments and change the verification status of users.
    Administrator,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountRolesError {
    #[error("Entry \"{0}\" is not in the form account_id=role.")]
    MalformedEntry(String),
    #[error("Unknown role \"{role}\" for account \"{account_id}\".")]
    UnknownRole { account_id: String, role: String },
}

/// Maps account identifiers (as issued by the identity provider) to an [AccountRole].
#[derive(Debug, Clone, Default)]
pub struct AccountRoles {
    roles: HashMap<String, AccountRole>,
}

impl AccountRoles {
    /// Parse a comma separated list of `account_id=role` pairs. Blank entries are ignored.
    pub fn parse(raw: &str) -> Result<Self, AccountRolesError> {
        let mut roles = HashMap::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (account_id, role) = entry
                .split_once('=')
                .map(|(a, r)| (a.trim(), r.trim()))
                .filter(|(a, _)| !a.is_empty())
                .ok_or_else(|| AccountRolesError::MalformedEntry(entry.to_string()))?;
            let role =
                AccountRole::from_str(role).map_err(|_| AccountRolesError::UnknownRole {
                    account_id: account_id.to_string(),
                    role: role.to_string(),
                })?;
            roles.insert(account_id.to_string(), role);
        }

        Ok(AccountRoles { roles })
    }

    /// Read the allow-list from the environment. No configured accounts means no privileged
    /// accounts at all.
    pub fn from_environment() -> anyhow::Result<Self> {
        match get_env_var(ACCOUNT_ROLES) {
            Ok(raw) => Ok(Self::parse(&raw)?),
            Err(_) => {
                info!("No value found for {}; no account has a role.", ACCOUNT_ROLES);
                Ok(Self::default())
            }
        }
    }

    pub fn role_of(&self, account_id: &str) -> Option<AccountRole> {
        self.roles.get(account_id).copied()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_reads_each_pair_and_ignores_blank_entries() {
        // Arrange
        let input = "a=administrator, ,b = system_administrator,";

        // Act
        let actual = AccountRoles::parse(input).unwrap();

        // Assert
        assert_eq!(2, actual.len());
        assert_eq!(Some(AccountRole::Administrator), actual.role_of("a"));
        assert_eq!(Some(AccountRole::SystemAdministrator), actual.role_of("b"));
        assert_eq!(None, actual.role_of("c"));
    }

    #[test]
    fn parse_returns_error_given_unknown_role() {
        // Arrange
        let input = "a=overlord";

        // Act
        let actual = AccountRoles::parse(input);

        // Assert
        assert_eq!(
            Err(AccountRolesError::UnknownRole {
                account_id: String::from("a"),
                role: String::from("overlord"),
            }),
            actual.map(|r| r.len())
        );
    }

    #[test]
    fn parse_returns_error_given_entry_without_delimiter() {
        // Arrange
        let input = "administrator";

        // Act
        let actual = AccountRoles::parse(input);

        // Assert
        assert!(matches!(actual, Err(AccountRolesError::MalformedEntry(_))));
    }

    #[test]
    fn parse_returns_empty_given_empty_string() {
        // Act
        let actual = AccountRoles::parse("").unwrap();

        // Assert
        assert!(actual.is_empty());
    }
}
