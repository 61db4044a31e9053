pub mod account_roles;
pub mod environment;
mod environment_variables;

pub use account_roles::{AccountRole, AccountRoles};
