pub use crate::enums::{Font_style_type, Verification_type};
pub use diesel::sql_types::*;
