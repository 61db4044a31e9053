use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;

/// The badge shown next to a user's name. Users without a badge have no verification at all.
#[derive(DbEnum, Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Serialize, Deserialize)]
#[PgType = "verification"]
#[DieselType = "Verification_type"]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Verification {
    /// A checked, well-known reader.
    Verified,

    /// Staff.
    Admin,
}

/// How a quote is typeset on the welcome slider.
#[derive(DbEnum, Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Serialize, Deserialize)]
#[PgType = "font_style"]
#[DieselType = "Font_style_type"]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
    Bold,
}

impl Default for FontStyle {
    fn default() -> Self {
        FontStyle::Italic
    }
}
