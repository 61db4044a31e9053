table! {
    use crate::diesel_types::*;

    chat_messages (id) {
        id -> Uuid,
        account_id -> Text,
        display_name -> Text,
        photo_url -> Nullable<Text>,
        verification -> Nullable<Verification_type>,
        message_text -> Text,
        mentions -> Array<Text>,
        created_at -> Timestamptz,
    }
}

table! {
    use crate::diesel_types::*;

    comments (id) {
        id -> Uuid,
        comic_slug -> Text,
        account_id -> Text,
        display_name -> Text,
        photo_url -> Nullable<Text>,
        verification -> Nullable<Verification_type>,
        comment_text -> Text,
        created_at -> Timestamptz,
    }
}

table! {
    use crate::diesel_types::*;

    favorites (account_id, comic_slug) {
        account_id -> Text,
        comic_slug -> Text,
        title -> Text,
        image_url -> Nullable<Text>,
        added_at -> Timestamptz,
    }
}

table! {
    use crate::diesel_types::*;

    quotes (id) {
        id -> Uuid,
        quote_text -> Text,
        author -> Text,
        avatar_url -> Text,
        border_url -> Nullable<Text>,
        font_style -> Font_style_type,
        created_at -> Timestamptz,
    }
}

table! {
    use crate::diesel_types::*;

    reading_history (account_id, comic_slug) {
        account_id -> Text,
        comic_slug -> Text,
        comic_title -> Text,
        comic_image -> Nullable<Text>,
        last_chapter_slug -> Text,
        last_chapter_title -> Text,
        read_at -> Timestamptz,
    }
}

table! {
    use crate::diesel_types::*;

    user_profiles (account_id) {
        account_id -> Text,
        nickname -> Text,
        email -> Nullable<Text>,
        photo_url -> Nullable<Text>,
        banner_url -> Nullable<Text>,
        bio -> Nullable<Text>,
        whatsapp -> Nullable<Text>,
        github -> Nullable<Text>,
        instagram -> Nullable<Text>,
        tiktok -> Nullable<Text>,
        other_link -> Nullable<Text>,
        chapters_read -> Int8,
        verification -> Nullable<Verification_type>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

allow_tables_to_appear_in_same_query!(
    chat_messages,
    comments,
    favorites,
    quotes,
    reading_history,
    user_profiles,
);
