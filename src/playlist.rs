//! Playlist identifier input handling
//!
//! Users paste either a bare playlist id or a full share link into the playlist
//! field. The field keeps only the id, and its companion link points at the playlist.

/// Share links start with this prefix
pub const PLAYLIST_URL_PREFIX: &str = "https://open.spotify.com/playlist/";

/// Strip the share-link prefix and any query string
///
/// # Examples
/// ```
/// use timestamp_format::playlist::normalize_playlist_id;
///
/// let id = normalize_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DX?si=abc");
/// assert_eq!(id, "37i9dQZF1DX");
/// ```
pub fn normalize_playlist_id(value: &str) -> &str {
    let id = value.strip_prefix(PLAYLIST_URL_PREFIX).unwrap_or(value);
    match id.find('?') {
        Some(index) => &id[..index],
        None => id,
    }
}

/// Link to a playlist, or `None` for an empty id
pub fn playlist_url(id: &str) -> Option<String> {
    if id.is_empty() {
        None
    } else {
        Some(format!("{}{}", PLAYLIST_URL_PREFIX, id))
    }
}

/// An input holding a playlist id together with its link
pub trait PlaylistField {
    fn value(&self) -> String;

    fn set_value(&mut self, value: String);

    /// Point the link at `href`, or remove the link when `None`
    fn set_link(&mut self, href: Option<String>);
}

/// Normalize the field's value in place and update its link
pub fn apply_playlist_input<F: PlaylistField + ?Sized>(field: &mut F) {
    let raw = field.value();
    let id = normalize_playlist_id(&raw).to_string();
    field.set_link(playlist_url(&id));
    field.set_value(id);
}
