//! Query string of the detail page

use std::borrow::Cow;

/// Value of the first non-empty `name` parameter in a `location.search`
/// value. Other parameters, malformed pairs and repeats are ignored.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key) == name).then(|| decode(value).into_owned())
        })
        .find(|value| !value.is_empty())
}

/// Form-urlencoded component: `+` is a space, undecodable input stays raw.
fn decode(component: &str) -> Cow<'_, str> {
    if component.contains('+') {
        let spaced = component.replace('+', " ");
        let decoded = urlencoding::decode(&spaced)
            .map(Cow::into_owned)
            .unwrap_or_else(|_| spaced.clone());
        return Cow::Owned(decoded);
    }
    urlencoding::decode(component).unwrap_or(Cow::Borrowed(component))
}

/// Product id from a `location.search` value (`?id=42`).
/// Only `id` is recognized; a missing or empty id counts as absent.
pub fn parse_product_id(search: &str) -> Option<String> {
    query_param(search, "id")
}

/// Product id of the current page URL.
pub fn current_product_id() -> Option<String> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_product_id(&search)
}
