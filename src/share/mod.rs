pub mod identifier;

pub use identifier::{generate, ShareIdentifier};

use url::Url;

/// Query parameter carrying the identifier in a share link.
pub const SHARE_PARAM: &str = "p";

/// Builds the link a listing is shared under: the page location with its
/// query replaced by `?p=<identifier>`. Any fragment is dropped.
pub fn share_url(page: &Url, id: &ShareIdentifier) -> Url {
    let mut url = page.clone();
    url.set_fragment(None);
    url.set_query(None);
    url.query_pairs_mut().append_pair(SHARE_PARAM, id.as_str());
    url
}

/// The raw identifier carried by a page URL, if any. An empty value counts
/// as absent.
pub fn identifier_param(page: &Url) -> Option<String> {
    page.query_pairs()
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_url_replaces_query_and_fragment() {
        let page = Url::parse("https://listings.example.com/deals?p=old&x=1#top").unwrap();
        let id = ShareIdentifier::parse("Ab3dE9xz").unwrap();

        let url = share_url(&page, &id);
        assert_eq!(url.as_str(), "https://listings.example.com/deals?p=Ab3dE9xz");
    }

    #[test]
    fn identifier_param_reads_p() {
        let page = Url::parse("http://localhost:3000/?p=k3j9x0aa").unwrap();
        assert_eq!(identifier_param(&page).as_deref(), Some("k3j9x0aa"));

        let bare = Url::parse("http://localhost:3000/").unwrap();
        assert_eq!(identifier_param(&bare), None);

        let empty = Url::parse("http://localhost:3000/?p=").unwrap();
        assert_eq!(identifier_param(&empty), None);
    }
}
