/// Builds a mail-compose link with `body` percent-encoded into the `body`
/// query parameter. No recipient or subject is set.
pub fn mailto_uri(body: &str) -> String {
    format!("mailto:?body={}", urlencoding::encode(body))
}
