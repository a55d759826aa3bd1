use url::form_urlencoded;

/// Form-encode `text` as the value of a `q` query parameter, without the `q=`.
pub fn query_value(text: &str) -> String {
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", text)
        .finish();
    encoded["q=".len()..].to_string()
}
