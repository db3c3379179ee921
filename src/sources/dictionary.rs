use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use super::DefinitionSource;

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
struct Definition {
    #[serde(default)]
    definition: Option<String>,
}

/// Pull `[0].meanings[0].definitions[0].definition` out of a dictionary reply.
///
/// Returns `None` when the body is not an entry list, any step is missing, or the
/// definition is blank.
pub fn first_definition(body: &[u8]) -> Option<String> {
    let entries: Vec<Entry> = serde_json::from_slice(body).ok()?;

    let definition = entries
        .into_iter()
        .next()?
        .meanings
        .into_iter()
        .next()?
        .definitions
        .into_iter()
        .next()?
        .definition?;

    let definition = definition.trim();
    (!definition.is_empty()).then(|| definition.to_string())
}

/// Client for a dictionary service answering `GET {base}/{word}`.
#[derive(Debug, Clone)]
pub struct DictionaryApi {
    client: reqwest::Client,
    base: Url,
}

impl DictionaryApi {
    pub fn new(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }

    fn entry_url(&self, word: &str) -> Option<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut().ok()?.pop_if_empty().push(word);
        Some(url)
    }

    async fn lookup(&self, url: Url) -> reqwest::Result<Vec<u8>> {
        let body = self.client.get(url).send().await?.bytes().await?;
        Ok(body.to_vec())
    }
}

impl DefinitionSource for DictionaryApi {
    #[instrument(skip(self))]
    async fn define(&self, word: &str) -> Option<String> {
        let Some(url) = self.entry_url(word) else {
            debug!(base = %self.base, "dictionary base url cannot take a path");
            return None;
        };

        match self.lookup(url).await {
            Ok(body) => {
                let definition = first_definition(&body);
                if definition.is_none() {
                    debug!("no usable definition");
                }
                definition
            }
            Err(err) => {
                debug!(error = %err, "definition lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_definition() {
        let body = br#"[{
            "word": "river",
            "meanings": [
                {"partOfSpeech": "noun", "definitions": [
                    {"definition": "A large natural stream of water.", "synonyms": []},
                    {"definition": "A large quantity of a flowing substance."}
                ]},
                {"partOfSpeech": "verb", "definitions": [{"definition": "unused"}]}
            ]
        }]"#;

        assert_eq!(
            first_definition(body).as_deref(),
            Some("A large natural stream of water.")
        );
    }

    #[test]
    fn test_not_found_reply() {
        let body = br#"{"title": "No Definitions Found", "message": "Sorry pal", "resolution": ""}"#;
        assert_eq!(first_definition(body), None);
    }

    #[test]
    fn test_missing_or_blank_fields() {
        assert_eq!(first_definition(b"[]"), None);
        assert_eq!(first_definition(br#"[{}]"#), None);
        assert_eq!(first_definition(br#"[{"meanings": [{"definitions": []}]}]"#), None);
        assert_eq!(first_definition(br#"[{"meanings": [{"definitions": [{}]}]}]"#), None);
        assert_eq!(
            first_definition(br#"[{"meanings": [{"definitions": [{"definition": "   "}]}]}]"#),
            None
        );
        assert_eq!(first_definition(b"<html>oops</html>"), None);
    }

    #[test]
    fn test_entry_url_encodes_word() {
        let api = DictionaryApi::new(
            reqwest::Client::new(),
            Url::parse("https://api.dictionaryapi.dev/api/v2/entries/en").unwrap(),
        );
        assert_eq!(
            api.entry_url("river").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/river"
        );
        assert_eq!(
            api.entry_url("a b").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/a%20b"
        );

        let trailing = DictionaryApi::new(
            reqwest::Client::new(),
            Url::parse("https://example.com/en/").unwrap(),
        );
        assert_eq!(trailing.entry_url("x").unwrap().as_str(), "https://example.com/en/x");
    }
}
