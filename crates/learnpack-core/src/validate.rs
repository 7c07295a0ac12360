//! Pack validation.
//!
//! [`validate_pack`] takes untrusted JSON and either returns a well-formed
//! [`Pack`] or every problem it found. Validation runs in two passes:
//!
//! 1. **Structural**: field presence and types, the `moduleType` union,
//!    non-empty lists, numeric bounds and image alt text.
//! 2. **Referential**: duplicate ids, asset references and their kinds,
//!    word bank membership and accepted pronunciations.
//!
//! The referential pass only runs on structurally sound input. Neither pass
//! stops at the first problem.

use std::collections::{HashMap, HashSet};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{
    Asset, AssetKind, FactCard, ModuleType, Pack, PackItems, PackSettings, PicturePhrase,
    VocabWord, CURRENT_SCHEMA_VERSION,
};

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Slash-separated location of the problem (e.g. `items/2/answer`).
    /// Empty for problems with the document as a whole.
    pub path: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Outcome of [`validate_pack`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(Pack),
    Invalid { issues: Vec<ValidationIssue> },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// Issues found, empty for a valid pack.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Invalid { issues } => issues,
        }
    }

    pub fn pack(&self) -> Option<&Pack> {
        match self {
            ValidationResult::Valid(pack) => Some(pack),
            ValidationResult::Invalid { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<Pack, Vec<ValidationIssue>> {
        match self {
            ValidationResult::Valid(pack) => Ok(pack),
            ValidationResult::Invalid { issues } => Err(issues),
        }
    }
}

/// Validate untrusted pack JSON.
///
/// Never panics and never returns an error: malformed input is reported as
/// [`ValidationResult::Invalid`].
pub fn validate_pack(input: &Value) -> ValidationResult {
    let mut issues = Vec::new();

    let pack = decode_pack(input, &mut issues);
    if let Some(pack) = &pack {
        check_structure(pack, &mut issues);
    }

    let pack = match pack {
        Some(pack) if issues.is_empty() => pack,
        _ => {
            tracing::debug!("pack failed structural validation: {} issue(s)", issues.len());
            return ValidationResult::Invalid { issues };
        }
    };

    check_references(&pack, &mut issues);

    if issues.is_empty() {
        tracing::debug!("pack '{}' is valid ({} items)", pack.id, pack.items.len());
        ValidationResult::Valid(pack)
    } else {
        tracing::debug!(
            "pack '{}' failed referential validation: {} issue(s)",
            pack.id,
            issues.len()
        );
        ValidationResult::Invalid { issues }
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Pack header with assets and items left undecoded, so that each element
/// can report its own decoding failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPack {
    schema_version: u32,
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    content_version: String,
    language: String,
    age_band: String,
    topics: Vec<String>,
    #[serde(default)]
    settings: Option<PackSettings>,
    #[serde(default)]
    assets: Vec<Value>,
    module_type: ModuleType,
    items: Vec<Value>,
}

fn decode_pack(input: &Value, issues: &mut Vec<ValidationIssue>) -> Option<Pack> {
    if !input.is_object() {
        issues.push(ValidationIssue::new("", "pack must be a JSON object"));
        return None;
    }

    let raw = match RawPack::deserialize(input) {
        Ok(raw) => raw,
        Err(e) => {
            issues.push(ValidationIssue::new("", e.to_string()));
            return None;
        }
    };

    let assets = decode_list::<Asset>(raw.assets, "assets", issues);
    let items = match raw.module_type {
        ModuleType::FactCards => {
            PackItems::FactCards(decode_list::<FactCard>(raw.items, "items", issues))
        }
        ModuleType::PicturePhrases => {
            PackItems::PicturePhrases(decode_list::<PicturePhrase>(raw.items, "items", issues))
        }
        ModuleType::VocabVoice => {
            PackItems::VocabVoice(decode_list::<VocabWord>(raw.items, "items", issues))
        }
    };

    Some(Pack {
        schema_version: raw.schema_version,
        id: raw.id,
        title: raw.title,
        description: raw.description,
        content_version: raw.content_version,
        language: raw.language,
        age_band: raw.age_band,
        topics: raw.topics,
        settings: raw.settings,
        assets,
        items,
    })
}

fn decode_list<T: DeserializeOwned>(
    values: Vec<Value>,
    section: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                issues.push(ValidationIssue::new(format!("{section}/{i}"), e.to_string()));
                None
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Structural checks
// ---------------------------------------------------------------------------

fn require_text(value: &str, path: impl Into<String>, issues: &mut Vec<ValidationIssue>) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(path, "must not be empty"));
    }
}

fn require_non_empty<T>(list: &[T], path: impl Into<String>, issues: &mut Vec<ValidationIssue>) {
    if list.is_empty() {
        issues.push(ValidationIssue::new(path, "must contain at least one entry"));
    }
}

fn check_structure(pack: &Pack, issues: &mut Vec<ValidationIssue>) {
    if pack.schema_version != CURRENT_SCHEMA_VERSION {
        issues.push(ValidationIssue::new(
            "schemaVersion",
            format!(
                "unsupported schema version {}, expected {CURRENT_SCHEMA_VERSION}",
                pack.schema_version
            ),
        ));
    }
    require_text(&pack.id, "id", issues);
    require_text(&pack.title, "title", issues);
    require_text(&pack.content_version, "contentVersion", issues);
    require_text(&pack.language, "language", issues);
    require_text(&pack.age_band, "ageBand", issues);
    require_non_empty(&pack.topics, "topics", issues);
    for (i, topic) in pack.topics.iter().enumerate() {
        require_text(topic, format!("topics/{i}"), issues);
    }

    for (i, asset) in pack.assets.iter().enumerate() {
        require_text(&asset.id, format!("assets/{i}/id"), issues);
        require_text(&asset.path, format!("assets/{i}/path"), issues);
        let has_alt = asset.alt.as_deref().is_some_and(|alt| !alt.trim().is_empty());
        if asset.kind == AssetKind::Image && !has_alt {
            issues.push(ValidationIssue::new(
                format!("assets/{i}/alt"),
                format!("image asset '{}' must have alt text", asset.id),
            ));
        }
    }

    require_non_empty(&pack.item_ids(), "items", issues);
    match &pack.items {
        PackItems::FactCards(items) => {
            for (i, item) in items.iter().enumerate() {
                let at = |field: &str| format!("items/{i}/{field}");
                require_text(&item.id, at("id"), issues);
                require_text(&item.topic, at("topic"), issues);
                require_text(&item.prompt, at("prompt"), issues);
                require_text(&item.answer, at("answer"), issues);
            }
        }
        PackItems::PicturePhrases(items) => {
            for (i, item) in items.iter().enumerate() {
                let at = |field: &str| format!("items/{i}/{field}");
                require_text(&item.id, at("id"), issues);
                require_text(&item.topic, at("topic"), issues);
                require_non_empty(&item.word_bank, at("wordBank"), issues);
                require_non_empty(&item.sentence_groups, at("sentenceGroups"), issues);
                for (g, group) in item.sentence_groups.iter().enumerate() {
                    let at = |field: &str| format!("items/{i}/sentenceGroups/{g}/{field}");
                    require_text(&group.intent, at("intent"), issues);
                    require_text(&group.canonical, at("canonical"), issues);
                    require_non_empty(&group.acceptable, at("acceptable"), issues);
                    if group.min_words > group.max_words {
                        issues.push(ValidationIssue::new(
                            at("minWords"),
                            format!(
                                "minWords ({}) must not exceed maxWords ({})",
                                group.min_words, group.max_words
                            ),
                        ));
                    }
                }
            }
        }
        PackItems::VocabVoice(items) => {
            for (i, item) in items.iter().enumerate() {
                let at = |field: &str| format!("items/{i}/{field}");
                require_text(&item.id, at("id"), issues);
                require_text(&item.topic, at("topic"), issues);
                require_text(&item.word, at("word"), issues);
                require_non_empty(&item.syllables, at("syllables"), issues);
                require_text(&item.definition, at("definition"), issues);
                require_text(&item.example_sentence, at("exampleSentence"), issues);
                require_text(&item.review.sentence_prompt, at("review/sentencePrompt"), issues);
                require_non_empty(
                    &item.review.accepted_pronunciations,
                    at("review/acceptedPronunciations"),
                    issues,
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Referential checks
// ---------------------------------------------------------------------------

const THUMBNAIL_PATH: &str = "settings/packThumbnailImageRef";

/// Resolves asset references for one pack and records failures.
struct AssetIndex<'a> {
    by_id: HashMap<&'a str, &'a Asset>,
}

impl<'a> AssetIndex<'a> {
    fn new(assets: &'a [Asset]) -> Self {
        let mut by_id = HashMap::new();
        for asset in assets {
            by_id.entry(asset.id.as_str()).or_insert(asset);
        }
        Self { by_id }
    }

    fn check(
        &self,
        owner: &str,
        reference: &str,
        expected: AssetKind,
        path: &str,
        issues: &mut Vec<ValidationIssue>,
    ) {
        match self.by_id.get(reference) {
            None => issues.push(ValidationIssue::new(
                path,
                format!("{owner} references missing asset '{reference}'"),
            )),
            Some(asset) if asset.kind != expected => issues.push(ValidationIssue::new(
                path,
                format!(
                    "{owner} references asset '{reference}' of kind {}, expected {expected}",
                    asset.kind
                ),
            )),
            Some(_) => {}
        }
    }

    fn check_optional(
        &self,
        owner: &str,
        reference: Option<&str>,
        expected: AssetKind,
        path: &str,
        issues: &mut Vec<ValidationIssue>,
    ) {
        if let Some(reference) = reference {
            self.check(owner, reference, expected, path, issues);
        }
    }
}

/// Report every occurrence of an id after its first.
fn report_duplicates<'a>(
    ids: impl IntoIterator<Item = &'a str>,
    path: &str,
    what: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(ValidationIssue::new(path, format!("duplicate {what}: {id}")));
        }
    }
}

fn check_references(pack: &Pack, issues: &mut Vec<ValidationIssue>) {
    report_duplicates(
        pack.assets.iter().map(|a| a.id.as_str()),
        "assets",
        "asset id",
        issues,
    );
    report_duplicates(pack.item_ids(), "items", "item id", issues);

    let assets = AssetIndex::new(&pack.assets);

    if let Some(settings) = &pack.settings {
        assets.check_optional(
            "pack thumbnail",
            settings.pack_thumbnail_image_ref.as_deref(),
            AssetKind::Image,
            THUMBNAIL_PATH,
            issues,
        );
    }

    match &pack.items {
        PackItems::FactCards(items) => {
            for item in items {
                check_fact_card(item, &assets, issues);
            }
        }
        PackItems::PicturePhrases(items) => {
            for item in items {
                check_picture_phrase(item, &assets, issues);
            }
        }
        PackItems::VocabVoice(items) => {
            for item in items {
                check_vocab_word(item, &assets, issues);
            }
        }
    }
}

fn check_fact_card(item: &FactCard, assets: &AssetIndex<'_>, issues: &mut Vec<ValidationIssue>) {
    let Some(media) = &item.media else {
        return;
    };
    let owner = format!("item '{}'", item.id);
    assets.check_optional(&owner, media.image_ref.as_deref(), AssetKind::Image, "items", issues);
    assets.check_optional(
        &owner,
        media.prompt_audio_ref.as_deref(),
        AssetKind::Audio,
        "items",
        issues,
    );
    assets.check_optional(
        &owner,
        media.answer_audio_ref.as_deref(),
        AssetKind::Audio,
        "items",
        issues,
    );
}

fn check_picture_phrase(
    item: &PicturePhrase,
    assets: &AssetIndex<'_>,
    issues: &mut Vec<ValidationIssue>,
) {
    let owner = format!("item '{}'", item.id);
    assets.check(&owner, &item.media.image_ref, AssetKind::Image, "items", issues);
    assets.check_optional(
        &owner,
        item.media.audio_ref.as_deref(),
        AssetKind::Audio,
        "items",
        issues,
    );

    report_duplicates(
        item.word_bank.iter().map(|w| w.id.as_str()),
        "items",
        &format!("word bank id in item '{}'", item.id),
        issues,
    );

    let bank: HashSet<&str> = item.word_bank.iter().map(|w| w.id.as_str()).collect();
    for group in &item.sentence_groups {
        for required in &group.required_word_ids {
            if !bank.contains(required.as_str()) {
                issues.push(ValidationIssue::new(
                    "items",
                    format!(
                        "{owner} sentence group '{}' requires word '{required}' which is not in the word bank",
                        group.intent
                    ),
                ));
            }
        }
    }
}

fn check_vocab_word(item: &VocabWord, assets: &AssetIndex<'_>, issues: &mut Vec<ValidationIssue>) {
    let owner = format!("item '{}'", item.id);
    assets.check(
        &owner,
        &item.media.pronunciation_audio_ref,
        AssetKind::Audio,
        "items",
        issues,
    );
    assets.check_optional(&owner, item.media.image_ref.as_deref(), AssetKind::Image, "items", issues);
    assets.check_optional(
        &owner,
        item.media.slow_audio_ref.as_deref(),
        AssetKind::Audio,
        "items",
        issues,
    );

    let word = item.word.trim().to_lowercase();
    let includes_word = item
        .review
        .accepted_pronunciations
        .iter()
        .any(|p| p.trim().to_lowercase() == word);
    if !includes_word {
        issues.push(ValidationIssue::new(
            "items",
            format!("{owner} acceptedPronunciations must include the word '{word}'"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fact_pack() -> Value {
        json!({
            "schemaVersion": 1,
            "id": "animals",
            "title": "Animal Facts",
            "contentVersion": "1.0.0",
            "language": "en",
            "ageBand": "5-7",
            "topics": ["animals"],
            "settings": { "defaultSupportLevel": 2, "packThumbnailImageRef": "img-cow" },
            "assets": [
                { "id": "img-cow", "kind": "image", "path": "cow.png", "alt": "A cow in a field" },
                { "id": "aud-moo", "kind": "audio", "path": "moo.mp3", "durationMs": 1200 }
            ],
            "moduleType": "factcards",
            "items": [
                {
                    "id": "cow",
                    "topic": "animals",
                    "prompt": "What does a cow say?",
                    "answer": "Moo",
                    "hints": ["It rhymes with 'zoo'"],
                    "media": { "imageRef": "img-cow", "answerAudioRef": "aud-moo" }
                },
                {
                    "id": "legs",
                    "topic": "animals",
                    "prompt": "How many legs does a spider have?",
                    "answer": "Eight",
                    "variants": ["8"]
                }
            ]
        })
    }

    fn vocab_pack() -> Value {
        json!({
            "schemaVersion": 1,
            "id": "words",
            "title": "First Words",
            "contentVersion": "3",
            "language": "en",
            "ageBand": "3-5",
            "topics": ["home"],
            "assets": [
                { "id": "aud-apple", "kind": "audio", "path": "apple.mp3" },
                { "id": "img-apple", "kind": "image", "path": "apple.png", "alt": "A red apple" }
            ],
            "moduleType": "vocabvoice",
            "items": [{
                "id": "apple",
                "topic": "home",
                "word": "Apple",
                "syllables": ["ap", "ple"],
                "definition": "A round fruit",
                "exampleSentence": "I eat an apple.",
                "review": {
                    "sentencePrompt": "I eat an ___.",
                    "acceptedPronunciations": ["apple", "apples"]
                },
                "media": { "pronunciationAudioRef": "aud-apple", "imageRef": "img-apple" }
            }]
        })
    }

    fn phrase_pack() -> Value {
        json!({
            "schemaVersion": 1,
            "id": "park",
            "title": "At the Park",
            "contentVersion": "1",
            "language": "en",
            "ageBand": "5-7",
            "topics": ["outdoors"],
            "assets": [
                { "id": "img-dog", "kind": "image", "path": "dog.png", "alt": "A dog running" }
            ],
            "moduleType": "picturephrases",
            "items": [{
                "id": "dog-runs",
                "topic": "outdoors",
                "media": { "imageRef": "img-dog" },
                "wordBank": [
                    { "id": "w1", "text": "the" },
                    { "id": "w2", "text": "dog" },
                    { "id": "w3", "text": "runs" }
                ],
                "sentenceGroups": [{
                    "intent": "describe-action",
                    "canonical": "The dog runs.",
                    "acceptable": ["the dog is running"],
                    "requiredWordIds": ["w2", "w3"],
                    "minWords": 2,
                    "maxWords": 6
                }]
            }]
        })
    }

    fn messages(result: &ValidationResult) -> Vec<String> {
        result.issues().iter().map(|i| i.message.clone()).collect()
    }

    #[test]
    fn valid_packs_pass() {
        for input in [fact_pack(), vocab_pack(), phrase_pack()] {
            let result = validate_pack(&input);
            assert!(result.is_valid(), "unexpected issues: {:?}", result.issues());
        }
        let pack = validate_pack(&fact_pack()).into_result().unwrap();
        assert_eq!(pack.module_type(), ModuleType::FactCards);
        assert_eq!(pack.item_ids(), vec!["cow", "legs"]);
    }

    #[test]
    fn non_object_input_is_an_issue() {
        for input in [json!(null), json!(42), json!("pack"), json!([1, 2])] {
            let result = validate_pack(&input);
            assert!(!result.is_valid());
            assert_eq!(result.issues().len(), 1);
        }
    }

    #[test]
    fn unknown_module_type_is_rejected() {
        let mut input = fact_pack();
        input["moduleType"] = json!("flashcards");
        let result = validate_pack(&input);
        assert!(!result.is_valid());
        assert!(messages(&result)[0].contains("flashcards"));
    }

    #[test]
    fn items_of_another_kind_fail_to_decode() {
        let mut input = fact_pack();
        input["moduleType"] = json!("vocabvoice");
        let result = validate_pack(&input);
        let paths: Vec<&str> = result.issues().iter().map(|i| i.path.as_str()).collect();
        assert_eq!(&paths[..2], ["items/0", "items/1"]);
    }

    #[test]
    fn dangling_asset_reference_names_the_asset() {
        let mut input = fact_pack();
        input["items"][0]["media"]["imageRef"] = json!("img-horse");
        let result = validate_pack(&input);
        assert!(!result.is_valid());
        let issue = &result.issues()[0];
        assert_eq!(issue.path, "items");
        assert!(issue.message.contains("img-horse"));
    }

    #[test]
    fn wrong_asset_kind_is_rejected() {
        let mut input = fact_pack();
        input["items"][0]["media"]["imageRef"] = json!("aud-moo");
        let result = validate_pack(&input);
        assert!(messages(&result)[0].contains("expected image"));
    }

    #[test]
    fn all_reference_errors_are_collected() {
        let mut input = fact_pack();
        input["items"][0]["media"] = json!({
            "imageRef": "missing-1",
            "promptAudioRef": "missing-2",
            "answerAudioRef": "img-cow"
        });
        input["settings"]["packThumbnailImageRef"] = json!("aud-moo");
        let result = validate_pack(&input);
        assert_eq!(result.issues().len(), 4);
        assert!(result
            .issues()
            .iter()
            .any(|i| i.path == "settings/packThumbnailImageRef"));
    }

    #[test]
    fn duplicate_ids_reported_per_occurrence() {
        let mut input = fact_pack();
        let first = input["items"][0].clone();
        let items = input["items"].as_array_mut().unwrap();
        items.push(first.clone());
        items.push(first);
        let assets = input["assets"].as_array_mut().unwrap();
        assets.push(json!({ "id": "aud-moo", "kind": "audio", "path": "moo2.mp3" }));

        let result = validate_pack(&input);
        let item_dupes = result
            .issues()
            .iter()
            .filter(|i| i.path == "items" && i.message == "duplicate item id: cow")
            .count();
        assert_eq!(item_dupes, 2);
        assert!(result
            .issues()
            .iter()
            .any(|i| i.path == "assets" && i.message.contains("aud-moo")));
    }

    #[test]
    fn no_duplicate_issue_without_duplicates() {
        let result = validate_pack(&fact_pack());
        assert!(!messages(&result).iter().any(|m| m.contains("duplicate")));
    }

    #[test]
    fn image_without_alt_text_is_an_error() {
        let mut input = fact_pack();
        input["assets"][0]
            .as_object_mut()
            .unwrap()
            .remove("alt");
        let result = validate_pack(&input);
        assert!(!result.is_valid());
        assert_eq!(result.issues()[0].path, "assets/0/alt");

        input["assets"][0]["alt"] = json!("   ");
        assert!(!validate_pack(&input).is_valid());
    }

    #[test]
    fn audio_without_alt_text_is_fine() {
        let input = fact_pack();
        assert!(input["assets"][1].get("alt").is_none());
        assert!(validate_pack(&input).is_valid());
    }

    #[test]
    fn structural_failure_skips_reference_checks() {
        let mut input = fact_pack();
        input["items"][0]["prompt"] = json!("");
        input["items"][0]["media"]["imageRef"] = json!("nowhere");
        let result = validate_pack(&input);
        assert_eq!(result.issues().len(), 1);
        assert_eq!(result.issues()[0].path, "items/0/prompt");
    }

    #[test]
    fn structural_issues_are_collected() {
        let mut input = fact_pack();
        input["topics"] = json!([]);
        input["items"][1] = json!({ "id": "broken" });
        input["schemaVersion"] = json!(2);
        let result = validate_pack(&input);
        let paths: Vec<&str> = result.issues().iter().map(|i| i.path.as_str()).collect();
        assert!(paths.contains(&"items/1"));
        assert!(paths.contains(&"topics"));
        assert!(paths.contains(&"schemaVersion"));
    }

    #[test]
    fn empty_items_rejected() {
        let mut input = fact_pack();
        input["items"] = json!([]);
        let result = validate_pack(&input);
        assert!(result.issues().iter().any(|i| i.path == "items"));
    }

    #[test]
    fn support_level_out_of_range_rejected() {
        let mut input = fact_pack();
        input["settings"]["defaultSupportLevel"] = json!(4);
        let result = validate_pack(&input);
        assert!(!result.is_valid());
        assert!(messages(&result)[0].contains("between 0 and 3"));
    }

    #[test]
    fn pronunciations_must_include_word() {
        let mut input = vocab_pack();
        input["items"][0]["review"]["acceptedPronunciations"] = json!(["apples", "happle"]);
        let result = validate_pack(&input);
        assert!(!result.is_valid());
        assert!(messages(&result)[0].contains("'apple'"));
    }

    #[test]
    fn pronunciation_match_is_case_insensitive() {
        let mut input = vocab_pack();
        input["items"][0]["review"]["acceptedPronunciations"] = json!(["APPLE"]);
        assert!(validate_pack(&input).is_valid());
    }

    #[test]
    fn vocab_pronunciation_audio_must_be_audio() {
        let mut input = vocab_pack();
        input["items"][0]["media"]["pronunciationAudioRef"] = json!("img-apple");
        input["items"][0]["media"]["slowAudioRef"] = json!("aud-missing");
        let result = validate_pack(&input);
        assert_eq!(result.issues().len(), 2);
    }

    #[test]
    fn required_words_must_be_in_word_bank() {
        let mut input = phrase_pack();
        input["items"][0]["sentenceGroups"][0]["requiredWordIds"] = json!(["w2", "w9"]);
        let result = validate_pack(&input);
        assert_eq!(result.issues().len(), 1);
        assert!(messages(&result)[0].contains("w9"));
    }

    #[test]
    fn picture_phrase_image_must_exist() {
        let mut input = phrase_pack();
        input["items"][0]["media"]["imageRef"] = json!("img-cat");
        let result = validate_pack(&input);
        assert_eq!(result.issues().len(), 1);
        assert_eq!(result.issues()[0].path, "items");
        assert!(messages(&result)[0].contains("missing asset 'img-cat'"));

        let mut input = phrase_pack();
        input["items"][0]["media"] = json!({});
        let result = validate_pack(&input);
        assert!(result
            .issues()
            .iter()
            .any(|i| i.path == "items/0" && i.message.contains("imageRef")));
    }

    #[test]
    fn picture_phrase_media_kinds_checked() {
        let mut input = phrase_pack();
        input["assets"]
            .as_array_mut()
            .unwrap()
            .push(json!({ "id": "aud-dog", "kind": "audio", "path": "dog.mp3" }));
        input["items"][0]["media"]["imageRef"] = json!("aud-dog");
        let result = validate_pack(&input);
        assert_eq!(result.issues().len(), 1);
        assert!(messages(&result)[0].contains("expected image"));

        let mut input = phrase_pack();
        input["items"][0]["media"]["audioRef"] = json!("img-dog");
        let result = validate_pack(&input);
        assert_eq!(result.issues().len(), 1);
        assert!(messages(&result)[0].contains("'img-dog' of kind image, expected audio"));
    }

    #[test]
    fn duplicate_word_bank_ids_rejected() {
        let mut input = phrase_pack();
        input["items"][0]["wordBank"][2]["id"] = json!("w1");
        input["items"][0]["sentenceGroups"][0]["requiredWordIds"] = json!(["w2"]);
        let result = validate_pack(&input);
        assert!(messages(&result)[0].contains("duplicate word bank id"));
    }

    #[test]
    fn min_words_above_max_words_rejected() {
        let mut input = phrase_pack();
        input["items"][0]["sentenceGroups"][0]["minWords"] = json!(7);
        let result = validate_pack(&input);
        assert_eq!(
            result.issues()[0].path,
            "items/0/sentenceGroups/0/minWords"
        );
    }

    #[test]
    fn phrase_needs_acceptable_paraphrase() {
        let mut input = phrase_pack();
        input["items"][0]["sentenceGroups"][0]["acceptable"] = json!([]);
        assert!(!validate_pack(&input).is_valid());
    }
}
