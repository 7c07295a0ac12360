//! Content pack data model.
//!
//! A [`Pack`] bundles the assets and items of one learning module. The item
//! list is a tagged union keyed by `moduleType`, so a pack can never mix
//! item kinds. Field names serialize in camelCase to match the pack JSON
//! produced by authoring tools.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SupportLevelError;

/// The only pack schema version this crate understands.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// A versioned bundle of learning content for one module type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    /// Pack schema version, see [`CURRENT_SCHEMA_VERSION`].
    pub schema_version: u32,
    /// Unique pack identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Version of the content itself, bumped by authors on every edit.
    pub content_version: String,
    /// BCP 47 language tag (e.g. "en-US").
    pub language: String,
    /// Target age band label (e.g. "5-7").
    pub age_band: String,
    /// Topic labels covered by this pack.
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<PackSettings>,
    /// Images and audio referenced by the items.
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// The items, tagged by `moduleType`.
    #[serde(flatten)]
    pub items: PackItems,
}

impl Pack {
    /// The module type shared by every item in this pack.
    pub fn module_type(&self) -> ModuleType {
        self.items.module_type()
    }

    /// Item ids in pack order.
    pub fn item_ids(&self) -> Vec<&str> {
        self.items.ids()
    }
}

/// Optional per-pack presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackSettings {
    /// Support level a learner starts at for this pack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_support_level: Option<SupportLevel>,
    /// Whether audio plays automatically.
    #[serde(default)]
    pub audio_on_by_default: bool,
    /// Image asset shown as the pack thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_thumbnail_image_ref: Option<String>,
}

/// An image or audio resource owned by a pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Identifier, unique within the pack.
    pub id: String,
    pub kind: AssetKind,
    /// Relative path or URI of the resource.
    pub path: String,
    /// Alt text. Required for images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Kind of a pack asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Audio,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::Audio => write!(f, "audio"),
        }
    }
}

/// Discriminant of the pack item union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    FactCards,
    PicturePhrases,
    VocabVoice,
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleType::FactCards => write!(f, "factcards"),
            ModuleType::PicturePhrases => write!(f, "picturephrases"),
            ModuleType::VocabVoice => write!(f, "vocabvoice"),
        }
    }
}

impl FromStr for ModuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "factcards" => Ok(ModuleType::FactCards),
            "picturephrases" => Ok(ModuleType::PicturePhrases),
            "vocabvoice" => Ok(ModuleType::VocabVoice),
            other => Err(format!("unknown module type: {other}")),
        }
    }
}

/// The items of a pack. Every item in a pack has the same variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "moduleType", content = "items", rename_all = "lowercase")]
pub enum PackItems {
    FactCards(Vec<FactCard>),
    PicturePhrases(Vec<PicturePhrase>),
    VocabVoice(Vec<VocabWord>),
}

impl PackItems {
    pub fn module_type(&self) -> ModuleType {
        match self {
            PackItems::FactCards(_) => ModuleType::FactCards,
            PackItems::PicturePhrases(_) => ModuleType::PicturePhrases,
            PackItems::VocabVoice(_) => ModuleType::VocabVoice,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PackItems::FactCards(items) => items.len(),
            PackItems::PicturePhrases(items) => items.len(),
            PackItems::VocabVoice(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item ids in pack order.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            PackItems::FactCards(items) => items.iter().map(|i| i.id.as_str()).collect(),
            PackItems::PicturePhrases(items) => items.iter().map(|i| i.id.as_str()).collect(),
            PackItems::VocabVoice(items) => items.iter().map(|i| i.id.as_str()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Fact cards
// ---------------------------------------------------------------------------

/// A question/answer card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCard {
    pub id: String,
    pub topic: String,
    pub prompt: String,
    pub answer: String,
    /// Other answers that count as correct.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
    /// Wrong answers offered in multiple-choice mode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub distractors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<FactCardMedia>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCardMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_audio_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_audio_ref: Option<String>,
}

// ---------------------------------------------------------------------------
// Picture phrases
// ---------------------------------------------------------------------------

/// A picture the learner describes by assembling words from a word bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PicturePhrase {
    pub id: String,
    pub topic: String,
    pub media: PicturePhraseMedia,
    /// Tokens offered to the learner, in display order.
    pub word_bank: Vec<WordToken>,
    pub sentence_groups: Vec<SentenceGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PicturePhraseMedia {
    pub image_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_ref: Option<String>,
}

/// One word bank entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordToken {
    pub id: String,
    pub text: String,
}

/// A family of sentences that express the same intent about a picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceGroup {
    pub intent: String,
    pub canonical: String,
    /// Accepted paraphrases of the canonical sentence.
    pub acceptable: Vec<String>,
    /// Word bank ids that must appear in the learner's sentence.
    #[serde(default)]
    pub required_word_ids: Vec<String>,
    pub min_words: u32,
    pub max_words: u32,
}

// ---------------------------------------------------------------------------
// Vocabulary words
// ---------------------------------------------------------------------------

/// A spoken vocabulary word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabWord {
    pub id: String,
    pub topic: String,
    pub word: String,
    pub syllables: Vec<String>,
    pub definition: String,
    pub example_sentence: String,
    pub review: VocabReview,
    #[serde(default)]
    pub hints: Vec<String>,
    pub media: VocabMedia,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabReview {
    /// Sentence read to the learner with the word blanked out.
    pub sentence_prompt: String,
    /// Speech-recognition transcripts accepted as saying the word.
    pub accepted_pronunciations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabMedia {
    pub pronunciation_audio_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow_audio_ref: Option<String>,
}

// ---------------------------------------------------------------------------
// Support level
// ---------------------------------------------------------------------------

/// Scaffolding intensity, from 0 (no help) to 3 (maximum help).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SupportLevel(u8);

impl SupportLevel {
    pub const MIN: SupportLevel = SupportLevel(0);
    pub const MAX: SupportLevel = SupportLevel(3);

    pub fn new(level: u8) -> Result<Self, SupportLevelError> {
        Self::try_from(level)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One step more help, saturating at [`SupportLevel::MAX`].
    pub fn increase(self) -> Self {
        SupportLevel((self.0 + 1).min(Self::MAX.0))
    }

    /// One step less help, saturating at [`SupportLevel::MIN`].
    pub fn decrease(self) -> Self {
        SupportLevel(self.0.saturating_sub(1))
    }
}

impl Default for SupportLevel {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for SupportLevel {
    type Error = SupportLevelError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if level <= Self::MAX.0 {
            Ok(SupportLevel(level))
        } else {
            Err(SupportLevelError(level))
        }
    }
}

impl From<SupportLevel> for u8 {
    fn from(level: SupportLevel) -> Self {
        level.0
    }
}

impl fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_type_display_and_parse() {
        assert_eq!(ModuleType::FactCards.to_string(), "factcards");
        assert_eq!(ModuleType::VocabVoice.to_string(), "vocabvoice");
        assert_eq!(
            "PicturePhrases".parse::<ModuleType>().unwrap(),
            ModuleType::PicturePhrases
        );
        assert!("flashcards".parse::<ModuleType>().is_err());
    }

    #[test]
    fn support_level_bounds() {
        assert_eq!(SupportLevel::new(0).unwrap(), SupportLevel::MIN);
        assert_eq!(SupportLevel::new(3).unwrap(), SupportLevel::MAX);
        assert_eq!(SupportLevel::new(4), Err(SupportLevelError(4)));
        assert_eq!(SupportLevel::MAX.increase(), SupportLevel::MAX);
        assert_eq!(SupportLevel::MIN.decrease(), SupportLevel::MIN);
        assert_eq!(SupportLevel::default(), SupportLevel::MAX);
    }

    #[test]
    fn support_level_rejects_out_of_range_json() {
        let ok: SupportLevel = serde_json::from_str("2").unwrap();
        assert_eq!(ok.get(), 2);
        let err = serde_json::from_str::<SupportLevel>("7").unwrap_err();
        assert!(err.to_string().contains("between 0 and 3"));
    }

    #[test]
    fn pack_items_serialize_with_module_type_tag() {
        let pack = Pack {
            schema_version: CURRENT_SCHEMA_VERSION,
            id: "animals".into(),
            title: "Animals".into(),
            description: None,
            content_version: "1.0.0".into(),
            language: "en".into(),
            age_band: "5-7".into(),
            topics: vec!["animals".into()],
            settings: None,
            assets: vec![],
            items: PackItems::FactCards(vec![FactCard {
                id: "f1".into(),
                topic: "animals".into(),
                prompt: "What does a cow say?".into(),
                answer: "Moo".into(),
                variants: vec![],
                distractors: vec![],
                hints: vec![],
                media: None,
            }]),
        };

        let json = serde_json::to_value(&pack).unwrap();
        assert_eq!(json["moduleType"], "factcards");
        assert_eq!(json["items"][0]["id"], "f1");
        assert_eq!(json["schemaVersion"], 1);
        assert_eq!(pack.module_type(), ModuleType::FactCards);
        assert_eq!(pack.item_ids(), vec!["f1"]);
    }
}
