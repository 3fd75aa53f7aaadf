use crate::backend::{SummaryMode, TargetLanguage, Voice};
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

pub(crate) const SIDEBAR_WIDTH_PX: f32 = 320.0;
pub(crate) const RESULT_MIN_HEIGHT_PX: f32 = 260.0;
pub(crate) const CHIP_FONT_SIZE_PX: f32 = 13.0;
pub(crate) static SUMMARY_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("summary-scroll"));

pub(crate) const SUMMARY_MODES: [SummaryMode; 3] = [
    SummaryMode::Quick,
    SummaryMode::Standard,
    SummaryMode::Deep,
];
pub(crate) const TARGET_LANGUAGES: [TargetLanguage; 6] = [
    TargetLanguage::Es,
    TargetLanguage::Fr,
    TargetLanguage::De,
    TargetLanguage::It,
    TargetLanguage::Pt,
    TargetLanguage::Hi,
];
pub(crate) const VOICES: [Voice; 6] = [
    Voice::Standard,
    Voice::Puck,
    Voice::Charon,
    Voice::Kore,
    Voice::Fenrir,
    Voice::Aoede,
];
