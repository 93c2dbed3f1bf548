use serde::{Deserialize, Serialize};

use super::Language;

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageBody {
    pub language: Language,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub key: String,
    pub language: Language,
    pub text: String,
}
