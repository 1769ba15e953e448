use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AestheticType {
    #[default]
    Rustic,
    Modern,
    Social,
}

impl AestheticType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AestheticType::Rustic => "RUSTIC",
            AestheticType::Modern => "MODERN",
            AestheticType::Social => "SOCIAL",
        }
    }

    pub fn style(&self) -> &'static AestheticStyle {
        match self {
            AestheticType::Rustic => &AESTHETICS[0],
            AestheticType::Modern => &AESTHETICS[1],
            AestheticType::Social => &AESTHETICS[2],
        }
    }
}

impl fmt::Display for AestheticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AestheticType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RUSTIC" => Ok(AestheticType::Rustic),
            "MODERN" => Ok(AestheticType::Modern),
            "SOCIAL" => Ok(AestheticType::Social),
            other => Err(CoreError::InvalidInput(format!(
                "unknown aesthetic style: {other}"
            ))),
        }
    }
}

/// Named preset of image-generation prompt guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AestheticStyle {
    pub id: AestheticType,
    pub label: &'static str,
    pub description: &'static str,
    pub prompt_suffix: &'static str,
}

pub const AESTHETICS: [AestheticStyle; 3] = [
    AestheticStyle {
        id: AestheticType::Rustic,
        label: "Rustic & Dark",
        description: "Moody, warm lighting, dark wood textures, cinematic.",
        prompt_suffix: "Professional food photography, rustic aesthetic, dark mood, rich wooden textures, warm cinematic lighting, highly detailed, 8k resolution, shallow depth of field, artisan plating.",
    },
    AestheticStyle {
        id: AestheticType::Modern,
        label: "Bright & Modern",
        description: "Clean, airy, white marble, natural light, minimalist.",
        prompt_suffix: "Professional food photography, bright and modern aesthetic, white marble background, soft natural daylight, airy atmosphere, clean composition, minimalist elegance, 8k resolution, sharp focus.",
    },
    AestheticStyle {
        id: AestheticType::Social,
        label: "Social Media",
        description: "Top-down flat lay, vibrant, high contrast, trendy.",
        prompt_suffix: "Professional food photography, social media flat lay style, direct top-down view, vibrant colors, trendy plating, instagram aesthetic, high contrast, pop colors, 8k resolution, perfectly lit.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_lookup_matches_table_entry() {
        for style in AESTHETICS.iter() {
            assert_eq!(style.id.style(), style);
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "modern".parse::<AestheticType>().unwrap(),
            AestheticType::Modern
        );
        assert!("VINTAGE".parse::<AestheticType>().is_err());
    }
}
