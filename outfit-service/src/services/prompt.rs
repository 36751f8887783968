//! Prompt construction for outfit suggestions.
//!
//! Each prompt style pairs a fixed instruction template with fixed sampling
//! parameters. Nothing here is tunable per request.

use crate::models::OutfitRequest;
use crate::services::providers::GenerationParams;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStyle {
    /// Sectioned stylist brief. Response carries only the raw text.
    Structured,
    /// Markdown-formatted suggestions. Response carries text and rendered HTML.
    #[default]
    Markdown,
}

impl PromptStyle {
    pub fn sampling(self) -> GenerationParams {
        match self {
            PromptStyle::Structured => GenerationParams {
                temperature: Some(0.7),
                top_p: Some(0.8),
                top_k: Some(40),
                max_tokens: Some(1024),
            },
            PromptStyle::Markdown => GenerationParams {
                temperature: Some(0.9),
                top_p: Some(1.0),
                top_k: None,
                max_tokens: Some(2048),
            },
        }
    }

    pub fn renders_html(self) -> bool {
        matches!(self, PromptStyle::Markdown)
    }

    pub fn build_prompt(self, request: &OutfitRequest) -> String {
        match self {
            PromptStyle::Structured => structured_prompt(request),
            PromptStyle::Markdown => markdown_prompt(request),
        }
    }
}

impl FromStr for PromptStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "structured" => Ok(PromptStyle::Structured),
            "markdown" => Ok(PromptStyle::Markdown),
            _ => Err(format!("Invalid prompt style: {}", s)),
        }
    }
}

impl fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptStyle::Structured => write!(f, "structured"),
            PromptStyle::Markdown => write!(f, "markdown"),
        }
    }
}

fn structured_prompt(r: &OutfitRequest) -> String {
    format!(
        "You are a professional fashion stylist with expertise in creating modern, trendy outfits.
Create a complete outfit suggestion based on:
- Main piece: {item}
- Expression style: {expression}
- Temperature: {temperature}
- Season: {season}

Provide a detailed outfit suggestion in the following format:

STYLING THE MAIN PIECE:
[Explain how to style the {item} specifically]

COMPLETE OUTFIT:
- Top: [if main piece isn't a top]
- Bottom: [if main piece isn't a bottom]
- Layering: [any additional layers]
- Footwear: [shoe recommendation]

ACCESSORIES:
- Jewelry: [specific recommendations]
- Bag: [specific type and style]
- Other: [any other accessories]

STYLING TIPS:
[3-4 specific tips about proportions, color combinations, or styling tricks]

OCCASION VERSATILITY:
[Brief note on how to adapt this outfit for different occasions]

Focus on current fashion trends and ensure all suggestions are weather-appropriate for {temperature} {season} conditions.
Consider the {expression} expression style throughout all recommendations.",
        item = r.item,
        expression = r.expression,
        temperature = r.temperature,
        season = r.season,
    )
}

fn markdown_prompt(r: &OutfitRequest) -> String {
    format!(
        "As a fashion expert, suggest outfit combinations for a {expression} person wearing a {item} in {temperature} {season} weather. \
Focus on creating stylish and practical outfits. \
Include specific suggestions for complementary pieces and accessories. \
Format your response in Markdown with:

- A brief introduction
- A bulleted list of 2-3 complete outfit suggestions
- A section for accessories and styling tips

Keep each suggestion concise but detailed.",
        item = r.item,
        expression = r.expression,
        temperature = r.temperature,
        season = r.season,
    )
}
