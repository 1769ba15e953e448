use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    dish::{
        helpers::{data_uri, strip_image_data_uri},
        ports::GenerationClient,
        schema::get_menu_parse_schema,
        value_objects::{ImageGenerationRequest, ParsedDish},
    },
};

const GENERATED_IMAGE_MIME: &str = "image/jpeg";
const EDITED_IMAGE_MIME: &str = "image/png";

#[derive(Debug, Clone)]
pub struct GeminiGenerationClient {
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
    edit_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Default, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartResponse {
    text: Option<String>,
    #[serde(alias = "inline_data")]
    inline_data: Option<InlineDataResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataResponse {
    #[serde(alias = "mime_type")]
    mime_type: Option<String>,
    data: String,
}

impl GeminiResponse {
    fn parts(&self) -> &[PartResponse] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text of the first candidate, if any.
    fn text(&self) -> Option<String> {
        let text: String = self
            .parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        (!text.is_empty()).then_some(text)
    }

    fn inline_image(&self) -> Option<&InlineDataResponse> {
        self.parts()
            .iter()
            .filter_map(|p| p.inline_data.as_ref())
            .find(|d| !d.data.is_empty())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: String,
    output_options: OutputOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
}

fn menu_parse_prompt(text: &str) -> String {
    format!(
        "You are a culinary data assistant. Extract a list of dishes from the following menu text.\n\
         For each dish, provide the 'name' and a brief, visual 'description' suitable for an image generation prompt.\n\
         Ignore headings like \"Appetizers\" or prices.\n\n\
         Menu Text:\n{text}"
    )
}

fn refinement_prompt(request: &ImageGenerationRequest) -> String {
    format!(
        "You are an expert food photography director. Create a highly detailed image generation prompt for Google Imagen based on these inputs:\n\n\
         Dish Name: {}\n\
         Dish Description: {}\n\
         Aesthetic Style Guidelines: {}\n\
         AspectRatio: {}\n\n\
         Instructions:\n\
         1. Create a cohesive visual description that seamlessly integrates the dish details with the aesthetic style.\n\
         2. Describe the lighting, plating, camera angle, depth of field, and background textures specifically for this dish and style.\n\
         3. Ensure the food sounds delicious and the photography sounds professional.\n\
         4. Output ONLY the raw prompt text to be sent to the image generator. Do not include \"Prompt:\" or markdown.",
        request.dish_name, request.dish_description, request.style_prompt, request.aspect_ratio
    )
}

fn fallback_prompt(request: &ImageGenerationRequest) -> String {
    format!(
        "A delicious, high-end photo of {}. {}. {}",
        request.dish_name, request.dish_description, request.style_prompt
    )
}

/// Decodes the JSON text of a parse response. No text means no dishes.
fn decode_menu_items(text: Option<&str>) -> Result<Vec<ParsedDish>, CoreError> {
    match text.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(json) => serde_json::from_str(json).map_err(|e| {
            tracing::error!("Invalid menu items format: {}", e);
            CoreError::ExternalServiceError(format!("Invalid menu items format: {}", e))
        }),
    }
}

impl GeminiGenerationClient {
    pub fn new(config: LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.gemini_api_key,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            text_model: config.text_model,
            image_model: config.image_model,
            edit_model: config.edit_model,
            client,
        })
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.base_url, model, method, self.api_key
        )
    }

    async fn call_gemini_api<Req, Resp>(&self, url: String, request: &Req) -> Result<Resp, CoreError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned + Send,
    {
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })
    }

    async fn generate_content(
        &self,
        model: &str,
        request: GeminiRequest,
    ) -> Result<GeminiResponse, CoreError> {
        self.call_gemini_api(self.model_url(model, "generateContent"), &request)
            .await
    }

    /// Asks the text model to blend dish details and style into one Imagen prompt.
    async fn refine_prompt(&self, request: &ImageGenerationRequest) -> Result<String, CoreError> {
        let response = self
            .generate_content(
                &self.text_model,
                GeminiRequest {
                    contents: vec![Content {
                        parts: vec![Part::Text {
                            text: refinement_prompt(request),
                        }],
                    }],
                    generation_config: None,
                },
            )
            .await?;

        Ok(response
            .text()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| fallback_prompt(request)))
    }
}

impl GenerationClient for GeminiGenerationClient {
    async fn parse_menu(&self, text: String) -> Result<Vec<ParsedDish>, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: menu_parse_prompt(&text),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(get_menu_parse_schema()),
                ..Default::default()
            }),
        };

        let response = self.generate_content(&self.text_model, request).await?;

        decode_menu_items(response.text().as_deref())
    }

    async fn generate_dish_image(&self, request: ImageGenerationRequest) -> Result<String, CoreError> {
        let prompt = self.refine_prompt(&request).await?;

        tracing::debug!(dish_name = %request.dish_name, %prompt, "Generating image");

        let predict = PredictRequest {
            instances: vec![PredictInstance { prompt }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: request.aspect_ratio.to_string(),
                output_options: OutputOptions {
                    mime_type: GENERATED_IMAGE_MIME.to_string(),
                },
            },
        };

        let response: PredictResponse = self
            .call_gemini_api(self.model_url(&self.image_model, "predict"), &predict)
            .await?;

        response
            .predictions
            .into_iter()
            .find_map(|p| {
                let bytes = p.bytes_base64_encoded.filter(|b| !b.is_empty())?;
                let mime = p.mime_type.unwrap_or_else(|| GENERATED_IMAGE_MIME.to_string());
                Some(data_uri(&mime, &bytes))
            })
            .ok_or_else(|| CoreError::EmptyResult("No image generated".to_string()))
    }

    async fn edit_dish_image(&self, image: String, instruction: String) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: GENERATED_IMAGE_MIME.to_string(),
                            data: strip_image_data_uri(&image).to_string(),
                        },
                    },
                    Part::Text { text: instruction },
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["IMAGE".to_string()]),
                ..Default::default()
            }),
        };

        let response = self.generate_content(&self.edit_model, request).await?;

        response
            .inline_image()
            .map(|d| {
                let mime = d.mime_type.as_deref().unwrap_or(EDITED_IMAGE_MIME);
                data_uri(mime, &d.data)
            })
            .ok_or_else(|| {
                CoreError::EmptyResult("No image returned from edit operation".to_string())
            })
    }
}
