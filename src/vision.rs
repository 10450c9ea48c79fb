// src/vision.rs

use crate::config::LlmSection;
use crate::model::PageExtraction;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::{Duration, sleep};
use tracing::{info, warn};

/// The prompt that instructs the vision model to read one BOL page and
/// return structured JSON. BOLs come in many layouts (traditional
/// freight BOLs, delivery receipts, carrier-specific forms); the same
/// fields must come back regardless of format.
const EXTRACTION_PROMPT: &str = r#"You are analyzing one page of a Bill of Lading (BOL).
Extract the following fields and return ONLY a valid JSON object, no markdown fences, no commentary.

{
  "pro": "PRO/job number exactly as shown, including page suffixes like 1A/1B; "" if not found",
  "pickupState": "2-letter state code from the PICKUP/SHIPPER address; "" if not found",
  "deliveryState": "2-letter state code from the DELIVERY/CONSIGNEE address; "" if not found",
  "zone": "single letter A-L from the DELIVERY section only (never the pickup zone); "" if not shown",
  "deliveryZip": "5-digit ZIP from the DELIVERY address; "" if not found",
  "deliveryAddress": "full delivery address as one string; "" if not found",
  "weight": actual weight in pounds as a number; 0 if not found,
  "volumeFt3": volume in cubic feet as a number; 0 if not found,
  "liftgate": "Yes" if liftgate service is indicated anywhere (printed or handwritten), else "",
  "inside": "Yes" if inside delivery is mentioned anywhere, including handwritten notes, else "",
  "residential": "Yes" only if explicitly marked residential, else "",
  "overLength": one of "97-144", "145-192", "193-240", "241 or more" based on the LONGEST
    dimension in inches (convert feet to inches first); "" if under 97 inches or unknown,
  "palletCount": number of pallets/pieces; 0 if not found,
  "hasDebrisSection": true if a debris-removal section or checkbox exists, else false,
  "clientName": "full client/shipper name; "" if not found",
  "timeSpecific": based on the ACTUAL delivery time window shown, not handwritten "TS" notes:
    "AM Special" if the window is 4 hours or less AND ends by noon,
    "2 Hours" if the window is exactly 2 hours,
    "15 Minutes" if the window is 15 minutes or less,
    "" otherwise (broad windows, bare appointment notes, or no window),
  "detention": driver wait time in MINUTES (convert hours); 0 if not found
}

Rules:
- Prefer delivery/consignee fields over pickup/shipper fields when in doubt.
- Check margins and handwritten notes everywhere for services.
- Use "" for missing text fields, 0 for missing numbers, false for missing booleans."#;

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: Vec<ContentBlock>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ContentBlock {
    Document { source: DocumentSource },
    Text { text: String },
}

#[derive(Debug, Serialize)]
struct DocumentSource {
    #[serde(rename = "type")]
    kind: &'static str,
    media_type: &'static str,
    data: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
struct ResponseBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// A page the vision model could not extract. Failures are terminal per
/// page and never abort the batch.
#[derive(Debug)]
pub struct PageFailure {
    pub filename: String,
    pub page_number: usize,
    pub error: String,
}

/// Sequential, rate-limited vision client: one in-flight call at a time
/// with a fixed pause before every call after the first. The pacing
/// policy lives here, not inline in the batch loop, so it can be tuned
/// without touching extraction or pricing.
pub struct PacedExtractor {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: u32,
    api_key: String,
    delay: Duration,
    calls_made: usize,
}

impl PacedExtractor {
    pub fn new(llm: &LlmSection, delay_ms: u64) -> Result<Self, Box<dyn std::error::Error>> {
        let api_key = std::env::var("LLM_API_KEY")
            .map_err(|_| "LLM_API_KEY env var required for vision extraction")?;
        info!(url = %llm.base_url, model = %llm.model, delay_ms, "Vision endpoint configured");
        Ok(PacedExtractor {
            client: Client::new(),
            base_url: llm.base_url.clone(),
            model: llm.model.clone(),
            max_tokens: llm.max_tokens,
            api_key,
            delay: Duration::from_millis(delay_ms),
            calls_made: 0,
        })
    }

    /// Send one single-page PDF to the vision model and parse the reply.
    pub async fn extract_page(
        &mut self,
        page_pdf: &[u8],
    ) -> Result<PageExtraction, Box<dyn std::error::Error>> {
        if self.calls_made > 0 {
            sleep(self.delay).await;
        }
        self.calls_made += 1;

        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: vec![
                    ContentBlock::Document {
                        source: DocumentSource {
                            kind: "base64",
                            media_type: "application/pdf",
                            data: BASE64.encode(page_pdf),
                        },
                    },
                    ContentBlock::Text {
                        text: EXTRACTION_PROMPT.to_string(),
                    },
                ],
            }],
        };

        let url = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Vision API error {status}: {body}").into());
        }

        let reply: MessagesResponse = response.json().await?;
        let text = reply
            .content
            .iter()
            .find(|b| b.kind == "text")
            .map(|b| b.text.as_str())
            .ok_or("Empty response from vision model")?;

        parse_extraction(text)
    }
}

/// Parse the model's reply into a `PageExtraction`, salvaging the JSON
/// object from markdown fences or surrounding prose if necessary.
pub fn parse_extraction(reply: &str) -> Result<PageExtraction, Box<dyn std::error::Error>> {
    let trimmed = reply
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    let json_str = extract_json_object(trimmed)?;
    let page: PageExtraction = serde_json::from_str(json_str)
        .map_err(|e| format!("Failed to parse vision reply as PageExtraction: {e}\nRaw: {json_str}"))?;

    if page.pro.is_empty() && page.delivery_address.is_empty() {
        warn!("Extraction produced neither a PRO nor a delivery address");
    }
    Ok(page)
}

/// Extract the outermost JSON object from a string that may contain
/// surrounding text.
fn extract_json_object(s: &str) -> Result<&str, Box<dyn std::error::Error>> {
    let start = s.find('{').ok_or("No '{' found in vision reply")?;
    let end = s.rfind('}').ok_or("No '}' found in vision reply")?;
    if end <= start {
        return Err("Malformed JSON in vision reply".into());
    }
    Ok(&s[start..=end])
}
