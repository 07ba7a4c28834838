const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 50;

/// Detect the dominant language of extracted text, as an ISO 639-3 code.
/// Short or ambiguous text yields `None`.
pub fn detect(text: &str) -> Option<&'static str> {
    if text.trim().len() < MIN_TEXT_LENGTH {
        return None;
    }

    let info = whatlang::detect(text)?;
    if info.confidence() >= MIN_CONFIDENCE {
        Some(info.lang().code())
    } else {
        None
    }
}
