use crate::{
    app::models::api_error::ApiError,
    replicate::{
        models::{input_spec::InputSpec, input_spec_img2img::InputSpecImg2Img},
        structs::replicate_response::ReplicateResponse,
    },
    AppState,
};

use super::{dtos::generate_dto::GenerateDto, errors::GenerateApiError, presets::SketchPreset};

pub async fn create_prediction(
    dto: &GenerateDto,
    api_key: &str,
    state: &AppState,
) -> Result<ReplicateResponse, ApiError> {
    let (Some(model_version), Some(image)) = (dto.model_version(), dto.image())
    else {
        return Err(GenerateApiError::MissingRequiredFields.value());
    };

    let input_spec = provide_input_spec(model_version, image, dto.prompt(), state.preset);

    state
        .predictions
        .create_prediction(api_key, &input_spec)
        .await
}

pub async fn get_prediction(
    dto: &GenerateDto,
    api_key: &str,
    state: &AppState,
) -> Result<ReplicateResponse, ApiError> {
    let Some(prediction_id) = dto.prediction_id()
    else {
        return Err(GenerateApiError::PredictionIdRequired.value());
    };

    state.predictions.get_prediction(api_key, prediction_id).await
}

pub fn provide_input_spec(
    model_version: &str,
    image: &str,
    prompt: Option<&str>,
    preset: &SketchPreset,
) -> InputSpec {
    InputSpec {
        version: model_version.to_string(),
        input: InputSpecImg2Img {
            image: image.to_string(),
            prompt: preset.prompt(prompt),
            negative_prompt: preset.negative_prompt.to_string(),
            strength: preset.strength,
            guidance_scale: preset.guidance_scale,
            num_inference_steps: preset.num_inference_steps,
            num_outputs: preset.num_outputs,
            scheduler: preset.scheduler.to_string(),
            guess_mode: preset.guess_mode,
        },
    }
}
