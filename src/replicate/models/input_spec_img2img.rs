use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSpecImg2Img {
    pub image: String,
    pub prompt: String,
    pub negative_prompt: String,
    pub strength: f64,
    pub guidance_scale: f64,
    pub num_inference_steps: u16,
    pub num_outputs: u8,
    pub scheduler: String,
    pub guess_mode: bool,
}
