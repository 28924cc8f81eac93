use serde::Serialize;

use super::input_spec_img2img::InputSpecImg2Img;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSpec {
    pub version: String,
    pub input: InputSpecImg2Img,
}
