//! Named bundles of prompt text and tuning constants for the pencil sketch
//! img2img pass. Presets are data: the handler is the same for all of them.

pub const DEFAULT_PRESET: &str = "pencil_sketch";

pub const PENCIL_SKETCH_PROMPT: &str = "SomeeStyle, black and white graphite pencil sketch, hand-drawn portrait, realistic pencil drawing, detailed shading, crosshatching, monochrome, grayscale, pencil texture, sketch on white paper, ";

// Keeps the output away from cartoon styles and colour.
pub const PENCIL_SKETCH_NEGATIVE_PROMPT: &str = "cartoon, comic, illustration, animated, stylized, caricature, exaggerated features, distorted face, color, colored, painting, digital art, airbrush, smooth, vector art, flat shading, cel shading, anime, manga, brown, sepia, orange, red, blue, warm tones";

pub const SCHEDULER: &str = "DPMSolverMultistep";

#[derive(Debug, Clone, PartialEq)]
pub struct SketchPreset {
    pub name: &'static str,
    pub prompt_template: &'static str,
    pub negative_prompt: &'static str,
    /// Lower keeps more of the input face.
    pub strength: f64,
    pub guidance_scale: f64,
    pub num_inference_steps: u16,
    pub num_outputs: u8,
    pub scheduler: &'static str,
    pub guess_mode: bool,
}

pub static PRESETS: [SketchPreset; 4] = [
    SketchPreset {
        name: DEFAULT_PRESET,
        prompt_template: PENCIL_SKETCH_PROMPT,
        negative_prompt: PENCIL_SKETCH_NEGATIVE_PROMPT,
        strength: 0.55,
        guidance_scale: 8.5,
        num_inference_steps: 50,
        num_outputs: 1,
        scheduler: SCHEDULER,
        guess_mode: false,
    },
    SketchPreset {
        name: "pencil_sketch_faithful",
        prompt_template: PENCIL_SKETCH_PROMPT,
        negative_prompt: PENCIL_SKETCH_NEGATIVE_PROMPT,
        strength: 0.45,
        guidance_scale: 7.5,
        num_inference_steps: 50,
        num_outputs: 1,
        scheduler: SCHEDULER,
        guess_mode: false,
    },
    SketchPreset {
        name: "pencil_sketch_expressive",
        prompt_template: PENCIL_SKETCH_PROMPT,
        negative_prompt: PENCIL_SKETCH_NEGATIVE_PROMPT,
        strength: 0.65,
        guidance_scale: 9.0,
        num_inference_steps: 50,
        num_outputs: 1,
        scheduler: SCHEDULER,
        guess_mode: false,
    },
    SketchPreset {
        name: "pencil_sketch_draft",
        prompt_template: PENCIL_SKETCH_PROMPT,
        negative_prompt: PENCIL_SKETCH_NEGATIVE_PROMPT,
        strength: 0.55,
        guidance_scale: 8.5,
        num_inference_steps: 25,
        num_outputs: 1,
        scheduler: SCHEDULER,
        guess_mode: false,
    },
];

impl SketchPreset {
    pub fn from_name(name: &str) -> Option<&'static SketchPreset> {
        PRESETS.iter().find(|preset| preset.name == name)
    }

    pub fn default_preset() -> &'static SketchPreset {
        &PRESETS[0]
    }

    /// The style template followed by the caller's fragment, if any.
    pub fn prompt(&self, fragment: Option<&str>) -> String {
        format!("{}{}", self.prompt_template, fragment.unwrap_or(""))
    }
}
