#[non_exhaustive]
pub struct GenerateAction;

impl GenerateAction {
    pub const CREATE: &'static str = "create";
    pub const STATUS: &'static str = "status";
}
