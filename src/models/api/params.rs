use serde::Deserialize;

// Fields are optional so a missing `url` surfaces as our own InvalidInput
// rather than a bare query rejection.
#[derive(Deserialize, Debug, Default)]
pub struct SeoParams {
    pub url: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct SpeedParams {
    pub url: Option<String>,
    pub strategy: Option<String>,
}
