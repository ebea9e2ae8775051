use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Profile submitted when requesting a personal healthy eating plan.
/// Field names are kept in Indonesian because they are forwarded verbatim
/// into the prompt and the model answers in the same vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub nama: String,
    pub usia: i32,
    pub jenis_kelamin: String,
    /// Body weight in kilograms.
    pub berat_badan: f64,
    /// Body height in centimetres.
    pub tinggi_badan: f64,
    pub tingkat_aktivitas: String,
    #[serde(default)]
    pub catatan_aktivitas: Option<String>,
    pub waktu_bangun: String,
    pub waktu_tidur: String,
    #[serde(default)]
    pub preferensi_makanan: Option<String>,
    #[serde(default)]
    pub alergi_makanan: Option<String>,
    #[serde(default)]
    pub kondisi_kesehatan: Option<String>,
    pub tujuan: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BmiStatus {
    Kurus,
    Normal,
    Gemuk,
    Obesitas,
}

/// Body-mass index (IMT) rounded to two decimals with its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Bmi {
    #[serde(rename = "imt_score")]
    pub score: f64,
    #[serde(rename = "imt_status")]
    pub status: BmiStatus,
}
