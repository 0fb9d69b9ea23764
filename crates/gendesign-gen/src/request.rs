//! Prompt and output schema shaping for the generation call

use gendesign_core::{format_thousands, DesignParameters};
use serde::Serialize;
use serde_json::{json, Value};

/// Number of design options the model is asked for
pub const OPTIONS_PER_REQUEST: usize = 4;

/// Builds the natural-language instruction sent to the model.
pub fn build_prompt(params: &DesignParameters) -> String {
    format!(
        r#"Anda adalah seorang ahli rekayasa desain generatif yang sangat canggih.
Tugas Anda adalah menghasilkan {count} opsi desain produk yang inovatif dan optimal berdasarkan parameter yang diberikan.

Parameter Desain:
- Deskripsi Produk: {prompt}
- Material Pilihan Utama: {material}
- Batasan Biaya Maksimum: Rp {max_cost}
- Tingkat Kekuatan yang Diinginkan: {strength}

Instruksi:
1.  Hasilkan {count} opsi desain yang unik untuk "{prompt}".
2.  Setiap desain harus memenuhi atau mendekati tingkat kekuatan yang diinginkan.
3.  Perkiraan biaya setiap desain TIDAK BOLEH melebihi batasan biaya maksimum.
4.  Anda boleh menyarankan material alternatif jika itu menghasilkan desain yang lebih baik (lebih efisien atau lebih kuat dalam batasan biaya).
5.  Untuk setiap opsi, berikan:
    -   'designName': Nama yang kreatif dan deskriptif untuk desain tersebut.
    -   'materialUsed': Material yang digunakan.
    -   'estimatedCost': Perkiraan biaya produksi dalam Rupiah (IDR), harus berupa angka.
    -   'strengthLevel': Tingkat kekuatan (e.g., 'Sedang', 'Tinggi').
    -   'materialEfficiencyScore': Skor efisiensi material dari 1 hingga 100, di mana 100 adalah yang paling efisien (penggunaan material minimal untuk kekuatan maksimal). Harus berupa angka.
    -   'description': Deskripsi singkat (1-2 kalimat) yang menyoroti keunggulan desain tersebut.
6.  Pastikan output Anda dalam format JSON yang valid sesuai dengan skema yang disediakan.
"#,
        count = OPTIONS_PER_REQUEST,
        prompt = params.prompt,
        material = params.material,
        max_cost = format_thousands(params.max_cost),
        strength = params.strength.label(),
    )
}

/// Output schema (OpenAPI subset understood by the endpoint): an array of
/// design objects with all six fields required.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "designName": {
                    "type": "STRING",
                    "description": "Nama yang kreatif dan deskriptif untuk desain."
                },
                "materialUsed": {
                    "type": "STRING",
                    "description": "Material utama yang digunakan dalam desain ini."
                },
                "estimatedCost": {
                    "type": "NUMBER",
                    "description": "Perkiraan biaya produksi dalam Rupiah (IDR)."
                },
                "strengthLevel": {
                    "type": "STRING",
                    "description": "Tingkat kekuatan yang dicapai oleh desain ini (e.g., Sedang, Tinggi)."
                },
                "materialEfficiencyScore": {
                    "type": "NUMBER",
                    "description": "Skor efisiensi penggunaan material (1-100)."
                },
                "description": {
                    "type": "STRING",
                    "description": "Deskripsi singkat tentang keunggulan desain."
                }
            },
            "required": [
                "designName",
                "materialUsed",
                "estimatedCost",
                "strengthLevel",
                "materialEfficiencyScore",
                "description"
            ]
        }
    })
}

/// Body of `POST .../models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Value,
    pub temperature: f64,
}

impl GenerateContentRequest {
    pub fn new(params: &DesignParameters, temperature: f64) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: build_prompt(params),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
                temperature,
            },
        }
    }
}
