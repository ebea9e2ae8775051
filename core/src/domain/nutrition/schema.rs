use serde_json::{Value, json};

/// Target shape of a personal healthy eating plan.
pub fn personal_plan_skeleton() -> Value {
    json!({
        "kebutuhan_kalori": {
            "total_kalori_per_hari_(kcal)": 0
        },
        "kebutuhan_makronutrisi": {
            "karbohidrat_per_hari_(g)": 0,
            "protein_per_hari_(g)": 0,
            "lemak_per_hari_(g)": 0,
            "serat_per_hari_(g)": 0
        },
        "kebutuhan_mikronutrisi": {
            "vitamin_a_per_hari_(mg)": 0,
            "vitamin_b_kompleks_per_hari_(mg)": 0,
            "vitamin_c_per_hari_(mg)": 0,
            "vitamin_d_per_hari_(mg)": 0,
            "vitamin_e_per_hari_(mg)": 0,
            "vitamin_k_per_hari_(mg)": 0,
            "kalsium_per_hari_(mg)": 0,
            "zat_besi_per_hari_(mg)": 0,
            "magnesium_per_hari_(mg)": 0,
            "kalium_per_hari_(mg)": 0,
            "natrium_per_hari_(mg)": 0,
            "zinc_per_hari_(mg)": 0,
            "yodium_per_hari_(mg)": 0
        },
        "batasi_konsumsi": {
            "gula_per_hari_(g)": 0,
            "garam_per_hari_(g)": 0,
            "kafein_per_hari_(mg)": 0,
            "lemak_jenuh_per_hari_(g)": 0,
            "lemak_trans_per_hari_(g)": 0,
            "kolesterol_per_hari_(mg)": 0
        },
        "kebutuhan_cairan": {
            "air_per_hari_(liter)": 0,
            "air_per_hari_(gelas)": 0
        },
        "catatan": "Catatan khusus tentang plan makan sehat user"
    })
}

fn meal_slot(description: &str, options: &[&str]) -> Value {
    json!({
        "range_waktu": "HH.MM–HH.MM",
        "deskripsi_rekomendasi_menu": description,
        "list_pilihan_menu": options,
        "asupan_cairan_(air_gelas)": 0,
        "target_kalori_(kcal)": 0
    })
}

/// Target shape of a one-day meal plan: three main meals and two optional snacks.
pub fn meal_plan_skeleton() -> Value {
    let main = ["Menu option 1", "Menu option 2", "Menu option 3"];
    let snack = ["Menu option 1", "Menu option 2"];

    json!({
        "sarapan": meal_slot("Short description of the meal recommendation", &main),
        "snack_pagi_opsional": meal_slot("Short description", &snack),
        "makan_siang": meal_slot("Short description", &main),
        "snack_sore_opsional": meal_slot("Short description", &snack),
        "makan_malam": meal_slot("Short description", &main)
    })
}

/// Target shape shared by the food-photo and nutrition-label scanners.
pub fn food_scan_skeleton() -> Value {
    json!({
        "nama_makanan": "name_makanan",
        "foto_makanan": "deskripsi_foto_makanan",
        "estimasi_komposisi_makanan": {
            "item1_(g)": 0,
            "item2_(g)": 0,
            "item3_(g)": 0
        },
        "estimasi_kandungan_makronutrisi": {
            "karbohidrat_(g)": 0,
            "protein_(g)": 0,
            "lemak_(g)": 0,
            "serat_(g)": 0
        },
        "estimasi_kandungan_mikronutrisi": {
            "vitamin_(mg)": {
                "vitamin_a_(mg)": 0,
                "vitamin_b_kompleks_(mg)": 0,
                "vitamin_c_(mg)": 0,
                "vitamin_d_(mg)": 0,
                "vitamin_e_(mg)": 0,
                "vitamin_k_(mg)": 0
            },
            "mineral_(mg)": {
                "kalsium_(mg)": 0,
                "zat_besi_(mg)": 0,
                "magnesium_(mg)": 0,
                "kalium_(mg)": 0,
                "natrium_(mg)": 0,
                "zinc_(mg)": 0,
                "yodium_(mg)": 0
            }
        },
        "estimasi_kandungan_tambahan": {
            "gula_(g)": 0,
            "garam_(g)": 0,
            "lemak_jenuh_(g)": 0,
            "lemak_trans_(g)": 0,
            "kafein_(mg)": 0,
            "kolesterol_(mg)": 0
        },
        "estimasi_total_kalori_(kcal)": 0,
        "nutri_grade": "A/B/C/D/E",
        "nutri_status": "",
        "keterangan": "string"
    })
}

pub fn nutrition_advisor_skeleton() -> Value {
    json!({
        "insight": "string",
        "recommendation": "string",
        "reminder": "string",
        "alert": "string"
    })
}
