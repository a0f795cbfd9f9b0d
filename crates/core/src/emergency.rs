//! Heuristic detection of emergency phrases in user messages.
//!
//! A short fixed keyword list catches messages that describe an unfolding
//! flood emergency. Detection short-circuits the completion request: the
//! caller replies with the canned instruction template instead of waiting on
//! the network.

/// Phrases that indicate an unfolding emergency (matched case-insensitively)
pub const EMERGENCY_KEYWORDS: &[&str] = &[
    "darurat",
    "bantuan",
    "tolong",
    "tenggelam",
    "terjebak",
    "evakuasi",
    "bahaya",
    "selamatkan",
    "emergency",
    "help",
    "banjir bandang",
    "air naik cepat",
    "tidak bisa keluar",
];

/// Check whether a message contains an emergency phrase
pub fn is_emergency_keyword(message: &str) -> bool {
    let lowered = message.to_lowercase();
    EMERGENCY_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Fixed quick-response template for emergency situations
pub fn emergency_response() -> &'static str {
    "SITUASI DARURAT BANJIR

SEGERA LAKUKAN:
1. Pindah ke tempat tertinggi (lantai atas/atap)
2. Hubungi bantuan darurat:
   - Basarnas: 115
   - BNPB: 117
   - Damkar: 113

3. Kirim lokasi GPS Anda via WhatsApp ke keluarga
4. Berikan isyarat (lampu, suara) untuk minta bantuan
5. JANGAN masuk ke air banjir

Tetap tenang dan tunggu bantuan! Tim SAR sedang dalam perjalanan."
}
