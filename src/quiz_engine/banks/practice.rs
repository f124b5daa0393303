use crate::quiz_engine::bank::QuestionBank;
use super::PracticePrompt;

static WRITING: &[PracticePrompt] = &[
    PracticePrompt { id: "A", target: "A", guide: "Garis miring ke kanan, ke kiri, lalu garis horizontal", image: None },
    PracticePrompt { id: "B", target: "B", guide: "Garis lurus ke bawah, lalu dua lengkungan", image: None },
    PracticePrompt { id: "C", target: "C", guide: "Lengkungan seperti bulan sabit", image: None },
    PracticePrompt { id: "D", target: "D", guide: "Garis lurus ke bawah, lalu lengkungan besar", image: None },
    PracticePrompt { id: "E", target: "E", guide: "Garis ke bawah dan tiga garis horizontal", image: None },
    PracticePrompt { id: "O", target: "O", guide: "Lingkaran penuh", image: None },
    PracticePrompt { id: "L", target: "L", guide: "Garis ke bawah dan ke kanan", image: None },
    PracticePrompt { id: "I", target: "I", guide: "Garis lurus ke bawah", image: None },
    PracticePrompt { id: "1", target: "1", guide: "Garis lurus ke bawah", image: None },
    PracticePrompt { id: "2", target: "2", guide: "Lengkungan atas dan garis bawah", image: None },
    PracticePrompt { id: "3", target: "3", guide: "Dua lengkungan ke kanan", image: None },
    PracticePrompt { id: "4", target: "4", guide: "Garis ke bawah, ke kanan, lalu ke bawah lagi", image: None },
    PracticePrompt { id: "5", target: "5", guide: "Garis ke kiri, ke bawah, dan lengkungan", image: None },
];

static DRAWING: &[PracticePrompt] = &[
    PracticePrompt { id: "lingkaran", target: "LINGKARAN", guide: "Bulat seperti bola", image: Some("⭕") },
    PracticePrompt { id: "segitiga", target: "SEGITIGA", guide: "Punya 3 sisi", image: Some("🔺") },
    PracticePrompt { id: "kotak", target: "KOTAK", guide: "Punya 4 sisi sama panjang", image: Some("⬛") },
    PracticePrompt { id: "bintang", target: "BINTANG", guide: "Bersinar di langit malam", image: Some("⭐") },
    PracticePrompt { id: "hati", target: "HATI", guide: "Simbol cinta", image: Some("❤️") },
    PracticePrompt { id: "matahari", target: "MATAHARI", guide: "Lingkaran dengan garis-garis", image: Some("☀️") },
    PracticePrompt { id: "rumah", target: "RUMAH", guide: "Kotak dengan segitiga di atas", image: Some("🏠") },
    PracticePrompt { id: "bunga", target: "BUNGA", guide: "Kelopak di sekitar lingkaran", image: Some("🌸") },
    PracticePrompt { id: "pohon", target: "POHON", guide: "Batang coklat dan daun hijau", image: Some("🌳") },
    PracticePrompt { id: "awan", target: "AWAN", guide: "Bulat-bulat mengembang", image: Some("☁️") },
];

/// Letters and digits to trace.
pub fn writing_bank() -> QuestionBank<PracticePrompt> {
    QuestionBank::new("writing", WRITING)
}

/// Shapes and objects to draw.
pub fn drawing_bank() -> QuestionBank<PracticePrompt> {
    QuestionBank::new("drawing", DRAWING)
}
