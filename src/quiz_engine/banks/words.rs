use crate::quiz_engine::bank::QuestionBank;
use super::{HintWord, PictureWord};

macro_rules! pw {
    ($word:literal, $image:literal, [$($syl:literal),+ $(,)?]) => {
        PictureWord { word: $word, image: $image, syllables: &[$($syl),+] }
    };
}

static PICTURE_WORDS: &[PictureWord] = &[
    pw!("BUKU",       "📚", ["BU", "KU"]),
    pw!("KUDA",       "🐴", ["KU", "DA"]),
    pw!("KURSI",      "🪑", ["KUR", "SI"]),
    pw!("BOLA",       "⚽", ["BO", "LA"]),
    pw!("SAPI",       "🐄", ["SA", "PI"]),
    pw!("TOPI",       "🎩", ["TO", "PI"]),
    pw!("ROTI",       "🍞", ["RO", "TI"]),
    pw!("KAKI",       "🦶", ["KA", "KI"]),
    pw!("MATA",       "👁️", ["MA", "TA"]),
    pw!("GIGI",       "🦷", ["GI", "GI"]),
    pw!("PADI",       "🌾", ["PA", "DI"]),
    pw!("NASI",       "🍚", ["NA", "SI"]),
    pw!("APEL",       "🍎", ["A", "PEL"]),
    pw!("PISANG",     "🍌", ["PI", "SANG"]),
    pw!("JERUK",      "🍊", ["JE", "RUK"]),
    pw!("KUCING",     "🐱", ["KU", "CING"]),
    pw!("ANJING",     "🐶", ["AN", "JING"]),
    pw!("BURUNG",     "🐦", ["BU", "RUNG"]),
    pw!("IKAN",       "🐟", ["I", "KAN"]),
    pw!("BUNGA",      "🌸", ["BU", "NGA"]),
    pw!("RUMAH",      "🏠", ["RU", "MAH"]),
    pw!("MOBIL",      "🚗", ["MO", "BIL"]),
    pw!("PESAWAT",    "✈️", ["PE", "SA", "WAT"]),
    pw!("KAPAL",      "🚢", ["KA", "PAL"]),
    pw!("SEPEDA",     "🚲", ["SE", "PE", "DA"]),
    pw!("PAYUNG",     "☂️", ["PA", "YUNG"]),
    pw!("LAMPU",      "💡", ["LAM", "PU"]),
    pw!("BINTANG",    "⭐", ["BIN", "TANG"]),
    pw!("BULAN",      "🌙", ["BU", "LAN"]),
    pw!("HUJAN",      "🌧️", ["HU", "JAN"]),
    pw!("GAJAH",      "🐘", ["GA", "JAH"]),
    pw!("SINGA",      "🦁", ["SI", "NGA"]),
    pw!("ZEBRA",      "🦓", ["ZE", "BRA"]),
    pw!("KELINCI",    "🐰", ["KE", "LIN", "CI"]),
    pw!("HARIMAU",    "🐯", ["HA", "RI", "MAU"]),
    pw!("BEBEK",      "🦆", ["BE", "BEK"]),
    pw!("AYAM",       "🐔", ["A", "YAM"]),
    pw!("KAMBING",    "🐐", ["KAM", "BING"]),
    pw!("WORTEL",     "🥕", ["WOR", "TEL"]),
    pw!("TOMAT",      "🍅", ["TO", "MAT"]),
    pw!("MANGGA",     "🥭", ["MANG", "GA"]),
    pw!("ANGGUR",     "🍇", ["ANG", "GUR"]),
    pw!("SEMANGKA",   "🍉", ["SE", "MANG", "KA"]),
    pw!("JAGUNG",     "🌽", ["JA", "GUNG"]),
    pw!("PENSIL",     "✏️", ["PEN", "SIL"]),
    pw!("SEPATU",     "👟", ["SE", "PA", "TU"]),
    pw!("TELEVISI",   "📺", ["TE", "LE", "VI", "SI"]),
    pw!("HELIKOPTER", "🚁", ["HE", "LI", "KOP", "TER"]),
    pw!("JERAPAH",    "🦒", ["JE", "RA", "PAH"]),
    pw!("GURITA",     "🐙", ["GU", "RI", "TA"]),
    pw!("KUPU-KUPU",  "🦋", ["KU", "PU", "KU", "PU"]),
    pw!("PELANGI",    "🌈", ["PE", "LA", "NGI"]),
    pw!("MATAHARI",   "☀️", ["MA", "TA", "HA", "RI"]),
];

static HINT_WORDS: &[HintWord] = &[
    HintWord { word: "APEL",   image: "🍎", hint: "Buah merah yang segar" },
    HintWord { word: "BUKU",   image: "📚", hint: "Untuk membaca" },
    HintWord { word: "KUCING", image: "🐱", hint: "Hewan berbulu lembut" },
    HintWord { word: "RUMAH",  image: "🏠", hint: "Tempat tinggal" },
    HintWord { word: "BUNGA",  image: "🌸", hint: "Tumbuhan yang indah" },
    HintWord { word: "PISANG", image: "🍌", hint: "Buah kuning" },
    HintWord { word: "AYAM",   image: "🐔", hint: "Hewan berkokok" },
    HintWord { word: "IKAN",   image: "🐟", hint: "Hewan di air" },
    HintWord { word: "BOLA",   image: "⚽", hint: "Untuk bermain" },
    HintWord { word: "KUDA",   image: "🐴", hint: "Hewan berkaki empat" },
    HintWord { word: "SAPI",   image: "🐄", hint: "Hewan penghasil susu" },
    HintWord { word: "PANDA",  image: "🐼", hint: "Hewan hitam putih" },
];

/// Words with pictures and syllables (read-match, reading, syllable arrange).
pub fn picture_bank() -> QuestionBank<PictureWord> {
    QuestionBank::new("picture_words", PICTURE_WORDS)
}

/// Words with pictures and hints (letter arrange).
pub fn hint_bank() -> QuestionBank<HintWord> {
    QuestionBank::new("hint_words", HINT_WORDS)
}
