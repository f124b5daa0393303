use crate::quiz_engine::bank::QuestionBank;
use super::{Story, StoryOption};

macro_rules! opt {
    ($text:literal, $image:literal) => {
        StoryOption { text: $text, image: $image }
    };
}

static STORIES: &[Story] = &[
    // Short stories
    Story {
        id: "st-01", title: None,
        passage: "Rina pergi ke pasar. Rina membeli buah apel.",
        question: "Rina membeli apa?",
        options: &[opt!("Apel", "🍎"), opt!("Pisang", "🍌"), opt!("Jeruk", "🍊")],
        correct: 0,
    },
    Story {
        id: "st-02", title: None,
        passage: "Budi punya kucing. Kucing Budi berwarna putih.",
        question: "Apa warna kucing Budi?",
        options: &[opt!("Hitam", "🐈‍⬛"), opt!("Putih", "🐱"), opt!("Coklat", "🟤")],
        correct: 1,
    },
    Story {
        id: "st-03", title: None,
        passage: "Ibu memasak nasi goreng. Ayah makan nasi goreng.",
        question: "Siapa yang memasak?",
        options: &[opt!("Ayah", "👨"), opt!("Kakak", "👦"), opt!("Ibu", "👩")],
        correct: 2,
    },
    Story {
        id: "st-04", title: None,
        passage: "Dina bermain bola di halaman. Dina bermain bersama Rudi.",
        question: "Dina bermain dengan siapa?",
        options: &[opt!("Rudi", "👦"), opt!("Maya", "👧"), opt!("Sendiri", "🧍")],
        correct: 0,
    },
    Story {
        id: "st-05", title: None,
        passage: "Rina punya lima pensil. Rina memberi dua pensil untuk Tono.",
        question: "Berapa pensil yang Rina beri?",
        options: &[opt!("Satu", "1️⃣"), opt!("Dua", "2️⃣"), opt!("Tiga", "3️⃣")],
        correct: 1,
    },
    Story {
        id: "st-06", title: None,
        passage: "Kakak pergi ke sekolah naik sepeda. Adik pergi naik mobil.",
        question: "Kakak naik apa?",
        options: &[opt!("Mobil", "🚗"), opt!("Bus", "🚌"), opt!("Sepeda", "🚲")],
        correct: 2,
    },
    Story {
        id: "st-07", title: None,
        passage: "Hari ini hujan deras. Dewi membawa payung biru.",
        question: "Dewi membawa apa?",
        options: &[opt!("Tas", "🎒"), opt!("Payung", "☂️"), opt!("Buku", "📚")],
        correct: 1,
    },
    Story {
        id: "st-08", title: None,
        passage: "Nenek tinggal di desa. Nenek menanam padi di sawah.",
        question: "Nenek menanam apa?",
        options: &[opt!("Jagung", "🌽"), opt!("Bunga", "🌸"), opt!("Padi", "🌾")],
        correct: 2,
    },
    Story {
        id: "st-09", title: None,
        passage: "Maya suka makan roti. Maya makan roti setiap pagi.",
        question: "Maya suka makan apa?",
        options: &[opt!("Roti", "🍞"), opt!("Nasi", "🍚"), opt!("Mie", "🍜")],
        correct: 0,
    },
    Story {
        id: "st-10", title: None,
        passage: "Tono bermain di taman. Tono melihat burung di pohon.",
        question: "Tono melihat apa?",
        options: &[opt!("Kucing", "🐱"), opt!("Burung", "🐦"), opt!("Kelinci", "🐰")],
        correct: 1,
    },
    Story {
        id: "st-11", title: None,
        passage: "Ibu membeli sayuran di pasar. Ibu membeli wortel dan tomat.",
        question: "Ibu membeli sayuran di mana?",
        options: &[opt!("Toko", "🏪"), opt!("Pasar", "🏬"), opt!("Rumah", "🏠")],
        correct: 1,
    },
    Story {
        id: "st-12", title: None,
        passage: "Kakek punya kebun buah. Di kebun ada pohon mangga.",
        question: "Pohon apa yang ada di kebun kakek?",
        options: &[opt!("Mangga", "🥭"), opt!("Apel", "🍎"), opt!("Jeruk", "🍊")],
        correct: 0,
    },
    Story {
        id: "st-13", title: None,
        passage: "Andi bermain layang-layang. Layang-layang Andi terbang tinggi.",
        question: "Apa yang dimainkan Andi?",
        options: &[opt!("Layang-layang", "🪁"), opt!("Bola", "⚽"), opt!("Boneka", "🧸")],
        correct: 0,
    },
    Story {
        id: "st-14", title: None,
        passage: "Hari Minggu keluarga pergi ke pantai. Mereka bermain pasir.",
        question: "Keluarga pergi ke mana?",
        options: &[opt!("Gunung", "⛰️"), opt!("Pantai", "🏖️"), opt!("Taman", "🌳")],
        correct: 1,
    },
    Story {
        id: "st-15", title: None,
        passage: "Putri menyiram bunga setiap pagi. Bunganya tumbuh subur.",
        question: "Kapan Putri menyiram bunga?",
        options: &[opt!("Siang", "☀️"), opt!("Malam", "🌙"), opt!("Pagi", "🌅")],
        correct: 2,
    },
    // Longer passages with a title
    Story {
        id: "st-21", title: Some("Kucing Malas"),
        passage: "Kucing adalah hewan berbulu lembut yang suka tidur. Kucing bisa tidur sampai 16 jam sehari. \
                  Kucing suka makan ikan dan daging. Kucing juga suka bermain dengan bola benang. \
                  Kucing adalah hewan peliharaan yang lucu dan menggemaskan.",
        question: "Berapa jam kucing bisa tidur dalam sehari?",
        options: &[opt!("10 jam", "🔟"), opt!("16 jam", "🕐"), opt!("5 jam", "5️⃣")],
        correct: 1,
    },
    Story {
        id: "st-22", title: Some("Buah Pisang"),
        passage: "Pisang adalah buah yang berwarna kuning. Pisang memiliki rasa manis dan lembut. \
                  Pisang baik untuk kesehatan karena mengandung banyak vitamin. \
                  Kita bisa makan pisang langsung atau dibuat jus.",
        question: "Apa warna buah pisang?",
        options: &[opt!("Merah", "🔴"), opt!("Hijau", "🟢"), opt!("Kuning", "🟡")],
        correct: 2,
    },
    Story {
        id: "st-23", title: Some("Gajah Besar"),
        passage: "Gajah adalah hewan darat terbesar di dunia. Gajah memiliki belalai yang panjang. \
                  Belalai gajah digunakan untuk mengambil makanan dan minum air. \
                  Gajah hidup berkelompok bersama keluarganya.",
        question: "Untuk apa gajah menggunakan belalainya?",
        options: &[
            opt!("Untuk terbang", "✈️"),
            opt!("Untuk mengambil makanan", "🍃"),
            opt!("Untuk berenang", "🏊"),
        ],
        correct: 1,
    },
    Story {
        id: "st-24", title: Some("Lebah Rajin"),
        passage: "Lebah adalah serangga kecil yang sangat rajin. Lebah hidup di sarang bersama ribuan lebah lain. \
                  Lebah membuat madu dari nektar bunga. Madu sangat manis dan baik untuk kesehatan.",
        question: "Lebah membuat madu dari apa?",
        options: &[opt!("Air", "💧"), opt!("Nektar bunga", "🌸"), opt!("Daun", "🍃")],
        correct: 1,
    },
    Story {
        id: "st-25", title: Some("Matahari"),
        passage: "Matahari adalah bintang yang sangat besar dan panas. Matahari memberikan cahaya dan panas untuk bumi. \
                  Matahari terbit di timur dan terbenam di barat.",
        question: "Matahari terbit dari arah mana?",
        options: &[opt!("Barat", "⬅️"), opt!("Timur", "➡️"), opt!("Utara", "⬆️")],
        correct: 1,
    },
    Story {
        id: "st-40", title: Some("Musim Hujan"),
        passage: "Bulan November adalah awal musim hujan di Indonesia. Langit sering mendung dan hujan turun hampir setiap hari. \
                  Ibu selalu mengingatkan untuk memakai jas hujan agar tidak sakit. \
                  Petani juga senang karena sawah mereka mendapat banyak air.",
        question: "Kapan musim hujan dimulai di Indonesia?",
        options: &[opt!("Bulan Mei", "5️⃣"), opt!("Bulan November", "1️⃣1️⃣"), opt!("Bulan Januari", "1️⃣")],
        correct: 1,
    },
];

pub fn bank() -> QuestionBank<Story> {
    QuestionBank::new("stories", STORIES)
}
