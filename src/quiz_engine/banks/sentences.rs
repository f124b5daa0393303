use crate::quiz_engine::bank::QuestionBank;
use super::Sentence;

macro_rules! sentence {
    ($id:literal, $text:literal, $image:literal, $hint:literal, [$($w:literal),+ $(,)?]) => {
        Sentence { id: $id, text: $text, image: $image, hint: $hint, words: &[$($w),+] }
    };
}

// Grouped by length: three words (easy), four (medium), five (hard).
static SENTENCES: &[Sentence] = &[
    sentence!("s3-01", "Ibu memasak nasi", "👩‍🍳", "Kegiatan di dapur", ["Ibu", "memasak", "nasi"]),
    sentence!("s3-02", "Ayah membaca koran", "📰", "Kegiatan pagi hari", ["Ayah", "membaca", "koran"]),
    sentence!("s3-03", "Adik minum susu", "🥛", "Minuman bergizi", ["Adik", "minum", "susu"]),
    sentence!("s3-04", "Kucing makan ikan", "🐱", "Hewan makan", ["Kucing", "makan", "ikan"]),
    sentence!("s3-05", "Kakak pergi sekolah", "🏫", "Kegiatan belajar", ["Kakak", "pergi", "sekolah"]),
    sentence!("s3-06", "Burung terbang tinggi", "🐦", "Hewan di langit", ["Burung", "terbang", "tinggi"]),
    sentence!("s3-07", "Anak bermain bola", "⚽", "Olahraga favorit", ["Anak", "bermain", "bola"]),
    sentence!("s3-08", "Kelinci suka wortel", "🐰", "Makanan kelinci", ["Kelinci", "suka", "wortel"]),
    sentence!("s3-09", "Petani menanam padi", "🌾", "Kegiatan di sawah", ["Petani", "menanam", "padi"]),
    sentence!("s3-10", "Guru mengajar murid", "👩‍🏫", "Di sekolah", ["Guru", "mengajar", "murid"]),
    sentence!("s3-11", "Lebah membuat madu", "🐝", "Hewan kecil rajin", ["Lebah", "membuat", "madu"]),
    sentence!("s3-12", "Monyet memanjat pohon", "🐒", "Di hutan", ["Monyet", "memanjat", "pohon"]),
    sentence!("s4-01", "Polisi mengatur lalu lintas", "👮", "Di jalan raya", ["Polisi", "mengatur", "lalu", "lintas"]),
    sentence!("s4-02", "Kakek menyiram tanaman bunga", "🌱", "Di kebun", ["Kakek", "menyiram", "tanaman", "bunga"]),
    sentence!("s4-03", "Ibu mencuci baju kotor", "👕", "Kegiatan rumah", ["Ibu", "mencuci", "baju", "kotor"]),
    sentence!("s4-04", "Anak membaca buku cerita", "📚", "Kegiatan belajar", ["Anak", "membaca", "buku", "cerita"]),
    sentence!("s4-05", "Ayah memperbaiki sepeda rusak", "🔧", "Di garasi", ["Ayah", "memperbaiki", "sepeda", "rusak"]),
    sentence!("s4-06", "Adik menonton film kartun", "📺", "Di ruang tamu", ["Adik", "menonton", "film", "kartun"]),
    sentence!("s4-07", "Nenek memasak sup ayam", "🍲", "Di dapur", ["Nenek", "memasak", "sup", "ayam"]),
    sentence!("s5-01", "Anak bermain bola di lapangan", "🏟️", "Olahraga outdoor", ["Anak", "bermain", "bola", "di", "lapangan"]),
    sentence!("s5-02", "Ayah pergi bekerja setiap hari", "💼", "Kegiatan rutin", ["Ayah", "pergi", "bekerja", "setiap", "hari"]),
    sentence!("s5-03", "Adik tidur siang di kamar", "🛏️", "Waktu istirahat", ["Adik", "tidur", "siang", "di", "kamar"]),
    sentence!("s5-04", "Burung berkicau di atas pohon", "🌳", "Pagi yang cerah", ["Burung", "berkicau", "di", "atas", "pohon"]),
    sentence!("s5-05", "Kucing berlari mengejar tikus kecil", "🐭", "Berburu mangsa", ["Kucing", "berlari", "mengejar", "tikus", "kecil"]),
    sentence!("s5-06", "Ayah mengajarkan adik naik sepeda", "🚴", "Belajar keterampilan", ["Ayah", "mengajarkan", "adik", "naik", "sepeda"]),
];

pub fn bank() -> QuestionBank<Sentence> {
    QuestionBank::new("sentences", SENTENCES)
}
